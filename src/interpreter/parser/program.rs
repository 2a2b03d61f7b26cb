use std::iter::Peekable;

use crate::{
    ast::{DataType, Declaration, FunctionDef, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            scope::Scope,
            statement::parse_statement,
            utils::{
                at_type_keyword, expect, parse_comma_separated, parse_data_type, parse_identifier,
            },
        },
    },
};

/// Parses a complete program from a token list.
///
/// A program is a sequence of function definitions, exactly one of which is
/// named `main`. Functions may only call functions defined before them (or
/// themselves).
///
/// Grammar: `program := function_def*`
///
/// # Errors
/// Returns the first `ParseError` encountered; parsing stops there and no
/// partial program is returned. `MissingMain` is reported if the whole input
/// parses but defines no `main`.
///
/// # Example
/// ```
/// use sluc::interpreter::{lexer::tokenize, parser::program::parse_program};
///
/// let tokens = tokenize("int main() { int a; a = 1; print(a); }").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.functions.len(), 1);
/// assert_eq!(program.functions[0].locals.len(), 1);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let end_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut scope = Scope::new(end_line);
    let mut iter = tokens.iter().peekable();

    let mut functions = Vec::new();
    while iter.peek().is_some() {
        functions.push(parse_function_definition(&mut iter, &mut scope)?);
    }

    if !scope.has_function(Program::ENTRY_POINT) {
        return Err(ParseError::MissingMain { line: end_line });
    }

    Ok(Program { functions })
}

/// Parses one function definition.
///
/// The symbol table is reset, the parameters are declared, the function is
/// registered (so its body may call it recursively), and then all
/// declarations followed by all statements are parsed.
///
/// Grammar:
/// ```text
///     function_def := return_type identifier "(" params ")"
///                     "{" declaration* statement* "}"
/// ```
///
/// # Errors
/// - `InvalidReturnType` for `str` functions.
/// - `DuplicateFunction` if the name is already taken.
/// - `DuplicateIdentifier` for repeated parameter or local names.
/// - `DeclarationAfterStatement` if a declaration follows a statement.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>,
                                    scope: &mut Scope)
                                    -> ParseResult<FunctionDef>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let end_line = scope.end_line();
    let (return_type, line) = parse_data_type(tokens, end_line)?;
    let (name, _) = parse_identifier(tokens, end_line)?;
    if return_type == DataType::Str {
        return Err(ParseError::InvalidReturnType { name, line });
    }

    scope.begin_function();
    expect(tokens, &Token::LParen, end_line)?;
    let params = parse_comma_separated(tokens,
                                       |tokens| parse_parameter(tokens, scope),
                                       &Token::RParen,
                                       end_line)?;

    scope.define_function(&name, params.len(), line)?;
    log::debug!("parsing function '{name}' ({} parameter(s)) on line {line}",
                params.len());

    expect(tokens, &Token::LBrace, end_line)?;

    let mut locals = Vec::new();
    while at_type_keyword(tokens) {
        locals.push(parse_declaration(tokens, scope)?);
    }

    let mut body = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => body.push(parse_statement(tokens, scope)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line: end_line }),
        }
    }

    Ok(FunctionDef { return_type,
                     name,
                     params,
                     locals,
                     body,
                     line })
}

/// Parses one typed parameter and declares it in the current function.
///
/// Grammar: `param := type identifier`
fn parse_parameter<'a, I>(tokens: &mut Peekable<I>, scope: &mut Scope) -> ParseResult<Declaration>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (data_type, _) = parse_data_type(tokens, scope.end_line())?;
    let (name, line) = parse_identifier(tokens, scope.end_line())?;

    let declaration = Declaration { data_type, name, line };
    scope.declare_variable(&declaration)?;
    Ok(declaration)
}

/// Parses a local variable declaration and declares it in the current
/// function.
///
/// Grammar: `declaration := type identifier ";"`
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>,
                            scope: &mut Scope)
                            -> ParseResult<Declaration>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let declaration = parse_parameter(tokens, scope)?;
    expect(tokens, &Token::Semicolon, scope.end_line())?;
    Ok(declaration)
}
