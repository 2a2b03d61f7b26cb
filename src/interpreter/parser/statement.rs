use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            scope::Scope,
            utils::{expect, token_to_data_type},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an empty statement (`;`),
/// - a block (`{ ... }`),
/// - an assignment (`x = expr;`),
/// - an `if`, `while`, `print` or `return` statement.
///
/// The construct is chosen from the first token alone.
///
/// # Errors
/// - `DeclarationAfterStatement` if a type keyword appears here, since all
///   declarations of a function come before its first statement.
/// - `UnexpectedToken` if the token cannot start a statement.
/// - Any error of the chosen construct.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((token, line)) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { line: scope.end_line() });
    };
    let line = *line;

    match token {
        Token::Semicolon => {
            tokens.next();
            Ok(Statement::Empty)
        },
        Token::LBrace => {
            tokens.next();
            parse_block(tokens, scope, line)
        },
        Token::Identifier(_) => parse_assignment(tokens, scope),
        Token::If => parse_if(tokens, scope),
        Token::While => parse_while(tokens, scope),
        Token::Print => parse_print(tokens, scope),
        Token::Return => parse_return(tokens, scope),
        tok if token_to_data_type(tok).is_some() => {
            Err(ParseError::DeclarationAfterStatement { line })
        },
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                 line }),
    }
}

/// Parses an assignment statement.
///
/// Grammar: `assignment := identifier "=" expression ";"`
///
/// The target must be a parameter or local of the current function.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((Token::Identifier(name), line)) = tokens.next() else {
        unreachable!("parse_assignment is only entered on an identifier")
    };
    let line = *line;

    scope.check_variable(name, line)?;
    expect(tokens, &Token::Equals, scope.end_line())?;
    let value = parse_expression(tokens, scope)?;
    expect(tokens, &Token::Semicolon, scope.end_line())?;

    Ok(Statement::Assignment { name: name.clone(),
                               value,
                               line })
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Grammar: `if := "if" "(" expression ")" statement ("else" statement)?`
///
/// A dangling `else` binds to the nearest `if`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = expect(tokens, &Token::If, scope.end_line())?;
    let condition = parse_condition(tokens, scope)?;
    let then_branch = Box::new(parse_statement(tokens, scope)?);

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(Box::new(parse_statement(tokens, scope)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

/// Parses a `while` loop.
///
/// Grammar: `while := "while" "(" expression ")" statement`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = expect(tokens, &Token::While, scope.end_line())?;
    let condition = parse_condition(tokens, scope)?;
    let body = Box::new(parse_statement(tokens, scope)?);

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses a parenthesised condition of an `if` or `while`.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, &Token::LParen, scope.end_line())?;
    let condition = parse_expression(tokens, scope)?;
    expect(tokens, &Token::RParen, scope.end_line())?;
    Ok(condition)
}

/// Parses a `print` statement.
///
/// At least one argument is required. Each argument is a string literal or
/// an expression. The statement has no `;` of its own; a `;` after it is
/// parsed as an empty statement.
///
/// Grammar: `print := "print" "(" print_arg ("," print_arg)* ")"`
fn parse_print<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = expect(tokens, &Token::Print, scope.end_line())?;
    expect(tokens, &Token::LParen, scope.end_line())?;

    let mut arguments = vec![parse_expression(tokens, scope)?];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        arguments.push(parse_expression(tokens, scope)?);
    }

    expect(tokens, &Token::RParen, scope.end_line())?;

    Ok(Statement::Print { arguments, line })
}

/// Parses a `return` statement.
///
/// Grammar: `return := "return" expression ";"`
fn parse_return<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = expect(tokens, &Token::Return, scope.end_line())?;
    let value = parse_expression(tokens, scope)?;
    expect(tokens, &Token::Semicolon, scope.end_line())?;

    Ok(Statement::Return { value, line })
}
