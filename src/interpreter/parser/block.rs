use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, scope::Scope, statement::parse_statement},
    },
};

/// Parses a block statement delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token is encountered. Blocks do not open a new scope: they see
/// and modify the same variables as the enclosing function.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `scope`: The current symbol table.
/// - `line`: Line number of the opening brace.
///
/// # Returns
/// A block statement containing all parsed statements.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          scope: &Scope,
                          line: usize)
                          -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens, scope)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line: scope.end_line() }),
        }
    }

    Ok(Statement::Block { statements, line })
}
