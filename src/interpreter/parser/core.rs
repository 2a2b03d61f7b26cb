use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, scope::Scope},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy:
///
/// ```text
/// ||  →  &&  →  == !=  →  < <= > >=  →  + -  →  * / %  →  **  →  - !  →  primary
/// ```
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `scope`: The symbol table every identifier is checked against.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_logical_or(tokens, scope)
}
