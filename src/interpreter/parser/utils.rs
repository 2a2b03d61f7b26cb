use std::iter::Peekable;

use crate::{
    ast::DataType,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token the grammar requires here.
/// - `end_line`: Line reported if the input ends.
///
/// # Returns
/// The line number of the consumed token.
///
/// # Errors
/// - `ExpectedToken` if a different token is found.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    end_line: usize)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(ParseError::ExpectedToken { expected: expected.to_string(),
                                                             found:    tok.to_string(),
                                                             line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: end_line }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by parameter lists and call argument lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    mut parse_item: impl FnMut(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    end_line: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => {
                return Err(ParseError::ExpectedToken { expected: format!("',' or {closing}"),
                                                       found:    tok.to_string(),
                                                       line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: end_line }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name and line.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              end_line: usize)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), line)) => Ok((s.clone(), *line)),
        Some((tok, line)) => Err(ParseError::ExpectedToken { expected: "identifier".to_string(),
                                                             found:    tok.to_string(),
                                                             line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: end_line }),
    }
}

/// Maps a type keyword to its [`DataType`].
///
/// Returns `None` for every other token.
///
/// # Example
/// ```
/// use sluc::{
///     ast::DataType,
///     interpreter::{lexer::Token, parser::utils::token_to_data_type},
/// };
///
/// assert_eq!(token_to_data_type(&Token::Float), Some(DataType::Float));
/// assert_eq!(token_to_data_type(&Token::Semicolon), None);
/// ```
#[must_use]
pub const fn token_to_data_type(token: &Token) -> Option<DataType> {
    match token {
        Token::Int => Some(DataType::Int),
        Token::Float => Some(DataType::Float),
        Token::BoolType => Some(DataType::Bool),
        Token::StrType => Some(DataType::Str),
        _ => None,
    }
}

/// Returns `true` if the next token is a type keyword.
pub(in crate::interpreter::parser) fn at_type_keyword<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek()
          .is_some_and(|(tok, _)| token_to_data_type(tok).is_some())
}

/// Parses a type keyword.
///
/// # Errors
/// `ExpectedToken` if the next token is not `int`, `float`, `bool` or `str`.
pub(in crate::interpreter::parser) fn parse_data_type<'a, I>(tokens: &mut Peekable<I>,
                                                             end_line: usize)
                                                             -> ParseResult<(DataType, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) => token_to_data_type(tok).map(|data_type| (data_type, *line))
                                                     .ok_or_else(|| ParseError::ExpectedToken {
                expected: "type".to_string(),
                found: tok.to_string(),
                line: *line,
            }),
        None => Err(ParseError::UnexpectedEndOfInput { line: end_line }),
    }
}
