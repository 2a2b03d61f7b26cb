use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            scope::Scope,
            utils::{expect, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports a single prefix operator:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Both share one precedence level directly above primaries and apply to a
/// primary only, so `--x` is rejected and `-x ** 2` means `(-x) ** 2`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!")? primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let op = match tokens.peek() {
        Some((Token::Minus, line)) => Some((UnaryOperator::Negate, *line)),
        Some((Token::Bang, line)) => Some((UnaryOperator::Not, *line)),
        _ => None,
    };

    if let Some((op, line)) = op {
        tokens.next();
        let expr = parse_primary(tokens, scope)?;
        return Ok(Expr::UnaryOp { op,
                                  expr: Box::new(expr),
                                  line });
    }

    parse_primary(tokens, scope)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer, real, string and boolean literals
/// - variables
/// - function calls
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier
///              | identifier "(" (expression ("," expression)*)? ")"
///              | "(" expression ")"
/// ```
/// # Errors
/// - `UndefinedVariable` / `UndefinedFunction` for names the scope does not
///   know.
/// - `ArgumentCountMismatch` for calls with the wrong number of arguments.
/// - `UnexpectedToken` for anything that cannot start an expression.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, line) = tokens.next()
                              .ok_or(ParseError::UnexpectedEndOfInput { line: scope.end_line() })?;
    let line = *line;

    let value = match token {
        Token::Integer(n) => LiteralValue::Integer(*n),
        Token::Real(r) => LiteralValue::Real(*r),
        Token::Bool(b) => LiteralValue::Bool(*b),
        Token::Str(s) => LiteralValue::Str(s.clone()),
        Token::LParen => {
            let expr = parse_expression(tokens, scope)?;
            expect(tokens, &Token::RParen, scope.end_line())?;
            return Ok(expr);
        },
        Token::Identifier(name) => return parse_identifier_or_call(tokens, scope, name, line),
        tok => {
            return Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                     line });
        },
    };

    Ok(Expr::Literal { value, line })
}

/// Parses what follows an identifier in expression position: either a call
/// argument list or nothing (a variable reference).
///
/// The callee must be defined earlier in the source; a variable must be a
/// parameter or local of the current function.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>,
                                   scope: &Scope,
                                   name: &str,
                                   line: usize)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        scope.callable(name, line)?;
        tokens.next();

        let arguments = parse_comma_separated(tokens,
                                              |tokens| parse_expression(tokens, scope),
                                              &Token::RParen,
                                              scope.end_line())?;
        scope.check_call(name, arguments.len(), line)?;

        return Ok(Expr::FunctionCall { name: name.to_string(),
                                       arguments,
                                       line });
    }

    scope.check_variable(name, line)?;
    Ok(Expr::Variable { name: name.to_string(),
                        line })
}
