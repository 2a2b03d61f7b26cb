use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, scope::Scope, unary::parse_unary},
    },
};

/// Builds a boxed binary node.
fn binary(left: Expr, op: BinaryOperator, right: Expr, line: usize) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line }
}

/// Consumes the next token if it is a binary operator accepted by `accepts`.
///
/// Returns the operator and the line it was found on.
fn next_operator<'a, I>(tokens: &mut Peekable<I>,
                        accepts: impl Fn(BinaryOperator) -> bool)
                        -> Option<(BinaryOperator, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, line) = tokens.peek()?;
    let op = token_to_binary_operator(token).filter(|op| accepts(*op))?;
    let line = *line;
    tokens.next();
    Some((op, line))
}

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||`.
/// Both operands are always evaluated; there is no short-circuiting.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_logical_and(tokens, scope)?;

    while let Some((op, line)) = next_operator(tokens, |op| op == BinaryOperator::Or) {
        let right = parse_logical_and(tokens, scope)?;
        left = binary(left, op, right, line);
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&`.
/// Precedence is higher than OR.
///
/// Grammar: `logical_and := equality ("&&" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_equality(tokens, scope)?;

    while let Some((op, line)) = next_operator(tokens, |op| op == BinaryOperator::And) {
        let right = parse_equality(tokens, scope)?;
        left = binary(left, op, right, line);
    }

    Ok(left)
}

/// Parses an equality comparison.
///
/// At most one `==` or `!=` is accepted; `a == b == c` leaves the second
/// operator for the caller, which rejects it.
///
/// Grammar: `equality := relational (("==" | "!=") relational)?`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_relational(tokens, scope)?;

    if let Some((op, line)) =
        next_operator(tokens, |op| matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual))
    {
        let right = parse_relational(tokens, scope)?;
        return Ok(binary(left, op, right, line));
    }

    Ok(left)
}

/// Parses a relational comparison.
///
/// At most one of `<`, `<=`, `>`, `>=` is accepted.
///
/// Grammar: `relational := additive (("<" | "<=" | ">" | ">=") additive)?`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_additive(tokens, scope)?;

    if let Some((op, line)) = next_operator(tokens, is_relational_op) {
        let right = parse_additive(tokens, scope)?;
        return Ok(binary(left, op, right, line));
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, scope)?;

    while let Some((op, line)) =
        next_operator(tokens, |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub))
    {
        let right = parse_multiplicative(tokens, scope)?;
        left = binary(left, op, right, line);
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_exponent(tokens, scope)?;

    while let Some((op, line)) = next_operator(tokens, |op| {
                                     matches!(op,
                                              BinaryOperator::Mul
                                              | BinaryOperator::Div
                                              | BinaryOperator::Mod)
                                 })
    {
        let right = parse_exponent(tokens, scope)?;
        left = binary(left, op, right, line);
    }

    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: the right operand recurses into this
/// rule, so `a ** b ** c` parses as `a ** (b ** c)`.
///
/// The rule is: `exponent := unary ("**" exponent)?`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, scope: &Scope) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_unary(tokens, scope)?;

    if let Some((op, line)) = next_operator(tokens, |op| op == BinaryOperator::Pow) {
        let exponent = parse_exponent(tokens, scope)?;
        return Ok(binary(base, op, exponent, line));
    }

    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// and `None` for all other tokens.
///
/// # Example
/// ```
/// use sluc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::StarStar),
///            Some(BinaryOperator::Pow));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::StarStar => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::DoubleAmpersand => Some(BinaryOperator::And),
        Token::DoublePipe => Some(BinaryOperator::Or),
        _ => None,
    }
}

const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual)
}
