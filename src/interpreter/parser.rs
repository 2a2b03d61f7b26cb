/// Entry point for expression parsing and the shared result type.
pub mod core;

/// Binary operator parsing, one procedure per precedence level.
///
/// Implements logical OR and AND, equality, relational, additive,
/// multiplicative and exponentiation levels.
pub mod binary;

/// Prefix operators and primary expressions.
///
/// Handles negation, logical not, literals, variables, calls and
/// parenthesised expressions.
pub mod unary;

/// Statement parsing.
///
/// Parses empty statements, assignments, `if`, `while`, `print`, `return` and
/// dispatches to block parsing.
pub mod statement;

/// Block parsing.
pub mod block;

/// Program and function definition parsing.
///
/// Parses function headers, parameters, declarations and bodies, and enforces
/// the program-level rules: unique function names and a `main` function.
pub mod program;

/// The symbol table used while parsing.
///
/// Holds the functions defined so far and the variables of the current
/// function, and performs the declared-before-use and uniqueness checks.
pub mod scope;

/// Helpers shared by the parsing modules.
pub mod utils;
