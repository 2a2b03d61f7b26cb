//! # sluc
//!
//! sluc is an interpreter for a small, statically typed, C-like teaching
//! language. Programs are lists of typed functions with an entry point named
//! `main`; the language has `int`, `float`, `bool` and `str` values, `if`,
//! `while`, `print` and recursive function calls.
//!
//! Source text is tokenized, parsed into an abstract syntax tree while every
//! identifier is checked, and then executed by a tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Program,
    error::Error,
    interpreter::{evaluator::core::EvalConfig, lexer::tokenize, parser::program::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `FunctionDef`, `Statement` and `Expr`
/// types that represent the syntactic structure of source code as a tree. The
/// AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines program, statement and expression types for all language
///   constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Prints trees back in source form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and source
/// locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for source programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Tokenizes and parses a complete program.
///
/// # Errors
/// Returns `Error::Syntax` for the first lexical or syntax error.
///
/// # Examples
/// ```
/// use sluc::parse_source;
///
/// let program = parse_source("int main() { print(1); }").unwrap();
/// assert_eq!(program.functions[0].name, "main");
///
/// // 'x' is not declared
/// assert!(parse_source("int main() { print(x); }").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_program(&tokens)?)
}

/// Parses and runs a program, writing its output to `out`.
///
/// Nothing is executed unless the whole program parses.
///
/// # Errors
/// Returns `Error::Syntax` if parsing fails and `Error::Runtime` if execution
/// fails. Output written before a runtime error stays in `out`.
///
/// # Examples
/// ```
/// use sluc::{interpreter::evaluator::core::EvalConfig, run_source};
///
/// let mut out = Vec::new();
/// run_source("int main() { int a; a = 3 + 4 * 2; print(a); }",
///            &EvalConfig::default(),
///            &mut out).unwrap();
///
/// assert_eq!(out, b"11\n");
/// ```
pub fn run_source(source: &str, config: &EvalConfig, out: &mut impl Write) -> Result<(), Error> {
    let program = parse_source(source)?;
    program.run(config, out)?;
    Ok(())
}

/// Runs a program with the default configuration and returns everything it
/// printed.
///
/// # Errors
/// See [`run_source`].
///
/// # Examples
/// ```
/// use sluc::get_output;
///
/// let source = "int f(int x) { return x * x; }
///               int main() { int y; y = f(5); print(y); }";
///
/// assert_eq!(get_output(source).unwrap(), "25\n");
/// ```
pub fn get_output(source: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    run_source(source, &EvalConfig::default(), &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
