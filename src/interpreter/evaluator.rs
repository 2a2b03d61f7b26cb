/// Binary operator evaluation logic.
///
/// Handles arithmetic, exponentiation, comparisons and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric negation and logical not.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the run configuration, expression
/// evaluation and the program entry point.
pub mod core;

/// Per-call variable storage.
pub mod environment;

/// Statement execution and `return` propagation.
pub mod statement;

/// Evaluation of user-defined function calls.
pub mod function;
