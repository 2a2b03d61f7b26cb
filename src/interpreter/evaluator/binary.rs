/// Operator dispatch.
pub mod core;

/// Arithmetic on integers and reals: `+`, `-`, `*`, `/` and `%`.
pub mod scalar;

/// Exponentiation.
pub mod power;

/// Equality and relational operators.
pub mod comparison;

/// `&&` and `||`.
pub mod logic;
