/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss. The evaluator uses
/// them when it widens `int` values to `float`, truncates `float` values into
/// `int` slots, and computes integer powers.
pub mod num;
