use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::i64_to_u32_checked,
};

impl Context<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation with a non-negative exponent uses
    /// checked arithmetic and yields an integer. Negative integer exponents
    /// and any real operand are evaluated in floating point with `powf`.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `ExpectedNumber` if an operand is not numeric.
    /// - `Overflow` if an integer power does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use sluc::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let result = Context::eval_pow(&Value::Integer(2), &Value::Integer(10), 1).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Context::eval_pow(&Value::Integer(2), &Value::Integer(-1), 1).unwrap();
    /// assert_eq!(result, Value::Real(0.5));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, line: usize) -> EvalResult<Value> {
        use Value::{Integer, Real};

        match (base, exponent) {
            (Integer(b), Integer(e)) if *e >= 0 => {
                b.checked_pow(i64_to_u32_checked(*e, line)?)
                 .map(Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            _ => Ok(Real(base.as_real(line)?.powf(exponent.as_real(line)?))),
        }
    }
}
