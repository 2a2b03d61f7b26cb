use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates `&&` or `||`.
    ///
    /// Both operands have already been evaluated; there is no short-circuit.
    /// Each must be a `bool`.
    ///
    /// # Errors
    /// `ExpectedBoolean` if either operand is not a `bool`.
    ///
    /// # Example
    /// ```
    /// use sluc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_logic(BinaryOperator::Or,
    ///                                  &Value::Bool(false),
    ///                                  &Value::Bool(true),
    ///                                  1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
        let left = left.as_bool(line)?;
        let right = right.as_bool(line)?;

        Ok(Value::Bool(match op {
                           BinaryOperator::And => left && right,
                           BinaryOperator::Or => left || right,
                           _ => unreachable!("eval_logic used with non logical operator"),
                       }))
    }
}
