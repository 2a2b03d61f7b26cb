use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic operation.
    ///
    /// Two integers give an integer, computed with checked arithmetic;
    /// division truncates toward zero and the remainder takes the sign of the
    /// dividend. If either operand is a real, the other is promoted and the
    /// operation is carried out in floating point. Division and modulo by zero
    /// fail for both integers and reals. The operator must be one of `Add`,
    /// `Sub`, `Mul`, `Div` or `Mod`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `ExpectedNumber` if an operand is a `bool` or `str`.
    /// - `DivisionByZero` for a zero divisor.
    /// - `Overflow` if an integer result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use sluc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Div,
    ///                                      &Value::Integer(-7),
    ///                                      &Value::Integer(2),
    ///                                      1).unwrap();
    /// assert_eq!(result, Value::Integer(-3));
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Mul,
    ///                                      &Value::Real(1.5),
    ///                                      &Value::Integer(2),
    ///                                      1).unwrap();
    /// assert_eq!(result, Value::Real(3.0));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};
        use Value::{Integer, Real};

        for operand in [left, right] {
            if !operand.is_numeric() {
                return Err(RuntimeError::ExpectedNumber { found: operand.data_type(),
                                                          line });
            }
        }

        match (left, right) {
            (Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div | Mod => {
                        if *b == 0 {
                            return Err(RuntimeError::DivisionByZero { line });
                        }
                        if op == Div { a.checked_div(*b) } else { a.checked_rem(*b) }
                    },
                    _ => unreachable!("eval_scalar_op used with non arithmetic operator"),
                };
                result.map(Integer).ok_or(RuntimeError::Overflow { line })
            },
            _ => {
                let (left, right) = left.clone().promote_to_real(right, line)?;
                let left = left.as_real(line)?;
                let right = right.as_real(line)?;

                Ok(Real(match op {
                            Add => left + right,
                            Sub => left - right,
                            Mul => left * right,
                            Div | Mod => {
                                if right == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { line });
                                }
                                if op == Div { left / right } else { left % right }
                            },
                            _ => unreachable!("eval_scalar_op used with non arithmetic operator"),
                        }))
            },
        }
    }
}
