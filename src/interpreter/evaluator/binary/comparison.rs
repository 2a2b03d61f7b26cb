use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Maps an equality operator and a boolean equality result to the final
/// boolean value.
#[must_use]
pub fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::Equal => is_equal,
        BinaryOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` compare two numbers (an integer is promoted when the
    /// other side is a real), two booleans or two strings. Relational
    /// operators accept numbers only; two integers are compared exactly.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Errors
    /// - `TypeError` for `==`/`!=` between unrelated types.
    /// - `ExpectedNumber` for a relational operator on a non-number.
    ///
    /// # Example
    /// ```
    /// use sluc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal,
    ///                                       &Value::Integer(3),
    ///                                       &Value::Real(3.0),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal,
    ///                                       &Value::Bool(true),
    ///                                       &Value::Integer(1),
    ///                                       1);
    /// assert!(result.is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use Value::{Bool, Integer, Str};

        match op {
            BinaryOperator::Equal | BinaryOperator::NotEqual => {
                let is_equal = match (left, right) {
                    (Integer(a), Integer(b)) => a == b,
                    (Bool(a), Bool(b)) => a == b,
                    (Str(a), Str(b)) => a == b,
                    _ if left.is_numeric() && right.is_numeric() => {
                        left.as_real(line)? == right.as_real(line)?
                    },
                    _ => {
                        return Err(RuntimeError::TypeError { details: format!("Cannot compare {} and {} with '{op}'",
                                                                              left.data_type(),
                                                                              right.data_type()),
                                                             line });
                    },
                };
                Ok(Bool(equality_op_result(op, is_equal)))
            },

            BinaryOperator::Less
            | BinaryOperator::Greater
            | BinaryOperator::LessEqual
            | BinaryOperator::GreaterEqual => {
                let ordering = match (left, right) {
                    (Integer(a), Integer(b)) => a.partial_cmp(b),
                    _ => left.as_real(line)?.partial_cmp(&right.as_real(line)?),
                };

                Ok(Bool(ordering.is_some_and(|ordering| match op {
                                                 BinaryOperator::Less => ordering.is_lt(),
                                                 BinaryOperator::Greater => ordering.is_gt(),
                                                 BinaryOperator::LessEqual => ordering.is_le(),
                                                 _ => ordering.is_ge(),
                                             })))
            },

            _ => unreachable!("eval_comparison used with non comparison operator"),
        }
    }
}
