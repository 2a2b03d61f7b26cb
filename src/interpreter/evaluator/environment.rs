use std::collections::HashMap;

use crate::{
    ast::{DataType, Declaration},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// One variable: its declared type and its current value, if any.
#[derive(Debug, Clone)]
struct Slot {
    data_type: DataType,
    value:     Option<Value>,
}

/// The variables of a single function call.
///
/// Every call frame owns exactly one `Environment`; nested statements of the
/// same call share it. A stored value always has the slot's declared type.
///
/// # Example
/// ```
/// use sluc::{
///     ast::{DataType, Declaration},
///     interpreter::{evaluator::environment::Environment, value::core::Value},
/// };
///
/// let mut env = Environment::new();
/// env.declare(&Declaration { data_type: DataType::Float,
///                            name:      "f".to_string(),
///                            line:      1, });
///
/// assert!(env.get("f", 2).is_err());
///
/// env.assign("f", Value::Integer(3), 2).unwrap();
/// assert_eq!(env.get("f", 3).unwrap(), &Value::Real(3.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    slots: HashMap<String, Slot>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an uninitialized variable.
    pub fn declare(&mut self, declaration: &Declaration) {
        self.slots.insert(declaration.name.clone(),
                          Slot { data_type: declaration.data_type,
                                 value:     None, });
    }

    /// Adds a variable and initializes it, converting `value` to the declared
    /// type. Used for parameters.
    ///
    /// # Errors
    /// `RuntimeError::IncompatibleAssignment` if the value cannot be stored.
    pub fn bind(&mut self, declaration: &Declaration, value: Value, line: usize) -> EvalResult<()> {
        let value = value.convert_to(declaration.data_type, &declaration.name, line)?;
        self.slots.insert(declaration.name.clone(),
                          Slot { data_type: declaration.data_type,
                                 value:     Some(value), });
        Ok(())
    }

    /// Stores `value` in an existing variable, converting it to the declared
    /// type.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownVariable` if the variable does not exist.
    /// - `RuntimeError::IncompatibleAssignment` if the value cannot be stored.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let slot = self.slots
                       .get_mut(name)
                       .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                                      line })?;
        slot.value = Some(value.convert_to(slot.data_type, name, line)?);
        Ok(())
    }

    /// Reads a variable.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownVariable` if the variable does not exist.
    /// - `RuntimeError::UninitializedVariable` if nothing was assigned yet.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<&Value> {
        let slot = self.slots
                       .get(name)
                       .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                                      line })?;
        slot.value
            .as_ref()
            .ok_or_else(|| RuntimeError::UninitializedVariable { name: name.to_string(),
                                                                 line })
    }
}
