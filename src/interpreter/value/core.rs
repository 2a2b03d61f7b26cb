use crate::{
    ast::{DataType, LiteralValue},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_i64_truncated, format_real, i64_to_f64},
};

/// Represents a runtime value in the interpreter.
///
/// Every value carries its own tag; the tag of a value stored in a variable
/// always matches the variable's declared [`DataType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) or logical
    /// operations (`!`, `&&`, `||`). Conditions of `if` and `while` must
    /// evaluate to `Bool`.
    Bool(bool),
    /// A string value. Strings only come from string literals and can be
    /// printed, stored in `str` variables and compared for equality.
    Str(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Real(r) => Self::Real(*r),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// Returns the type tag of the value.
    ///
    /// # Example
    /// ```
    /// use sluc::{ast::DataType, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::Integer(1).data_type(), DataType::Int);
    /// assert_eq!(Value::from("hi").data_type(), DataType::Str);
    /// ```
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Integer(_) => DataType::Int,
            Self::Real(_) => DataType::Float,
            Self::Bool(_) => DataType::Bool,
            Self::Str(_) => DataType::Str,
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`.
    /// Integers are widened to the nearest `f64`.
    ///
    /// # Example
    /// ```
    /// use sluc::interpreter::value::core::Value;
    ///
    /// let x = Value::Integer(10);
    /// let real = x.as_real(42).unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// ```
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            _ => Err(RuntimeError::ExpectedNumber { found: self.data_type(),
                                                    line }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for conditions and logical operations; no other type is treated
    /// as truthy or falsy.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { found: self.data_type(),
                                                     line }),
        }
    }

    /// Returns `true` if the value is an integer or a real.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }

    /// Converts the value so it can be stored in a slot of type `target`.
    ///
    /// - `int` slots accept integers unchanged and truncate reals toward zero.
    /// - `float` slots accept reals unchanged and widen integers.
    /// - `bool` slots only accept booleans.
    /// - `str` slots only accept strings.
    ///
    /// # Parameters
    /// - `target`: The declared type of the slot.
    /// - `name`: Name of the slot, used in the error message.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Errors
    /// `RuntimeError::IncompatibleAssignment` when the value's type cannot be
    /// stored in the slot, plus the numeric conversion errors.
    ///
    /// # Example
    /// ```
    /// use sluc::{ast::DataType, interpreter::value::core::Value};
    ///
    /// let widened = Value::Integer(3).convert_to(DataType::Float, "f", 1).unwrap();
    /// assert_eq!(widened, Value::Real(3.0));
    ///
    /// let truncated = Value::Real(3.9).convert_to(DataType::Int, "i", 1).unwrap();
    /// assert_eq!(truncated, Value::Integer(3));
    ///
    /// assert!(Value::Integer(3).convert_to(DataType::Bool, "b", 1).is_err());
    /// ```
    pub fn convert_to(self, target: DataType, name: &str, line: usize) -> EvalResult<Self> {
        match (target, self) {
            (DataType::Int, Self::Integer(n)) => Ok(Self::Integer(n)),
            (DataType::Int, Self::Real(r)) => Ok(Self::Integer(f64_to_i64_truncated(r, line)?)),
            (DataType::Float, Self::Real(r)) => Ok(Self::Real(r)),
            (DataType::Float, Self::Integer(n)) => Ok(Self::Real(i64_to_f64(n))),
            (DataType::Bool, Self::Bool(b)) => Ok(Self::Bool(b)),
            (DataType::Str, Self::Str(s)) => Ok(Self::Str(s)),
            (declared, value) => {
                Err(RuntimeError::IncompatibleAssignment { name: name.to_string(),
                                                           declared,
                                                           found: value.data_type(),
                                                           line })
            },
        }
    }

    /// Promotes an integer to a real value for mixed math, or returns values
    /// as-is if already matching.
    ///
    /// - If one side is an integer and the other is a real, the integer is
    ///   converted to a real.
    /// - Otherwise, both values are returned unchanged.
    pub fn promote_to_real(self, other: &Self, line: usize) -> EvalResult<(Self, Self)> {
        use Value::{Integer, Real};

        match (&self, other) {
            (Real(_), Integer(_)) => Ok((self, Real(other.as_real(line)?))),
            (Integer(_), Real(_)) => Ok((Real(self.as_real(line)?), other.clone())),
            _ => Ok((self, other.clone())),
        }
    }
}

/// Values print the way `print` shows them: reals always carry a fractional
/// part so they stay distinguishable from integers.
///
/// ```
/// use sluc::interpreter::value::core::Value;
///
/// assert_eq!(Value::Real(3.0).to_string(), "3.0");
/// assert_eq!(Value::Real(0.25).to_string(), "0.25");
/// assert_eq!(Value::Real(1e16).to_string(), "1e+16");
/// assert_eq!(Value::Integer(-7).to_string(), "-7");
/// assert_eq!(Value::Bool(true).to_string(), "true");
/// assert_eq!(Value::from("a b").to_string(), "a b");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{}", format_real(*r)),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
