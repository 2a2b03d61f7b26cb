use crate::ast::DataType;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// A value of the wrong type was assigned to a declared slot.
    IncompatibleAssignment {
        /// The name of the variable, parameter or function result.
        name:     String,
        /// The declared type of the slot.
        declared: DataType,
        /// The type of the value that was supplied.
        found:    DataType,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator received operands it is not defined for.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The type of the value that was found.
        found: DataType,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The type of the value that was found.
        found: DataType,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A variable was read before anything was assigned to it.
    UninitializedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to use a variable missing from the environment.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function missing from the function table.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A function finished without returning a value.
    MissingReturn {
        /// The name of the function.
        name: String,
        /// The source line of the call.
        line: usize,
    },
    /// The program has no `main` function to run.
    MissingMain,
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The configured call depth was exceeded.
    RecursionLimit {
        /// The configured maximum depth.
        limit: usize,
        /// The source line of the call that exceeded it.
        line:  usize,
    },
    /// Writing program output failed.
    Output {
        /// The underlying I/O error message.
        details: String,
        /// The source line of the `print` statement.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompatibleAssignment { name,
                                           declared,
                                           found,
                                           line, } => write!(f,
                                                             "Type error on line {line}: Variable '{name}' of type {declared} cannot hold a {found} value."),
            Self::TypeError { details, line } => {
                write!(f, "Type error on line {line}: {details}.")
            },
            Self::ExpectedBoolean { found, line } => {
                write!(f, "Type error on line {line}: Expected bool, found {found}.")
            },
            Self::ExpectedNumber { found, line } => {
                write!(f, "Type error on line {line}: Expected number, found {found}.")
            },

            Self::UninitializedVariable { name, line } => write!(f,
                                                                 "Error on line {line}: Variable '{name}' is used before it is assigned."),
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Function '{name}' takes {expected} argument(s) but {found} were supplied."),
            Self::MissingReturn { name, line } => write!(f,
                                                         "Error on line {line}: Function '{name}' finished without returning a value."),
            Self::MissingMain => write!(f, "Error: Program has no 'main' function."),

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::RecursionLimit { limit, line } => write!(f,
                                                           "Error on line {line}: Call depth exceeded the limit of {limit}."),
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
