/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code, including the scoping rules checked while the tree is built:
/// undefined or duplicate identifiers, calls to unknown functions and
/// declarations placed after statements.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Most of them
/// are type errors: assigning a value to a slot of another type, or applying an
/// operator to operands it is not defined for.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running a program, tagged with its phase.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The program was rejected by the lexer or parser.
    Syntax(ParseError),
    /// The program failed while it was being evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
