#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// This covers both grammar violations and the scoping rules the parser checks
/// while it builds the tree.
pub enum ParseError {
    /// Found input the lexer or parser cannot use here.
    UnexpectedToken {
        /// The offending source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// Description of what the grammar requires.
        expected: String,
        /// The token that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A type keyword appeared after the first statement of a function.
    DeclarationAfterStatement {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A parameter or local was declared twice in one function.
    DuplicateIdentifier {
        /// The repeated identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Two functions share a name.
    DuplicateFunction {
        /// The repeated function name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An identifier was used without being declared earlier in the function.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call names a function that is not defined earlier in the source.
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call passes the wrong number of arguments.
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
    /// A function was declared with a type functions cannot return.
    InvalidReturnType {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The program has no `main` function.
    MissingMain {
        /// The last line of the program.
        line: usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Gets the line number the error refers to.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::ExpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::DeclarationAfterStatement { line }
            | Self::DuplicateIdentifier { line, .. }
            | Self::DuplicateFunction { line, .. }
            | Self::UndefinedVariable { line, .. }
            | Self::UndefinedFunction { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::InvalidReturnType { line, .. }
            | Self::MissingMain { line }
            | Self::LiteralTooLarge { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Syntax error on line {line}: Unexpected token: {token}.")
            },
            Self::ExpectedToken { expected,
                                  found,
                                  line, } => write!(f,
                                                    "Syntax error on line {line}: Expected {expected}, found {found}."),

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Syntax error on line {line}: Unexpected end of input.")
            },

            Self::DeclarationAfterStatement { line } => write!(f,
                                                               "Syntax error on line {line}: Declarations must be written before statements."),

            Self::DuplicateIdentifier { name, line } => write!(f,
                                                               "Syntax error on line {line}: Identifier '{name}' is already declared."),
            Self::DuplicateFunction { name, line } => write!(f,
                                                             "Syntax error on line {line}: Function '{name}' is already defined."),

            Self::UndefinedVariable { name, line } => {
                write!(f, "Syntax error on line {line}: Variable '{name}' is not defined.")
            },
            Self::UndefinedFunction { name, line } => {
                write!(f, "Syntax error on line {line}: Function '{name}' is not defined.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Syntax error on line {line}: Function '{name}' takes {expected} argument(s) but {found} were supplied."),

            Self::InvalidReturnType { name, line } => write!(f,
                                                             "Syntax error on line {line}: Function '{name}' must return int, float or bool."),
            Self::MissingMain { line } => {
                write!(f, "Syntax error on line {line}: Program has no 'main' function.")
            },
            Self::LiteralTooLarge { line } => {
                write!(f, "Syntax error on line {line}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
