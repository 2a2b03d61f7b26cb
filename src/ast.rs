use std::fmt::{self, Display, Formatter};

use crate::util::num::format_real;

/// The declared type of a variable, parameter or function result.
///
/// `Str` is only valid for variables and parameters; functions return `int`,
/// `float` or `bool`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    /// `int`, a 64-bit signed integer.
    Int,
    /// `float`, a 64-bit floating-point number.
    Float,
    /// `bool`
    Bool,
    /// `str`
    Str,
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Str => "str",
        };
        write!(f, "{name}")
    }
}

/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A string literal, already unescaped.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant records the source line it started on so that runtime errors
/// can point back at the program text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation or logical not).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison or logic).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `square(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use sluc::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// A typed name: a function parameter or a local variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The declared type of the slot.
    pub data_type: DataType,
    /// The identifier.
    pub name:      String,
    /// Line number in the source code.
    pub line:      usize,
}

/// A statement inside a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = value;`
    Assignment {
        /// The target variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if (condition) then_branch [else else_branch]`
    If {
        /// The condition, which must evaluate to a boolean.
        condition:   Expr,
        /// Statement executed when the condition holds.
        then_branch: Box<Self>,
        /// Statement executed otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while (condition) body`
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `print(arg, ...)`
    Print {
        /// One or more arguments, printed separated by spaces.
        arguments: Vec<Expr>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `return value;`
    Return {
        /// The returned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `{ statement* }`
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A lone `;`.
    Empty,
}

/// Represents a user-defined function definition.
///
/// All declarations of a function precede its statements, and parameters and
/// locals live in a single flat scope.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The declared return type.
    pub return_type: DataType,
    /// The name of the function.
    pub name:        String,
    /// The parameters, in call order.
    pub params:      Vec<Declaration>,
    /// Local variable declarations.
    pub locals:      Vec<Declaration>,
    /// The statements forming the function body.
    pub body:        Vec<Statement>,
    /// Line number in the source code.
    pub line:        usize,
}

/// A parsed program: every function definition in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The function definitions, including `main`.
    pub functions: Vec<FunctionDef>,
}

impl Program {
    /// Name of the function execution starts from.
    pub const ENTRY_POINT: &'static str = "main";

    /// Returns the entry point function, if the program has one.
    #[must_use]
    pub fn main_function(&self) -> Option<&FunctionDef> {
        self.functions
            .iter()
            .find(|function| function.name == Self::ENTRY_POINT)
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and logic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "**",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{}", format_real(*r)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write_string_literal(f, s),
        }
    }
}

/// Binary and unary operations are printed fully parenthesised, so the output
/// shows how the parser grouped them.
///
/// ```
/// use sluc::parse_source;
///
/// let program = parse_source("int main() { int a; a = 2 + 3 * 4 ** 2; }").unwrap();
/// let text = program.to_string();
///
/// assert!(text.contains("a = (2 + (3 * (4 ** 2)));"));
/// ```
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "{op}({expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                write_separated(f, arguments)?;
                write!(f, ")")
            },
        }
    }
}

impl Statement {
    /// Writes the statement at the given indentation depth.
    fn write_indented(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "    ".repeat(depth);
        match self {
            Self::Assignment { name, value, .. } => writeln!(f, "{pad}{name} = {value};"),
            Self::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                writeln!(f, "{pad}if ({condition})")?;
                then_branch.write_indented(f, depth + 1)?;
                if let Some(else_branch) = else_branch {
                    writeln!(f, "{pad}else")?;
                    else_branch.write_indented(f, depth + 1)?;
                }
                Ok(())
            },
            Self::While { condition, body, .. } => {
                writeln!(f, "{pad}while ({condition})")?;
                body.write_indented(f, depth + 1)
            },
            Self::Print { arguments, .. } => {
                write!(f, "{pad}print(")?;
                write_separated(f, arguments)?;
                writeln!(f, ")")
            },
            Self::Return { value, .. } => writeln!(f, "{pad}return {value};"),
            Self::Block { statements, .. } => {
                writeln!(f, "{pad}{{")?;
                for statement in statements {
                    statement.write_indented(f, depth + 1)?;
                }
                writeln!(f, "{pad}}}")
            },
            Self::Empty => writeln!(f, "{pad};"),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.data_type, self.name)
    }
}

impl Display for FunctionDef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.return_type, self.name)?;
        write_separated(f, &self.params)?;
        writeln!(f, ") {{")?;
        for local in &self.locals {
            writeln!(f, "    {local};")?;
        }
        for statement in &self.body {
            statement.write_indented(f, 1)?;
        }
        writeln!(f, "}}")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, function) in self.functions.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{function}")?;
        }
        Ok(())
    }
}

/// Writes a string in literal form using only the escapes the lexer knows.
fn write_string_literal(f: &mut Formatter<'_>, text: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in text.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "\"")
}

fn write_separated<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
