use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `1_000.5` or `2.1e-10`.
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+", parse_float)]
    Real(f64),
    /// Integer literal tokens, such as `42` or `1_000`.
    #[regex(r"[0-9][0-9_]*", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hello"`. The quotes are stripped and
    /// escape sequences are resolved.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, parse_string)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `int`
    #[token("int")]
    Int,
    /// `float`
    #[token("float")]
    Float,
    /// `bool`
    #[token("bool")]
    BoolType,
    /// `str`
    #[token("str")]
    StrType,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `**`
    #[token("**")]
    StarStar,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically resets or increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Identifier(name) => write!(f, "{name}"),
            other => {
                let text = match other {
                    Self::Int => "int",
                    Self::Float => "float",
                    Self::BoolType => "bool",
                    Self::StrType => "str",
                    Self::If => "if",
                    Self::Else => "else",
                    Self::While => "while",
                    Self::Print => "print",
                    Self::Return => "return",
                    Self::DoublePipe => "||",
                    Self::DoubleAmpersand => "&&",
                    Self::EqualEqual => "==",
                    Self::BangEqual => "!=",
                    Self::LessEqual => "<=",
                    Self::GreaterEqual => ">=",
                    Self::Less => "<",
                    Self::Greater => ">",
                    Self::Equals => "=",
                    Self::Plus => "+",
                    Self::Minus => "-",
                    Self::StarStar => "**",
                    Self::Star => "*",
                    Self::Slash => "/",
                    Self::Percent => "%",
                    Self::Bang => "!",
                    Self::Semicolon => ";",
                    Self::Comma => ",",
                    Self::LParen => "(",
                    Self::RParen => ")",
                    Self::LBrace => "{",
                    Self::RBrace => "}",
                    _ => "<trivia>",
                };
                write!(f, "'{text}'")
            },
        }
    }
}

/// Splits source text into `(Token, line)` pairs.
///
/// Whitespace, line breaks and comments are consumed here and never reach the
/// parser. Lines are counted from 1.
///
/// # Errors
/// - `ParseError::LiteralTooLarge` for an integer literal that does not fit in
///   an `i64`.
/// - `ParseError::UnexpectedToken` for any other unrecognised input, such as
///   a stray `&` or an unterminated string.
///
/// # Example
/// ```
/// use sluc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("int x;\nx = 2;").unwrap();
///
/// assert_eq!(tokens[0], (Token::Int, 1));
/// assert_eq!(tokens[3], (Token::Identifier("x".to_string()), 2));
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => {
                let slice = lexer.slice();
                if !slice.is_empty() && slice.chars().all(|c| c.is_ascii_digit() || c == '_') {
                    return Err(ParseError::LiteralTooLarge { line });
                }
                return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                         line });
            },
        }
    }

    log::trace!("lexed {} tokens over {} lines", tokens.len(), lexer.extras.line);

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// Digit separators (`_`) are removed before conversion.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().replace('_', "").parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit into an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().replace('_', "").parse().ok()
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
/// Strips the surrounding quotes of a string literal and resolves the escape
/// sequences `\"`, `\\`, `\n` and `\t`. Unknown escapes are rejected.
fn parse_string(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            _ => return None,
        }
    }

    Some(out)
}
