use super::lexer_error::InnerLexError;
use std::fmt;
use std::ops::Deref;

/// Token with attached line number and character offset.
///
/// To get inner [Token] use [Token::from] to consume or [get_inner](LinedToken::get_inner) to borrow.
///
#[derive(Debug, Clone, PartialEq)]
pub struct LinedToken {
    pub(crate) inner: Token,
    ln: u64,
    pos: usize,
}

impl From<LinedToken> for Token {
    fn from(value: LinedToken) -> Self {
        value.inner
    }
}

/// Basic token type
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// any name that is not a keyword
    Identifier(String),
    /// integer constant (e.g. 42), spelled as in the source
    Constant(String),
    /// double constant (e.g. 3.14, -2.5e3), spelled as in the source
    FPDouble { value: f64, spelling: String },
    /// if keyword
    If,
    /// else keyword
    Else,
    /// while keyword
    While,
    /// int keyword
    Int,
    /// double keyword
    Double,
    /// print keyword
    Print,
    /// (
    OpenParanth,
    /// )
    CloseParanth,
    /// {
    OpenCurly,
    /// }
    CloseCurly,
    /// [
    OpenSquare,
    /// ]
    CloseSquare,
    /// =
    Assign,
    /// ==
    IsEqual,
    /// !
    LogicalNot,
    /// |
    LogicalOr,
    /// &
    LogicalAnd,
    /// <
    IsLessThan,
    /// >
    IsGreaterThan,
    /// <=
    IsLessThanOrEqual,
    /// >=
    IsGreaterThanOrEqual,
    /// =<
    EqualOrLess,
    /// =>
    EqualOrGreater,
    /// +
    Plus,
    /// -
    Hyphen,
    /// *
    Asterisk,
    /// /
    FSlash,
    /// ,
    Comma,
    /// ;
    Semicolon,
}

impl LinedToken {
    pub fn new(t: Token, ln: u64, pos: usize) -> Self {
        Self { inner: t, ln, pos }
    }

    pub fn get_line(&self) -> u64 {
        self.ln
    }

    pub fn get_pos(&self) -> usize {
        self.pos
    }

    pub fn get_inner(&self) -> &Token {
        &self.inner
    }
}

impl Deref for LinedToken {
    type Target = Token;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Token {
    #[inline]
    pub fn is_type(&self) -> bool {
        matches!(self, Self::Int | Self::Double)
    }

    #[inline]
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            Self::IsLessThan
                | Self::IsGreaterThan
                | Self::IsLessThanOrEqual
                | Self::IsGreaterThanOrEqual
                | Self::EqualOrLess
                | Self::EqualOrGreater
        )
    }

    /// Binary operators that have no declared precedence.
    #[inline]
    pub fn is_greedy_binaryop(&self) -> bool {
        matches!(self, Self::LogicalAnd | Self::LogicalOr | Self::IsEqual)
    }

    /// Upper-case name of the token kind, as shown by the `--lex` dump.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "ID",
            Self::Constant(_) => "INT",
            Self::FPDouble { .. } => "DOUBLE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::Int => "INT_TYPE",
            Self::Double => "DOUBLE_TYPE",
            Self::Print => "PRINT",
            Self::OpenParanth => "RO",
            Self::CloseParanth => "RC",
            Self::OpenCurly => "BO",
            Self::CloseCurly => "BC",
            Self::OpenSquare => "SO",
            Self::CloseSquare => "SC",
            Self::Assign => "EQ",
            Self::IsEqual => "EQ_EQ",
            Self::LogicalNot => "NOT",
            Self::LogicalOr => "OR",
            Self::LogicalAnd => "AND",
            Self::IsLessThan => "MIN",
            Self::IsGreaterThan => "MAJ",
            Self::IsLessThanOrEqual => "MIN_EQ",
            Self::IsGreaterThanOrEqual => "MAJ_EQ",
            Self::EqualOrLess => "EQ_MIN",
            Self::EqualOrGreater => "EQ_MAJ",
            Self::Plus => "PLUS",
            Self::Hyphen => "MINUS",
            Self::Asterisk => "STAR",
            Self::FSlash => "DIV",
            Self::Comma => "CM",
            Self::Semicolon => "S",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Identifier(name) => return write!(f, "{name}"),
            Self::Constant(c) => return write!(f, "{c}"),
            Self::FPDouble { spelling, .. } => return write!(f, "{spelling}"),
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Int => "int",
            Self::Double => "double",
            Self::Print => "print",
            Self::OpenParanth => "(",
            Self::CloseParanth => ")",
            Self::OpenCurly => "{",
            Self::CloseCurly => "}",
            Self::OpenSquare => "[",
            Self::CloseSquare => "]",
            Self::Assign => "=",
            Self::IsEqual => "==",
            Self::LogicalNot => "!",
            Self::LogicalOr => "|",
            Self::LogicalAnd => "&",
            Self::IsLessThan => "<",
            Self::IsGreaterThan => ">",
            Self::IsLessThanOrEqual => "<=",
            Self::IsGreaterThanOrEqual => ">=",
            Self::EqualOrLess => "=<",
            Self::EqualOrGreater => "=>",
            Self::Plus => "+",
            Self::Hyphen => "-",
            Self::Asterisk => "*",
            Self::FSlash => "/",
            Self::Comma => ",",
            Self::Semicolon => ";",
        };
        write!(f, "{symbol}")
    }
}

impl TryFrom<char> for Token {
    type Error = InnerLexError;
    fn try_from(c: char) -> std::result::Result<Self, InnerLexError> {
        match c {
            ';' => Ok(Self::Semicolon),
            ',' => Ok(Self::Comma),
            '(' => Ok(Self::OpenParanth),
            ')' => Ok(Self::CloseParanth),
            '{' => Ok(Self::OpenCurly),
            '}' => Ok(Self::CloseCurly),
            '[' => Ok(Self::OpenSquare),
            ']' => Ok(Self::CloseSquare),
            '-' => Ok(Self::Hyphen),
            '+' => Ok(Self::Plus),
            '*' => Ok(Self::Asterisk),
            '/' => Ok(Self::FSlash),
            '!' => Ok(Self::LogicalNot),
            '<' => Ok(Self::IsLessThan),
            '>' => Ok(Self::IsGreaterThan),
            '=' => Ok(Self::Assign),
            '&' => Ok(Self::LogicalAnd),
            '|' => Ok(Self::LogicalOr),
            _ => Err(InnerLexError::UnexpectedChar(c)),
        }
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        match s {
            "if" => Self::If,
            "else" => Self::Else,
            "while" => Self::While,
            "int" => Self::Int,
            "double" => Self::Double,
            "print" => Self::Print,
            _ => Self::Identifier(s.to_owned()),
        }
    }
}
