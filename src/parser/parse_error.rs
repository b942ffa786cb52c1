use crate::lexer::Token;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InnerParseError {
    #[error("expected token `{0}`, but got `{1}`")]
    ExpectedButGot(Token, Token),
    #[error("expected identifier, but got `{0}`")]
    ExpectedIdentifierButGot(Token),
    #[error("expected integer constant, but got `{0}`")]
    ExpectedConstantButGot(Token),
    #[error("array dimension `{0}` does not fit in 64 bits")]
    DimensionTooLarge(String),
    #[error("unexpected token `{0}`")]
    UnexpectedToken(Token),
    #[error("reached unexpected end of input")]
    UnexpectedEof,
}

/// First syntax error of a compilation. Parsing stops here.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {ln}, position {pos}: {inner}")]
pub struct ParseError {
    pub inner: InnerParseError,
    pub ln: u64,
    pub pos: usize,
}

impl ParseError {
    pub fn get_ln(&self) -> u64 {
        self.ln
    }

    pub fn get_pos(&self) -> usize {
        self.pos
    }

    /// The offending token, `None` when input ended too early.
    pub fn unexpected_token(&self) -> Option<&Token> {
        use InnerParseError as PE;
        match &self.inner {
            PE::ExpectedButGot(_, got) => Some(got),
            PE::ExpectedIdentifierButGot(t) | PE::ExpectedConstantButGot(t) => Some(t),
            PE::UnexpectedToken(t) => Some(t),
            PE::DimensionTooLarge(_) | PE::UnexpectedEof => None,
        }
    }
}

impl InnerParseError {
    pub fn set_location(self, ln: u64, pos: usize) -> ParseError {
        ParseError { inner: self, ln, pos }
    }
}
