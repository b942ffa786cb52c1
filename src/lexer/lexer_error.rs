use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum InnerLexError {
    #[error("unexpected character: {0:?}")]
    UnexpectedChar(char),
    #[error("bad numeric constant: {0}")]
    BadConstant(String),
}

/// Recoverable scanner diagnostic. The offending input is skipped and
/// scanning carries on.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("line {ln}, position {pos}: {inner}")]
pub struct LexError {
    inner: InnerLexError,
    ln: u64,
    pos: usize,
}

impl LexError {
    pub fn get_ln(&self) -> u64 {
        self.ln
    }

    pub fn get_pos(&self) -> usize {
        self.pos
    }

    pub fn get_inner(&self) -> &InnerLexError {
        &self.inner
    }

    /// The skipped character, if this error is about a single character.
    pub fn character(&self) -> Option<char> {
        match self.inner {
            InnerLexError::UnexpectedChar(c) => Some(c),
            InnerLexError::BadConstant(_) => None,
        }
    }
}

impl InnerLexError {
    pub(super) fn set_location(self, ln: u64, pos: usize) -> LexError {
        LexError {
            inner: self,
            ln,
            pos,
        }
    }
}
