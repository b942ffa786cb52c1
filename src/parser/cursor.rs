use crate::lexer::{LinedToken, Token};
use crate::parser::{InnerParseError, ParseError, Result};

#[derive(Debug)]
pub struct Cursor<'a> {
    tokens: &'a [LinedToken],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [LinedToken]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position).map(LinedToken::get_inner)
    }

    pub fn bump(&mut self) {
        self.position += 1;
    }

    pub fn bump_if(&mut self, t: &Token) -> bool {
        let condition = self.peek() == Some(t);
        if condition {
            self.bump();
        }
        condition
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Line and offset of the next token. Past the end, the last token's location.
    pub fn get_location(&self) -> (u64, usize) {
        self.tokens
            .get(self.position)
            .or_else(|| self.tokens.last())
            .map_or((1, 0), |t| (t.get_line(), t.get_pos()))
    }

    pub fn error_here(&self, inner: InnerParseError) -> ParseError {
        let (ln, pos) = self.get_location();
        inner.set_location(ln, pos)
    }

    pub fn expect(&mut self, t: &Token) -> Result<()> {
        let (ln, pos) = self.get_location();
        let next = self.next_or_error()?;
        if next == t {
            Ok(())
        } else {
            let err = InnerParseError::ExpectedButGot(t.clone(), next.clone());
            Err(err.set_location(ln, pos))
        }
    }

    pub fn peek_or_error(&self) -> Result<&'a Token> {
        self.peek()
            .ok_or_else(|| self.error_here(InnerParseError::UnexpectedEof))
    }

    pub fn next_or_error(&mut self) -> Result<&'a Token> {
        let next = self.peek_or_error()?;
        self.position += 1;
        Ok(next)
    }
}
