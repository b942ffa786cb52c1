use std::str::Chars;

/// Character cursor keeping track of the current line and character offset.
#[derive(Clone)]
pub struct Cursor<'a> {
    chars: Chars<'a>,
    pos: usize,
    ln: u64,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        let chars = s.chars();
        Self { chars, pos: 0, ln: 1 }
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub fn peek_2nd(&self) -> Option<char> {
        // cheap to clone
        let mut chars = self.chars.clone();
        chars.next();
        chars.next()
    }

    pub fn peek_3rd(&self) -> Option<char> {
        self.chars.clone().nth(2)
    }

    #[inline]
    pub fn skip_if(&mut self, p: impl FnOnce(char) -> bool) -> bool {
        let skipped = self.peek().filter(|&c| p(c)).is_some();
        if skipped {
            self.take();
        }
        skipped
    }

    pub fn skip_line(&mut self) {
        while self.skip_if(|c| c != '\n') {}
    }

    /// Moves every leading char matching `p` into `buf`.
    pub fn take_while_into(&mut self, buf: &mut String, p: impl Fn(char) -> bool) {
        while let Some(c) = self.peek().filter(|&c| p(c)) {
            buf.push(c);
            self.take();
        }
    }

    pub fn take(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.pos += 1;
        if c == '\n' {
            self.ln += 1;
        }
        Some(c)
    }

    pub fn get_ln(&self) -> u64 {
        self.ln
    }

    pub fn get_pos(&self) -> usize {
        self.pos
    }
}
