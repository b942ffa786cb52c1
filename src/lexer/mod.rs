mod cursor;
mod lexer_error;
mod token;

use cursor::Cursor;
pub use lexer_error::{InnerLexError, LexError};
pub use token::{LinedToken, Token};

pub type Tokens = Vec<LinedToken>;

/// Result of scanning a whole source text.
///
/// Scanning never aborts: characters that start no token are reported in
/// `errors` and skipped, so `tokens` always holds everything that was recognised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexed {
    pub tokens: Tokens,
    pub errors: Vec<LexError>,
}

fn skip_trivia(cursor: &mut Cursor) {
    loop {
        match (cursor.peek(), cursor.peek_2nd()) {
            (Some(' ' | '\t' | '\r' | '\n'), _) => {
                cursor.take();
            }
            (Some('#'), _) | (Some('/'), Some('/')) => cursor.skip_line(),
            _ => break,
        }
    }
}

fn starts_negative_double(cursor: &Cursor) -> bool {
    let mut ahead = cursor.clone();
    ahead.take();
    let mut digits = 0;
    while ahead.skip_if(|c| c.is_ascii_digit()) {
        digits += 1;
    }
    digits > 0 && ahead.peek() == Some('.')
}

fn exponent_follows(cursor: &Cursor) -> bool {
    let is_digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
    match (cursor.peek(), cursor.peek_2nd()) {
        (Some('e' | 'E'), Some('+' | '-')) => is_digit(cursor.peek_3rd()),
        (Some('e' | 'E'), second) => is_digit(second),
        _ => false,
    }
}

fn lex_number(cursor: &mut Cursor) -> Result<Token, InnerLexError> {
    let mut spelling = String::new();
    if cursor.skip_if(|c| c == '-') {
        spelling.push('-');
    }
    cursor.take_while_into(&mut spelling, |c| c.is_ascii_digit());

    if !cursor.skip_if(|c| c == '.') {
        return Ok(Token::Constant(spelling));
    }

    spelling.push('.');
    cursor.take_while_into(&mut spelling, |c| c.is_ascii_digit());

    if exponent_follows(cursor) {
        cursor.take_while_into(&mut spelling, |c| matches!(c, 'e' | 'E'));
        cursor.take_while_into(&mut spelling, |c| matches!(c, '+' | '-'));
        cursor.take_while_into(&mut spelling, |c| c.is_ascii_digit());
    }

    match spelling.parse() {
        Ok(value) => Ok(Token::FPDouble { value, spelling }),
        Err(_) => Err(InnerLexError::BadConstant(spelling)),
    }
}

fn lex_identifier(cursor: &mut Cursor) -> Token {
    let mut buf = String::new();
    cursor.take_while_into(&mut buf, |c| c.is_ascii_alphanumeric());
    Token::from(buf.as_str())
}

fn lex_operator(first: char, cursor: &mut Cursor) -> Result<Token, InnerLexError> {
    let token = match (first, cursor.peek()) {
        ('=', Some('=')) => Token::IsEqual,
        ('=', Some('<')) => Token::EqualOrLess,
        ('=', Some('>')) => Token::EqualOrGreater,
        ('<', Some('=')) => Token::IsLessThanOrEqual,
        ('>', Some('=')) => Token::IsGreaterThanOrEqual,
        _ => return Token::try_from(first),
    };
    cursor.take();
    Ok(token)
}

/// Scans `input` into tokens.
///
/// Each call starts from a fresh cursor at line 1, offset 0.
pub fn lex(input: &str) -> Lexed {
    let mut cursor = Cursor::new(input);
    let mut lexed = Lexed::default();

    loop {
        skip_trivia(&mut cursor);
        let ln = cursor.get_ln();
        let pos = cursor.get_pos();
        let Some(c) = cursor.peek() else {
            break;
        };

        let token = match c {
            'a'..='z' | 'A'..='Z' => Ok(lex_identifier(&mut cursor)),
            '0'..='9' => lex_number(&mut cursor),
            '-' if starts_negative_double(&cursor) => lex_number(&mut cursor),
            _ => {
                cursor.take();
                lex_operator(c, &mut cursor)
            }
        };

        match token {
            Ok(token) => lexed.tokens.push(LinedToken::new(token, ln, pos)),
            Err(err) => lexed.errors.push(err.set_location(ln, pos)),
        }
    }

    lexed
}
