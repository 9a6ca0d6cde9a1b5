use tracing::{trace, warn};
use crate::token::{Kind, Token};

/// Single-pass scanner over one line of input.
///
/// The cursor is a byte offset into `source` and always sits on a char
/// boundary. `next_token` never fails: characters it cannot classify come
/// back as `Kind::Bad`, one at a time.
pub struct Lexer<'a> {
    source: &'a str,
    current: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            source: input,
            current: 0,
        }
    }

    fn at(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.at() {
            self.current += ch.len_utf8();
        }
    }

    fn is_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.current;
        while let Some(ch) = self.at() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
        &self.source[start..self.current]
    }

    pub fn next_token(&mut self) -> Token {
        let ch = match self.at() {
            Some(ch) => ch,
            None => return Token::eof(self.current),
        };
        let start = self.current;

        let token = if ch.is_ascii_digit() {
            let text = self.advance_while(|c| c.is_ascii_digit());
            Token::number(start, text, parse_number(text, start))
        } else if ch.is_whitespace() {
            let text = self.advance_while(char::is_whitespace);
            Token::new(Kind::Whitespace, start, text)
        } else {
            self.advance();
            let text = &self.source[start..self.current];
            match Kind::from_punct(ch) {
                Some(kind) => Token::new(kind, start, text),
                None => Token::new(Kind::Bad, start, text),
            }
        };

        trace!(kind = %token.kind, position = token.position, text = %token.text, "token");
        token
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token before `EndOfFile`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.is_eof() {
            return None;
        }
        Some(self.next_token())
    }
}

/// Lexes `source` completely. The last token is always `EndOfFile`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

// Digit runs past i64::MAX saturate rather than fail; the token keeps its full text.
fn parse_number(text: &str, position: usize) -> i64 {
    match text.parse::<i64>() {
        Ok(value) => value,
        Err(err) => {
            warn!(position, digits = text.len(), %err, "numeric literal out of range, saturating");
            i64::MAX
        }
    }
}
