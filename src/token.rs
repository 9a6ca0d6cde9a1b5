use std::fmt;
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Token {
    pub(crate) kind: Kind,
    pub(crate) position: usize,
    pub(crate) text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) value: Option<i64>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Kind {
    // Literals
    Number,            // 0-9 runs

    Whitespace,

    // Operators
    Plus,              // +
    Minus,             // -
    Star,              // *
    Slash,             // /

    // Grouping
    OpenParenthesis,   // (
    CloseParenthesis,  // )

    Bad,               // any unrecognized character
    EndOfFile          // End of input marker
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Number => "Number",
            Kind::Whitespace => "Whitespace",
            Kind::Plus => "Plus",
            Kind::Minus => "Minus",
            Kind::Star => "Star",
            Kind::Slash => "Slash",
            Kind::OpenParenthesis => "OpenParenthesis",
            Kind::CloseParenthesis => "CloseParenthesis",
            Kind::Bad => "Bad",
            Kind::EndOfFile => "EndOfFile",
        }
    }

    /// Kind of a single-character operator or parenthesis, if `ch` is one.
    pub fn from_punct(ch: char) -> Option<Kind> {
        match ch {
            '+' => Some(Kind::Plus),
            '-' => Some(Kind::Minus),
            '*' => Some(Kind::Star),
            '/' => Some(Kind::Slash),
            '(' => Some(Kind::OpenParenthesis),
            ')' => Some(Kind::CloseParenthesis),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Token {
    pub fn new(kind: Kind, position: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            text: text.into(),
            value: None,
        }
    }

    pub fn number(position: usize, text: impl Into<String>, value: i64) -> Self {
        Self {
            kind: Kind::Number,
            position,
            text: text.into(),
            value: Some(value),
        }
    }

    pub fn eof(position: usize) -> Self {
        Self::new(Kind::EndOfFile, position, "")
    }

    pub fn is_eof(&self) -> bool {
        self.kind == Kind::EndOfFile
    }
}
