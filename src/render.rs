use std::io::Write;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Kind: 'text' value`, one token per line
    #[default]
    Text,
    /// One JSON object per token per line
    Json,
}

/// Renders a token as `<Kind>: '<text>'`, followed by ` <value>` for numbers.
pub fn render_text(token: &Token) -> String {
    match token.value {
        Some(value) => format!("{}: '{}' {}", token.kind, token.text, value),
        None => format!("{}: '{}'", token.kind, token.text),
    }
}

pub fn render_json(token: &Token) -> Result<String> {
    Ok(serde_json::to_string(token)?)
}

/// Writes every token before `EndOfFile`, one line each.
pub fn write_tokens<W, I>(out: &mut W, tokens: I, format: OutputFormat) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Token>,
{
    let mut written = 0;
    for token in tokens {
        if token.is_eof() {
            break;
        }
        let line = match format {
            OutputFormat::Text => render_text(&token),
            OutputFormat::Json => render_json(&token)?,
        };
        writeln!(out, "{}", line)?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{tokenize, Lexer};
    use crate::token::Kind;

    #[test]
    fn text_number_has_trailing_value() {
        assert_eq!(render_text(&Token::number(0, "12", 12)), "Number: '12' 12");
    }

    #[test]
    fn text_without_value() {
        assert_eq!(render_text(&Token::new(Kind::Whitespace, 2, " ")), "Whitespace: ' '");
        assert_eq!(render_text(&Token::new(Kind::Bad, 0, "@")), "Bad: '@'");
        assert_eq!(render_text(&Token::new(Kind::CloseParenthesis, 0, ")")), "CloseParenthesis: ')'");
    }

    #[test]
    fn json_omits_missing_value() {
        assert_eq!(
            render_json(&Token::new(Kind::Plus, 2, "+")).unwrap(),
            r#"{"kind":"Plus","position":2,"text":"+"}"#
        );
        assert_eq!(
            render_json(&Token::number(0, "7", 7)).unwrap(),
            r#"{"kind":"Number","position":0,"text":"7","value":7}"#
        );
    }

    #[test]
    fn write_tokens_skips_eof() {
        let mut out = Vec::new();
        let count = write_tokens(&mut out, tokenize("12+"), OutputFormat::Text).unwrap();
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "Number: '12' 12\nPlus: '+'\n");
    }

    #[test]
    fn write_tokens_forwards_whitespace_and_bad() {
        let mut out = Vec::new();
        write_tokens(&mut out, Lexer::new("1 @"), OutputFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Number: '1' 1\nWhitespace: ' '\nBad: '@'\n"
        );
    }

    #[test]
    fn write_tokens_json_lines() {
        let mut out = Vec::new();
        write_tokens(&mut out, tokenize("(1"), OutputFormat::Json).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["kind"], "OpenParenthesis");
        assert_eq!(lines[1]["value"], 1);
    }
}
