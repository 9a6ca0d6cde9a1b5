use std::io::{BufRead, Write};
use tracing::debug;

use crate::config::ShellConfig;
use crate::error::Result;
use crate::lexer::Lexer;
use crate::render::{write_tokens, OutputFormat};

/// Interactive read-lex-print loop.
///
/// Each line gets a fresh `Lexer`; nothing carries over between lines. An
/// empty or whitespace-only line, or end of input, ends the session.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Runs until the session ends and returns how many lines were lexed.
    pub fn run(&mut self) -> Result<usize> {
        debug!(prompt = %self.config.prompt, format = ?self.config.format, "session started");
        let mut lines = 0;

        while let Some(line) = self.prompt()? {
            if line.trim().is_empty() {
                break;
            }
            let count = lex_line(&mut self.output, &line, self.config.format)?;
            debug!(line = lines, tokens = count, "lexed line");
            lines += 1;
        }

        debug!(lines, "session ended");
        Ok(lines)
    }

    fn prompt(&mut self) -> Result<Option<String>> {
        write!(self.output, "{}", self.config.prompt)?;
        self.output.flush()?;

        // Invalid UTF-8 decodes to U+FFFD and is lexed as `Bad`.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Lexes one line and writes its tokens. Returns the number written.
pub fn lex_line<W: Write>(out: &mut W, line: &str, format: OutputFormat) -> Result<usize> {
    write_tokens(out, Lexer::new(line), format)
}
