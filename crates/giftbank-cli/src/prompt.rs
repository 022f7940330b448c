//! Line-oriented prompting over any reader/writer pair.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::Result;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask a yes/no question. Only `yes` confirms.
    pub fn confirm(&mut self, prompt: &str) -> Result<Option<bool>> {
        Ok(self
            .ask(&format!("{prompt} (yes/no): "))?
            .map(|answer| answer.trim().eq_ignore_ascii_case("yes")))
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
