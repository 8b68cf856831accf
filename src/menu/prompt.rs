use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Line-oriented terminal I/O over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt user with a message and return their trimmed input.
    /// Returns None once input is exhausted. Bytes that are not UTF-8
    /// become U+FFFD, so they fail validation like any other bad answer.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush stdout")?;

        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Print a line
    pub fn say(&mut self, message: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", message.as_ref()).context("Failed to write output")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
