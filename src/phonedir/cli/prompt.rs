use phonedir::error::{DirectoryError, Result};
use std::io::{BufRead, ErrorKind, Write};

/// Line-oriented interactive input.
///
/// Every answer is returned exactly as typed, minus the line terminator.
pub(super) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(super) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(super) fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(DirectoryError::Io(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "input closed before all answers were given",
            )));
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }
}
