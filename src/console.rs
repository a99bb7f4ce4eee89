use std::fmt::Display;
use std::io::{BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed while waiting for an answer")]
    InputClosed,
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Console – line-based prompting over any reader / writer pair
// ---------------------------------------------------------------------------

/// Terminal the session talks to. Generic so tests can script the input.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for report and table output.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> Result<(), PromptError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Show `prompt` and read one answer with surrounding whitespace removed.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the lower-cased answer is one of `accepted`, printing
    /// `invalid` after every rejected answer.
    pub fn choose<'a, T: AsRef<str>>(
        &mut self,
        prompt: &str,
        accepted: &'a [T],
        invalid: &str,
    ) -> Result<&'a T, PromptError> {
        loop {
            let answer = self.ask(prompt)?.to_lowercase();
            if let Some(option) = accepted.iter().find(|option| option.as_ref() == answer.as_str()) {
                return Ok(option);
            }
            log::debug!("rejected answer {answer:?}");
            self.say(invalid)?;
        }
    }
}
