use std::io::{BufRead, Write};

use crate::application::{InputError, SessionError};

/// Line-oriented prompt/answer channel over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of output.
    pub fn say(&mut self, message: impl AsRef<str>) -> Result<(), SessionError> {
        writeln!(self.output, "{}", message.as_ref())?;
        Ok(())
    }

    /// Print text without a trailing newline.
    pub fn print(&mut self, text: &str) -> Result<(), SessionError> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn say_lines(&mut self, lines: &[String]) -> Result<(), SessionError> {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    /// Show `prompt` and read one line, without its line terminator.
    /// Invalid UTF-8 is replaced rather than rejected, so it reaches normal validation.
    /// Fails with [`SessionError::InputClosed`] at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(SessionError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Keep asking until `parse` accepts the answer, printing each rejection.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, SessionError> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    log::debug!("Rejected input {:?}: {:?}", answer, err);
                    self.say(err.to_string())?;
                }
            }
        }
    }

    /// Wait for the user to press Enter.
    pub fn pause(&mut self) -> Result<(), SessionError> {
        self.ask("\nPress Enter to continue...")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
