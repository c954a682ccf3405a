//! Terminal prompts

use crate::error::{DailyNoteError, Result};
use std::io::{self, BufRead, Stdin, Stdout, Write};

/// Source of answers to interactive questions
pub trait InputSource {
    /// Ask for a non-empty line of text
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question; the default answer is no
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Prompts on a writer and reads answers line by line from a reader.
///
/// Works over stdin/stdout or any scripted reader such as `io::Cursor`.
pub struct TerminalInput<R, W> {
    reader: R,
    writer: W,
}

impl TerminalInput<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        TerminalInput::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        TerminalInput { reader, writer }
    }

    /// Consume the input and hand back the writer (to inspect prompts)
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut input = String::new();
        let read = self.reader.read_line(&mut input).map_err(|e| {
            if e.kind() == io::ErrorKind::InvalidData {
                DailyNoteError::InputParse("Input is not valid UTF-8".to_string())
            } else {
                DailyNoteError::Io(e)
            }
        })?;
        if read == 0 {
            // EOF
            writeln!(self.writer)?;
            return Ok(None);
        }

        Ok(Some(input.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> InputSource for TerminalInput<R, W> {
    fn text(&mut self, prompt: &str) -> Result<String> {
        loop {
            match self.ask(&format!("{}: ", prompt))? {
                Some(answer) if !answer.is_empty() => return Ok(answer),
                Some(_) => continue,
                None => {
                    return Err(DailyNoteError::InputParse(format!(
                        "No answer given for '{}'",
                        prompt
                    )))
                }
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let answer = match self.ask(&format!("{} [y/N]: ", prompt))? {
                Some(answer) => answer.to_lowercase(),
                None => return Ok(false),
            };

            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => writeln!(self.writer, "Error: invalid input")?,
            }
        }
    }
}
