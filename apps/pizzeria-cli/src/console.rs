//! # Console
//!
//! Line-oriented prompt I/O over any `BufRead` / `Write` pair.
//!
//! The real binary wires this to stdin/stdout; tests wire it to a `Cursor`
//! of scripted answers and a `Vec<u8>`.
//!
//! ## Retry Loop
//! ```text
//! prompt ──► read line ──► parse ──► Ok(value) ──► return Some(value)
//!    ▲                       │
//!    │                       └──► Err(reason) ──► print reason ──┐
//!    └───────────────────────────────────────────────────────────┘
//!
//! end of input at any point ──► return None
//! ```

use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Writes `text` as-is and flushes, so it is visible before a pause.
    pub fn show(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Prints `prompt` and reads one line without its line ending.
    ///
    /// Returns `None` once the input is closed (Ctrl-D, end of a piped file).
    /// Bytes that are not UTF-8 become U+FFFD, so such a line is just an
    /// answer no parser accepts.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.show(prompt)?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Repeats `prompt` until `parse` accepts the answer.
    ///
    /// Each rejection prints the error's `Display` text before asking again.
    /// There is no attempt limit.
    pub fn prompt_until<T, E, F>(&mut self, prompt: &str, mut parse: F) -> io::Result<Option<T>>
    where
        E: Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };

            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(reason) => {
                    tracing::debug!(input = %line, %reason, "Rejected input");
                    self.say(&reason)?;
                }
            }
        }
    }

    /// Gives back the output sink (used by tests to inspect the transcript).
    pub fn into_output(self) -> W {
        self.output
    }
}
