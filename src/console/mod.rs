//! Line-based console interaction.
//!
//! The console only transports lines; trimming, case folding, and
//! validation loops belong to the callers. End-of-input surfaces as
//! [`AuditionError::ConsoleClosed`] so prompt loops unwind instead of
//! spinning on an exhausted stdin.

use std::io::{self, BufRead, Write};

use crate::error::{AuditionError, Result};

/// Prompt/response over a line-oriented console.
pub trait Console {
    /// Print `text` (no trailing newline) and read one response line.
    /// The returned line excludes the line terminator.
    fn prompt(&mut self, text: &str) -> Result<String>;
}

/// Console backed by the process stdin/stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn prompt(&mut self, text: &str) -> Result<String> {
        print!("{}", text);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(AuditionError::ConsoleClosed);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
