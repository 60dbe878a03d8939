//! User interaction operations (the serve confirmation prompt).

use anyhow::{Result, bail};

use super::RealRuntime;

use std::io::{self, BufRead, Write};

/// Core, testable implementation that reads from any BufRead and writes to any Write.
/// This is intentionally free-standing so tests can exercise it without needing a RealRuntime.
///
/// Re-prompts until the reply starts with 'y' or 'n' (case-insensitive).
/// An empty reply is treated as invalid input, not an error.
pub fn ask_yes_no<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    loop {
        write!(output, "{} (y/n): ", question)?;
        output.flush()?;

        let mut line = String::new();
        let bytes = input.read_line(&mut line)?;
        if bytes == 0 {
            bail!("Input closed before the question was answered");
        }

        match line.trim().to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => {
                writeln!(output, "incorrect answer, please press y or n")?;
            }
        }
    }
}

impl RealRuntime {
    pub(crate) fn confirm_impl(&self, question: &str) -> Result<bool> {
        // Wire the generic implementation to real stdin/stdout.
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut stdin_lock = stdin.lock();
        ask_yes_no(question, &mut stdin_lock, &mut stdout)
    }
}
