//! Interactive console collaborators.
//!
//! The [`Confirm`] and [`Notify`] traits decouple session orchestration from
//! the terminal. Tests use scripted collaborators that answer from fixed
//! queues without touching stdin.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Yes/no confirmation collaborator, asked synchronously before any delete.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// User-facing alert collaborator for non-fatal rejections and reports.
pub trait Notify {
    fn notify(&mut self, message: &str);
}

/// Console implementation of both collaborators over stdin/stdout.
pub struct Console;

impl Confirm for Console {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        print!("{message} [y/N] ");
        io::stdout().flush().context("flush stdout")?;
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("read confirmation answer")?;
        if read == 0 {
            // EOF declines.
            return Ok(false);
        }
        Ok(is_affirmative(&line))
    }
}

impl Notify for Console {
    fn notify(&mut self, message: &str) {
        println!("! {message}");
    }
}

/// Confirmation collaborator that answers yes without prompting.
///
/// Selected by the `assume_yes` config option for scripted input; deletes
/// still route through the collaborator seam.
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _message: &str) -> Result<bool> {
        Ok(true)
    }
}

/// True if `answer` is an affirmative confirmation response.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Print `prompt`, then read one line from stdin.
///
/// Returns `None` on EOF. The trailing newline is stripped.
pub fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush().context("flush stdout")?;
    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read command line")?;
    if read == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_answers_are_y_and_yes_case_insensitive() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("  yes  "));
        assert!(is_affirmative("YES\n"));
    }

    #[test]
    fn everything_else_declines() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yep"));
        assert!(!is_affirmative("sure"));
    }

    #[test]
    fn auto_confirm_always_agrees() {
        let mut confirmer = AutoConfirm;
        assert!(confirmer.confirm("delete guest 1?").expect("confirm"));
    }
}
