//! Yes/no confirmation before destructive actions.

use std::io::{self, BufRead, Write};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

/// Something that can ask the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// Asks on a writer and reads the answer from a reader.
///
/// Only `y` or `yes` (any case) counts as agreement; end of input is a no.
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptConfirm<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        write!(self.output, "{} [y/N] ", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;

        let answer = answer.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

/// Agrees to everything (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> io::Result<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(input: &str) -> (bool, String) {
        let mut output = Vec::new();
        let answer = PromptConfirm::new(input.as_bytes(), &mut output)
            .confirm(DELETE_PROMPT)
            .unwrap();
        (answer, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_yes_answers() {
        assert!(ask("y\n").0);
        assert!(ask("YES\n").0);
    }

    #[test]
    fn test_everything_else_is_no() {
        assert!(!ask("n\n").0);
        assert!(!ask("\n").0);
        assert!(!ask("").0);
        assert!(!ask("yep\n").0);
    }

    #[test]
    fn test_prompt_written() {
        let (_, output) = ask("n\n");
        assert_eq!(output, format!("{} [y/N] ", DELETE_PROMPT));
    }
}
