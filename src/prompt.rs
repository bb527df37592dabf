use anyhow::Result;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of the line the user types at the confirmation prompt.
pub trait Prompt {
    fn ask(&mut self, message: &str) -> Result<String>;
}

/// Interactive editor on a terminal, plain line reading when input is piped.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, message: &str) -> Result<String> {
        // dialoguer reads keys from the tty, not from a piped stdin.
        if !(io::stdin().is_terminal() && console::user_attended_stderr()) {
            return LinePrompt::new(io::stdin().lock()).ask(message);
        }

        let answer = Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

/// Prints the message and reads one line from `reader`.
///
/// Only the line terminator is stripped, so surrounding spaces still count
/// against an exact match. End of input reads as an empty answer.
#[derive(Debug)]
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn ask(&mut self, message: &str) -> Result<String> {
        print!("{message}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_lines_in_order() {
        let mut prompt = LinePrompt::new("first\nsecond\n".as_bytes());

        assert_eq!(prompt.ask("one?").unwrap(), "first");
        assert_eq!(prompt.ask("two?").unwrap(), "second");
        assert!(prompt.into_inner().is_empty());
    }

    #[test]
    fn test_strips_only_the_terminator() {
        let mut prompt = LinePrompt::new(" delete \r\ndelete".as_bytes());

        assert_eq!(prompt.ask("?").unwrap(), " delete ");
        assert_eq!(prompt.ask("?").unwrap(), "delete");
    }

    #[test]
    fn test_end_of_input_is_empty_answer() {
        let mut prompt = LinePrompt::new(io::empty());
        assert_eq!(prompt.ask("?").unwrap(), "");
    }
}
