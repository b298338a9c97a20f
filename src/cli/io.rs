use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::shell_context::CommandError;

/// Source of user answers for the menu loop.
///
/// Empty answers are returned as empty strings; callers decide whether that
/// means "keep the current value" or "abort".
pub trait Prompter {
    fn text(&mut self, prompt: &str, current: Option<&str>) -> Result<String, CommandError>;
    fn confirm(&mut self, prompt: &str) -> Result<bool, CommandError>;
}

/// Terminal prompts rendered with dialoguer.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&mut self, prompt: &str, current: Option<&str>) -> Result<String, CommandError> {
        let label = with_current(prompt, current);
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, CommandError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }
}

/// Line-oriented prompts read from any buffered reader (stdin in script mode).
pub struct ScriptPrompter<R> {
    reader: R,
    echo: bool,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, echo: true }
    }

    /// Suppresses prompt echoing, for tests that only inspect state.
    pub fn quiet(reader: R) -> Self {
        Self {
            reader,
            echo: false,
        }
    }

    fn next_line(&mut self, label: &str) -> Result<String, CommandError> {
        if self.echo {
            let mut stdout = io::stdout();
            write!(stdout, "{label}: ")?;
            stdout.flush()?;
        }
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            if self.echo {
                println!();
            }
            return Err(CommandError::EndOfInput);
        }
        let value = line.trim().to_string();
        if self.echo {
            println!("{value}");
        }
        Ok(value)
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn text(&mut self, prompt: &str, current: Option<&str>) -> Result<String, CommandError> {
        let label = with_current(prompt, current);
        self.next_line(&label)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, CommandError> {
        let answer = self.next_line(&format!("{prompt} (y/N)"))?;
        Ok(is_affirmative(&answer))
    }
}

/// Accepts English and French confirmations.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "o" | "oui"
    )
}

fn with_current(prompt: &str, current: Option<&str>) -> String {
    match current {
        Some(value) => format!("{prompt} [{value}]"),
        None => prompt.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_prompter_reads_trimmed_lines_until_eof() {
        let mut prompter = ScriptPrompter::quiet(Cursor::new("  12.5 \n\n"));
        assert_eq!(prompter.text("Amount", None).unwrap(), "12.5");
        assert_eq!(prompter.text("Description", Some("old")).unwrap(), "");
        assert!(matches!(
            prompter.text("Again", None),
            Err(CommandError::EndOfInput)
        ));
    }

    #[test]
    fn confirmations_accept_yes_and_oui() {
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("oui"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("nope"));

        let mut prompter = ScriptPrompter::quiet(Cursor::new("o\nn\n"));
        assert!(prompter.confirm("Sure?").unwrap());
        assert!(!prompter.confirm("Sure?").unwrap());
    }
}
