use std::io;

use thiserror::Error;

use crate::cli::io::Prompter;
use crate::cli::output;
use crate::core::errors::TrackerError;
use crate::core::Tracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("end of input")]
    EndOfInput,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type CommandResult = Result<(), CommandError>;

pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// State threaded through every menu handler.
pub struct ShellContext {
    pub mode: CliMode,
    pub tracker: Tracker,
    pub prompter: Box<dyn Prompter>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode, tracker: Tracker, prompter: Box<dyn Prompter>) -> Self {
        Self {
            mode,
            tracker,
            prompter,
            running: true,
        }
    }

    pub fn prompt_text(&mut self, prompt: &str) -> Result<String, CommandError> {
        self.prompter.text(prompt, None)
    }

    pub fn prompt_with_current(
        &mut self,
        prompt: &str,
        current: &str,
    ) -> Result<String, CommandError> {
        self.prompter.text(prompt, Some(current))
    }

    pub fn confirm(&mut self, prompt: &str) -> Result<bool, CommandError> {
        self.prompter.confirm(prompt)
    }

    /// Prints a handler failure and keeps the loop alive.
    ///
    /// End of input is the only error that stops the shell.
    pub(crate) fn report_error(&mut self, err: CommandError) -> LoopControl {
        match err {
            CommandError::EndOfInput => {
                self.running = false;
                LoopControl::Exit
            }
            CommandError::InvalidArguments(message) => {
                tracing::warn!(%message, "rejected menu input");
                output::error(message);
                LoopControl::Continue
            }
            CommandError::Core(err) if err.is_user_error() => {
                tracing::warn!(error = %err, "operation rejected");
                output::error(err);
                LoopControl::Continue
            }
            other => {
                tracing::error!(error = %other, "operation failed");
                output::error(other);
                LoopControl::Continue
            }
        }
    }
}
