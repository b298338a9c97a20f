pub mod commands;
pub mod formatters;
pub mod io;
pub mod menus;
pub mod output;
pub mod shell_context;
mod shell;

pub use shell::{run_cli, run_with, SCRIPT_ENV};
pub use shell_context::{CliError, CliMode, CommandError, ShellContext};
