use crate::cli::output;
use crate::cli::shell_context::{CommandResult, ShellContext};
use crate::export::{write_export, ExportFormat};

pub fn handle_export(context: &mut ShellContext, format: ExportFormat) -> CommandResult {
    let expenses = context.tracker.expenses()?;
    let dir = context.tracker.config().data_dir.clone();
    let path = write_export(&expenses, format, &dir)?;
    output::success(format!(
        "{} expense(s) exported to {}",
        expenses.len(),
        path.display()
    ));
    Ok(())
}
