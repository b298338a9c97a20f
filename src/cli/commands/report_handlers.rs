use crate::cli::formatters::{bar_chart, format_amount};
use crate::cli::output;
use crate::cli::shell_context::{CommandResult, ShellContext};

pub fn handle_monthly(context: &mut ShellContext) -> CommandResult {
    output::section("Monthly report");
    let report = context.tracker.report()?;
    if report.months.is_empty() {
        output::info("No expenses recorded.");
        return Ok(());
    }
    for month in &report.months {
        output::info(format!(
            "{} | {} | {} expense(s)",
            month.month,
            format_amount(month.total),
            month.count
        ));
    }
    output::separator();
    output::info(format!(
        "Total: {} | Average: {}",
        format_amount(report.total),
        format_amount(report.average)
    ));
    Ok(())
}

pub fn handle_category(context: &mut ShellContext) -> CommandResult {
    output::section("Category report");
    let report = context.tracker.report()?;
    if report.count == 0 {
        output::info("No expenses recorded.");
        return Ok(());
    }
    for entry in report.categories.iter().filter(|entry| entry.count > 0) {
        let share = if report.total > 0.0 {
            entry.total / report.total * 100.0
        } else {
            0.0
        };
        output::info(format!(
            "{} | {} | {} expense(s) | {share:.1}%",
            entry.name,
            format_amount(entry.total),
            entry.count
        ));
    }
    output::separator();
    output::info(format!("Total: {}", format_amount(report.total)));
    Ok(())
}

pub fn handle_chart(context: &mut ShellContext) -> CommandResult {
    output::section("Spending by category");
    let report = context.tracker.report()?;
    let lines = bar_chart(&report.categories);
    if lines.is_empty() {
        output::info("No expenses recorded.");
        return Ok(());
    }
    for line in lines {
        output::info(line);
    }
    Ok(())
}
