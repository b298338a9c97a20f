use crate::cli::commands::{print_categories, resolve_category_choice, select_expense};
use crate::cli::formatters::{self, format_amount};
use crate::cli::output;
use crate::cli::shell_context::{CommandError, CommandResult, ShellContext};
use crate::core::services::{ExpenseService, SummaryService};
use crate::domain::{ExpensePatch, NewExpense};

pub fn handle_add(context: &mut ShellContext) -> CommandResult {
    output::section("Add an expense");

    let raw_amount = context.prompt_text("Amount (€)")?;
    let amount = ExpenseService::parse_amount(&raw_amount)?;

    let registry = context.tracker.categories()?;
    print_categories(&registry);
    let answer = context.prompt_text("Choose a category (number) or type a new one")?;
    let category = resolve_category_choice(&registry, &answer)?
        .ok_or_else(|| CommandError::InvalidArguments("A category is required.".into()))?;

    let description = context.prompt_text("Description")?;
    let raw_date = context.prompt_text("Date (YYYY-MM-DD, empty for today)")?;

    let mut input = NewExpense::new(amount, category, description);
    if !raw_date.is_empty() {
        input = input.on(ExpenseService::parse_date(&raw_date)?);
    }

    let expense = context.tracker.add_expense(input)?;
    output::success("Expense added.");
    output::info(formatters::expense_summary(&expense));
    Ok(())
}

pub fn handle_list(context: &mut ShellContext) -> CommandResult {
    output::section("All expenses");
    let expenses = context.tracker.list()?;
    if expenses.is_empty() {
        output::info("No expenses recorded.");
        return Ok(());
    }
    for row in formatters::numbered_rows(&expenses) {
        output::info(row);
    }
    output::separator();
    output::info(format!(
        "Total: {}",
        format_amount(SummaryService::total(&expenses))
    ));
    Ok(())
}

pub fn handle_edit(context: &mut ShellContext) -> CommandResult {
    output::section("Edit an expense");
    let Some(expense) = select_expense(context, "Number of the expense to edit")? else {
        return Ok(());
    };
    output::info(format!("Current: {}", formatters::expense_summary(&expense)));

    let mut patch = ExpensePatch::default();

    let current_amount = format!("{:.2}", expense.amount);
    let raw_amount = context.prompt_with_current("New amount (€)", &current_amount)?;
    if !raw_amount.is_empty() {
        patch.amount = Some(ExpenseService::parse_amount(&raw_amount)?);
    }

    let registry = context.tracker.categories()?;
    print_categories(&registry);
    let answer = context.prompt_with_current("New category", &expense.category)?;
    patch.category = resolve_category_choice(&registry, &answer)?;

    let description = context.prompt_with_current("New description", &expense.description)?;
    if !description.is_empty() {
        patch.description = Some(description);
    }

    let raw_date = context.prompt_with_current("New date", &expense.date.to_string())?;
    if !raw_date.is_empty() {
        patch.date = Some(ExpenseService::parse_date(&raw_date)?);
    }

    if patch.is_empty() {
        output::info("Nothing to change.");
        return Ok(());
    }
    let updated = context.tracker.edit_expense(&expense.id, patch)?;
    output::success("Expense updated.");
    output::info(formatters::expense_summary(&updated));
    Ok(())
}

pub fn handle_delete(context: &mut ShellContext) -> CommandResult {
    output::section("Delete an expense");
    let Some(expense) = select_expense(context, "Number of the expense to delete")? else {
        return Ok(());
    };
    output::info(format!(
        "Expense to delete: {}",
        formatters::expense_summary(&expense)
    ));
    if !context.confirm("Are you sure?")? {
        output::warning("Deletion cancelled.");
        return Ok(());
    }
    context.tracker.delete_expense(&expense.id)?;
    output::success("Expense deleted.");
    Ok(())
}
