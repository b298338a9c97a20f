pub mod category_handlers;
pub mod expense_handlers;
pub mod export_handlers;
pub mod report_handlers;

use crate::cli::formatters;
use crate::cli::output;
use crate::cli::shell_context::{CommandError, ShellContext};
use crate::domain::{CategoryRegistry, Expense};

/// Parses a 1-based listing number into an index into `len` rows.
pub(crate) fn parse_selection(input: &str, len: usize) -> Result<usize, CommandError> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .filter(|index| *index < len)
        .ok_or_else(|| CommandError::InvalidArguments(format!("Invalid number `{}`.", input.trim())))
}

/// Prints the sorted ledger and asks for one entry by its number.
///
/// Returns `None` when the ledger is empty.
pub(crate) fn select_expense(
    context: &mut ShellContext,
    prompt: &str,
) -> Result<Option<Expense>, CommandError> {
    let expenses = context.tracker.list()?;
    if expenses.is_empty() {
        output::info("No expenses recorded.");
        return Ok(None);
    }
    for row in formatters::numbered_rows(&expenses) {
        output::info(row);
    }
    let answer = context.prompt_text(prompt)?;
    let index = parse_selection(&answer, expenses.len())?;
    Ok(expenses.into_iter().nth(index))
}

pub(crate) fn print_categories(registry: &CategoryRegistry) {
    output::info("Available categories:");
    for (index, name) in registry.iter().enumerate() {
        output::info(format!("{}. {}", index + 1, name));
    }
}

/// A listed number picks an existing category; anything else is a (possibly new) name.
///
/// Empty input yields `None`.
pub(crate) fn resolve_category_choice(
    registry: &CategoryRegistry,
    input: &str,
) -> Result<Option<String>, CommandError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    if input.chars().all(|c| c.is_ascii_digit()) {
        let index = parse_selection(input, registry.len())?;
        return Ok(registry.get(index).map(str::to_string));
    }
    Ok(Some(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_one_based_and_bounded() {
        assert_eq!(parse_selection("1", 3).unwrap(), 0);
        assert_eq!(parse_selection(" 3 ", 3).unwrap(), 2);
        assert!(parse_selection("0", 3).is_err());
        assert!(parse_selection("4", 3).is_err());
        assert!(parse_selection("abc", 3).is_err());
    }

    #[test]
    fn category_choice_accepts_number_or_name() {
        let registry = CategoryRegistry::from_names(["Alimentation", "Transport"]);
        assert_eq!(
            resolve_category_choice(&registry, "2").unwrap().as_deref(),
            Some("Transport")
        );
        assert_eq!(
            resolve_category_choice(&registry, " Voyages ").unwrap().as_deref(),
            Some("Voyages")
        );
        assert_eq!(resolve_category_choice(&registry, "").unwrap(), None);
        assert!(matches!(
            resolve_category_choice(&registry, "9"),
            Err(CommandError::InvalidArguments(_))
        ));
    }
}
