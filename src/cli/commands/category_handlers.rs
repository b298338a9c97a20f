use crate::cli::commands::parse_selection;
use crate::cli::output;
use crate::cli::shell_context::{CommandError, CommandResult, ShellContext};

pub fn handle_list(context: &mut ShellContext) -> CommandResult {
    output::section("Categories");
    let usage = context.tracker.category_usage()?;
    if usage.is_empty() {
        output::info("No categories registered.");
        return Ok(());
    }
    for (index, entry) in usage.iter().enumerate() {
        let noun = if entry.count == 1 { "expense" } else { "expenses" };
        output::info(format!(
            "{}. {} ({} {noun})",
            index + 1,
            entry.name,
            entry.count
        ));
    }
    Ok(())
}

pub fn handle_add(context: &mut ShellContext) -> CommandResult {
    let name = context.prompt_text("New category name")?;
    if context.tracker.add_category(&name)? {
        output::success(format!("Category `{}` added.", name.trim()));
    } else {
        output::warning(format!("Category `{}` already exists.", name.trim()));
    }
    Ok(())
}

pub fn handle_rename(context: &mut ShellContext) -> CommandResult {
    let Some(old) = select_category(context, "Number of the category to rename")? else {
        return Ok(());
    };
    let new = context.prompt_text(&format!("New name for `{old}`"))?;
    let relabeled = context.tracker.rename_category(&old, &new)?;
    output::success(format!(
        "Category `{old}` renamed to `{}` ({relabeled} expense(s) updated).",
        new.trim()
    ));
    Ok(())
}

pub fn handle_delete(context: &mut ShellContext) -> CommandResult {
    let Some(name) = select_category(context, "Number of the category to delete")? else {
        return Ok(());
    };
    let fallback = context.tracker.config().fallback_category.clone();
    let prompt = format!("Delete `{name}`? Its expenses move to `{fallback}`.");
    if !context.confirm(&prompt)? {
        output::warning("Deletion cancelled.");
        return Ok(());
    }
    let removal = context.tracker.delete_category(&name)?;
    output::success(format!("Category `{name}` deleted."));
    if removal.relabeled > 0 {
        output::info(format!(
            "{} expense(s) moved to `{fallback}`.",
            removal.relabeled
        ));
    }
    Ok(())
}

fn select_category(
    context: &mut ShellContext,
    prompt: &str,
) -> Result<Option<String>, CommandError> {
    let registry = context.tracker.categories()?;
    if registry.is_empty() {
        output::info("No categories registered.");
        return Ok(None);
    }
    for (index, name) in registry.iter().enumerate() {
        output::info(format!("{}. {}", index + 1, name));
    }
    let answer = context.prompt_text(prompt)?;
    let index = parse_selection(&answer, registry.len())?;
    Ok(registry.get(index).map(str::to_string))
}
