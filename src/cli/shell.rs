use std::{env, io};

use crate::cli::commands::{
    category_handlers, expense_handlers, export_handlers, report_handlers,
};
use crate::cli::io::{DialoguerPrompter, Prompter, ScriptPrompter};
use crate::cli::menus::{self, MainAction, MainMenu, SubChoice, SubMenu};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::shell_context::{
    CliError, CliMode, CommandError, CommandResult, LoopControl, ShellContext,
};
use crate::config::ConfigManager;
use crate::core::Tracker;
use crate::export::ExportFormat;
use crate::utils::build_info;

/// Set to any value to read menu answers line by line from stdin.
pub const SCRIPT_ENV: &str = "EXPENSE_TRACKER_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let config = ConfigManager::new().load()?;
    let tracker = Tracker::open(config)?;
    let prompter: Box<dyn Prompter> = match mode {
        CliMode::Interactive => Box::new(DialoguerPrompter::new()),
        CliMode::Script => Box::new(ScriptPrompter::new(io::stdin().lock())),
    };
    output::set_preferences(OutputPreferences {
        plain: mode == CliMode::Script,
    });

    let mut context = ShellContext::new(mode, tracker, prompter);
    run_with(&mut context)
}

/// Runs the menu loop until Quit or end of input.
pub fn run_with(context: &mut ShellContext) -> Result<(), CliError> {
    context.tracker.ensure_default()?;
    tracing::debug!(mode = ?context.mode, "shell started");

    while context.running {
        output::section(format!("Expense Tracker {}", build_info::current().label()));
        print_block(&MainMenu::render());

        let choice = match context.prompt_text(&format!("Choose an option (1-{})", MainMenu::len())) {
            Ok(choice) => choice,
            Err(err) => {
                if let LoopControl::Exit = context.report_error(err) {
                    break;
                }
                continue;
            }
        };

        let result = match MainMenu::parse(&choice) {
            Some(action) => dispatch(context, action),
            None => Err(CommandError::InvalidArguments(format!(
                "Invalid option. Choose between 1 and {}.",
                MainMenu::len()
            ))),
        };
        if let Err(err) = result {
            if let LoopControl::Exit = context.report_error(err) {
                break;
            }
        }
    }
    Ok(())
}

fn dispatch(context: &mut ShellContext, action: MainAction) -> CommandResult {
    match action {
        MainAction::AddExpense => expense_handlers::handle_add(context),
        MainAction::ListExpenses => expense_handlers::handle_list(context),
        MainAction::EditExpense => expense_handlers::handle_edit(context),
        MainAction::DeleteExpense => expense_handlers::handle_delete(context),
        MainAction::Reports => {
            let Some(key) = choose(context, &menus::reports_menu())? else {
                return Ok(());
            };
            match key {
                "monthly" => report_handlers::handle_monthly(context),
                "category" => report_handlers::handle_category(context),
                _ => report_handlers::handle_chart(context),
            }
        }
        MainAction::Categories => {
            let Some(key) = choose(context, &menus::categories_menu())? else {
                return Ok(());
            };
            match key {
                "list" => category_handlers::handle_list(context),
                "add" => category_handlers::handle_add(context),
                "rename" => category_handlers::handle_rename(context),
                _ => category_handlers::handle_delete(context),
            }
        }
        MainAction::Export => {
            let Some(key) = choose(context, &menus::export_menu())? else {
                return Ok(());
            };
            let format = if key == "csv" {
                ExportFormat::Csv
            } else {
                ExportFormat::Json
            };
            export_handlers::handle_export(context, format)
        }
        MainAction::Quit => {
            output::info("Goodbye!");
            context.running = false;
            Ok(())
        }
    }
}

fn choose(context: &mut ShellContext, menu: &SubMenu) -> Result<Option<&'static str>, CommandError> {
    output::section(menu.title());
    print_block(&menu.render());
    let answer = context.prompt_text("Choose an option")?;
    match menu.parse(&answer) {
        Some(SubChoice::Item(key)) => Ok(Some(key)),
        Some(SubChoice::Back) => Ok(None),
        None => Err(CommandError::InvalidArguments("Invalid option.".into())),
    }
}

fn print_block(text: &str) {
    for line in text.lines() {
        output::info(line);
    }
}
