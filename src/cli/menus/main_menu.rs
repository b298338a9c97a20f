use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    AddExpense,
    ListExpenses,
    EditExpense,
    DeleteExpense,
    Reports,
    Categories,
    Export,
    Quit,
}

#[derive(Clone, Copy)]
struct MenuEntry {
    action: MainAction,
    label: &'static str,
}

const ENTRIES: [MenuEntry; 8] = [
    MenuEntry {
        action: MainAction::AddExpense,
        label: "Add an expense",
    },
    MenuEntry {
        action: MainAction::ListExpenses,
        label: "List expenses",
    },
    MenuEntry {
        action: MainAction::EditExpense,
        label: "Edit an expense",
    },
    MenuEntry {
        action: MainAction::DeleteExpense,
        label: "Delete an expense",
    },
    MenuEntry {
        action: MainAction::Reports,
        label: "Reports",
    },
    MenuEntry {
        action: MainAction::Categories,
        label: "Manage categories",
    },
    MenuEntry {
        action: MainAction::Export,
        label: "Export data",
    },
    MenuEntry {
        action: MainAction::Quit,
        label: "Quit",
    },
];

/// Top-level numbered menu of the shell loop.
pub struct MainMenu;

impl MainMenu {
    pub fn render() -> String {
        let mut text = String::new();
        for (index, entry) in ENTRIES.iter().enumerate() {
            let _ = writeln!(text, "{}. {}", index + 1, entry.label);
        }
        text
    }

    /// Maps a typed choice (`1`..`8`) to its action.
    pub fn parse(input: &str) -> Option<MainAction> {
        let number: usize = input.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|index| ENTRIES.get(index))
            .map(|entry| entry.action)
    }

    pub fn len() -> usize {
        ENTRIES.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_map_to_actions() {
        assert_eq!(MainMenu::parse("1"), Some(MainAction::AddExpense));
        assert_eq!(MainMenu::parse(" 8 "), Some(MainAction::Quit));
        assert_eq!(MainMenu::parse("0"), None);
        assert_eq!(MainMenu::parse("9"), None);
        assert_eq!(MainMenu::parse("quit"), None);
    }

    #[test]
    fn render_lists_every_entry() {
        let text = MainMenu::render();
        assert_eq!(text.lines().count(), MainMenu::len());
        assert!(text.starts_with("1. Add an expense"));
        assert!(text.contains("8. Quit"));
    }
}
