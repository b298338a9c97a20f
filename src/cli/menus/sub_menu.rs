use std::fmt::Write as _;

#[derive(Clone, Copy)]
pub struct SubMenuItem {
    pub key: &'static str,
    pub label: &'static str,
}

impl SubMenuItem {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubChoice {
    Item(&'static str),
    Back,
}

/// Numbered submenu; the last entry always returns to the main menu.
pub struct SubMenu {
    title: &'static str,
    items: Vec<SubMenuItem>,
}

impl SubMenu {
    pub fn new(title: &'static str, items: Vec<SubMenuItem>) -> Self {
        Self { title, items }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn render(&self) -> String {
        let mut text = String::new();
        for (index, item) in self.items.iter().enumerate() {
            let _ = writeln!(text, "{}. {}", index + 1, item.label);
        }
        let _ = writeln!(text, "{}. Back", self.items.len() + 1);
        text
    }

    /// `None` when the choice is not on the menu.
    pub fn parse(&self, input: &str) -> Option<SubChoice> {
        let number: usize = input.trim().parse().ok()?;
        if number == self.items.len() + 1 {
            return Some(SubChoice::Back);
        }
        number
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
            .map(|item| SubChoice::Item(item.key))
    }
}

pub fn reports_menu() -> SubMenu {
    SubMenu::new(
        "Reports",
        vec![
            SubMenuItem::new("monthly", "Monthly report"),
            SubMenuItem::new("category", "Category report"),
            SubMenuItem::new("chart", "Bar chart"),
        ],
    )
}

pub fn categories_menu() -> SubMenu {
    SubMenu::new(
        "Categories",
        vec![
            SubMenuItem::new("list", "List categories"),
            SubMenuItem::new("add", "Add a category"),
            SubMenuItem::new("rename", "Rename a category"),
            SubMenuItem::new("delete", "Delete a category"),
        ],
    )
}

pub fn export_menu() -> SubMenu {
    SubMenu::new(
        "Export",
        vec![
            SubMenuItem::new("csv", "Export to CSV"),
            SubMenuItem::new("json", "Export to JSON"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_number_means_back() {
        let menu = categories_menu();
        assert_eq!(menu.parse("1"), Some(SubChoice::Item("list")));
        assert_eq!(menu.parse("4"), Some(SubChoice::Item("delete")));
        assert_eq!(menu.parse("5"), Some(SubChoice::Back));
        assert_eq!(menu.parse("6"), None);
        assert_eq!(menu.parse("x"), None);
    }

    #[test]
    fn render_appends_back_entry() {
        let text = export_menu().render();
        assert_eq!(text, "1. Export to CSV\n2. Export to JSON\n3. Back\n");
    }
}
