use crate::domain::{CategoryTotal, Expense};

const BAR_WIDTH: usize = 30;

pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}€")
}

/// `2024-04-02 | 7.00€ | Transport | Taxi`
pub fn expense_row(expense: &Expense) -> String {
    format!(
        "{} | {} | {} | {}",
        expense.date,
        format_amount(expense.amount),
        expense.category,
        expense.description
    )
}

pub fn expense_summary(expense: &Expense) -> String {
    format!(
        "{} - {} - {}",
        format_amount(expense.amount),
        expense.category,
        expense.description
    )
}

pub fn numbered_rows(expenses: &[Expense]) -> Vec<String> {
    expenses
        .iter()
        .enumerate()
        .map(|(index, expense)| format!("{}. {}", index + 1, expense_row(expense)))
        .collect()
}

/// Horizontal bars scaled against the largest category total.
///
/// Categories without spending are skipped.
pub fn bar_chart(totals: &[CategoryTotal]) -> Vec<String> {
    let max = totals.iter().map(|t| t.total).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return Vec::new();
    }
    let label_width = totals
        .iter()
        .filter(|t| t.total > 0.0)
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(0);

    totals
        .iter()
        .filter(|t| t.total > 0.0)
        .map(|t| {
            let len = ((t.total / max) * BAR_WIDTH as f64).round().max(1.0) as usize;
            let padding = label_width - t.name.chars().count();
            format!(
                "{}{} | {} {}",
                t.name,
                " ".repeat(padding),
                "#".repeat(len),
                format_amount(t.total)
            )
        })
        .collect()
}
