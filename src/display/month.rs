//! Month snapshot display formatting
//!
//! Formats a month's budget for terminal output: one block per category
//! with aligned columns, a per-category total, and a closing balance line.

use rust_decimal::Decimal;

use crate::models::{BudgetItem, Category, MonthKey, MonthSnapshot};

/// Format a whole month, category by category
pub fn format_month(month: &MonthKey, snapshot: &MonthSnapshot, currency: &str) -> String {
    if snapshot.is_empty() {
        return format!(
            "{} is empty.\n\nRun 'maitriz pull --month {}' to fetch it, or 'maitriz add' to start.\n",
            month, month
        );
    }

    let mut output = String::new();
    output.push_str(&format!("Budget for {}\n", month));

    for category in Category::ALL {
        let items = snapshot.items(category);
        if items.is_empty() {
            continue;
        }
        output.push('\n');
        output.push_str(&format_category_block(category, items, currency));
    }

    output.push('\n');
    output.push_str(&format!(
        "Balance: {}{}\n",
        currency,
        balance(snapshot)
    ));
    output
}

/// Format one category's items with a total line
fn format_category_block(category: Category, items: &[BudgetItem], currency: &str) -> String {
    let name_width = items
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!("{}\n", category.label()));

    let mut total = Decimal::ZERO;
    for (index, item) in items.iter().enumerate() {
        total += item.amount;

        let mut notes = Vec::new();
        if let Some(date) = item.date {
            notes.push(date.format("%Y-%m-%d").to_string());
        }
        if item.recurrent {
            notes.push("recurring".to_string());
        }
        if item.reported {
            notes.push("reported".to_string());
        }
        if !item.is_synced() {
            notes.push("local only".to_string());
        }
        let notes = if notes.is_empty() {
            String::new()
        } else {
            format!("  ({})", notes.join(", "))
        };

        output.push_str(&format!(
            "  [{}] {:<width$}  {:>12}{}\n",
            index,
            item.name,
            format!("{}{}", currency, item.amount),
            notes,
            width = name_width
        ));
    }

    output.push_str(&format!(
        "      {:<width$}  {:>12}\n",
        "Total",
        format!("{}{}", currency, total),
        width = name_width
    ));
    output
}

/// Income minus everything that leaves the account
fn balance(snapshot: &MonthSnapshot) -> Decimal {
    let sum = |category: Category| -> Decimal {
        snapshot.items(category).iter().map(|i| i.amount).sum()
    };

    sum(Category::Income)
        - sum(Category::Expense)
        - sum(Category::Bill)
        - sum(Category::Investment)
        - sum(Category::Saving)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn month(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_month() {
        let output = format_month(&month("2025-08"), &MonthSnapshot::new(), "€");
        assert!(output.contains("2025-08 is empty"));
    }

    #[test]
    fn test_month_with_items() {
        let mut snapshot = MonthSnapshot::new();
        snapshot
            .items_mut(Category::Income)
            .push(BudgetItem::new("Salary", dec("2000")));
        let mut rent = BudgetItem::new("Rent", dec("800"));
        rent.recurrent = true;
        snapshot.items_mut(Category::Expense).push(rent);

        let output = format_month(&month("2025-08"), &snapshot, "€");
        assert!(output.contains("Income"));
        assert!(output.contains("Salary"));
        assert!(output.contains("recurring"));
        assert!(output.contains("local only"));
        assert!(output.contains("Balance: €1200"));
        // Empty categories are not rendered
        assert!(!output.contains("Bills"));
    }

    #[test]
    fn test_balance_subtracts_all_outflows() {
        let mut snapshot = MonthSnapshot::new();
        snapshot
            .items_mut(Category::Income)
            .push(BudgetItem::new("Salary", dec("1000")));
        snapshot
            .items_mut(Category::Saving)
            .push(BudgetItem::new("Buffer", dec("100")));
        snapshot
            .items_mut(Category::Investment)
            .push(BudgetItem::new("ETF", dec("50")));

        assert_eq!(balance(&snapshot), dec("850"));
    }

    #[test]
    fn test_indices_are_shown() {
        let mut snapshot = MonthSnapshot::new();
        for name in ["a", "b"] {
            snapshot
                .items_mut(Category::Bill)
                .push(BudgetItem::new(name, dec("1")));
        }
        let output = format_month(&month("2025-08"), &snapshot, "€");
        assert!(output.contains("[0] a"));
        assert!(output.contains("[1] b"));
    }
}
