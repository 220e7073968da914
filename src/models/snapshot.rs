//! Month snapshot: the local view of one month's budget
//!
//! Five insertion-ordered sequences, one per category. The cache owns
//! snapshots; the reconciler borrows them during an operation and writes
//! them back once remote calls settle.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::item::BudgetItem;

/// All budget items for one month, grouped by category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthSnapshot {
    #[serde(default)]
    pub revenus: Vec<BudgetItem>,
    #[serde(default)]
    pub depenses: Vec<BudgetItem>,
    #[serde(default)]
    pub factures: Vec<BudgetItem>,
    #[serde(default)]
    pub investissements: Vec<BudgetItem>,
    #[serde(default)]
    pub epargnes: Vec<BudgetItem>,
}

impl MonthSnapshot {
    /// An empty snapshot (all five sequences empty)
    pub fn new() -> Self {
        Self::default()
    }

    /// The items of one category
    pub fn items(&self, category: Category) -> &[BudgetItem] {
        match category {
            Category::Income => &self.revenus,
            Category::Expense => &self.depenses,
            Category::Bill => &self.factures,
            Category::Investment => &self.investissements,
            Category::Saving => &self.epargnes,
        }
    }

    /// Mutable access to the items of one category
    pub fn items_mut(&mut self, category: Category) -> &mut Vec<BudgetItem> {
        match category {
            Category::Income => &mut self.revenus,
            Category::Expense => &mut self.depenses,
            Category::Bill => &mut self.factures,
            Category::Investment => &mut self.investissements,
            Category::Saving => &mut self.epargnes,
        }
    }

    /// Iterate all items in canonical category order, with their category
    pub fn iter_all(&self) -> impl Iterator<Item = (Category, &BudgetItem)> {
        Category::ALL
            .into_iter()
            .flat_map(|c| self.items(c).iter().map(move |item| (c, item)))
    }

    /// Total number of items across all categories
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|&c| self.items(c).len()).sum()
    }

    /// Whether all five categories are empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(name: &str, amount: i64) -> BudgetItem {
        BudgetItem::new(name, Decimal::from(amount))
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = MonthSnapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
        assert_eq!(snapshot.iter_all().count(), 0);
    }

    #[test]
    fn test_items_by_category() {
        let mut snapshot = MonthSnapshot::new();
        snapshot.items_mut(Category::Income).push(item("Salary", 2000));
        snapshot.items_mut(Category::Expense).push(item("Rent", 800));

        assert_eq!(snapshot.items(Category::Income).len(), 1);
        assert_eq!(snapshot.items(Category::Expense)[0].name, "Rent");
        assert!(snapshot.items(Category::Bill).is_empty());
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_iter_all_preserves_category_order() {
        let mut snapshot = MonthSnapshot::new();
        snapshot.items_mut(Category::Saving).push(item("Buffer", 100));
        snapshot.items_mut(Category::Income).push(item("Salary", 2000));
        snapshot.items_mut(Category::Income).push(item("Bonus", 500));

        let order: Vec<_> = snapshot
            .iter_all()
            .map(|(c, i)| (c, i.name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (Category::Income, "Salary"),
                (Category::Income, "Bonus"),
                (Category::Saving, "Buffer"),
            ]
        );
    }

    #[test]
    fn test_insertion_order_within_category() {
        let mut snapshot = MonthSnapshot::new();
        for name in ["a", "b", "c"] {
            snapshot.items_mut(Category::Bill).push(item(name, 1));
        }
        let names: Vec<_> = snapshot
            .items(Category::Bill)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut snapshot = MonthSnapshot::new();
        snapshot.items_mut(Category::Income).push(item("Salary", 2000));

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: MonthSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }

    #[test]
    fn test_deserialization_tolerates_missing_categories() {
        let snapshot: MonthSnapshot =
            serde_json::from_str(r#"{"revenus": [{"name": "Salary", "amount": "2000"}]}"#).unwrap();
        assert_eq!(snapshot.items(Category::Income).len(), 1);
        assert!(snapshot.items(Category::Saving).is_empty());
    }
}
