//! Budget item categories
//!
//! The category set is closed: the backend knows exactly five item types,
//! named in French on the wire (`revenu`, `depense`, ...). The month
//! endpoint groups items under the plural forms (`revenus`, `depenses`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five fixed budget item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "revenu")]
    Income,
    #[serde(rename = "depense")]
    Expense,
    #[serde(rename = "facture")]
    Bill,
    #[serde(rename = "investissement")]
    Investment,
    #[serde(rename = "epargne")]
    Saving,
}

impl Category {
    /// All categories, in canonical display and flattening order
    pub const ALL: [Category; 5] = [
        Category::Income,
        Category::Expense,
        Category::Bill,
        Category::Investment,
        Category::Saving,
    ];

    /// The wire name used in item payloads (`item_type`)
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Income => "revenu",
            Self::Expense => "depense",
            Self::Bill => "facture",
            Self::Investment => "investissement",
            Self::Saving => "epargne",
        }
    }

    /// The plural key the month endpoint groups items under
    pub fn plural_key(&self) -> &'static str {
        match self {
            Self::Income => "revenus",
            Self::Expense => "depenses",
            Self::Bill => "factures",
            Self::Investment => "investissements",
            Self::Saving => "epargnes",
        }
    }

    /// English label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expenses",
            Self::Bill => "Bills",
            Self::Investment => "Investments",
            Self::Saving => "Savings",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Accepts the wire names and English aliases (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "revenu" | "revenus" | "income" => Ok(Self::Income),
            "depense" | "depenses" | "expense" => Ok(Self::Expense),
            "facture" | "factures" | "bill" => Ok(Self::Bill),
            "investissement" | "investissements" | "investment" => Ok(Self::Investment),
            "epargne" | "epargnes" | "saving" | "savings" => Ok(Self::Saving),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected one of: revenu, depense, facture, investissement, epargne)",
            self.0
        )
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(Category::Income.wire_name(), "revenu");
        assert_eq!(Category::Saving.wire_name(), "epargne");
    }

    #[test]
    fn test_plural_keys() {
        assert_eq!(Category::Expense.plural_key(), "depenses");
        assert_eq!(Category::Investment.plural_key(), "investissements");
    }

    #[test]
    fn test_parse_wire_and_aliases() {
        assert_eq!("revenu".parse::<Category>().unwrap(), Category::Income);
        assert_eq!("Income".parse::<Category>().unwrap(), Category::Income);
        assert_eq!("FACTURE".parse::<Category>().unwrap(), Category::Bill);
        assert!("loyer".parse::<Category>().is_err());
    }

    #[test]
    fn test_all_order_is_stable() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.wire_name()).collect();
        assert_eq!(
            names,
            ["revenu", "depense", "facture", "investissement", "epargne"]
        );
    }

    #[test]
    fn test_serialization_uses_wire_name() {
        let json = serde_json::to_string(&Category::Bill).unwrap();
        assert_eq!(json, "\"facture\"");

        let back: Category = serde_json::from_str("\"epargne\"").unwrap();
        assert_eq!(back, Category::Saving);
    }
}
