//! Wire types and the local↔wire mapping
//!
//! All shape translation between the local item model and the server's
//! payloads happens here, in one bidirectional pair: `WireItem::from_local`
//! and `WireItem::into_local`. Request payloads never carry an id (the
//! server assigns them); responses do.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{BudgetItem, Category, ItemId, MonthKey, MonthSnapshot};

/// Tolerant amount (de)serialization
///
/// The backend emits amounts as JSON numbers on some paths and as numeric
/// strings on others; both must parse. Outgoing amounts are always numbers.
mod amount {
    use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
    use rust_decimal::Decimal;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        match amount.to_f64() {
            Some(f) => serializer.serialize_f64(f),
            None => serializer.serialize_str(&amount.to_string()),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(f) => Decimal::from_f64(f)
                .ok_or_else(|| D::Error::custom(format!("amount out of range: {}", f))),
            Raw::Text(s) => s
                .trim()
                .parse::<Decimal>()
                .map_err(|e| D::Error::custom(format!("invalid amount '{}': {}", s, e))),
        }
    }
}

/// A budget item as it travels over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireItem {
    /// Present in responses; never sent in requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,

    pub month: MonthKey,

    pub item_type: Category,

    pub name: String,

    #[serde(with = "amount")]
    pub amount: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub recurrent: bool,

    #[serde(default)]
    pub reported: bool,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl WireItem {
    /// Build a request payload from a local item
    ///
    /// The id is deliberately dropped: create assigns one, update carries
    /// it in the URL, and bulk replace regenerates them all.
    pub fn from_local(month: MonthKey, category: Category, item: &BudgetItem) -> Self {
        Self {
            id: None,
            month,
            item_type: category,
            name: item.name.clone(),
            amount: item.amount,
            date: item.date,
            recurrent: item.recurrent,
            reported: item.reported,
            metadata: item.metadata.clone(),
        }
    }

    /// Convert a response item into the local shape, keeping the server id
    pub fn into_local(self) -> BudgetItem {
        BudgetItem {
            id: self.id,
            name: self.name,
            amount: self.amount,
            date: self.date,
            recurrent: self.recurrent,
            reported: self.reported,
            metadata: self.metadata,
        }
    }
}

/// The `data` object of the month endpoint: items grouped under plural keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthData {
    #[serde(default)]
    pub revenus: Vec<WireItem>,
    #[serde(default)]
    pub depenses: Vec<WireItem>,
    #[serde(default)]
    pub factures: Vec<WireItem>,
    #[serde(default)]
    pub investissements: Vec<WireItem>,
    #[serde(default)]
    pub epargnes: Vec<WireItem>,
}

impl MonthData {
    /// Group a flat item sequence under the plural keys by `item_type`
    pub fn from_items(items: impl IntoIterator<Item = WireItem>) -> Self {
        let mut data = Self::default();
        for item in items {
            data.group_mut(item.item_type).push(item);
        }
        data
    }

    fn group_mut(&mut self, category: Category) -> &mut Vec<WireItem> {
        match category {
            Category::Income => &mut self.revenus,
            Category::Expense => &mut self.depenses,
            Category::Bill => &mut self.factures,
            Category::Investment => &mut self.investissements,
            Category::Saving => &mut self.epargnes,
        }
    }

    /// Map every grouped item into the local shape, preserving the
    /// server's response order within each category
    pub fn into_snapshot(self) -> MonthSnapshot {
        fn map(items: Vec<WireItem>) -> Vec<BudgetItem> {
            items.into_iter().map(WireItem::into_local).collect()
        }

        MonthSnapshot {
            revenus: map(self.revenus),
            depenses: map(self.depenses),
            factures: map(self.factures),
            investissements: map(self.investissements),
            epargnes: map(self.epargnes),
        }
    }
}

/// Response of `GET /budget/month`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthPayload {
    pub month: MonthKey,
    pub data: MonthData,
}

/// Request body of the bulk replace endpoint (`POST /budget/month`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkSaveRequest {
    pub month: MonthKey,
    pub items: Vec<WireItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn month(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    fn sample_local() -> BudgetItem {
        let mut metadata = Map::new();
        metadata.insert("note".into(), json!("shared flat"));
        BudgetItem {
            id: Some(ItemId::from("e5")),
            name: "Rent".into(),
            amount: dec("800.50"),
            date: NaiveDate::from_ymd_opt(2025, 8, 1),
            recurrent: true,
            reported: false,
            metadata,
        }
    }

    #[test]
    fn test_from_local_maps_every_field() {
        let item = sample_local();
        let wire = WireItem::from_local(month("2025-08"), Category::Expense, &item);

        assert_eq!(wire.id, None); // requests never carry an id
        assert_eq!(wire.month, month("2025-08"));
        assert_eq!(wire.item_type, Category::Expense);
        assert_eq!(wire.name, "Rent");
        assert_eq!(wire.amount, dec("800.50"));
        assert_eq!(wire.date, NaiveDate::from_ymd_opt(2025, 8, 1));
        assert!(wire.recurrent);
        assert!(!wire.reported);
        assert_eq!(wire.metadata.get("note"), Some(&json!("shared flat")));
    }

    #[test]
    fn test_roundtrip_preserves_fields() {
        let item = sample_local();
        let wire = WireItem::from_local(month("2025-08"), Category::Expense, &item);
        let back = wire.into_local();

        assert_eq!(back.name, item.name);
        assert_eq!(back.amount, item.amount);
        assert_eq!(back.date, item.date);
        assert_eq!(back.recurrent, item.recurrent);
        assert_eq!(back.reported, item.reported);
        assert_eq!(back.metadata, item.metadata);
        // The id does not survive the request direction
        assert_eq!(back.id, None);
    }

    #[test]
    fn test_into_local_keeps_response_id() {
        let wire: WireItem = serde_json::from_value(json!({
            "id": "a1",
            "month": "2025-08",
            "item_type": "revenu",
            "name": "Salary",
            "amount": "2000"
        }))
        .unwrap();

        let local = wire.into_local();
        assert_eq!(local.id, Some(ItemId::from("a1")));
        assert_eq!(local.amount, dec("2000"));
    }

    #[test]
    fn test_amount_accepts_number_and_string() {
        let as_number: WireItem = serde_json::from_value(json!({
            "month": "2025-08", "item_type": "depense", "name": "Rent", "amount": 800.5
        }))
        .unwrap();
        let as_string: WireItem = serde_json::from_value(json!({
            "month": "2025-08", "item_type": "depense", "name": "Rent", "amount": "800.5"
        }))
        .unwrap();

        assert_eq!(as_number.amount, dec("800.5"));
        assert_eq!(as_string.amount, dec("800.5"));
    }

    #[test]
    fn test_amount_serializes_as_number() {
        let item = BudgetItem::new("Rent", dec("800.5"));
        let wire = WireItem::from_local(month("2025-08"), Category::Expense, &item);
        let value = serde_json::to_value(&wire).unwrap();
        assert_eq!(value["amount"], json!(800.5));
    }

    #[test]
    fn test_amount_rejects_garbage() {
        let result: Result<WireItem, _> = serde_json::from_value(json!({
            "month": "2025-08", "item_type": "depense", "name": "Rent", "amount": "huit cents"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_flags_default_false() {
        let wire: WireItem = serde_json::from_value(json!({
            "month": "2025-08", "item_type": "facture", "name": "Power", "amount": 60
        }))
        .unwrap();

        assert!(!wire.recurrent);
        assert!(!wire.reported);
        assert!(wire.metadata.is_empty());
        assert_eq!(wire.date, None);
    }

    #[test]
    fn test_request_payload_shape() {
        let item = BudgetItem::new("Salary", dec("2000"));
        let wire = WireItem::from_local(month("2025-08"), Category::Income, &item);
        let value = serde_json::to_value(&wire).unwrap();

        assert_eq!(value["month"], json!("2025-08"));
        assert_eq!(value["item_type"], json!("revenu"));
        assert!(value.get("id").is_none());
        assert!(value.get("date").is_none());
        assert!(value.get("metadata").is_none());
    }

    #[test]
    fn test_month_data_from_items_groups_by_type() {
        let salary = WireItem::from_local(
            month("2025-08"),
            Category::Income,
            &BudgetItem::new("Salary", dec("2000")),
        );
        let rent = WireItem::from_local(
            month("2025-08"),
            Category::Expense,
            &BudgetItem::new("Rent", dec("800")),
        );

        let data = MonthData::from_items([salary, rent]);
        assert_eq!(data.revenus.len(), 1);
        assert_eq!(data.depenses.len(), 1);
        assert!(data.factures.is_empty());
    }

    #[test]
    fn test_into_snapshot_preserves_order() {
        let items = ["a", "b", "c"].map(|name| {
            WireItem::from_local(
                month("2025-08"),
                Category::Bill,
                &BudgetItem::new(name, dec("1")),
            )
        });
        let snapshot = MonthData::from_items(items).into_snapshot();

        let names: Vec<_> = snapshot
            .items(Category::Bill)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_month_payload_parses_partial_data() {
        let payload: MonthPayload = serde_json::from_value(json!({
            "month": "2025-08",
            "data": {
                "revenus": [
                    {"id": "a1", "month": "2025-08", "item_type": "revenu",
                     "name": "Salary", "amount": "2000"}
                ]
            }
        }))
        .unwrap();

        assert_eq!(payload.month, month("2025-08"));
        assert_eq!(payload.data.revenus.len(), 1);
        assert!(payload.data.epargnes.is_empty());
    }
}
