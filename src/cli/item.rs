//! Item commands: add, edit, rm

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{MaitrizError, MaitrizResult};
use crate::models::{BudgetItem, Category, MonthKey};

use super::AppContext;

/// Fields of a new item, straight from the command line
pub struct NewItem {
    pub name: String,
    pub amount: Decimal,
    pub date: Option<NaiveDate>,
    pub recurrent: bool,
    pub reported: bool,
}

/// Optional overrides for an edit; unset fields keep their value
pub struct ItemChanges {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
    pub recurrent: Option<bool>,
    pub reported: Option<bool>,
}

impl ItemChanges {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.recurrent.is_none()
            && self.reported.is_none()
    }

    fn apply(self, item: &mut BudgetItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(amount) = self.amount {
            item.amount = amount;
        }
        if let Some(date) = self.date {
            item.date = Some(date);
        }
        if let Some(recurrent) = self.recurrent {
            item.recurrent = recurrent;
        }
        if let Some(reported) = self.reported {
            item.reported = reported;
        }
    }
}

/// Add an item to a month
pub async fn add(
    ctx: &AppContext,
    month: MonthKey,
    category: Category,
    new: NewItem,
) -> MaitrizResult<()> {
    let mut item = BudgetItem::new(new.name, new.amount);
    item.date = new.date;
    item.recurrent = new.recurrent;
    item.reported = new.reported;

    let outcome = ctx.reconciler.add_item(&month, category, item).await?;
    println!(
        "Added {} to {} {} ({})",
        outcome.item.name,
        month,
        category.label().to_lowercase(),
        outcome.status
    );
    Ok(())
}

/// Edit the item at `index` within a category
pub async fn edit(
    ctx: &AppContext,
    month: MonthKey,
    category: Category,
    index: usize,
    changes: ItemChanges,
) -> MaitrizResult<()> {
    if changes.is_empty() {
        println!("No changes specified. Use --name, --amount, --date, --recurrent or --reported.");
        return Ok(());
    }

    let snapshot = ctx.reconciler.local_month(&month)?;
    let mut item = snapshot
        .items(category)
        .get(index)
        .cloned()
        .ok_or_else(|| MaitrizError::item_not_found(category.wire_name(), index))?;
    changes.apply(&mut item);

    let status = ctx
        .reconciler
        .update_item(&month, category, index, item.clone())
        .await?;
    println!("Updated {} ({})", item.name, status);
    Ok(())
}

/// Remove the item at `index` within a category
pub async fn remove(
    ctx: &AppContext,
    month: MonthKey,
    category: Category,
    index: usize,
) -> MaitrizResult<()> {
    let status = ctx.reconciler.delete_item(&month, category, index).await?;
    println!(
        "Removed {} item {} from {} ({})",
        category.label().to_lowercase(),
        index,
        month,
        status
    );
    Ok(())
}
