//! Month commands: show, pull, push

use crate::display::format_month;
use crate::error::{MaitrizError, MaitrizResult};
use crate::models::MonthKey;
use crate::sync::SyncStatus;

use super::AppContext;

/// Print the locally cached view of a month
pub fn show(ctx: &AppContext, month: MonthKey) -> MaitrizResult<()> {
    let snapshot = ctx.reconciler.local_month(&month)?;
    print!(
        "{}",
        format_month(&month, &snapshot, &ctx.settings.currency_symbol)
    );
    Ok(())
}

/// Fetch a month from the server into the local cache
///
/// Unlike the implicit sync after add/edit/rm, an explicit pull without a
/// session is an error the user asked for.
pub async fn pull(ctx: &AppContext, month: MonthKey) -> MaitrizResult<()> {
    let status = ctx.reconciler.fetch_month(&month).await?;
    if matches!(status, SyncStatus::Offline) {
        return Err(MaitrizError::auth_required("run 'maitriz login' first"));
    }
    println!("Pull {}: {}", month, status);
    Ok(())
}

/// Push a month to the server as a bulk replace
pub async fn push(ctx: &AppContext, month: MonthKey) -> MaitrizResult<()> {
    let status = ctx.reconciler.bulk_save_month(&month).await?;
    if matches!(status, SyncStatus::Offline) {
        return Err(MaitrizError::auth_required("run 'maitriz login' first"));
    }
    println!("Push {}: {}", month, status);
    Ok(())
}
