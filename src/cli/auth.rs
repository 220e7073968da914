//! Auth commands: signup, login, logout

use tracing::debug;

use crate::error::{MaitrizError, MaitrizResult};
use crate::models::MonthKey;

use super::AppContext;

/// Register a new account, then suggest logging in
pub async fn signup(ctx: &AppContext, email: &str) -> MaitrizResult<()> {
    let password = prompt_password()?;
    let response = ctx.reconciler.api().signup(email, &password).await?;

    println!("{}", response.message);
    println!("Run 'maitriz login --email {}' to sign in.", email);
    Ok(())
}

/// Sign in, persist the credential, and pull the current month
pub async fn login(ctx: &AppContext, email: &str) -> MaitrizResult<()> {
    let password = prompt_password()?;
    let response = ctx.reconciler.api().login(email, &password).await?;
    ctx.credentials.store(&response.access_token)?;
    debug!("credential stored");

    println!("Signed in as {}.", email);

    // Bring the current month up to date right away, like a fresh page load
    let month = MonthKey::current();
    let status = ctx.reconciler.fetch_month(&month).await?;
    println!("Fetched {}: {}", month, status);
    Ok(())
}

/// Drop the session credential, locally cached data stays
pub fn logout(ctx: &AppContext) -> MaitrizResult<()> {
    ctx.reconciler.api().clear_token();
    ctx.credentials.clear()?;
    println!("Signed out. Cached months are kept locally.");
    Ok(())
}

fn prompt_password() -> MaitrizResult<String> {
    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| MaitrizError::Io(format!("Failed to read password: {}", e)))?;
    if password.is_empty() {
        return Err(MaitrizError::Validation("Password must not be empty".into()));
    }
    Ok(password)
}
