//! CLI command handlers
//!
//! Bridges clap argument parsing with the sync layer. Every mutating
//! command applies locally first and reports how the remote phase went;
//! a failed sync is a message, not an exit code.

pub mod auth;
pub mod item;
pub mod month;

use clap::Subcommand;
use rust_decimal::Decimal;

use crate::config::{MaitrizPaths, Settings};
use crate::error::MaitrizResult;
use crate::models::{Category, MonthKey};
use crate::remote::{BudgetApi, HttpBudgetApi};
use crate::session::CredentialStore;
use crate::sync::Reconciler;

/// Everything a command handler needs
pub struct AppContext {
    pub paths: MaitrizPaths,
    pub settings: Settings,
    pub credentials: CredentialStore,
    pub reconciler: Reconciler<HttpBudgetApi>,
}

/// Top-level subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Create an account on the budget server
    Signup {
        /// Email address to register
        #[arg(short, long)]
        email: String,
    },

    /// Sign in and store the session credential
    Login {
        /// Email address of the account
        #[arg(short, long)]
        email: String,
    },

    /// Sign out and discard the session credential
    Logout,

    /// Show a month's budget from the local cache
    Show {
        /// Month to show (defaults to the current month)
        #[arg(short, long)]
        month: Option<MonthKey>,
    },

    /// Add a budget item
    Add {
        /// Category (revenu, depense, facture, investissement, epargne)
        category: Category,
        /// Item name
        name: String,
        /// Amount (e.g. "800" or "800.50")
        amount: Decimal,
        /// Occurrence date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<chrono::NaiveDate>,
        /// Mark the item as recurring
        #[arg(short, long)]
        recurrent: bool,
        /// Mark the item as reported from a previous month
        #[arg(long)]
        reported: bool,
        /// Month to add to (defaults to the current month)
        #[arg(short, long)]
        month: Option<MonthKey>,
    },

    /// Edit a budget item in place
    Edit {
        /// Category of the item
        category: Category,
        /// Position of the item within the category (see 'show')
        index: usize,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<Decimal>,
        /// New occurrence date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
        /// Set or clear the recurring flag
        #[arg(long)]
        recurrent: Option<bool>,
        /// Set or clear the reported flag
        #[arg(long)]
        reported: Option<bool>,
        /// Month to edit (defaults to the current month)
        #[arg(short, long)]
        month: Option<MonthKey>,
    },

    /// Remove a budget item
    Rm {
        /// Category of the item
        category: Category,
        /// Position of the item within the category (see 'show')
        index: usize,
        /// Month to remove from (defaults to the current month)
        #[arg(short, long)]
        month: Option<MonthKey>,
    },

    /// Fetch a month from the server, replacing the local copy
    Pull {
        /// Month to fetch (defaults to the current month)
        #[arg(short, long)]
        month: Option<MonthKey>,
    },

    /// Send a month to the server as a bulk replace
    Push {
        /// Month to send (defaults to the current month)
        #[arg(short, long)]
        month: Option<MonthKey>,
    },

    /// Show resolved paths and settings
    Config,
}

/// Dispatch a parsed command
pub async fn handle_command(ctx: &AppContext, cmd: Commands) -> MaitrizResult<()> {
    match cmd {
        Commands::Signup { email } => auth::signup(ctx, &email).await,
        Commands::Login { email } => auth::login(ctx, &email).await,
        Commands::Logout => auth::logout(ctx),

        Commands::Show { month } => month::show(ctx, or_current(month)),
        Commands::Pull { month } => month::pull(ctx, or_current(month)).await,
        Commands::Push { month } => month::push(ctx, or_current(month)).await,

        Commands::Add {
            category,
            name,
            amount,
            date,
            recurrent,
            reported,
            month,
        } => {
            item::add(
                ctx,
                or_current(month),
                category,
                item::NewItem {
                    name,
                    amount,
                    date,
                    recurrent,
                    reported,
                },
            )
            .await
        }

        Commands::Edit {
            category,
            index,
            name,
            amount,
            date,
            recurrent,
            reported,
            month,
        } => {
            item::edit(
                ctx,
                or_current(month),
                category,
                index,
                item::ItemChanges {
                    name,
                    amount,
                    date,
                    recurrent,
                    reported,
                },
            )
            .await
        }

        Commands::Rm {
            category,
            index,
            month,
        } => item::remove(ctx, or_current(month), category, index).await,

        Commands::Config => {
            println!("Base directory: {}", ctx.paths.base_dir().display());
            println!("Month cache:    {}", ctx.paths.months_file().display());
            println!("API base URL:   {}", ctx.settings.api_base_url);
            println!("Cached months:  {}", ctx.reconciler.cached_months()?.len());
            println!(
                "Signed in:      {}",
                if ctx.reconciler.api().is_authenticated() {
                    "yes"
                } else {
                    "no"
                }
            );
            Ok(())
        }
    }
}

fn or_current(month: Option<MonthKey>) -> MonthKey {
    month.unwrap_or_else(MonthKey::current)
}
