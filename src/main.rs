use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use maitriz::cli::{handle_command, AppContext, Commands};
use maitriz::config::{MaitrizPaths, Settings};
use maitriz::remote::HttpBudgetApi;
use maitriz::session::CredentialStore;
use maitriz::storage::MonthCache;
use maitriz::sync::Reconciler;

#[derive(Parser)]
#[command(
    name = "maitriz",
    version,
    about = "Terminal client for the Maîtriz budget service",
    long_about = "Maîtriz keeps a local, month-keyed copy of your budget \
                  (income, expenses, bills, investments, savings) and syncs \
                  it with the Maîtriz server. Changes always land locally \
                  first; the server is updated best-effort."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = MaitrizPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let credentials = CredentialStore::new(paths.credentials_file());
    let api = HttpBudgetApi::with_token(&settings.api_base_url, credentials.load());

    let cache = MonthCache::new(paths.months_file());
    cache.load()?;

    let ctx = AppContext {
        paths,
        settings,
        credentials,
        reconciler: Reconciler::new(api, cache),
    };

    handle_command(&ctx, cli.command).await?;
    Ok(())
}
