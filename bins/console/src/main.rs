//! Chama console.
//!
//! Loads configuration, seeds the demo group, logs in with the given
//! credentials and prints the requested view as JSON.
//!
//! Usage: chama --member-code chair001 --pin 5678 [dashboard|ledger|members|notifications|calc]

use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chama_core::auth::LoginRequest;
use chama_core::calculator::Calculator;
use chama_shared::AppConfig;
use chama_shared::types::PageRequest;
use chama_store::{GroupService, Store, seed_demo_data};

#[derive(Parser)]
#[command(name = "chama")]
#[command(about = "Chama self-help group console", long_about = None)]
struct Cli {
    /// Member code to log in with
    #[arg(short, long, global = true, default_value = "")]
    member_code: String,

    /// PIN to log in with
    #[arg(short, long, global = true, default_value = "")]
    pin: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard for the logged-in member (default)
    Dashboard,

    /// Search the group ledger by member name or description
    Ledger {
        /// Search term
        #[arg(short, long, default_value = "")]
        search: String,

        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: u32,

        /// Rows per page
        #[arg(long, default_value = "20")]
        per_page: u32,
    },

    /// Search members by name or code
    Members {
        /// Search term
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Show the notification board
    Notifications,

    /// Evaluate a key sequence, e.g. "1500×12="
    Calc {
        /// Keys to press
        keys: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chama=debug,chama_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let output = run(cli).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<Value> {
    let command = cli.command.unwrap_or(Commands::Dashboard);
    if let Commands::Calc { keys } = &command {
        return Ok(serde_json::to_value(calculate(keys))?);
    }

    // Load configuration
    let config = AppConfig::load()?;
    info!(group = %config.group.name, currency = %config.group.currency, "Configuration loaded");

    let store = Store::new(&config.store);
    if config.store.seed_demo_data {
        seed_demo_data(&store).await?;
    }
    let service = GroupService::new(store, config);

    let session = service
        .login(&LoginRequest::new(cli.member_code, cli.pin))
        .await?;

    let output = match command {
        Commands::Dashboard => serde_json::to_value(service.dashboard(&session).await?)?,
        Commands::Ledger {
            search,
            page,
            per_page,
        } => serde_json::to_value(
            service
                .ledger_page(&session, &search, PageRequest { page, per_page })
                .await?,
        )?,
        Commands::Members { search } => {
            serde_json::to_value(service.search_members(&session, &search).await?)?
        }
        Commands::Notifications => json!({
            "unread": service.store().notifications.unread_count(session.member.id).await,
            "notifications": service.notifications().await,
        }),
        Commands::Calc { keys } => serde_json::to_value(calculate(&keys))?,
    };
    Ok(output)
}

fn calculate(keys: &str) -> Calculator {
    let mut calculator = Calculator::new();
    calculator.press_all(keys);
    calculator
}
