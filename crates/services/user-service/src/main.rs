//! User Service - storage management for the users table.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service_lib::TableAction;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User storage management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Users table commands
    Table {
        #[command(subcommand)]
        action: TableCommands,
    },
}

#[derive(Subcommand)]
enum TableCommands {
    /// Create the users table
    Create,
    /// Show whether the users table exists
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Table { action } => {
            let table_action = match action {
                TableCommands::Create => TableAction::Create,
                TableCommands::Status => TableAction::Status,
            };
            user_service_lib::run_table_command(table_action).await?;
        }
    }

    Ok(())
}
