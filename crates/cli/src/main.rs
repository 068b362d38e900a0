//! Food Villa CLI - listing and menu lookups from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List every restaurant at the configured location
//! fv-cli restaurants
//!
//! # Only pizza places rated 4.5 or better
//! fv-cli restaurants --search pizza --min-rating 4.5
//!
//! # Show one restaurant's menu
//! fv-cli menu 10576
//! ```
//!
//! Endpoints come from the same environment variables as the storefront.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "fv-cli")]
#[command(author, version, about = "Food Villa CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List restaurants, optionally filtered
    Restaurants {
        /// Case-insensitive name substring
        #[arg(short, long)]
        search: Option<String>,

        /// Minimum average rating (inclusive)
        #[arg(short, long)]
        min_rating: Option<f64>,
    },
    /// Show a restaurant's menu
    Menu {
        /// Restaurant id
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Restaurants { search, min_rating } => {
            commands::restaurants::list(search.as_deref(), min_rating).await?;
        }
        Commands::Menu { id } => commands::menu::show(&id).await?,
    }
    Ok(())
}
