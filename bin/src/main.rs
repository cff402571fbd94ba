//! bf4 CLI - Börse Frankfurt equity data fetcher.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod display;

use bf4_lib::prelude::*;
use display::Format;

#[derive(Parser)]
#[command(name = "bf4")]
#[command(about = "Börse Frankfurt equity data fetcher", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Market identifier code for venue-scoped queries
    #[arg(long, default_value = "XETR", global = true)]
    mic: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json", global = true)]
    format: Format,
}

#[derive(Subcommand)]
enum Commands {
    /// Show master data for an equity
    Details {
        /// ISIN of the equity (e.g. DE0007236101)
        isin: String,
    },

    /// Show key/technical figures for an equity
    KeyData {
        /// ISIN of the equity
        isin: String,
    },

    /// List the indices an equity is a member of
    Indices {
        /// ISIN of the equity
        isin: String,
    },

    /// Fetch best bid/ask history (server keeps roughly two weeks)
    BidAsk {
        /// ISIN of the equity
        isin: String,

        /// Start timestamp (RFC 3339, e.g. 2024-05-01T09:00:00+02:00)
        #[arg(short, long)]
        start: String,

        /// End timestamp (RFC 3339)
        #[arg(short, long)]
        end: String,
    },

    /// Fetch time/sales, i.e. executed trades (server keeps roughly two weeks)
    Ticks {
        /// ISIN of the equity
        isin: String,

        /// Start timestamp (RFC 3339)
        #[arg(short, long)]
        start: String,

        /// End timestamp (RFC 3339)
        #[arg(short, long)]
        end: String,
    },

    /// Fetch daily OHLC/volume price history
    PriceHistory {
        /// ISIN of the equity
        isin: String,

        /// First day (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Last day (YYYY-MM-DD)
        #[arg(short, long)]
        end: String,
    },

    /// Fetch historical key figures (balance-sheet data)
    HistoricalKeyData {
        /// ISIN of the equity
        isin: String,
    },

    /// Fetch recorded dividend payments
    Dividends {
        /// ISIN of the equity
        isin: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = ClientConfig {
        mic: Mic::new(&cli.mic),
        ..Default::default()
    };
    let client = ApiClient::new(config).context("Failed to construct HTTP client")?;

    match command {
        Commands::Details { isin } => commands::lookup::details(&client, &isin, cli.format).await,
        Commands::KeyData { isin } => commands::lookup::key_data(&client, &isin, cli.format).await,
        Commands::Indices { isin } => commands::lookup::indices(&client, &isin, cli.format).await,
        Commands::BidAsk { isin, start, end } => {
            commands::history::bid_ask(&client, &isin, &start, &end, cli.format).await
        }
        Commands::Ticks { isin, start, end } => {
            commands::history::ticks(&client, &isin, &start, &end, cli.format).await
        }
        Commands::PriceHistory { isin, start, end } => {
            commands::history::price_history(&client, &isin, &start, &end, cli.format).await
        }
        Commands::HistoricalKeyData { isin } => {
            commands::history::historical_key_data(&client, &isin, cli.format).await
        }
        Commands::Dividends { isin } => {
            commands::history::dividends(&client, &isin, cli.format).await
        }
    }
}
