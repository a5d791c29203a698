//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod health;
pub mod seed;

use clap::{Args, Subcommand};
use kashoe_commerce::catalog::{EventStatus, ProductCategory};

/// Arguments for the seed command.
#[derive(Args)]
pub struct SeedArgs {
    /// Fixture file (TOML or JSON). Defaults to the built-in sample catalog.
    #[arg(short, long)]
    pub file: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,

    /// Only seed products.
    #[arg(long, conflicts_with = "events_only")]
    pub products_only: bool,

    /// Only seed events.
    #[arg(long)]
    pub events_only: bool,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only list this category (chess_board, chess_clock, merchandise, lesson_package).
    #[arg(long)]
    pub category: Option<ProductCategory>,
}

/// Arguments for the events command.
#[derive(Args)]
pub struct EventsArgs {
    /// Only list events with this status (upcoming, ongoing, completed, cancelled).
    #[arg(long)]
    pub status: Option<EventStatus>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
