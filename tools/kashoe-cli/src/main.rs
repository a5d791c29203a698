//! Kashoe CLI - operator tool for the Kashoe Chess Club backend.
//!
//! Commands:
//! - `kashoe seed` - Post the sample catalog (products and events)
//! - `kashoe products` - List products, optionally by category
//! - `kashoe events` - List events, optionally by status
//! - `kashoe health` - Check that the backend is up
//! - `kashoe config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, EventsArgs, ProductsArgs, SeedArgs};

/// Kashoe CLI - Seed and inspect the chess club backend
#[derive(Parser)]
#[command(name = "kashoe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Backend URL (scheme and host, without `/api`)
    #[arg(long, global = true, env = "KASHOE_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Post the sample products and events to the backend
    Seed(SeedArgs),

    /// List products
    Products(ProductsArgs),

    /// List events
    Events(EventsArgs),

    /// Check backend health
    Health,

    /// Manage configuration
    Config(ConfigArgs),
}

/// Diagnostics go to stderr so they never mix with command output.
fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(verbose)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing already initialised: {e}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let loaded = context::Context::load(cli.config.as_deref(), cli.api_url.as_deref(), output.clone());
    let ctx = match loaded {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Seed(args) => commands::seed::run(args, &ctx).await,
        Commands::Products(args) => commands::catalog::products(args, &ctx).await,
        Commands::Events(args) => commands::catalog::events(args, &ctx).await,
        Commands::Health => commands::health::run(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
