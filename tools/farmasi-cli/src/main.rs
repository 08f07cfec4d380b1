//! Farmasi CLI - Pharmacy stock and order dashboard.
//!
//! Commands:
//! - `farmasi stock` - Show the medicine inventory
//! - `farmasi estimate` - Price an order without submitting it
//! - `farmasi order` - Submit an order
//! - `farmasi dashboard` - Interactive inventory and order screen
//! - `farmasi config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, DashboardArgs, EstimateArgs, OrderArgs, StockArgs};

/// Farmasi CLI - View medicine stock and place orders
#[derive(Parser)]
#[command(name = "farmasi")]
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

    /// Backend base URL (overrides api.base_url)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the medicine inventory
    Stock(StockArgs),

    /// Price an order without submitting it
    Estimate(EstimateArgs),

    /// Submit an order
    Order(OrderArgs),

    /// Interactive inventory and order screen
    Dashboard(DashboardArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, cli.api_url.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Stock(args) => commands::stock::run(args, &ctx).await,
        Commands::Estimate(args) => commands::estimate::run(args, &ctx).await,
        Commands::Order(args) => commands::order::run(args, &ctx).await,
        Commands::Dashboard(args) => commands::dashboard::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
