//! CLI command implementations.

pub mod config;
pub mod dashboard;
pub mod estimate;
pub mod order;
pub mod stock;

use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use farmasi_core::catalog::StockStatus;
use farmasi_core::{Dashboard, NoticeLog};
use farmasi_data::HttpPharmacyApi;

use crate::context::Context;

/// Arguments for the stock command.
#[derive(Args)]
pub struct StockArgs {
    /// Only list products with this status.
    #[arg(short, long, value_enum)]
    pub status: Option<StatusFilter>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusFilter {
    Habis,
    Menipis,
    Tersedia,
}

impl From<StatusFilter> for StockStatus {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::Habis => StockStatus::Habis,
            StatusFilter::Menipis => StockStatus::Menipis,
            StatusFilter::Tersedia => StockStatus::Tersedia,
        }
    }
}

/// Order line shared by estimate and order.
///
/// Values are taken as text and go through the same input rules as the
/// interactive form.
#[derive(Args)]
pub struct OrderInput {
    /// Product id.
    #[arg(short, long)]
    pub product: String,

    /// Quantity (default: order.default_quantity).
    #[arg(short, long)]
    pub quantity: Option<String>,

    /// Discount percentage, 0-100.
    #[arg(short, long, default_value = "0")]
    pub discount: String,
}

/// Arguments for the estimate command.
#[derive(Args)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub input: OrderInput,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    #[command(flatten)]
    pub input: OrderInput,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the dashboard command.
#[derive(Args)]
pub struct DashboardArgs {}

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
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Fetch the product list behind a spinner.
///
/// Notices raised during the fetch are shown once the spinner is gone.
pub async fn refresh_inventory(
    dashboard: &mut Dashboard<HttpPharmacyApi>,
    ctx: &Context,
) -> bool {
    let spinner = ctx.output.spinner("Memuat data obat...");
    let log = NoticeLog::new();
    let loaded = dashboard.refresh(&log).await;
    spinner.finish_and_clear();
    ctx.output.replay(log.drain());
    loaded
}

/// Apply command line order values to the dashboard form.
pub fn apply_order_input(
    dashboard: &mut Dashboard<HttpPharmacyApi>,
    input: &OrderInput,
    ctx: &Context,
) -> Result<()> {
    let mut accepted = dashboard.select_product(&input.product, &ctx.output);
    if let Some(ref quantity) = input.quantity {
        accepted &= dashboard.set_quantity(quantity, &ctx.output);
    }
    accepted &= dashboard.set_discount(&input.discount, &ctx.output);

    if !accepted {
        bail!("Input pesanan tidak valid");
    }
    Ok(())
}
