//! Show the medicine inventory.

use anyhow::{bail, Result};
use farmasi_core::catalog::StockStatus;
use farmasi_core::inventory::InventoryView;

use super::{refresh_inventory, StockArgs};
use crate::context::Context;

/// Run the stock command.
pub async fn run(args: StockArgs, ctx: &Context) -> Result<()> {
    let mut dashboard = ctx.dashboard()?;

    if !refresh_inventory(&mut dashboard, ctx).await {
        bail!("Data obat tidak tersedia");
    }

    ctx.output.header("Stok Obat");

    match args.status {
        Some(filter) => {
            let status = StockStatus::from(filter);
            let products = dashboard
                .inventory()
                .products()
                .iter()
                .filter(|p| p.stock_status() == status)
                .cloned()
                .collect();
            ctx.output.inventory(&InventoryView::with_products(products));
        }
        None => ctx.output.inventory(dashboard.inventory()),
    }

    Ok(())
}
