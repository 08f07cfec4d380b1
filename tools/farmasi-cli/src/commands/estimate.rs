//! Price an order without submitting it.

use anyhow::{bail, Result};
use farmasi_core::catalog::find_product;
use farmasi_core::ValidationError;

use super::{apply_order_input, refresh_inventory, EstimateArgs};
use crate::context::Context;

/// Run the estimate command.
pub async fn run(args: EstimateArgs, ctx: &Context) -> Result<()> {
    let mut dashboard = ctx.dashboard()?;

    if !refresh_inventory(&mut dashboard, ctx).await {
        bail!("Data obat tidak tersedia");
    }
    apply_order_input(&mut dashboard, &args.input, ctx)?;

    let Some(breakdown) = dashboard.breakdown() else {
        let err = match dashboard.form().selected() {
            Some(id) => ValidationError::UnknownProduct(id),
            None => ValidationError::NoProductSelected,
        };
        bail!(err);
    };

    if let Some(id) = dashboard.form().selected() {
        if let Some(product) = find_product(dashboard.inventory().products(), id) {
            ctx.output.header(&product.name);
            ctx.output.kv("Stok", &format!("{} ({})", product.stock, product.stock_status()));
        }
    }
    ctx.output.breakdown(&breakdown);

    Ok(())
}
