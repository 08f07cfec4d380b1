//! Submit an order.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use farmasi_core::catalog::find_product;
use farmasi_core::order::SubmissionState;
use farmasi_core::{NoticeLog, SubmitError};

use super::{apply_order_input, refresh_inventory, OrderArgs};
use crate::context::Context;

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() && !args.yes {
        bail!("--json requires --yes");
    }

    let mut dashboard = ctx.dashboard()?;

    if !refresh_inventory(&mut dashboard, ctx).await {
        bail!("Data obat tidak tersedia");
    }
    apply_order_input(&mut dashboard, &args.input, ctx)?;

    ctx.output.header("Buat Pesanan");
    if let Some(id) = dashboard.form().selected() {
        if let Some(product) = find_product(dashboard.inventory().products(), id) {
            ctx.output.kv("Obat", &product.option_label());
            ctx.output.kv("Stok", &format!("{} ({})", product.stock, product.stock_status()));
        }
    }
    if let Some(breakdown) = dashboard.breakdown() {
        if !ctx.output.is_json() {
            ctx.output.breakdown(&breakdown);
        }
    }

    if !args.yes {
        ctx.output.info("");
        let confirmed = Confirm::new()
            .with_prompt("Kirim pesanan?")
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Pesanan dibatalkan");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner(SubmissionState::Submitting.button_label());
    let log = NoticeLog::new();
    let outcome = dashboard.submit_order(&log).await;
    spinner.finish_and_clear();
    ctx.output.replay(log.drain());

    match outcome {
        Ok(response) => {
            if ctx.output.is_json() {
                ctx.output.json(&response);
            } else {
                ctx.output.kv("No. Pesanan", &response.data.id.to_string());
                ctx.output.kv("Total", &response.data.total_amount.display());
                ctx.output.header("Stok Obat");
                ctx.output.inventory(dashboard.inventory());
            }
            Ok(())
        }
        Err(SubmitError::Api(err)) => bail!("Pesanan gagal ({})", err.operation),
        Err(_) => bail!("Pesanan tidak dikirim"),
    }
}
