//! Interactive inventory and order screen.

use anyhow::{bail, Result};
use dialoguer::{Input, Select};
use farmasi_core::order::SubmissionState;
use farmasi_core::{Dashboard, NoticeLog};
use farmasi_data::HttpPharmacyApi;

use super::{refresh_inventory, DashboardArgs};
use crate::context::Context;

const MENU: [&str; 3] = ["Perbarui Data", "Buat Pesanan", "Keluar"];

/// Placeholder entry of the product picker.
const NO_PRODUCT: &str = "-- Pilih Obat --";

/// Run the dashboard command.
pub async fn run(_args: DashboardArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("dashboard is interactive and does not support --json");
    }

    let mut dashboard = ctx.dashboard()?;
    refresh_inventory(&mut dashboard, ctx).await;

    loop {
        ctx.output.header("Stok Obat");
        ctx.output.inventory(dashboard.inventory());
        println!();

        let choice = Select::new()
            .with_prompt("Menu")
            .items(&MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                refresh_inventory(&mut dashboard, ctx).await;
            }
            1 => order_screen(&mut dashboard, ctx).await?,
            _ => break,
        }
    }

    Ok(())
}

/// Fill in and submit the order form.
async fn order_screen(dashboard: &mut Dashboard<HttpPharmacyApi>, ctx: &Context) -> Result<()> {
    if dashboard.inventory().products().is_empty() {
        ctx.output.warn("Belum ada data obat. Perbarui data terlebih dahulu.");
        return Ok(());
    }

    ctx.output.header("Buat Pesanan");

    pick_product(dashboard, ctx)?;
    prompt_until_accepted(ctx, "Jumlah", dashboard.form().quantity(), |input| {
        dashboard.set_quantity(input, &ctx.output)
    })?;
    prompt_until_accepted(ctx, "Diskon (%)", dashboard.form().discount_percent(), |input| {
        dashboard.set_discount(input, &ctx.output)
    })?;

    match dashboard.breakdown() {
        Some(breakdown) => ctx.output.breakdown(&breakdown),
        None => ctx.output.kv("Estimasi Total", &dashboard.estimate().display()),
    }

    let actions = [SubmissionState::Idle.button_label(), "Batal"];
    let action = Select::new()
        .items(&actions)
        .default(0)
        .interact()?;
    if action != 0 {
        dashboard.cancel_order()?;
        ctx.output.info("Pesanan dibatalkan");
        return Ok(());
    }

    let spinner = ctx.output.spinner(SubmissionState::Submitting.button_label());
    let log = NoticeLog::new();
    let outcome = dashboard.submit_order(&log).await;
    spinner.finish_and_clear();
    ctx.output.replay(log.drain());

    if let Ok(response) = outcome {
        ctx.output.kv("No. Pesanan", &response.data.id.to_string());
        ctx.output.kv("Total", &response.data.total_amount.display());
    }
    Ok(())
}

fn pick_product(dashboard: &mut Dashboard<HttpPharmacyApi>, ctx: &Context) -> Result<()> {
    let products = dashboard.inventory().products();

    let mut items = vec![NO_PRODUCT.to_string()];
    items.extend(products.iter().map(|p| p.option_label()));

    let current = dashboard
        .form()
        .selected()
        .and_then(|id| products.iter().position(|p| p.id == id))
        .map(|i| i + 1)
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Pilih Obat")
        .items(&items)
        .default(current)
        .interact()?;

    let input = match choice {
        0 => String::new(),
        i => products[i - 1].id.to_string(),
    };
    dashboard.select_product(&input, &ctx.output);
    Ok(())
}

/// Ask for a numeric field until the form accepts the input.
fn prompt_until_accepted<F>(ctx: &Context, prompt: &str, current: u32, mut apply: F) -> Result<()>
where
    F: FnMut(&str) -> bool,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .with_initial_text(current.to_string())
            .allow_empty(true)
            .interact_text()?;

        if apply(input.trim()) {
            return Ok(());
        }
        ctx.output.debug(&format!("{} rejected: {:?}", prompt, input));
    }
}
