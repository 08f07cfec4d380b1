//! Output formatting for the CLI.

use chrono::{DateTime, Local};
use console::style;
use farmasi_core::catalog::StockStatus;
use farmasi_core::inventory::{InventoryRow, InventoryView};
use farmasi_core::order::EstimateBreakdown;
use farmasi_core::{Notice, NoticeLevel, Notifier};
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Print the inventory table with a per-status summary.
    pub fn inventory(&self, view: &InventoryView) {
        if self.json {
            self.json(&view.rows());
            return;
        }

        let rows = view.rows();
        if rows.is_empty() {
            self.info("Belum ada data obat");
            return;
        }

        let widths = column_widths(&rows);
        self.table_row(&["No", "Nama Obat", "Stok", "Harga"], &widths);
        for row in &rows {
            let index = row.index.to_string();
            let stock = row.stock.to_string();
            println!(
                "  {:iw$}  {:nw$}  {:>sw$}  {:>pw$}  {}",
                index,
                row.name,
                stock,
                row.price,
                stock_badge(row.status),
                iw = widths[0],
                nw = widths[1],
                sw = widths[2],
                pw = widths[3],
            );
        }

        let summary = view.summary();
        println!(
            "\n  {} produk: {} tersedia, {} menipis, {} habis",
            summary.total(),
            summary.tersedia,
            summary.menipis,
            summary.habis
        );
        if let Some(ts) = view.last_refreshed() {
            self.kv("Diperbarui", &format_timestamp(ts));
        }
    }

    /// Print an estimate breakdown.
    pub fn breakdown(&self, breakdown: &EstimateBreakdown) {
        if self.json {
            self.json(breakdown);
            return;
        }
        self.kv("Harga satuan", &breakdown.unit_price.display());
        self.kv("Jumlah", &breakdown.quantity.to_string());
        self.kv("Subtotal", &breakdown.subtotal.display());
        self.kv(
            &format!("Diskon ({}%)", breakdown.discount_percent),
            &breakdown.discount.display(),
        );
        println!(
            "  {}: {}",
            style("Estimasi Total").bold(),
            style(breakdown.total.display()).bold()
        );
    }

    /// Show notices collected while a spinner was running.
    pub fn replay(&self, notices: Vec<Notice>) {
        for notice in notices {
            self.notify(notice);
        }
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

impl Notifier for Output {
    fn notify(&self, notice: Notice) {
        if self.json {
            if let Ok(line) = serde_json::to_string(&notice) {
                eprintln!("{}", line);
            }
            return;
        }
        match notice.level {
            NoticeLevel::Info => self.info(&notice.message),
            NoticeLevel::Success => self.success(&notice.message),
            NoticeLevel::Warning => self.warn(&notice.message),
            NoticeLevel::Error => self.error(&notice.message),
        }
    }
}

/// Colored badge for a stock status.
pub fn stock_badge(status: StockStatus) -> String {
    match status {
        StockStatus::Habis => style(status.label()).red().bold().to_string(),
        StockStatus::Menipis => style(status.label()).yellow().to_string(),
        StockStatus::Tersedia => style(status.label()).green().to_string(),
    }
}

/// Local wall-clock rendering of a Unix timestamp.
pub fn format_timestamp(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|utc| utc.with_timezone(&Local).format("%d/%m/%Y %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}

fn column_widths(rows: &[InventoryRow]) -> [usize; 4] {
    let mut widths = ["No".len(), "Nama Obat".len(), "Stok".len(), "Harga".len()];
    for row in rows {
        widths[0] = widths[0].max(row.index.to_string().len());
        widths[1] = widths[1].max(row.name.chars().count());
        widths[2] = widths[2].max(row.stock.to_string().len());
        widths[3] = widths[3].max(row.price.chars().count());
    }
    widths
}
