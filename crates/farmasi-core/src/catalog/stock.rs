//! Stock status classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest stock count still reported as running low.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Availability tier derived from a stock count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// Out of stock (stock <= 0).
    Habis,
    /// Running low (1..=5).
    Menipis,
    /// Available.
    Tersedia,
}

impl StockStatus {
    /// Classify a stock count.
    pub fn classify(stock: i64) -> Self {
        if stock <= 0 {
            StockStatus::Habis
        } else if stock <= LOW_STOCK_THRESHOLD {
            StockStatus::Menipis
        } else {
            StockStatus::Tersedia
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Habis => "Habis",
            StockStatus::Menipis => "Menipis",
            StockStatus::Tersedia => "Tersedia",
        }
    }

    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, StockStatus::Habis)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Count of products per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StockSummary {
    pub habis: usize,
    pub menipis: usize,
    pub tersedia: usize,
}

impl StockSummary {
    /// Tally statuses for a sequence of stock counts.
    pub fn from_stocks(stocks: impl IntoIterator<Item = i64>) -> Self {
        stocks
            .into_iter()
            .fold(Self::default(), |mut acc, stock| {
                match StockStatus::classify(stock) {
                    StockStatus::Habis => acc.habis += 1,
                    StockStatus::Menipis => acc.menipis += 1,
                    StockStatus::Tersedia => acc.tersedia += 1,
                }
                acc
            })
    }

    pub fn total(&self) -> usize {
        self.habis + self.menipis + self.tersedia
    }
}
