//! Product records.

use crate::catalog::StockStatus;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A medicine as listed by the backend.
///
/// Read-only on this side: changes arrive by re-fetching the whole list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Units on hand.
    pub stock: i64,
    /// Unit price.
    pub price: Money,
    /// Opaque backend timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Opaque backend timestamp.
    #[serde(default)]
    pub updated_at: String,
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock)
    }

    /// Label used when offering the product for selection,
    /// e.g. `Paracetamol 500mg - Rp 10.000`.
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.name, self.price.display())
    }
}

/// Resolve a product by id against the given list.
pub fn find_product(products: &[Product], id: ProductId) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}
