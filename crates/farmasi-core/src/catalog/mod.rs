//! Product catalog module.
//!
//! Contains the product record as served by the backend and the derived
//! stock status.

mod product;
mod stock;

pub use product::{find_product, Product};
pub use stock::{StockStatus, StockSummary, LOW_STOCK_THRESHOLD};
