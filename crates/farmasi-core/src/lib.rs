//! Pharmacy stock and order workflow logic for Farmasi.
//!
//! This crate holds everything a front end needs besides rendering:
//!
//! - **Catalog**: products as served by the backend, stock status tiers
//! - **Order**: live estimate, input parsing, the order form and its
//!   submission state machine
//! - **Inventory**: the product list with loading state and refresh
//! - **Dashboard**: the list and the form wired together
//!
//! The backend is reached through the [`PharmacyApi`] trait; operator
//! feedback goes through a [`Notifier`].
//!
//! # Example
//!
//! ```rust,ignore
//! use farmasi_core::prelude::*;
//!
//! let mut dashboard = Dashboard::new(api);
//! dashboard.mount(&notifier).await;
//!
//! dashboard.select_product("1", &notifier);
//! dashboard.set_quantity("2", &notifier);
//! dashboard.set_discount("10", &notifier);
//! println!("Estimasi: {}", dashboard.estimate());
//!
//! dashboard.submit_order(&notifier).await?;
//! ```

pub mod api;
pub mod dashboard;
pub mod error;
pub mod ids;
pub mod inventory;
pub mod money;
pub mod notify;

pub mod catalog;
pub mod order;

#[cfg(test)]
pub(crate) mod testing;

pub use api::PharmacyApi;
pub use dashboard::Dashboard;
pub use error::{ApiError, ApiErrorKind, ApiOperation, SubmitError, ValidationError};
pub use ids::*;
pub use money::Money;
pub use notify::{Notice, NoticeLevel, NoticeLog, Notifier};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::api::PharmacyApi;
    pub use crate::dashboard::Dashboard;
    pub use crate::error::{ApiError, ApiErrorKind, ApiOperation, SubmitError, ValidationError};
    pub use crate::ids::*;
    pub use crate::inventory::{InventoryRow, InventoryView};
    pub use crate::money::Money;
    pub use crate::notify::{Notice, NoticeLevel, NoticeLog, Notifier};

    // Catalog
    pub use crate::catalog::{find_product, Product, StockStatus, StockSummary};

    // Order
    pub use crate::order::{
        estimate, EstimateBreakdown, OrderConfirmation, OrderForm, OrderRequest, OrderResponse,
        SubmissionState,
    };
}
