//! Inventory list state.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::api::PharmacyApi;
use crate::catalog::{Product, StockStatus, StockSummary};
use crate::error::ApiError;
use crate::ids::ProductId;
use crate::notify::{Notice, Notifier};

/// One displayed inventory row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRow {
    /// 1-based position in the list.
    pub index: usize,
    pub id: ProductId,
    pub name: String,
    pub stock: i64,
    /// Formatted unit price, e.g. `Rp 10.000`.
    pub price: String,
    pub status: StockStatus,
}

/// The authoritative product list and its loading state.
///
/// Refreshes replace the list wholesale; a failed refresh keeps whatever
/// was shown before.
#[derive(Debug, Clone, Default)]
pub struct InventoryView {
    products: Vec<Product>,
    loading: bool,
    /// Unix timestamp of the last successful refresh.
    last_refreshed: Option<i64>,
}

impl InventoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view with an already known list.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            loading: false,
            last_refreshed: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The refresh control is disabled while a fetch is in flight.
    pub fn refresh_enabled(&self) -> bool {
        !self.loading
    }

    pub fn last_refreshed(&self) -> Option<i64> {
        self.last_refreshed
    }

    /// Mark a fetch as started. Returns `false` if one is already running.
    pub fn begin_refresh(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Apply a fetch result and leave the loading state.
    ///
    /// Returns whether the list was replaced.
    pub fn finish_refresh(
        &mut self,
        result: Result<Vec<Product>, ApiError>,
        notifier: &dyn Notifier,
    ) -> bool {
        self.loading = false;
        match result {
            Ok(products) => {
                info!(count = products.len(), "inventory refreshed");
                self.products = products;
                self.last_refreshed = Some(current_timestamp());
                true
            }
            Err(err) => {
                warn!(error = %err, kept = self.products.len(), "inventory refresh failed");
                notifier.notify(Notice::error(format!(
                    "Gagal memuat data obat: {}",
                    err.user_message()
                )));
                false
            }
        }
    }

    /// Fetch the full list from `api` and replace the current one.
    ///
    /// Ignored while another refresh is in flight.
    pub async fn refresh<A>(&mut self, api: &A, notifier: &dyn Notifier) -> bool
    where
        A: PharmacyApi + ?Sized,
    {
        if !self.begin_refresh() {
            debug!("refresh already in flight");
            return false;
        }
        let result = api.list_products().await;
        self.finish_refresh(result, notifier)
    }

    /// Rows for display, in backend order.
    pub fn rows(&self) -> Vec<InventoryRow> {
        self.products
            .iter()
            .enumerate()
            .map(|(i, p)| InventoryRow {
                index: i + 1,
                id: p.id,
                name: p.name.clone(),
                stock: p.stock,
                price: p.price.display(),
                status: p.stock_status(),
            })
            .collect()
    }

    pub fn summary(&self) -> StockSummary {
        StockSummary::from_stocks(self.products.iter().map(|p| p.stock))
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiOperation;
    use crate::notify::NoticeLog;
    use crate::testing::{product, MockApi};

    #[tokio::test]
    async fn test_refresh_replaces_list() {
        let api = MockApi::with_products(vec![product(1, 10_000, 3), product(2, 5_000, 0)]);
        let log = NoticeLog::new();
        let mut view = InventoryView::new();

        assert!(view.refresh(&api, &log).await);
        assert_eq!(view.products().len(), 2);
        assert!(view.last_refreshed().is_some());
        assert!(!view.is_loading());
        assert!(log.is_empty());

        api.push_products(Ok(vec![product(3, 1_000, 9)]));
        assert!(view.refresh(&api, &log).await);
        assert_eq!(view.products().len(), 1);
        assert_eq!(view.products()[0].id, ProductId::new(3));
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_list() {
        let api = MockApi::with_products(vec![product(1, 10_000, 3)]);
        let log = NoticeLog::new();
        let mut view = InventoryView::new();
        view.refresh(&api, &log).await;

        api.push_products(Err(ApiError::backend(
            ApiOperation::ListProducts,
            503,
            Some("database down".to_string()),
        )));
        assert!(!view.refresh(&api, &log).await);

        assert_eq!(view.products().len(), 1);
        assert!(view.refresh_enabled());
        let notices = log.notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].is_error());
        assert!(notices[0].message.contains("database down"));
    }

    #[tokio::test]
    async fn test_failed_initial_refresh_leaves_empty_list() {
        let api = MockApi::default();
        api.push_products(Err(ApiError::transport(
            ApiOperation::ListProducts,
            "connection refused",
        )));
        let log = NoticeLog::new();
        let mut view = InventoryView::new();

        assert!(!view.refresh(&api, &log).await);
        assert!(view.products().is_empty());
        assert!(view.last_refreshed().is_none());
        assert_eq!(
            log.notices()[0].message,
            "Gagal memuat data obat: Gagal mengambil data produk"
        );
    }

    #[tokio::test]
    async fn test_refresh_ignored_while_loading() {
        let api = MockApi::with_products(vec![product(1, 10_000, 3)]);
        let log = NoticeLog::new();
        let mut view = InventoryView::new();

        assert!(view.begin_refresh());
        assert!(!view.refresh_enabled());
        assert!(!view.refresh(&api, &log).await);
        assert_eq!(api.list_calls(), 0);
        assert!(view.is_loading());
    }

    #[test]
    fn test_rows_and_summary() {
        let view = InventoryView::with_products(vec![
            product(7, 10_000, 0),
            product(8, 2_500, 4),
            product(9, 1_250_000, 40),
        ]);
        let rows = view.rows();
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].status, StockStatus::Habis);
        assert_eq!(rows[1].status, StockStatus::Menipis);
        assert_eq!(rows[2].price, "Rp 1.250.000");
        assert_eq!(rows[2].status, StockStatus::Tersedia);

        let summary = view.summary();
        assert_eq!((summary.habis, summary.menipis, summary.tersedia), (1, 1, 1));
    }
}
