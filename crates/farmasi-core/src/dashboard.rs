//! Dashboard composition: the inventory list plus one order form.
//!
//! Data flows one way. The dashboard owns the product list and lends it to
//! the form for every estimate and submission. The form signals that a
//! refresh is wanted through a one-shot callback; the dashboard performs
//! the refresh once the form has finished.

use tracing::debug;

use crate::api::PharmacyApi;
use crate::error::{SubmitError, ValidationError};
use crate::inventory::InventoryView;
use crate::money::Money;
use crate::notify::{Notice, Notifier};
use crate::order::{EstimateBreakdown, OrderForm, OrderResponse};

pub struct Dashboard<A> {
    api: A,
    inventory: InventoryView,
    form: OrderForm,
}

impl<A: PharmacyApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self::with_form(api, OrderForm::new())
    }

    pub fn with_form(api: A, form: OrderForm) -> Self {
        Self {
            api,
            inventory: InventoryView::new(),
            form,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn inventory(&self) -> &InventoryView {
        &self.inventory
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    /// Initial load.
    pub async fn mount(&mut self, notifier: &dyn Notifier) -> bool {
        self.refresh(notifier).await
    }

    /// Manual refresh.
    pub async fn refresh(&mut self, notifier: &dyn Notifier) -> bool {
        self.inventory.refresh(&self.api, notifier).await
    }

    /// Apply product selection input, notifying on rejection.
    pub fn select_product(&mut self, input: &str, notifier: &dyn Notifier) -> bool {
        Self::apply(self.form.select_input(input), notifier)
    }

    /// Apply quantity input, notifying on rejection.
    pub fn set_quantity(&mut self, input: &str, notifier: &dyn Notifier) -> bool {
        Self::apply(self.form.set_quantity_input(input), notifier)
    }

    /// Apply discount input, notifying on rejection.
    pub fn set_discount(&mut self, input: &str, notifier: &dyn Notifier) -> bool {
        Self::apply(self.form.set_discount_input(input), notifier)
    }

    fn apply(result: Result<(), ValidationError>, notifier: &dyn Notifier) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                notifier.notify(Notice::warning(err.to_string()));
                false
            }
        }
    }

    /// Clear the form.
    pub fn cancel_order(&mut self) -> Result<(), SubmitError> {
        self.form.cancel()
    }

    pub fn estimate(&self) -> Money {
        self.form.estimate(self.inventory.products())
    }

    pub fn breakdown(&self) -> Option<EstimateBreakdown> {
        self.form.breakdown(self.inventory.products())
    }

    /// Submit the form. A successful order is followed by a refresh, after
    /// the success notice has gone out.
    pub async fn submit_order(
        &mut self,
        notifier: &dyn Notifier,
    ) -> Result<OrderResponse, SubmitError> {
        let mut refresh_requested = false;
        let outcome = self
            .form
            .submit(self.inventory.products(), &self.api, notifier, || {
                refresh_requested = true
            })
            .await;

        if refresh_requested {
            debug!("refreshing inventory after order");
            self.inventory.refresh(&self.api, notifier).await;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, ApiOperation};
    use crate::ids::ProductId;
    use crate::notify::{NoticeLevel, NoticeLog};
    use crate::order::OrderRequest;
    use crate::testing::{order_ok, product, MockApi};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_mount_loads_inventory() {
        let api = MockApi::with_products(vec![product(1, 10_000, 10)]);
        let log = NoticeLog::new();
        let mut dashboard = Dashboard::new(api);

        assert!(dashboard.mount(&log).await);
        assert_eq!(dashboard.inventory().products().len(), 1);
        assert_eq!(dashboard.api().list_calls(), 1);
    }

    #[tokio::test]
    async fn test_order_success_refreshes_after_notice() {
        let api = Arc::new(MockApi::with_products(vec![product(1, 10_000, 10)]));
        let log = NoticeLog::new();
        let mut dashboard = Dashboard::new(Arc::clone(&api));
        dashboard.mount(&log).await;

        assert!(dashboard.select_product("1", &log));
        assert!(dashboard.set_quantity("2", &log));
        assert!(dashboard.set_discount("10", &log));
        assert_eq!(dashboard.estimate(), Money::from_rupiah(18_000));

        let request = OrderRequest {
            product_id: ProductId::new(1),
            quantity: 2,
            discount_percent: 10,
        };
        api.push_order(Ok(order_ok(
            "Order berhasil dibuat",
            &request,
            Money::from_rupiah(18_000),
        )));
        // Backend stock after the order.
        api.push_products(Ok(vec![product(1, 10_000, 8)]));

        dashboard.submit_order(&log).await.unwrap();

        assert_eq!(api.list_calls(), 2);
        assert_eq!(dashboard.inventory().products()[0].stock, 8);
        assert_eq!(dashboard.form().selected(), None);
        assert_eq!(log.notices(), vec![Notice::success("Order berhasil dibuat")]);
    }

    #[tokio::test]
    async fn test_order_failure_does_not_refresh() {
        let api = Arc::new(MockApi::with_products(vec![product(1, 10_000, 0)]));
        let log = NoticeLog::new();
        let mut dashboard = Dashboard::new(Arc::clone(&api));
        dashboard.mount(&log).await;

        dashboard.select_product("1", &log);
        api.push_order(Err(ApiError::backend(
            ApiOperation::CreateOrder,
            400,
            Some("stok habis".to_string()),
        )));

        let err = dashboard.submit_order(&log).await.unwrap_err();
        assert!(matches!(err, SubmitError::Api(_)));
        assert_eq!(api.list_calls(), 1);
        assert_eq!(dashboard.form().selected(), Some(ProductId::new(1)));
        assert!(dashboard.form().controls_enabled());
        assert_eq!(
            log.notices()[0].message,
            "Gagal membuat pesanan: stok habis"
        );
    }

    #[tokio::test]
    async fn test_rejected_discount_input_is_notified() {
        let api = MockApi::with_products(vec![product(1, 10_000, 10)]);
        let log = NoticeLog::new();
        let mut dashboard = Dashboard::new(api);

        assert!(dashboard.set_discount("20", &log));
        assert!(!dashboard.set_discount("101", &log));
        assert_eq!(dashboard.form().discount_percent(), 20);

        let notices = log.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Warning);
    }

    #[tokio::test]
    async fn test_estimate_zero_before_selection() {
        let api = MockApi::with_products(vec![product(1, 10_000, 10)]);
        let log = NoticeLog::new();
        let mut dashboard = Dashboard::new(api);
        dashboard.mount(&log).await;

        assert!(dashboard.estimate().is_zero());
        assert!(dashboard.breakdown().is_none());
    }
}
