//! Order form state and submission.

use tracing::{debug, info, warn};

use crate::api::PharmacyApi;
use crate::catalog::{find_product, Product};
use crate::error::{ApiError, SubmitError, ValidationError};
use crate::ids::ProductId;
use crate::money::Money;
use crate::notify::{Notice, Notifier};
use crate::order::input::{parse_discount, parse_quantity, parse_selection};
use crate::order::{
    EstimateBreakdown, OrderRequest, OrderResponse, SubmissionFlow, SubmissionState,
    DEFAULT_DISCOUNT_PERCENT, DEFAULT_QUANTITY, MAX_DISCOUNT_PERCENT,
};

/// One order form: the operator's current choices plus its submission
/// cycle.
///
/// The form never owns the product list. Callers pass the current list
/// whenever a price is needed, so estimates and requests always use the
/// latest price for the selected id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    selected: Option<ProductId>,
    quantity: u32,
    discount_percent: u32,
    default_quantity: u32,
    flow: SubmissionFlow,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderForm {
    pub fn new() -> Self {
        Self::with_default_quantity(DEFAULT_QUANTITY)
    }

    /// Create a form whose quantity starts (and resets) at `quantity`.
    pub fn with_default_quantity(quantity: u32) -> Self {
        Self {
            selected: None,
            quantity,
            discount_percent: DEFAULT_DISCOUNT_PERCENT,
            default_quantity: quantity,
            flow: SubmissionFlow::new(),
        }
    }

    pub fn selected(&self) -> Option<ProductId> {
        self.selected
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn discount_percent(&self) -> u32 {
        self.discount_percent
    }

    pub fn state(&self) -> SubmissionState {
        self.flow.state()
    }

    /// Whether submit and cancel are usable.
    pub fn controls_enabled(&self) -> bool {
        self.flow.controls_enabled()
    }

    pub fn select(&mut self, product: Option<ProductId>) {
        self.selected = product;
    }

    /// Apply raw selection input. Empty clears the selection.
    pub fn select_input(&mut self, input: &str) -> Result<(), ValidationError> {
        self.selected = parse_selection(input)?;
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Apply raw quantity input. Rejected input leaves the value unchanged.
    pub fn set_quantity_input(&mut self, input: &str) -> Result<(), ValidationError> {
        self.quantity = parse_quantity(input)?;
        Ok(())
    }

    pub fn set_discount(&mut self, percent: u32) -> Result<(), ValidationError> {
        if percent > MAX_DISCOUNT_PERCENT {
            return Err(ValidationError::DiscountOutOfRange(u64::from(percent)));
        }
        self.discount_percent = percent;
        Ok(())
    }

    /// Apply raw discount input. Rejected input leaves the value unchanged.
    pub fn set_discount_input(&mut self, input: &str) -> Result<(), ValidationError> {
        self.discount_percent = parse_discount(input)?;
        Ok(())
    }

    /// Estimated total against the current list.
    pub fn estimate(&self, products: &[Product]) -> Money {
        self.breakdown(products)
            .map(|b| b.total)
            .unwrap_or_else(Money::zero)
    }

    pub fn breakdown(&self, products: &[Product]) -> Option<EstimateBreakdown> {
        EstimateBreakdown::for_selection(
            products,
            self.selected,
            self.quantity,
            self.discount_percent,
        )
    }

    /// Check the submission preconditions and build the request.
    pub fn validate(&self, products: &[Product]) -> Result<OrderRequest, ValidationError> {
        let product_id = self.selected.ok_or(ValidationError::NoProductSelected)?;
        if self.quantity < 1 {
            return Err(ValidationError::InvalidQuantity);
        }
        if find_product(products, product_id).is_none() {
            return Err(ValidationError::UnknownProduct(product_id));
        }
        Ok(OrderRequest {
            product_id,
            quantity: self.quantity,
            discount_percent: self.discount_percent,
        })
    }

    /// Clear the form back to its defaults. Not allowed mid-submission.
    pub fn cancel(&mut self) -> Result<(), SubmitError> {
        if !self.flow.controls_enabled() {
            return Err(SubmitError::Busy);
        }
        self.reset_fields();
        Ok(())
    }

    fn reset_fields(&mut self) {
        self.selected = None;
        self.quantity = self.default_quantity;
        self.discount_percent = DEFAULT_DISCOUNT_PERCENT;
    }

    /// Validate and move to `Submitting`.
    ///
    /// On success the returned request must be followed by exactly one
    /// [`complete_submission`](Self::complete_submission).
    pub fn begin_submission(&mut self, products: &[Product]) -> Result<OrderRequest, SubmitError> {
        if !self.flow.controls_enabled() {
            return Err(SubmitError::Busy);
        }
        let request = self.validate(products)?;
        self.flow.begin()?;
        info!(
            product_id = %request.product_id,
            quantity = request.quantity,
            discount_percent = request.discount_percent,
            "order submission started"
        );
        Ok(request)
    }

    /// Settle an in-flight submission with the backend's answer.
    ///
    /// Success notifies the backend message, resets the form, then calls
    /// `on_success`. Failure notifies and keeps the form values. Either way
    /// the form ends up idle.
    pub fn complete_submission<F>(
        &mut self,
        result: Result<OrderResponse, ApiError>,
        notifier: &dyn Notifier,
        on_success: F,
    ) -> Result<OrderResponse, SubmitError>
    where
        F: FnOnce(),
    {
        self.flow.settle(result.is_ok())?;

        let outcome = match result {
            Ok(response) => {
                info!(order_id = %response.data.id, "order accepted");
                notifier.notify(Notice::success(response.message.clone()));
                self.reset_fields();
                on_success();
                Ok(response)
            }
            Err(err) => {
                warn!(error = %err, "order rejected");
                notifier.notify(Notice::error(format!(
                    "Gagal membuat pesanan: {}",
                    err.user_message()
                )));
                Err(SubmitError::Api(err))
            }
        };

        self.flow.finish()?;
        outcome
    }

    /// Run a full submission against `api`.
    ///
    /// Validation failures and re-entry are reported to `notifier` and
    /// returned without contacting the backend.
    pub async fn submit<A, F>(
        &mut self,
        products: &[Product],
        api: &A,
        notifier: &dyn Notifier,
        on_success: F,
    ) -> Result<OrderResponse, SubmitError>
    where
        A: PharmacyApi + ?Sized,
        F: FnOnce(),
    {
        let request = match self.begin_submission(products) {
            Ok(request) => request,
            Err(err) => {
                debug!(error = %err, "order submission blocked");
                let notice = match err {
                    SubmitError::Busy => Notice::warning(err.to_string()),
                    _ => Notice::error(err.to_string()),
                };
                notifier.notify(notice);
                return Err(err);
            }
        };

        let result = api.create_order(&request).await;
        self.complete_submission(result, notifier, on_success)
    }
}
