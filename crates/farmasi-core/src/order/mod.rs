//! Order module.
//!
//! Contains the order wire types, the live estimate, form input parsing and
//! the submission state machine.

mod estimate;
mod flow;
mod form;
mod request;

pub mod input;

pub use estimate::{estimate, EstimateBreakdown};
pub use flow::{SubmissionFlow, SubmissionState};
pub use form::OrderForm;
pub use request::{OrderConfirmation, OrderRequest, OrderResponse};

/// Quantity a fresh form starts with.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Discount a fresh form starts with.
pub const DEFAULT_DISCOUNT_PERCENT: u32 = 0;

/// Highest accepted discount.
pub const MAX_DISCOUNT_PERCENT: u32 = 100;
