//! HTTP access to the Farmasi backend.
//!
//! This crate provides:
//! - `HttpPharmacyApi` - `PharmacyApi` over REST/JSON
//! - `FetchPolicy` / `TimeoutConfig` - Per-client time limits
//! - Error-body mapping from backend responses to `ApiError`

mod client;
mod error;
mod timeout;

pub use client::*;
pub use error::*;
pub use timeout::*;
