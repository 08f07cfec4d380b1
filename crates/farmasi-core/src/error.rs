//! Error types for the order workflow and the backend seam.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::ids::ProductId;

/// Local input errors. These never reach the backend.
///
/// The `Display` text is what the operator sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Submit attempted without choosing a product.
    #[error("Harap pilih obat dan jumlah yang valid!")]
    NoProductSelected,

    /// Submit attempted with a quantity below 1.
    #[error("Harap pilih obat dan jumlah yang valid!")]
    InvalidQuantity,

    /// The selected id is not in the current product list.
    #[error("Obat dengan id {0} tidak ditemukan")]
    UnknownProduct(ProductId),

    /// Input contained something other than digits.
    #[error("Input harus berupa angka: {0:?}")]
    NotANumber(String),

    /// Discount above 100%.
    #[error("Diskon maksimal 100% (diberikan {0}%)")]
    DiscountOutOfRange(u64),

    /// Quantity does not fit the order wire format.
    #[error("Jumlah terlalu besar: {0}")]
    QuantityTooLarge(String),
}

/// The backend call an [`ApiError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiOperation {
    /// `GET /products`
    ListProducts,
    /// `POST /order`
    CreateOrder,
}

impl ApiOperation {
    /// Message shown when the backend gave no usable error string.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            ApiOperation::ListProducts => "Gagal mengambil data produk",
            ApiOperation::CreateOrder => "Gagal memproses pesanan",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiOperation::ListProducts => "GET /products",
            ApiOperation::CreateOrder => "POST /order",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a backend failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// Non-2xx response.
    Backend { status: u16 },
    /// The request never produced a response.
    Transport,
    /// The configured time limit elapsed.
    Timeout { after_ms: u64 },
    /// A response arrived but could not be decoded.
    Malformed,
}

/// A failed backend call.
///
/// `message` is the backend's own error string for [`ApiErrorKind::Backend`]
/// and a diagnostic description for every other kind.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{operation} failed: {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub operation: ApiOperation,
    pub message: String,
}

impl ApiError {
    /// Non-2xx response. A missing error string falls back to the
    /// operation's generic message.
    pub fn backend(operation: ApiOperation, status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| operation.fallback_message().to_string());
        Self {
            kind: ApiErrorKind::Backend { status },
            operation,
            message,
        }
    }

    pub fn transport(operation: ApiOperation, detail: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            operation,
            message: detail.into(),
        }
    }

    pub fn timeout(operation: ApiOperation, after: Duration) -> Self {
        Self {
            kind: ApiErrorKind::Timeout {
                after_ms: after.as_millis() as u64,
            },
            operation,
            message: format!("no response within {:?}", after),
        }
    }

    pub fn malformed(operation: ApiOperation, detail: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Malformed,
            operation,
            message: detail.into(),
        }
    }

    /// HTTP status, when the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ApiErrorKind::Backend { status } => Some(status),
            _ => None,
        }
    }

    /// Text safe to show the operator.
    ///
    /// Only backend-provided strings are shown verbatim; transport and
    /// decoding details stay in the logs.
    pub fn user_message(&self) -> String {
        match &self.kind {
            ApiErrorKind::Backend { .. } => self.message.clone(),
            ApiErrorKind::Timeout { after_ms } => format!(
                "{} (tidak ada respons dalam {} detik)",
                self.operation.fallback_message(),
                after_ms.div_ceil(1000)
            ),
            ApiErrorKind::Transport | ApiErrorKind::Malformed => {
                self.operation.fallback_message().to_string()
            }
        }
    }
}

/// Errors from an order submission attempt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// Rejected locally before any request.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A submission from this form is already in flight.
    #[error("Pesanan sedang diproses")]
    Busy,

    /// The backend rejected or never answered.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Invalid state machine transition.
    #[error("Invalid submission transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

impl SubmitError {
    /// Whether the request reached the network.
    pub fn is_remote(&self) -> bool {
        matches!(self, SubmitError::Api(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_uses_backend_message() {
        let err = ApiError::backend(ApiOperation::CreateOrder, 400, Some("stok habis".into()));
        assert_eq!(err.user_message(), "stok habis");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_backend_error_without_message_falls_back() {
        let err = ApiError::backend(ApiOperation::ListProducts, 500, None);
        assert_eq!(err.user_message(), "Gagal mengambil data produk");

        let err = ApiError::backend(ApiOperation::CreateOrder, 500, Some("  ".into()));
        assert_eq!(err.user_message(), "Gagal memproses pesanan");
    }

    #[test]
    fn test_malformed_error_hides_details() {
        let err = ApiError::malformed(ApiOperation::CreateOrder, "expected value at line 1");
        assert_eq!(err.user_message(), "Gagal memproses pesanan");
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn test_timeout_message_rounds_up_seconds() {
        let err = ApiError::timeout(ApiOperation::ListProducts, Duration::from_millis(2500));
        assert_eq!(err.kind, ApiErrorKind::Timeout { after_ms: 2500 });
        assert!(err.user_message().contains("3 detik"));
    }

    #[test]
    fn test_submit_error_is_remote() {
        assert!(!SubmitError::Busy.is_remote());
        assert!(!SubmitError::from(ValidationError::InvalidQuantity).is_remote());
        let api = ApiError::transport(ApiOperation::CreateOrder, "connection refused");
        assert!(SubmitError::from(api).is_remote());
    }
}
