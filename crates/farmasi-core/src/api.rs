//! Backend seam.

use async_trait::async_trait;
use std::sync::Arc;

use crate::catalog::Product;
use crate::error::ApiError;
use crate::order::{OrderRequest, OrderResponse};

/// The pharmacy backend as seen by the dashboard.
///
/// Implementations turn every failure into an [`ApiError`]; nothing
/// panics or surfaces raw transport errors.
#[async_trait]
pub trait PharmacyApi: Send + Sync {
    /// `GET /products`: the full current product list.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `POST /order`.
    async fn create_order(&self, request: &OrderRequest) -> Result<OrderResponse, ApiError>;
}

#[async_trait]
impl<T: PharmacyApi + ?Sized> PharmacyApi for Arc<T> {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        (**self).list_products().await
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<OrderResponse, ApiError> {
        (**self).create_order(request).await
    }
}
