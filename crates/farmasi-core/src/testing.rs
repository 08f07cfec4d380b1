//! In-memory backend used by the unit tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::api::PharmacyApi;
use crate::catalog::Product;
use crate::error::{ApiError, ApiOperation};
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use crate::order::{OrderConfirmation, OrderRequest, OrderResponse};

pub(crate) fn product(id: u64, price_rupiah: i64, stock: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Obat {}", id),
        stock,
        price: Money::from_rupiah(price_rupiah),
        created_at: "2024-05-01T08:00:00Z".to_string(),
        updated_at: "2024-05-01T08:00:00Z".to_string(),
    }
}

pub(crate) fn order_ok(message: &str, request: &OrderRequest, total: Money) -> OrderResponse {
    OrderResponse {
        message: message.to_string(),
        data: OrderConfirmation {
            id: OrderId::new(1),
            product_id: request.product_id,
            quantity: request.quantity,
            total_amount: total,
            created_at: "2024-05-01T09:00:00Z".to_string(),
        },
    }
}

/// Scripted backend that counts calls.
///
/// `list_products` pops from the product script and repeats the last served
/// entry once the script runs out. `create_order` pops scripted results and fails
/// with a transport error when none are left.
#[derive(Default)]
pub(crate) struct MockApi {
    product_script: Mutex<VecDeque<Result<Vec<Product>, ApiError>>>,
    last_products: Mutex<Option<Result<Vec<Product>, ApiError>>>,
    order_script: Mutex<VecDeque<Result<OrderResponse, ApiError>>>,
    list_calls: AtomicUsize,
    order_calls: AtomicUsize,
    requests: Mutex<Vec<OrderRequest>>,
}

impl MockApi {
    pub(crate) fn with_products(products: Vec<Product>) -> Self {
        let api = Self::default();
        api.push_products(Ok(products));
        api
    }

    pub(crate) fn push_products(&self, result: Result<Vec<Product>, ApiError>) {
        self.product_script.lock().unwrap().push_back(result);
    }

    pub(crate) fn push_order(&self, result: Result<OrderResponse, ApiError>) {
        self.order_script.lock().unwrap().push_back(result);
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn order_calls(&self) -> usize {
        self.order_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requests(&self) -> Vec<OrderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PharmacyApi for MockApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let mut last = self.last_products.lock().unwrap();
        if let Some(next) = self.product_script.lock().unwrap().pop_front() {
            *last = Some(next.clone());
            return next;
        }
        last.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<OrderResponse, ApiError> {
        self.order_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(*request);
        self.order_script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::transport(
                    ApiOperation::CreateOrder,
                    "no scripted response",
                ))
            })
    }
}
