//! Order wire types.

use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Body of `POST /order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub product_id: ProductId,
    /// At least 1.
    pub quantity: u32,
    /// 0..=100.
    pub discount_percent: u32,
}

/// Successful `POST /order` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Human-readable confirmation, shown to the operator as is.
    pub message: String,
    pub data: OrderConfirmation,
}

/// The order record created by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub total_amount: Money,
    #[serde(default)]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_request_wire_format() {
        let request = OrderRequest {
            product_id: ProductId::new(1),
            quantity: 2,
            discount_percent: 10,
        };
        let json = serde_json::to_value(request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"product_id": 1, "quantity": 2, "discount_percent": 10})
        );
    }

    #[test]
    fn test_order_response_from_backend_json() {
        let json = r#"{
            "message": "Order berhasil dibuat",
            "data": {
                "id": 12,
                "product_id": 1,
                "quantity": 2,
                "total_amount": 18000,
                "created_at": "2024-05-01T08:00:00Z"
            }
        }"#;
        let response: OrderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message, "Order berhasil dibuat");
        assert_eq!(response.data.id, OrderId::new(12));
        assert_eq!(response.data.total_amount, Money::from_rupiah(18_000));
    }
}
