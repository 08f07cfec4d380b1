//! REST client for the pharmacy backend.

use std::time::Instant;

use async_trait::async_trait;
use farmasi_core::catalog::Product;
use farmasi_core::order::{OrderRequest, OrderResponse};
use farmasi_core::{ApiError, ApiOperation, PharmacyApi};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::{decode_body, error_from_reqwest, error_from_response, ClientError};
use crate::timeout::FetchPolicy;

/// `PharmacyApi` over HTTP/JSON.
///
/// Every call is bounded by the policy's connect and total timeouts.
#[derive(Debug, Clone)]
pub struct HttpPharmacyApi {
    http: reqwest::Client,
    base_url: String,
    policy: FetchPolicy,
}

impl HttpPharmacyApi {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: &str, policy: FetchPolicy) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = reqwest::Client::builder()
            .connect_timeout(policy.timeout.connect)
            .timeout(policy.timeout.total);
        if let Some(ref user_agent) = policy.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            policy,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn policy(&self) -> &FetchPolicy {
        &self.policy
    }

    /// Full URL for an API path such as `/products`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: ApiOperation,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let started = Instant::now();
        let limit = self.policy.timeout.total;

        let response = request
            .send()
            .await
            .map_err(|e| error_from_reqwest(operation, &e, limit))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| error_from_reqwest(operation, &e, limit))?;

        debug!(
            %operation,
            base_url = %self.base_url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "backend responded"
        );

        if !status.is_success() {
            return Err(error_from_response(operation, status.as_u16(), &body));
        }
        decode_body(operation, &body)
    }
}

#[async_trait]
impl PharmacyApi for HttpPharmacyApi {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let request = self.http.get(self.endpoint("/products"));
        self.send(ApiOperation::ListProducts, request).await
    }

    #[instrument(
        skip(self, request),
        fields(
            product_id = %request.product_id,
            quantity = request.quantity,
            discount_percent = request.discount_percent
        )
    )]
    async fn create_order(&self, request: &OrderRequest) -> Result<OrderResponse, ApiError> {
        let builder = self.http.post(self.endpoint("/order")).json(request);
        self.send(ApiOperation::CreateOrder, builder).await
    }
}

/// Validate an http(s) base URL and strip any trailing slash.
pub fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let invalid = |reason: String| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
