//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{LineItem, TableOrder};
use shared::remote::{
    to_backend_create, to_table_order, BackendErrorBody, BackendOrderResponse, OrderService,
    RemoteResult,
};

/// HTTP client for the remote order service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    api_base: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(Method::GET, path).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request without body
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(Method::PATCH, path).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(Method::DELETE, path).await
    }

    async fn send<T: DeserializeOwned>(&self, method: Method, path: &str) -> ClientResult<T> {
        let response = self.client.request(method, self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<BackendErrorBody>(&text)
                .ok()
                .and_then(|body| body.message())
                .unwrap_or_else(|| format!("HTTP {}", status));
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Err(ClientError::Validation(message))
                }
                _ => Err(ClientError::Server {
                    status: status.as_u16(),
                    message,
                }),
            };
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }

    // ========== Orders API ==========

    /// Create a new order
    pub async fn create_order_raw(&self, table_number: u32, items: &[LineItem]) -> ClientResult<BackendOrderResponse> {
        let body = to_backend_create(table_number, items);
        self.post("/orders", &body).await
    }

    /// Get all pending orders
    pub async fn pending_orders_raw(&self) -> ClientResult<Vec<BackendOrderResponse>> {
        self.get("/orders/pending").await
    }

    /// Delete (cancel) an order
    pub async fn delete_order_raw(&self, order_id: &str) -> ClientResult<BackendOrderResponse> {
        self.delete(&format!("/orders/{}", order_id)).await
    }

    /// Complete an order
    pub async fn complete_order_raw(&self, order_id: &str) -> ClientResult<BackendOrderResponse> {
        self.patch_empty(&format!("/orders/{}/complete", order_id)).await
    }
}

#[async_trait]
impl OrderService for HttpClient {
    async fn create_order(&self, table_number: u32, items: &[LineItem]) -> RemoteResult<TableOrder> {
        let response = self.create_order_raw(table_number, items).await?;
        tracing::info!(order_id = response.id, table_number, "Order created remotely");
        to_table_order(response)
    }

    async fn list_pending(&self) -> RemoteResult<Vec<TableOrder>> {
        let responses = self.pending_orders_raw().await?;
        tracing::debug!(count = responses.len(), "Fetched pending orders");
        responses.into_iter().map(to_table_order).collect()
    }

    async fn delete_order(&self, order_id: &str) -> RemoteResult<TableOrder> {
        let response = self.delete_order_raw(order_id).await?;
        to_table_order(response)
    }

    async fn complete_order(&self, order_id: &str) -> RemoteResult<TableOrder> {
        let response = self.complete_order_raw(order_id).await?;
        to_table_order(response)
    }
}
