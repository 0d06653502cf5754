//! Wire types of the remote order service

use serde::{Deserialize, Serialize};

/// Status vocabulary of the remote service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BackendOrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// Item of a create request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendOrderItem {
    pub name: String,
    pub amount: i32,
    pub price: f64,
}

/// Create request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendOrderCreate {
    pub table_number: u32,
    pub items: Vec<BackendOrderItem>,
}

/// Item of an order response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendOrderItemResponse {
    pub id: i64,
    pub name: String,
    pub amount: i32,
    pub price: f64,
}

/// Order response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendOrderResponse {
    pub id: i64,
    pub table_number: u32,
    pub status: BackendOrderStatus,
    pub items: Vec<BackendOrderItemResponse>,
    pub total: f64,
    /// ISO-8601, with or without offset
    pub created_at: String,
}

/// Error body returned by the service
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BackendErrorBody {
    /// A message, or a list of validation failures
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl BackendErrorBody {
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        }
    }
}
