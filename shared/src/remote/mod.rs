//! Remote order service seam
//!
//! The remote service is the authority on which table orders exist. It speaks
//! its own wire format (see [`types`]) and status vocabulary; [`transform`]
//! maps it onto the table-order model in both directions.

pub mod transform;
pub mod types;

use crate::models::{LineItem, TableOrder};
use async_trait::async_trait;
use thiserror::Error;

pub use transform::*;
pub use types::*;

/// Remote call errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// Transport failure (connection refused, reset, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    /// Body could not be decoded or mapped
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Remote order service operations
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Create an order for a table
    async fn create_order(&self, table_number: u32, items: &[LineItem]) -> RemoteResult<TableOrder>;

    /// Orders still waiting in the kitchen, oldest first
    async fn list_pending(&self) -> RemoteResult<Vec<TableOrder>>;

    /// Cancel an order
    async fn delete_order(&self, order_id: &str) -> RemoteResult<TableOrder>;

    /// Mark an order completed
    async fn complete_order(&self, order_id: &str) -> RemoteResult<TableOrder>;
}
