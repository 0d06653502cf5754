//! Pupas Client - HTTP client for the remote order service
//!
//! Provides network-based calls to the orders API and implements
//! [`shared::OrderService`] on top of them.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
