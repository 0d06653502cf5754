//! Shared types for the pupuseria ordering workspace
//!
//! Domain models used by both the engine and the HTTP client, the wire types
//! of the remote order service and the error types that cross crate borders.

pub mod error;
pub mod models;
pub mod remote;
pub mod util;

// Re-exports
pub use error::{OrderError, OrderResult};
pub use remote::{OrderService, RemoteError, RemoteResult};
pub use serde::{Deserialize, Serialize};
