//! Data models
//!
//! Group-order models (built by customers, one group per session) and
//! table-order models (submitted by waiters, worked by the kitchen).

pub mod group;
pub mod menu;
pub mod table;

// Re-exports
pub use group::*;
pub use menu::*;
pub use table::*;
