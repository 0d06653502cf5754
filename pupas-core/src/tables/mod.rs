//! Table orders: waiter cart, shared store, kitchen board
//!
//! # Data flow
//!
//! ```text
//! Cart ──submit──► TableOrderStore ◄──mirror── KitchenBoard ◄──poll── OrderService
//!                     │   (blob)                    ▲
//!                     └──── StoreChange ────► RefreshLoop
//! ```

pub mod board;
pub mod cart;
pub mod error;
pub mod occupancy;
pub mod optimistic;
pub mod reconcile;
pub mod refresh;
pub mod status;
pub mod store;

pub use board::{KitchenBoard, Notice};
pub use cart::Cart;
pub use error::{TableError, TableResult};
pub use occupancy::{OccupancyView, TableStatus};
pub use optimistic::{OpKind, OpOutcome, OpState, PendingOp};
pub use reconcile::merge_by_id;
pub use refresh::{Refresh, RefreshLoop};
pub use store::{StoreChange, TableOrderStore};
