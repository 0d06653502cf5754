//! Pupas core - ordering engine of a pupusería
//!
//! # Overview
//!
//! - **Group orders** (`group`): customers build one order per group, person
//!   by person; the kitchen list, beverage list and per-person totals with a
//!   proportional tip split are derived from it.
//! - **Table orders** (`tables`): waiters send carts to the kitchen; the
//!   kitchen board reconciles them with the remote order service and moves
//!   them through queued → preparing → ready.
//! - **Dashboard** (`dashboard`): sales of ready orders by day and month.
//!
//! # Module structure
//!
//! ```text
//! pupas-core/src/
//! ├── core/          # configuration
//! ├── group/         # reducer, appliers, summary, session
//! ├── tables/        # store, cart, board, refresh loop
//! ├── storage/       # blob stores (memory, redb)
//! ├── utils/         # logging
//! └── dashboard.rs   # sales figures
//! ```

pub mod core;
pub mod dashboard;
pub mod group;
pub mod storage;
pub mod tables;
pub mod utils;

// Re-export public types
pub use core::Config;
pub use group::{GroupAction, GroupOrderSession, OrderSummary, TipPercent, reduce, summarize};
pub use storage::{BlobStore, MemoryBlobStore, RedbBlobStore, StorageError, StorageResult};
pub use tables::{Cart, KitchenBoard, OccupancyView, RefreshLoop, TableError, TableOrderStore, TableResult};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Create the work and log directories, then start logging
pub fn setup_environment(config: &Config) -> std::io::Result<()> {
    std::fs::create_dir_all(&config.work_dir)?;
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)?;
    }

    init_logger_with_file(Some(&config.log_level), None, config.log_dir.as_deref());
    Ok(())
}
