use std::sync::Arc;

use anyhow::Context;
use pupas_client::ClientConfig;
use pupas_core::tables::refresh::RefreshLoop;
use pupas_core::tables::{KitchenBoard, Notice, OccupancyView, TableOrderStore};
use pupas_core::{Config, RedbBlobStore, cleanup_old_logs, setup_environment};
use shared::models::TableOrderStatus;
use shared::OrderService;
use tokio_util::sync::CancellationToken;

/// Log files older than this are removed at startup
const LOG_RETENTION_DAYS: u64 = 14;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, directories, logging)
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    setup_environment(&config).context("failed to prepare work directory")?;

    tracing::info!(api_url = %config.api_url, work_dir = %config.work_dir, "Pupas kitchen starting...");

    if let Some(dir) = &config.log_dir {
        match cleanup_old_logs(dir, LOG_RETENTION_DAYS) {
            Ok(removed) if removed > 0 => tracing::info!(removed, "Old log files removed"),
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "Failed to clean up old logs"),
        }
    }

    // 2. Storage and remote service
    let blobs = Arc::new(
        RedbBlobStore::open(config.database_path())
            .with_context(|| format!("failed to open {}", config.database_path().display()))?,
    );
    let store = Arc::new(TableOrderStore::new(blobs));
    let client = ClientConfig::new(&config.api_url)
        .with_timeout(config.request_timeout_secs)
        .build_http_client()
        .context("failed to build HTTP client")?;

    let service: Arc<dyn OrderService> = Arc::new(client);

    let board = Arc::new(KitchenBoard::new(service.clone(), store.clone()));
    let occupancy = Arc::new(OccupancyView::new(service, store.clone()));

    // 3. Background loops
    let shutdown = CancellationToken::new();
    let board_loop = tokio::spawn(
        RefreshLoop::new(
            board.clone(),
            store.subscribe(),
            config.kitchen_poll_interval(),
            shutdown.clone(),
        )
        .run(),
    );
    let occupancy_loop = tokio::spawn(
        RefreshLoop::new(
            occupancy.clone(),
            store.subscribe(),
            config.occupancy_poll_interval(),
            shutdown.clone(),
        )
        .run(),
    );

    // 4. Report board changes until Ctrl-C
    let mut notices = board.subscribe_notices();
    let mut changes = store.subscribe();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                break;
            }
            Ok(notice) = notices.recv() => match notice {
                Notice::Ready { table_number, .. } => tracing::info!(table_number, "Order ready to serve"),
                Notice::Deleted { table_number, .. } => tracing::info!(table_number, "Order deleted"),
                Notice::Failed { table_number, reason, .. } => tracing::warn!(table_number, reason = %reason, "Kitchen action failed"),
            },
            Ok(_) = changes.recv() => {
                tracing::info!(
                    queued = board.column(TableOrderStatus::Queued).len(),
                    preparing = board.column(TableOrderStatus::Preparing).len(),
                    ready = board.column(TableOrderStatus::Ready).len(),
                    occupied = ?occupancy.occupied(),
                    "Board"
                );
            }
        }
    }

    shutdown.cancel();
    let _ = tokio::join!(board_loop, occupancy_loop);
    tracing::info!("Pupas kitchen stopped");
    Ok(())
}
