//! Refresh loop
//!
//! Re-reads a view whenever the store announces a change, and at a fixed
//! period in case a notification was missed. A lagged receiver counts as a
//! notification; a closed channel leaves the timer alone in charge.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::board::KitchenBoard;
use super::occupancy::OccupancyView;
use super::store::StoreChange;

/// Something a refresh loop can drive
#[async_trait]
pub trait Refresh: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    async fn refresh(&self);
}

#[async_trait]
impl Refresh for KitchenBoard {
    fn name(&self) -> &'static str {
        "kitchen_board"
    }

    async fn refresh(&self) {
        // Failures are logged by the board, which keeps its list
        let _ = KitchenBoard::refresh(self).await;
    }
}

#[async_trait]
impl Refresh for OccupancyView {
    fn name(&self) -> &'static str {
        "occupancy"
    }

    async fn refresh(&self) {
        OccupancyView::refresh(self);
    }
}

pub struct RefreshLoop<R: Refresh + ?Sized> {
    target: Arc<R>,
    changes: broadcast::Receiver<StoreChange>,
    period: Duration,
    shutdown: CancellationToken,
}

impl<R: Refresh + ?Sized> RefreshLoop<R> {
    pub fn new(
        target: Arc<R>,
        changes: broadcast::Receiver<StoreChange>,
        period: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            target,
            changes,
            period,
            shutdown,
        }
    }

    /// Run until the shutdown token is cancelled
    pub async fn run(mut self) {
        let name = self.target.name();
        tracing::info!(target_view = name, period_ms = self.period.as_millis() as u64, "Refresh loop started");

        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut notifications_open = true;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    tracing::info!(target_view = name, "Refresh loop received shutdown signal");
                    return;
                }
                _ = interval.tick() => {
                    self.target.refresh().await;
                }
                result = self.changes.recv(), if notifications_open => {
                    match result {
                        Ok(change) => {
                            tracing::trace!(target_view = name, change = ?change, "Store changed");
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::debug!(target_view = name, skipped, "Change notifications lagged");
                        }
                        Err(RecvError::Closed) => {
                            tracing::warn!(target_view = name, "Change channel closed, continuing on timer only");
                            notifications_open = false;
                            continue;
                        }
                    }
                    self.target.refresh().await;
                    interval.reset();
                }
            }
        }
    }
}
