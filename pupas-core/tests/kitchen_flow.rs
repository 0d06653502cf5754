// pupas-core/tests/kitchen_flow.rs
// Waiter sends orders, kitchen works them, dashboard counts them

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use pupas_core::dashboard::sales_summary;
use pupas_core::tables::{Cart, KitchenBoard, OccupancyView, OpState, RefreshLoop, TableOrderStore};
use pupas_core::MemoryBlobStore;
use shared::models::{find_menu_item, LineItem, TableOrder, TableOrderStatus};
use shared::{OrderService, RemoteError, RemoteResult};
use tokio_util::sync::CancellationToken;

/// Remote service that only knows the orders created through it
#[derive(Default)]
struct FakeKitchenService {
    orders: Mutex<Vec<TableOrder>>,
    next_id: Mutex<u32>,
    down: Mutex<bool>,
}

impl FakeKitchenService {
    fn guard(&self) -> RemoteResult<()> {
        if *self.down.lock() {
            return Err(RemoteError::Network("service unavailable".to_string()));
        }
        Ok(())
    }

    fn find(&self, order_id: &str) -> RemoteResult<TableOrder> {
        self.orders
            .lock()
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
            .ok_or_else(|| RemoteError::Http {
                status: 404,
                detail: format!("Order {} not found", order_id),
            })
    }

    /// Another station starts cooking an order
    fn start(&self, order_id: &str) {
        if let Some(stored) = self.orders.lock().iter_mut().find(|o| o.id == order_id) {
            stored.status = TableOrderStatus::Preparing;
        }
    }
}

#[async_trait]
impl OrderService for FakeKitchenService {
    async fn create_order(&self, table_number: u32, items: &[LineItem]) -> RemoteResult<TableOrder> {
        self.guard()?;
        let id = {
            let mut next = self.next_id.lock();
            *next += 1;
            *next
        };
        let line_items: Vec<LineItem> = items
            .iter()
            .enumerate()
            .map(|(i, item)| LineItem {
                id: format!("{}-{}", id, i),
                note: String::new(),
                ..item.clone()
            })
            .collect();
        let total = line_items.iter().map(|l| l.line_total()).sum();
        let order = TableOrder {
            id: id.to_string(),
            table_number,
            line_items,
            status: TableOrderStatus::Queued,
            created_at: chrono::Utc::now().timestamp_millis() + i64::from(id),
            total,
            status_edited: false,
        };
        self.orders.lock().push(order.clone());
        Ok(order)
    }

    async fn list_pending(&self) -> RemoteResult<Vec<TableOrder>> {
        self.guard()?;
        Ok(self
            .orders
            .lock()
            .iter()
            .filter(|o| o.status != TableOrderStatus::Ready)
            .cloned()
            .collect())
    }

    async fn delete_order(&self, order_id: &str) -> RemoteResult<TableOrder> {
        self.guard()?;
        let order = self.find(order_id)?;
        self.orders.lock().retain(|o| o.id != order_id);
        Ok(order)
    }

    async fn complete_order(&self, order_id: &str) -> RemoteResult<TableOrder> {
        self.guard()?;
        let mut order = self.find(order_id)?;
        order.status = TableOrderStatus::Ready;
        if let Some(stored) = self.orders.lock().iter_mut().find(|o| o.id == order_id) {
            stored.status = TableOrderStatus::Ready;
        }
        Ok(order)
    }
}

struct Floor {
    service: Arc<FakeKitchenService>,
    store: Arc<TableOrderStore>,
    board: Arc<KitchenBoard>,
    occupancy: OccupancyView,
}

fn floor() -> Floor {
    let service = Arc::new(FakeKitchenService::default());
    let store = Arc::new(TableOrderStore::new(Arc::new(MemoryBlobStore::new())));
    let board = Arc::new(KitchenBoard::new(service.clone(), store.clone()));
    let occupancy = OccupancyView::new(service.clone(), store.clone());
    Floor {
        service,
        store,
        board,
        occupancy,
    }
}

async fn send(floor: &Floor, table: u32, items: &[&str], notes: &str) -> TableOrder {
    let mut cart = Cart::new();
    for id in items {
        cart.add(&find_menu_item(id).unwrap());
    }
    let order = floor
        .occupancy
        .send_to_kitchen(&mut cart, Some(table), notes)
        .await
        .unwrap();
    assert!(cart.is_empty());
    order
}

#[tokio::test]
async fn test_order_lifecycle() {
    let floor = floor();
    let first = send(&floor, 2, &["p1", "p1", "b1"], "").await;
    let second = send(&floor, 5, &["p4"], "sin curtido").await;
    assert_eq!(floor.occupancy.occupied(), vec![2, 5]);

    // submitted orders reach the board under their remote ids, notes intact
    floor.board.refresh().await.unwrap();
    let ids: Vec<_> = floor.board.orders().into_iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![first.id.clone(), second.id.clone()]);
    assert_eq!(floor.board.column(TableOrderStatus::Queued).len(), 2);
    assert_eq!(floor.board.orders()[1].line_items[0].note, "sin curtido");

    // local-only move, then ready through the remote
    let state = floor
        .board
        .change_status(&first.id, TableOrderStatus::Preparing)
        .await
        .unwrap();
    assert_eq!(state, OpState::Committed);
    floor.board.refresh().await.unwrap();
    assert_eq!(floor.board.column(TableOrderStatus::Preparing).len(), 1);

    floor
        .board
        .change_status(&first.id, TableOrderStatus::Ready)
        .await
        .unwrap();
    floor.occupancy.refresh();
    assert_eq!(floor.occupancy.occupied(), vec![5]);

    // service outage: delete rolls back
    *floor.service.down.lock() = true;
    let state = floor.board.delete(&second.id).await.unwrap();
    assert!(matches!(state, OpState::RolledBack { .. }));
    assert!(floor.board.orders().iter().any(|o| o.id == second.id));
    assert!(floor.board.refresh().await.is_err());

    // the ready order counts as a sale
    let now = chrono::Utc::now();
    let sales = sales_summary(&floor.store.list().unwrap(), &now);
    assert!((sales.today - first.total).abs() < 1e-9);

    assert_eq!(floor.occupancy.pay_table(2).unwrap(), 1);
    assert_eq!(floor.occupancy.pay_table(5).unwrap(), 1);
    assert!(floor.store.list().unwrap().is_empty());
}

#[tokio::test]
async fn test_remote_status_wins_until_the_kitchen_edits() {
    let floor = floor();
    let order = send(&floor, 7, &["p3"], "").await;

    floor.service.start(&order.id);
    floor.board.refresh().await.unwrap();
    assert_eq!(floor.board.orders()[0].status, TableOrderStatus::Preparing);

    floor
        .board
        .change_status(&order.id, TableOrderStatus::Queued)
        .await
        .unwrap();
    floor.board.refresh().await.unwrap();
    assert_eq!(floor.board.orders()[0].status, TableOrderStatus::Queued);
}

#[tokio::test]
async fn test_failed_send_keeps_the_cart() {
    let floor = floor();
    *floor.service.down.lock() = true;
    let mut cart = Cart::new();
    cart.add(&find_menu_item("p1").unwrap());

    assert!(floor.occupancy.send_to_kitchen(&mut cart, Some(1), "").await.is_err());
    assert_eq!(cart.item_count(), 1);
    assert!(floor.store.list().unwrap().is_empty());
}

#[tokio::test]
async fn test_store_write_triggers_board_refresh() {
    let floor = floor();
    let shutdown = CancellationToken::new();
    let handle = tokio::spawn(
        RefreshLoop::new(
            floor.board.clone(),
            floor.store.subscribe(),
            Duration::from_secs(3600),
            shutdown.clone(),
        )
        .run(),
    );

    let order = send(&floor, 9, &["p2"], "").await;

    let mut seen = false;
    for _ in 0..50 {
        if floor.board.orders().iter().any(|o| o.id == order.id) {
            seen = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(seen, "board never picked up the new order");

    shutdown.cancel();
    handle.await.unwrap();
}
