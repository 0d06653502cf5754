//! Reconcile remote orders with the local mirror
//!
//! The remote service decides which orders exist. The local mirror may hold
//! kitchen status edits the remote has not seen (it has no endpoint for
//! them), so an edited local status wins for any order present on both
//! sides. The remote does not keep notes either; they come from the mirror.

use std::collections::HashMap;

use shared::models::TableOrder;

/// Merge remote orders with the local mirror
///
/// Orders only present locally are dropped. A local status overrides the
/// remote one only when it was set by a kitchen edit. Line notes are copied
/// from the local copy when both copies have the same number of lines.
pub fn merge_by_id(remote: Vec<TableOrder>, local: &[TableOrder]) -> Vec<TableOrder> {
    let mirror: HashMap<&str, &TableOrder> = local.iter().map(|o| (o.id.as_str(), o)).collect();

    remote
        .into_iter()
        .map(|mut order| {
            let Some(stored) = mirror.get(order.id.as_str()) else {
                return order;
            };
            if stored.status_edited {
                order.status = stored.status;
                order.status_edited = true;
            }
            if stored.line_items.len() == order.line_items.len() {
                for (line, stored_line) in order.line_items.iter_mut().zip(&stored.line_items) {
                    if line.note.is_empty() {
                        line.note = stored_line.note.clone();
                    }
                }
            }
            order
        })
        .collect()
}

/// Oldest first; ties keep their relative order
pub fn sort_by_created_at(orders: &mut [TableOrder]) {
    orders.sort_by_key(|o| o.created_at);
}

/// Insert keeping the list sorted by creation time
///
/// Goes after any order with the same timestamp.
pub fn insert_sorted_by_created_at(orders: &mut Vec<TableOrder>, order: TableOrder) {
    let at = orders.partition_point(|o| o.created_at <= order.created_at);
    orders.insert(at, order);
}


#[cfg(test)]
mod tests {
    use super::test_support::order;
    use super::*;
    use shared::models::TableOrderStatus::*;

    fn edited(mut order: TableOrder) -> TableOrder {
        order.status_edited = true;
        order
    }

    #[test]
    fn test_edited_local_status_wins() {
        let remote = vec![order("x", 1, Queued, 10)];
        let local = vec![edited(order("x", 1, Preparing, 10))];

        let merged = merge_by_id(remote, &local);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].status, Preparing);
        assert!(merged[0].status_edited);
    }

    #[test]
    fn test_submitted_status_follows_remote() {
        let remote = vec![order("x", 1, Preparing, 10)];
        let local = vec![order("x", 1, Queued, 10)];

        let merged = merge_by_id(remote, &local);
        assert_eq!(merged[0].status, Preparing);
        assert!(!merged[0].status_edited);
    }

    #[test]
    fn test_remote_decides_existence() {
        let remote = vec![order("a", 1, Queued, 10), order("b", 2, Preparing, 20)];
        let local = vec![order("c", 3, Ready, 5), edited(order("b", 2, Ready, 20))];

        let merged = merge_by_id(remote, &local);
        let got: Vec<_> = merged.iter().map(|o| (o.id.as_str(), o.status)).collect();
        assert_eq!(got, vec![("a", Queued), ("b", Ready)]);
    }

    #[test]
    fn test_notes_come_from_mirror() {
        let remote = vec![order("a", 1, Queued, 10)];
        let mut local = order("a", 1, Queued, 10);
        local.line_items[0].note = "sin curtido".to_string();

        let merged = merge_by_id(remote, &[local]);
        assert_eq!(merged[0].line_items[0].note, "sin curtido");
    }

    #[test]
    fn test_insert_sorted() {
        let mut orders = vec![order("a", 1, Queued, 10), order("c", 1, Queued, 30)];
        insert_sorted_by_created_at(&mut orders, order("b", 1, Queued, 20));
        insert_sorted_by_created_at(&mut orders, order("d", 1, Queued, 40));
        insert_sorted_by_created_at(&mut orders, order("z", 1, Queued, 1));
        insert_sorted_by_created_at(&mut orders, order("a2", 1, Queued, 10));

        let ids: Vec<_> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "a2", "b", "c", "d"]);
    }

    #[test]
    fn test_sort_by_created_at() {
        let mut orders = vec![order("b", 1, Queued, 20), order("a", 1, Queued, 10)];
        sort_by_created_at(&mut orders);
        assert_eq!(orders[0].id, "a");
    }
}
