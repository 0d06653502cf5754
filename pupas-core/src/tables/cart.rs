//! Waiter cart
//!
//! Lines keyed by menu item: adding an item already in the cart bumps its
//! line instead of adding a second one.

use rust_decimal::Decimal;
use shared::models::{find_menu_item, LineItem, MenuItem, TableOrder, TableOrderStatus, TABLE_NUMBERS};
use shared::util::{is_blank, now_millis, prefixed_id};
use shared::{OrderError, OrderResult};

use crate::group::money::{line_total, to_f64};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity of a menu item in the cart
    pub fn quantity_of(&self, menu_item_id: &str) -> i32 {
        self.lines
            .iter()
            .find(|l| l.menu_item.id == menu_item_id)
            .map_or(0, |l| l.quantity)
    }

    /// Add one unit of a menu item
    pub fn add(&mut self, menu_item: &MenuItem) {
        match self.lines.iter_mut().find(|l| l.menu_item.id == menu_item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(LineItem {
                id: prefixed_id("line"),
                menu_item: menu_item.clone(),
                quantity: 1,
                note: String::new(),
            }),
        }
    }

    /// Change a menu item's quantity by `delta`
    ///
    /// The line goes away at zero. A positive delta on an item not in the
    /// cart adds one unit of it, if the id is on the menu.
    pub fn change_quantity(&mut self, menu_item_id: &str, delta: i32) {
        match self.lines.iter().position(|l| l.menu_item.id == menu_item_id) {
            Some(index) => {
                let quantity = self.lines[index].quantity.saturating_add(delta);
                if quantity <= 0 {
                    self.lines.remove(index);
                } else {
                    self.lines[index].quantity = quantity;
                }
            }
            None if delta > 0 => {
                if let Some(menu_item) = find_menu_item(menu_item_id) {
                    self.add(&menu_item);
                }
            }
            None => {}
        }
    }

    /// One more unit on a line
    pub fn increment(&mut self, line_id: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == line_id) {
            line.quantity += 1;
        }
    }

    /// One less unit on a line; the last unit removes the line
    pub fn decrement(&mut self, line_id: &str) {
        if let Some(index) = self.lines.iter().position(|l| l.id == line_id) {
            if self.lines[index].quantity > 1 {
                self.lines[index].quantity -= 1;
            } else {
                self.lines.remove(index);
            }
        }
    }

    pub fn set_note(&mut self, line_id: &str, note: impl Into<String>) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == line_id) {
            line.note = note.into();
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|l| line_total(l.quantity, l.menu_item.price))
            .sum()
    }

    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| i64::from(l.quantity)).sum()
    }

    /// Draft a queued order for `table` without touching the cart
    ///
    /// Non-blank `global_notes` replace every line's note.
    pub fn checkout(&self, table: Option<u32>, global_notes: &str) -> OrderResult<TableOrder> {
        let table_number = table.ok_or(OrderError::NoTableSelected)?;
        if !TABLE_NUMBERS.contains(&table_number) {
            return Err(OrderError::UnknownTable(table_number));
        }
        if self.lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let mut line_items = self.lines.clone();
        if !is_blank(global_notes) {
            for line in &mut line_items {
                line.note = global_notes.to_string();
            }
        }

        Ok(TableOrder {
            id: prefixed_id("order"),
            table_number,
            line_items,
            status: TableOrderStatus::Queued,
            created_at: now_millis(),
            total: to_f64(self.total()),
            status_edited: false,
        })
    }

    /// Turn the cart into a queued order for `table`
    ///
    /// The cart is emptied on success and left alone on error.
    pub fn submit(&mut self, table: Option<u32>, global_notes: &str) -> OrderResult<TableOrder> {
        let order = self.checkout(table, global_notes)?;
        self.lines.clear();
        Ok(order)
    }
}
