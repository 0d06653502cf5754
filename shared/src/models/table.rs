//! Table Order Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Table numbers served by the floor
pub const TABLE_NUMBERS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Kitchen status of a table order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TableOrderStatus {
    #[default]
    Queued,
    Preparing,
    Ready,
}

impl TableOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableOrderStatus::Queued => "queued",
            TableOrderStatus::Preparing => "preparing",
            TableOrderStatus::Ready => "ready",
        }
    }

    /// Queued and preparing orders keep their table occupied
    pub fn is_active(&self) -> bool {
        matches!(self, TableOrderStatus::Queued | TableOrderStatus::Preparing)
    }
}

impl fmt::Display for TableOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Pupusa,
    Beverage,
}

/// Menu entry referenced by line items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Unit price in USD
    pub price: f64,
    pub category: MenuCategory,
}

/// Line of a table order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: String,
    pub menu_item: MenuItem,
    pub quantity: i32,
    #[serde(default)]
    pub note: String,
}

impl LineItem {
    pub fn line_total(&self) -> f64 {
        self.menu_item.price * self.quantity as f64
    }
}

/// Order sent to the kitchen for a table
///
/// Several orders may exist for the same table over time; whether a table is
/// occupied is derived from the statuses of its orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableOrder {
    pub id: String,
    pub table_number: u32,
    pub line_items: Vec<LineItem>,
    pub status: TableOrderStatus,
    /// Creation time (Unix millis)
    pub created_at: i64,
    /// Total in USD
    pub total: f64,
    /// Status was set in the kitchen and is not known to the remote service
    #[serde(default)]
    pub status_edited: bool,
}

impl TableOrder {
    /// Units across all lines
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|l| i64::from(l.quantity)).sum()
    }
}
