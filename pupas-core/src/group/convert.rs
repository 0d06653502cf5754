//! Turn a group order into a table order for the kitchen

use rust_decimal::Decimal;
use shared::models::{GroupOrder, LineItem, MenuCategory, MenuItem, TableOrder, TableOrderStatus};
use shared::util::{now_millis, prefixed_id};
use tracing::info;

use super::display::pupusa_label;
use super::money::{to_decimal, to_f64};
use super::summary::subtotal;

/// Build a queued table order from a group order
///
/// One line per distinct item at a given unit price, in the order items first
/// appear across people. Pupusa lines are named by their label, beverage
/// lines by the beverage name. The total is the group subtotal (no tip).
pub fn to_table_order(order: &GroupOrder, table_number: u32) -> TableOrder {
    let mut lines: Vec<(MenuItem, i32)> = Vec::new();
    let mut push = |menu_item: MenuItem, quantity: i32| {
        let price = to_decimal(menu_item.price);
        match lines
            .iter_mut()
            .find(|(m, _)| m.id == menu_item.id && to_decimal(m.price) == price)
        {
            Some((_, qty)) => *qty = qty.saturating_add(quantity),
            None => lines.push((menu_item, quantity)),
        }
    };

    for person in &order.people {
        for pupusa in &person.pupusas {
            push(
                MenuItem {
                    id: format!(
                        "{}-{}-{}-{}",
                        pupusa.dough.as_str(),
                        pupusa.filling.as_str(),
                        if pupusa.with_cheese { "queso" } else { "solo" },
                        pupusa.size.as_str()
                    ),
                    name: pupusa_label(pupusa.dough, pupusa.filling, pupusa.with_cheese, pupusa.size),
                    price: pupusa.price_usd,
                    category: MenuCategory::Pupusa,
                },
                pupusa.quantity,
            );
        }
        for beverage in &person.beverages {
            push(
                MenuItem {
                    id: format!("bebida-{}", beverage.name.to_lowercase()),
                    name: beverage.name.clone(),
                    price: beverage.price_usd,
                    category: MenuCategory::Beverage,
                },
                beverage.quantity,
            );
        }
    }

    let line_items: Vec<LineItem> = lines
        .into_iter()
        .map(|(menu_item, quantity)| LineItem {
            id: prefixed_id("line"),
            menu_item,
            quantity,
            note: String::new(),
        })
        .collect();

    let total: Decimal = subtotal(order);
    let table_order = TableOrder {
        id: prefixed_id("order"),
        table_number,
        line_items,
        status: TableOrderStatus::Queued,
        created_at: now_millis(),
        total: to_f64(total),
        status_edited: false,
    };

    info!(
        group = %order.group_name,
        table_number,
        lines = table_order.line_items.len(),
        total = table_order.total,
        "Group order converted to table order"
    );
    table_order
}
