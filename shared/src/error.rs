//! Error types shared across the workspace
//!
//! `OrderError` covers rejections raised at the input boundary (blank names,
//! non-positive quantities, empty carts) and the kitchen board's lookups and
//! status transitions. The group reducer never produces one: it no-ops on
//! unknown ids instead.

use crate::models::TableOrderStatus;
use thiserror::Error;

/// Order domain errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Name must not be blank")]
    BlankName,

    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(i32),

    #[error("Quantity must be at most {max}, got {got}")]
    QuantityTooLarge { got: i32, max: i32 },

    #[error("Price must be a finite non-negative number")]
    InvalidPrice,

    #[error("People count must be between 1 and {max}, got {got}")]
    InvalidPeopleCount { got: usize, max: usize },

    #[error("Unknown tip percentage: {0}")]
    InvalidTip(u32),

    #[error("No table selected")]
    NoTableSelected,

    #[error("Unknown table: {0}")]
    UnknownTable(u32),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: TableOrderStatus,
        to: TableOrderStatus,
    },
}

pub type OrderResult<T> = Result<T, OrderError>;
