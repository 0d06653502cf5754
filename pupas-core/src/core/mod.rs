//! Process-level setup: configuration

pub mod config;

pub use config::Config;
