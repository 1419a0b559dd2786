//! Shared types and configuration for the lifegrid workspace.

pub mod config;
pub mod types;

pub use config::{ConfigError, SimConfig};
pub use types::CellPos;
