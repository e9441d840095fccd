//! Configuration management for hookwright
//!
//! This crate handles:
//! - Hook composition settings (rollback mode, pause on failure)
//! - Logging initialization

pub mod logging;
pub mod settings;

// Re-export error types from core
pub use hookwright_core::{Error, Result};

pub use settings::{ENABLE_PAUSE_ENV, HookSettings, ROLLBACK_ENV, RollbackMode};
