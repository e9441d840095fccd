//! # Hookwright Engine
//!
//! Composes the lifecycle hooks of a functional test.
//!
//! - **Explicit hooks**: `before`/`after` hooks written in a test descriptor,
//!   extracted through an [`ActionExtractor`] and augmented with rollback steps
//! - **Implicit hooks**: the failure hook and the per-test rollback hook,
//!   synthesized from settings alone
//! - **Hook sets**: every hook of one test, assembled in one call

pub mod hooks;

// Re-export error types from core
pub use hookwright_core::{Error, Result};

// Re-export commonly used types
pub use hookwright_config::{HookSettings, RollbackMode};
pub use hookwright_core::{ActionExtractor, ActionMap, ActionObject, HookKind, HookObject, RawHookBody};
pub use hooks::{HookComposer, HookSet, default_after_hook, default_failed_hook, rollback_actions};
