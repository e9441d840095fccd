//! Hook composition
//!
//! Builds the ordered action list of every hook a test runs.
//!
//! ## Composition Model
//!
//! - Explicit hooks keep the order their actions were written in
//! - Synthesized actions are always appended after existing ones
//! - An id written twice keeps the later action (last write wins)
//! - Rollback action ids carry the hook kind, so the same test can roll back
//!   in both its after hook and its failure hook
//!
//! ## Module Organization
//!
//! - `composer`: explicit hooks and whole-test assembly
//! - `defaults`: implicit failure and after hooks
//! - `rollback`: rollback action synthesis
//! - `set`: the hooks of one test, keyed by kind

pub mod composer;
pub mod defaults;
pub mod rollback;
pub mod set;

pub use composer::HookComposer;
pub use defaults::{default_after_hook, default_failed_hook};
pub use rollback::rollback_actions;
pub use set::HookSet;
