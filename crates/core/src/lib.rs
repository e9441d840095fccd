//! Core types for hookwright
//!
//! This is the foundation crate (Layer 0) that the other hookwright crates depend on.
//! It provides:
//! - Action descriptors and the ordered action map
//! - Hook kinds and hook descriptors
//! - Base error types
//! - The action extraction seam (`ActionExtractor`)
//!
//! This crate has no dependencies on other hookwright crates.

pub mod action;
pub mod error;
pub mod hook;
pub mod traits;

pub use action::{ActionMap, ActionObject};
pub use error::{Error, Result};
pub use hook::{HookKind, HookObject, RawHookBody};
pub use traits::ActionExtractor;
