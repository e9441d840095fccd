//! Behavioral traits for hookwright components
//!
//! Turning raw descriptor entries into typed actions belongs to the
//! descriptor tooling, not to hook composition. The composer only depends on
//! the interface below, so any extractor (or a closure in tests) can be
//! plugged in.

use crate::Result;
use crate::action::ActionMap;
use crate::hook::RawHookBody;

/// Action extraction interface
///
/// Converts a raw hook body into an ordered map of typed actions.
///
/// # Examples
///
/// ```ignore
/// fn compose(extractor: &dyn ActionExtractor, body: &RawHookBody) -> Result<ActionMap> {
///     let actions = extractor.extract_actions(body)?;
///     // ... augment actions
///     Ok(actions)
/// }
/// ```
pub trait ActionExtractor {
    /// Extract the actions of a hook body, preserving their order
    ///
    /// # Errors
    ///
    /// Returns an error if an entry is not a well-formed action
    fn extract_actions(&self, body: &RawHookBody) -> Result<ActionMap>;
}

/// Implement `ActionExtractor` for closures
impl<F> ActionExtractor for F
where
    F: Fn(&RawHookBody) -> Result<ActionMap>,
{
    fn extract_actions(&self, body: &RawHookBody) -> Result<ActionMap> {
        self(body)
    }
}
