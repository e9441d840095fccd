//! Implicit hooks
//!
//! Hooks that no test author writes: the failure hook every test gets, and
//! the after hook added purely for per-test rollback.

use super::rollback::rollback_actions;
use hookwright_config::HookSettings;
use hookwright_core::{ActionMap, ActionObject, HookKind, HookObject};
use indexmap::IndexMap;

/// Id and step type of the screenshot taken when a test fails
pub const SAVE_SCREENSHOT_ACTION: &str = "saveScreenshot";

/// Id of the pause injected when a test fails
pub const PAUSE_WHEN_FAILED_ACTION: &str = "pauseWhenFailed";

/// Step type of the injected pause
pub const PAUSE_TYPE: &str = "pause";

/// Create the failure hook for a test
///
/// Actions, in order:
/// 1. `saveScreenshot`, always
/// 2. `pauseWhenFailed`, when pause is enabled
/// 3. `rollbackMediaFailed` and `rollbackDBFailed`, in on-failure rollback mode
#[must_use]
pub fn default_failed_hook(parent_name: &str, settings: &HookSettings) -> HookObject {
    let mut actions = ActionMap::new();
    actions.insert(ActionObject::bare(
        SAVE_SCREENSHOT_ACTION,
        SAVE_SCREENSHOT_ACTION,
    ));

    if settings.enable_pause {
        let mut attributes = IndexMap::new();
        attributes.insert(
            ActionObject::PAUSE_ACTION_INTERNAL_ATTRIBUTE.to_string(),
            serde_json::Value::Bool(true),
        );
        actions.insert(ActionObject::new(
            PAUSE_WHEN_FAILED_ACTION,
            PAUSE_TYPE,
            attributes,
        ));
    }

    if settings.rollback_on_failure() {
        actions.merge(rollback_actions(HookKind::Failed));
    }

    tracing::debug!(
        parent = %parent_name,
        actions = actions.len(),
        "Created default failed hook"
    );

    HookObject::new(HookKind::Failed, parent_name, actions)
}

/// Create the rollback-only after hook for a test
///
/// Returns `None` unless per-test rollback is enabled.
#[must_use]
pub fn default_after_hook(parent_name: &str, settings: &HookSettings) -> Option<HookObject> {
    if !settings.rollback_per_test() {
        return None;
    }

    tracing::debug!(parent = %parent_name, "Created default after hook for per-test rollback");

    Some(HookObject::new(
        HookKind::After,
        parent_name,
        rollback_actions(HookKind::After),
    ))
}
