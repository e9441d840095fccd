//! Rollback action synthesis

use hookwright_core::{ActionMap, ActionObject, HookKind};

/// Step type restoring the media directory
pub const MEDIA_ROLLBACK_TYPE: &str = "mediaRollBack";

/// Step type restoring the database
pub const DB_ROLLBACK_TYPE: &str = "dbRollBack";

/// Build the rollback actions for a hook
///
/// Always returns exactly two actions, media first:
/// `rollbackMedia{Kind}` and `rollbackDB{Kind}`.
#[must_use]
pub fn rollback_actions(kind: HookKind) -> ActionMap {
    let suffix = kind.id_suffix();
    [
        ActionObject::bare(format!("rollbackMedia{suffix}"), MEDIA_ROLLBACK_TYPE),
        ActionObject::bare(format!("rollbackDB{suffix}"), DB_ROLLBACK_TYPE),
    ]
    .into_iter()
    .collect()
}
