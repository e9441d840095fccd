//! Hook kinds and hook descriptors

use crate::action::{ActionMap, ActionObject};
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw hook body as produced by the descriptor parser
///
/// Keys are the raw entry names, values the untyped entry content.
pub type RawHookBody = IndexMap<String, serde_json::Value>;

/// Point in a test's lifecycle a hook is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookKind {
    /// Runs before the test body
    Before,
    /// Runs after the test body
    After,
    /// Runs when the test fails
    Failed,
}

impl HookKind {
    /// All hook kinds in lifecycle order
    pub const ALL: [HookKind; 3] = [HookKind::Before, HookKind::After, HookKind::Failed];

    /// Canonical label used in test descriptors
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HookKind::Before => "before",
            HookKind::After => "after",
            HookKind::Failed => "failed",
        }
    }

    /// Suffix appended to ids of actions synthesized for this hook
    ///
    /// Keeps synthesized ids distinct across hooks of the same test,
    /// e.g. `rollbackMediaAfter` vs `rollbackMediaFailed`.
    #[must_use]
    pub fn id_suffix(self) -> &'static str {
        match self {
            HookKind::Before => "Before",
            HookKind::After => "After",
            HookKind::Failed => "Failed",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        HookKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownHookKind(s.to_string()))
    }
}

/// A fully composed hook: its kind, owning test, and ordered actions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HookObject {
    #[serde(rename = "type")]
    kind: HookKind,

    #[serde(rename = "parentName")]
    parent_name: String,

    actions: ActionMap,
}

impl HookObject {
    /// Create a hook descriptor
    pub fn new(kind: HookKind, parent_name: impl Into<String>, actions: ActionMap) -> Self {
        Self {
            kind,
            parent_name: parent_name.into(),
            actions,
        }
    }

    /// Lifecycle point of this hook
    #[must_use]
    pub fn kind(&self) -> HookKind {
        self.kind
    }

    /// Name of the test owning this hook
    #[must_use]
    pub fn parent_name(&self) -> &str {
        &self.parent_name
    }

    /// Actions in execution order
    #[must_use]
    pub fn actions(&self) -> &ActionMap {
        &self.actions
    }

    /// Look up a single action by id
    #[must_use]
    pub fn action(&self, id: &str) -> Option<&ActionObject> {
        self.actions.get(id)
    }

    /// Consume the hook and return its actions
    #[must_use]
    pub fn into_actions(self) -> ActionMap {
        self.actions
    }
}
