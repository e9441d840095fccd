//! The hooks of one test

use hookwright_core::{HookKind, HookObject};
use indexmap::IndexMap;
use serde::Serialize;

/// All hooks of a single test, keyed by kind
///
/// Iterates in insertion order and serializes as a map keyed by hook label.
/// Equality takes the order of hooks into account.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct HookSet {
    hooks: IndexMap<HookKind, HookObject>,
}

impl HookSet {
    /// Create an empty hook set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a hook under its own kind, returning any hook it replaced
    pub fn insert(&mut self, hook: HookObject) -> Option<HookObject> {
        self.hooks.insert(hook.kind(), hook)
    }

    /// Get the hook of the given kind
    #[must_use]
    pub fn get(&self, kind: HookKind) -> Option<&HookObject> {
        self.hooks.get(&kind)
    }

    /// Check whether a hook of the given kind exists
    #[must_use]
    pub fn contains(&self, kind: HookKind) -> bool {
        self.hooks.contains_key(&kind)
    }

    /// The before hook, if any
    #[must_use]
    pub fn before(&self) -> Option<&HookObject> {
        self.get(HookKind::Before)
    }

    /// The after hook, if any
    #[must_use]
    pub fn after(&self) -> Option<&HookObject> {
        self.get(HookKind::After)
    }

    /// The failure hook, if any
    #[must_use]
    pub fn failed(&self) -> Option<&HookObject> {
        self.get(HookKind::Failed)
    }

    /// Number of hooks
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Check if there are no hooks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Hook kinds in insertion order
    pub fn kinds(&self) -> impl Iterator<Item = HookKind> + '_ {
        self.hooks.keys().copied()
    }

    /// Hooks in insertion order
    pub fn iter(&self) -> indexmap::map::Values<'_, HookKind, HookObject> {
        self.hooks.values()
    }
}

impl PartialEq for HookSet {
    fn eq(&self, other: &Self) -> bool {
        self.hooks.iter().eq(other.hooks.iter())
    }
}

impl IntoIterator for HookSet {
    type Item = HookObject;
    type IntoIter = indexmap::map::IntoValues<HookKind, HookObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.hooks.into_values()
    }
}

impl<'a> IntoIterator for &'a HookSet {
    type Item = &'a HookObject;
    type IntoIter = indexmap::map::Values<'a, HookKind, HookObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.hooks.values()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use hookwright_core::{ActionMap, ActionObject};

    fn hook(kind: HookKind, step: &str) -> HookObject {
        HookObject::new(
            kind,
            "T",
            [ActionObject::bare(step, "click")].into_iter().collect(),
        )
    }

    #[test]
    fn test_hook_set_default() {
        let set = HookSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.before().is_none());
        assert!(set.after().is_none());
        assert!(set.failed().is_none());
    }

    #[test]
    fn test_hook_set_insert_and_lookup() {
        let mut set = HookSet::new();
        set.insert(hook(HookKind::After, "logout"));
        set.insert(hook(HookKind::Before, "login"));

        assert_eq!(set.len(), 2);
        assert!(set.contains(HookKind::Before));
        assert!(!set.contains(HookKind::Failed));
        assert!(set.after().unwrap().action("logout").is_some());
        assert_eq!(
            set.kinds().collect::<Vec<_>>(),
            vec![HookKind::After, HookKind::Before]
        );
    }

    #[test]
    fn test_hook_set_iterates_in_insertion_order() {
        let mut set = HookSet::new();
        set.insert(hook(HookKind::Before, "login"));
        set.insert(hook(HookKind::After, "logout"));
        set.insert(hook(HookKind::Failed, "saveScreenshot"));

        let expected = vec![HookKind::Before, HookKind::After, HookKind::Failed];
        assert_eq!(set.iter().map(HookObject::kind).collect::<Vec<_>>(), expected);
        assert_eq!((&set).into_iter().map(HookObject::kind).collect::<Vec<_>>(), expected);
        assert_eq!(set.into_iter().map(|h| h.kind()).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_hook_set_equality_respects_order() {
        let mut first = HookSet::new();
        first.insert(hook(HookKind::Before, "login"));
        first.insert(hook(HookKind::Failed, "saveScreenshot"));

        let mut second = HookSet::new();
        second.insert(hook(HookKind::Failed, "saveScreenshot"));
        second.insert(hook(HookKind::Before, "login"));

        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }

    #[test]
    fn test_hook_set_insert_replaces_same_kind() {
        let mut set = HookSet::new();
        set.insert(hook(HookKind::Failed, "first"));
        let replaced = set.insert(hook(HookKind::Failed, "second")).unwrap();

        assert!(replaced.action("first").is_some());
        assert_eq!(set.len(), 1);
        assert!(set.failed().unwrap().action("second").is_some());
    }

    #[test]
    fn test_hook_set_serialize_keys_by_label() {
        let mut set = HookSet::new();
        set.insert(HookObject::new(HookKind::Failed, "T", ActionMap::new()));

        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value["failed"]["type"], "failed");
        assert_eq!(value["failed"]["parentName"], "T");
    }
}
