//! Action descriptors and the ordered action map
//!
//! An [`ActionObject`] is one executable step of a hook. Hooks keep their
//! actions in an [`ActionMap`], whose iteration order is the order the steps
//! are executed in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single executable step
///
/// Actions are immutable once constructed. Attribute order is preserved for
/// output but ignored by equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionObject {
    #[serde(rename = "stepKey")]
    step_key: String,

    #[serde(rename = "type")]
    step_type: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    attributes: IndexMap<String, serde_json::Value>,
}

impl ActionObject {
    /// Attribute marking a pause step that was injected by the framework
    /// rather than written by a test author
    pub const PAUSE_ACTION_INTERNAL_ATTRIBUTE: &'static str = "pauseActionInternal";

    /// Create a new action
    pub fn new(
        step_key: impl Into<String>,
        step_type: impl Into<String>,
        attributes: IndexMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            step_key: step_key.into(),
            step_type: step_type.into(),
            attributes,
        }
    }

    /// Create an action without attributes
    pub fn bare(step_key: impl Into<String>, step_type: impl Into<String>) -> Self {
        Self::new(step_key, step_type, IndexMap::new())
    }

    /// Identifier of this action, unique within its hook
    #[must_use]
    pub fn step_key(&self) -> &str {
        &self.step_key
    }

    /// Name of the operation this action performs
    #[must_use]
    pub fn step_type(&self) -> &str {
        &self.step_type
    }

    /// Named attributes of this action
    #[must_use]
    pub fn attributes(&self) -> &IndexMap<String, serde_json::Value> {
        &self.attributes
    }

    /// Look up a single attribute
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&serde_json::Value> {
        self.attributes.get(name)
    }
}

/// Insertion-ordered map of action id to action
///
/// Keys are always the `step_key` of the action they point to. Two maps are
/// equal only if they hold equal actions in the same order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ActionMap {
    actions: IndexMap<String, ActionObject>,
}

impl ActionMap {
    /// Create an empty action map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an action keyed by its own id
    ///
    /// A new id is appended. An existing id is overwritten in place and the
    /// previous action is returned.
    pub fn insert(&mut self, action: ActionObject) -> Option<ActionObject> {
        self.actions.insert(action.step_key.clone(), action)
    }

    /// Append every action of `other`, in order
    ///
    /// Ids already present that `other` does not mention keep their position.
    /// An id present in both is overwritten by the action from `other` and
    /// moved to the end, so merged actions always come last.
    pub fn merge(&mut self, other: ActionMap) {
        for (id, action) in other.actions {
            if self.actions.shift_remove(&id).is_some() {
                tracing::warn!(
                    action = %id,
                    "Action id collides with an existing action, later definition wins"
                );
            }
            self.actions.insert(id, action);
        }
    }

    /// Get an action by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ActionObject> {
        self.actions.get(id)
    }

    /// Check whether an action with this id exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.actions.contains_key(id)
    }

    /// Number of actions
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if there are no actions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Action ids in execution order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Actions in execution order
    pub fn iter(&self) -> indexmap::map::Values<'_, String, ActionObject> {
        self.actions.values()
    }
}

impl PartialEq for ActionMap {
    fn eq(&self, other: &Self) -> bool {
        self.actions.iter().eq(other.actions.iter())
    }
}

impl FromIterator<ActionObject> for ActionMap {
    fn from_iter<I: IntoIterator<Item = ActionObject>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl Extend<ActionObject> for ActionMap {
    fn extend<I: IntoIterator<Item = ActionObject>>(&mut self, iter: I) {
        for action in iter {
            self.insert(action);
        }
    }
}

impl IntoIterator for ActionMap {
    type Item = ActionObject;
    type IntoIter = indexmap::map::IntoValues<String, ActionObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_values()
    }
}

impl<'a> IntoIterator for &'a ActionMap {
    type Item = &'a ActionObject;
    type IntoIter = indexmap::map::Values<'a, String, ActionObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.values()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use serde_json::json;

    fn ids(map: &ActionMap) -> Vec<&str> {
        map.ids().collect()
    }

    #[test]
    fn test_insert_appends_new_ids() {
        let map: ActionMap = [
            ActionObject::bare("openPage", "amOnPage"),
            ActionObject::bare("clickSave", "click"),
        ]
        .into_iter()
        .collect();

        assert_eq!(ids(&map), vec!["openPage", "clickSave"]);
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut map = ActionMap::new();
        map.insert(ActionObject::bare("a", "click"));
        map.insert(ActionObject::bare("b", "click"));

        let previous = map.insert(ActionObject::bare("a", "fillField"));

        assert_eq!(previous.unwrap().step_type(), "click");
        assert_eq!(ids(&map), vec!["a", "b"]);
        assert_eq!(map.get("a").unwrap().step_type(), "fillField");
    }

    #[test]
    fn test_merge_appends_in_order() {
        let mut map: ActionMap = [ActionObject::bare("a", "click")].into_iter().collect();
        let other: ActionMap = [
            ActionObject::bare("b", "click"),
            ActionObject::bare("c", "click"),
        ]
        .into_iter()
        .collect();

        map.merge(other);

        assert_eq!(ids(&map), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_merge_collision_moves_to_end_and_wins() {
        let mut map: ActionMap = [
            ActionObject::bare("a", "click"),
            ActionObject::bare("b", "click"),
            ActionObject::bare("c", "click"),
        ]
        .into_iter()
        .collect();
        let other: ActionMap = [ActionObject::bare("a", "dbRollBack")].into_iter().collect();

        map.merge(other);

        assert_eq!(ids(&map), vec!["b", "c", "a"]);
        assert_eq!(map.get("a").unwrap().step_type(), "dbRollBack");
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_merge_into_empty() {
        let mut map = ActionMap::new();
        map.merge([ActionObject::bare("x", "pause")].into_iter().collect());
        assert_eq!(ids(&map), vec!["x"]);
    }

    #[test]
    fn test_action_map_equality_respects_order() {
        let forward: ActionMap = [
            ActionObject::bare("saveScreenshot", "saveScreenshot"),
            ActionObject::bare("rollbackDBFailed", "dbRollBack"),
        ]
        .into_iter()
        .collect();
        let reversed: ActionMap = [
            ActionObject::bare("rollbackDBFailed", "dbRollBack"),
            ActionObject::bare("saveScreenshot", "saveScreenshot"),
        ]
        .into_iter()
        .collect();

        assert_ne!(forward, reversed);
        assert_eq!(forward, forward.clone());
    }

    #[test]
    fn test_action_equality_ignores_attribute_order() {
        let mut first = IndexMap::new();
        first.insert("selector".to_string(), json!("#save"));
        first.insert("timeout".to_string(), json!(30));

        let mut second = IndexMap::new();
        second.insert("timeout".to_string(), json!(30));
        second.insert("selector".to_string(), json!("#save"));

        assert_eq!(
            ActionObject::new("clickSave", "click", first),
            ActionObject::new("clickSave", "click", second)
        );
    }

    #[test]
    fn test_attribute_lookup() {
        let mut attributes = IndexMap::new();
        attributes.insert(
            ActionObject::PAUSE_ACTION_INTERNAL_ATTRIBUTE.to_string(),
            json!(true),
        );
        let action = ActionObject::new("pauseWhenFailed", "pause", attributes);

        assert_eq!(
            action.attribute(ActionObject::PAUSE_ACTION_INTERNAL_ATTRIBUTE),
            Some(&json!(true))
        );
        assert!(action.attribute("selector").is_none());
    }

    #[test]
    fn test_serialize_action_map() {
        let map: ActionMap = [
            ActionObject::bare("saveScreenshot", "saveScreenshot"),
            ActionObject::new(
                "fill",
                "fillField",
                [("userInput".to_string(), json!("admin"))].into_iter().collect(),
            ),
        ]
        .into_iter()
        .collect();

        let value = serde_json::to_value(&map).unwrap();

        assert_eq!(
            value,
            json!({
                "saveScreenshot": {"stepKey": "saveScreenshot", "type": "saveScreenshot"},
                "fill": {"stepKey": "fill", "type": "fillField", "attributes": {"userInput": "admin"}}
            })
        );
    }

    #[test]
    fn test_deserialize_action_without_attributes() {
        let action: ActionObject =
            serde_json::from_value(json!({"stepKey": "reload", "type": "reloadPage"})).unwrap();
        assert_eq!(action, ActionObject::bare("reload", "reloadPage"));
    }

    #[test]
    fn test_into_iter_yields_actions_in_order() {
        let map: ActionMap = [
            ActionObject::bare("first", "click"),
            ActionObject::bare("second", "click"),
        ]
        .into_iter()
        .collect();

        let keys: Vec<String> = map
            .into_iter()
            .map(|action| action.step_key().to_string())
            .collect();
        assert_eq!(keys, vec!["first", "second"]);
    }
}
