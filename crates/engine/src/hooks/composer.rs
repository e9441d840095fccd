//! Explicit hook composition
//!
//! Turns the raw `before`/`after` bodies of a test descriptor into hook
//! objects, and assembles every hook of a test in one call.

use super::defaults::{default_after_hook, default_failed_hook};
use super::rollback::rollback_actions;
use super::set::HookSet;
use hookwright_config::HookSettings;
use hookwright_core::{ActionExtractor, HookKind, HookObject, RawHookBody, Result};
use indexmap::IndexMap;
use std::borrow::Cow;

/// Descriptor keys that describe the hook element itself rather than an action
pub const DESCRIPTOR_TAGS: &[&str] = &["nodeName"];

/// Composes hooks from raw descriptor bodies
///
/// Action extraction is delegated to `E`; the composer only orders and
/// augments what the extractor returns.
///
/// # Examples
///
/// ```ignore
/// let composer = HookComposer::new(extractor, HookSettings::from_env());
/// let after = composer.compose_hook("AdminLoginTest", HookKind::After, &body)?;
/// let failed = composer.default_failed_hook("AdminLoginTest");
/// ```
#[derive(Debug, Clone)]
pub struct HookComposer<E> {
    extractor: E,
    settings: HookSettings,
}

impl<E> HookComposer<E>
where
    E: ActionExtractor,
{
    /// Create a composer using the given extractor and settings
    pub fn new(extractor: E, settings: HookSettings) -> Self {
        Self {
            extractor,
            settings,
        }
    }

    /// Settings this composer was created with
    #[must_use]
    pub fn settings(&self) -> &HookSettings {
        &self.settings
    }

    /// Compose an explicit hook
    ///
    /// Actions come from the extractor in written order. In per-test rollback
    /// mode an after hook additionally ends with `rollbackMediaAfter` and
    /// `rollbackDBAfter`, replacing any written action with the same id.
    ///
    /// # Errors
    ///
    /// Returns the extractor's error unchanged if an entry is malformed
    #[tracing::instrument(skip_all, fields(parent = %parent_name, hook = %kind))]
    pub fn compose_hook(
        &self,
        parent_name: &str,
        kind: HookKind,
        body: &RawHookBody,
    ) -> Result<HookObject> {
        let body = strip_descriptor_tags(body);
        let mut actions = self.extractor.extract_actions(&body)?;
        tracing::trace!(actions = actions.len(), "Extracted hook actions");

        if kind == HookKind::After && self.settings.rollback_per_test() {
            tracing::debug!("Appending per-test rollback actions");
            actions.merge(rollback_actions(kind));
        }

        Ok(HookObject::new(kind, parent_name, actions))
    }

    /// Create the failure hook for a test
    #[must_use]
    pub fn default_failed_hook(&self, parent_name: &str) -> HookObject {
        default_failed_hook(parent_name, &self.settings)
    }

    /// Create the rollback-only after hook for a test, if per-test rollback is on
    #[must_use]
    pub fn default_after_hook(&self, parent_name: &str) -> Option<HookObject> {
        default_after_hook(parent_name, &self.settings)
    }

    /// Compose every hook of a test
    ///
    /// Explicit hooks are composed in the given order. A rollback-only after
    /// hook is added when the test has no after hook of its own, and the
    /// failure hook is always added last. Failure hooks cannot be written
    /// explicitly; a `Failed` entry in `explicit` is ignored.
    ///
    /// # Errors
    ///
    /// Returns the first extraction error; no partial set is returned
    #[tracing::instrument(skip_all, fields(parent = %parent_name))]
    pub fn compose_test_hooks(
        &self,
        parent_name: &str,
        explicit: &IndexMap<HookKind, RawHookBody>,
    ) -> Result<HookSet> {
        let mut set = HookSet::new();

        for (&kind, body) in explicit {
            if kind == HookKind::Failed {
                tracing::warn!("Ignoring explicit failed hook, it is always synthesized");
                continue;
            }
            set.insert(self.compose_hook(parent_name, kind, body)?);
        }

        if !set.contains(HookKind::After)
            && let Some(after) = self.default_after_hook(parent_name)
        {
            set.insert(after);
        }

        set.insert(self.default_failed_hook(parent_name));

        Ok(set)
    }
}

/// Remove descriptor tags from a raw hook body
///
/// Borrows the body unchanged when it carries no tags.
fn strip_descriptor_tags(body: &RawHookBody) -> Cow<'_, RawHookBody> {
    if !DESCRIPTOR_TAGS.iter().any(|tag| body.contains_key(*tag)) {
        return Cow::Borrowed(body);
    }

    Cow::Owned(
        body.iter()
            .filter(|(key, _)| !DESCRIPTOR_TAGS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
    )
}
