//! Target and property storage seen by the evaluator.

use genex_ir::TargetId;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::ExpressionCache;

/// Read access to targets and their properties.
///
/// Implemented by the host's build model. Lookups must be cheap and
/// thread-safe; evaluation holds no locks across calls.
pub trait TargetModel: Send + Sync {
    /// Resolve a target name.
    fn find_target(&self, name: &str) -> Option<TargetId>;

    /// Value of `name` on `target` for `config`, if set.
    fn property(&self, target: &TargetId, name: &str, config: &str) -> Option<String>;

    /// Parsed-tree cache for property values, if the storage keeps one.
    fn expression_cache(&self) -> Option<&ExpressionCache> {
        None
    }
}

#[derive(Clone, Debug, Default)]
struct TargetProperties {
    base: FxHashMap<String, String>,
    /// Keyed by upper-cased configuration name.
    per_config: FxHashMap<String, FxHashMap<String, String>>,
}

/// Simple in-memory [`TargetModel`].
///
/// Per-configuration values override base values; configuration names
/// match case-insensitively.
#[derive(Debug, Default)]
pub struct InMemoryModel {
    targets: RwLock<FxHashMap<TargetId, TargetProperties>>,
    cache: ExpressionCache,
}

impl InMemoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` if missing and return its id.
    pub fn add_target(&self, name: &str) -> TargetId {
        let id = TargetId::new(name);
        self.targets.write().entry(id.clone()).or_default();
        id
    }

    /// Set a base property value, creating the target if needed.
    pub fn set_property(&self, target: &str, name: &str, value: impl Into<String>) {
        let replaced = self
            .targets
            .write()
            .entry(TargetId::new(target))
            .or_default()
            .base
            .insert(name.to_string(), value.into());
        self.forget(replaced);
    }

    /// Set a value used only for `config`.
    pub fn set_config_property(
        &self,
        target: &str,
        config: &str,
        name: &str,
        value: impl Into<String>,
    ) {
        let replaced = self
            .targets
            .write()
            .entry(TargetId::new(target))
            .or_default()
            .per_config
            .entry(config.to_ascii_uppercase())
            .or_default()
            .insert(name.to_string(), value.into());
        self.forget(replaced);
    }

    fn forget(&self, replaced: Option<String>) {
        if let Some(old) = replaced {
            self.cache.invalidate(&old);
        }
    }

    /// All targets, sorted by name.
    pub fn targets(&self) -> Vec<TargetId> {
        let mut ids: Vec<TargetId> = self.targets.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Names of every property set on `target` in any configuration,
    /// sorted.
    pub fn property_names(&self, target: &TargetId) -> Vec<String> {
        let targets = self.targets.read();
        let Some(props) = targets.get(target) else {
            return Vec::new();
        };
        let mut names: Vec<String> = props
            .base
            .keys()
            .chain(props.per_config.values().flat_map(FxHashMap::keys))
            .cloned()
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

impl TargetModel for InMemoryModel {
    fn find_target(&self, name: &str) -> Option<TargetId> {
        self.targets
            .read()
            .get_key_value(name)
            .map(|(id, _)| id.clone())
    }

    fn property(&self, target: &TargetId, name: &str, config: &str) -> Option<String> {
        let targets = self.targets.read();
        let props = targets.get(target)?;
        props
            .per_config
            .get(&config.to_ascii_uppercase())
            .and_then(|values| values.get(name))
            .or_else(|| props.base.get(name))
            .cloned()
    }

    fn expression_cache(&self) -> Option<&ExpressionCache> {
        Some(&self.cache)
    }
}
