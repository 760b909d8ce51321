//! Facts collected while evaluating one expression.

use bitflags::bitflags;
use genex_ir::TargetId;
use rustc_hash::{FxHashMap, FxHashSet};

bitflags! {
    /// Condition flags raised by operations.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EvalFlags: u8 {
        /// Evaluation failed.
        const HAD_ERROR = 1 << 0;
        /// The result depends on the configuration.
        const CONTEXT_SENSITIVE = 1 << 1;
        /// The result depends on the head target.
        const HEAD_SENSITIVE = 1 << 2;
    }
}

/// `(target, property)` pair read through `$<TARGET_PROPERTY>`.
pub type SeenProperty = (TargetId, String);

/// Per-evaluation accumulators.
///
/// A fresh set is created for every evaluation. Nested evaluations on
/// behalf of another target collect into their own set and are merged
/// back with [`Accumulators::merge_from`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accumulators {
    pub flags: EvalFlags,
    pub seen_target_properties: FxHashSet<SeenProperty>,
    /// Targets the result depends on at build time.
    pub depend_targets: FxHashSet<TargetId>,
    /// Every target named by an operation.
    pub all_targets_seen: FxHashSet<TargetId>,
    /// Highest language standard required, per target and language.
    pub max_language_standard: FxHashMap<TargetId, FxHashMap<String, String>>,
}

impl Accumulators {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn had_error(&self) -> bool {
        self.flags.contains(EvalFlags::HAD_ERROR)
    }

    #[inline]
    pub fn had_context_sensitive_condition(&self) -> bool {
        self.flags.contains(EvalFlags::CONTEXT_SENSITIVE)
    }

    #[inline]
    pub fn had_head_sensitive_condition(&self) -> bool {
        self.flags.contains(EvalFlags::HEAD_SENSITIVE)
    }

    /// Record that `target`'s `property` was read.
    pub fn see_property(&mut self, target: &TargetId, property: &str) {
        self.seen_target_properties
            .insert((target.clone(), property.to_string()));
    }

    /// Fold `other` into `self`: sets are unioned, flags ORed, and
    /// language standards from `other` replace existing entries.
    pub fn merge_from(&mut self, other: Accumulators) {
        self.flags |= other.flags;
        self.seen_target_properties
            .extend(other.seen_target_properties);
        self.depend_targets.extend(other.depend_targets);
        self.all_targets_seen.extend(other.all_targets_seen);
        for (target, standards) in other.max_language_standard {
            self.max_language_standard
                .entry(target)
                .or_default()
                .extend(standards);
        }
    }
}
