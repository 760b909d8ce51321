//! Property-lookup chain for cycle detection.
//!
//! Every `$<TARGET_PROPERTY>` that evaluates another property's value
//! pushes a frame that borrows its caller's frame. The chain is exactly
//! the active call stack of property evaluations: frames live on the
//! Rust stack and drop in reverse order, so nothing needs cleanup.

use genex_diagnostic::CycleError;
use genex_ir::TargetId;
use tracing::debug;

/// One `(target, property)` link of the evaluation chain.
#[derive(Debug)]
pub struct DagChecker<'a> {
    target: TargetId,
    property: &'a str,
    /// Expression text that caused this frame.
    content: &'a str,
    parent: Option<&'a DagChecker<'a>>,
}

impl<'a> DagChecker<'a> {
    pub fn new(
        target: TargetId,
        property: &'a str,
        content: &'a str,
        parent: Option<&'a DagChecker<'a>>,
    ) -> Self {
        DagChecker {
            target,
            property,
            content,
            parent,
        }
    }

    /// Frame for a top-level property evaluation.
    pub fn root(target: TargetId, property: &'a str, content: &'a str) -> Self {
        Self::new(target, property, content, None)
    }

    /// Child frame chained to `self`.
    pub fn push<'c>(&'c self, target: TargetId, property: &'c str, content: &'c str) -> DagChecker<'c> {
        DagChecker {
            target,
            property,
            content,
            parent: Some(self),
        }
    }

    pub fn target(&self) -> &TargetId {
        &self.target
    }

    pub fn property(&self) -> &'a str {
        self.property
    }

    pub fn content(&self) -> &'a str {
        self.content
    }

    pub fn parent(&self) -> Option<&'a DagChecker<'a>> {
        self.parent
    }

    /// `self` followed by each ancestor up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &DagChecker<'a>> {
        std::iter::successors(Some(self), |frame| frame.parent)
    }

    /// Number of frames in the chain, including `self`.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Property of the outermost frame.
    pub fn root_property(&self) -> &'a str {
        self.ancestors().last().map_or(self.property, |root| root.property)
    }

    fn matches(&self, other: &DagChecker<'_>) -> bool {
        self.target == other.target && self.property == other.property
    }

    /// Fail if this frame's `(target, property)` is already on the chain.
    ///
    /// A match with the immediate parent is a self reference; a match
    /// further up is a dependency loop listing every frame in between.
    pub fn check(&self) -> Result<(), CycleError> {
        let Some(parent) = self.parent else {
            return Ok(());
        };
        if self.matches(parent) {
            debug!(target_name = %self.target, property = self.property, "self reference");
            return Err(CycleError::self_reference(
                self.target.clone(),
                self.property,
            ));
        }

        let mut steps = vec![self.content.to_string()];
        for frame in parent.ancestors() {
            steps.push(frame.content.to_string());
            if self.matches(frame) {
                debug!(
                    target_name = %self.target,
                    property = self.property,
                    steps = steps.len(),
                    "dependency loop"
                );
                return Err(CycleError::cyclic_reference(
                    self.target.clone(),
                    self.property,
                    steps,
                ));
            }
        }
        Ok(())
    }
}
