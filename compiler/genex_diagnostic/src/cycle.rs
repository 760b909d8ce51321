//! Property self-reference errors.

use std::fmt;

use genex_ir::TargetId;

/// How a property lookup revisited the active chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CycleKind {
    /// The lookup names the property whose value is being evaluated.
    SelfReference,
    /// The lookup reaches a frame further up the chain.
    CyclicReference,
}

/// A `(target, property)` pair already on the evaluation chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleError {
    pub kind: CycleKind,
    pub target: TargetId,
    pub property: String,
    /// Expression text of each frame, innermost first. Empty for
    /// self references.
    pub steps: Vec<String>,
}

impl CycleError {
    pub fn self_reference(target: TargetId, property: impl Into<String>) -> Self {
        CycleError {
            kind: CycleKind::SelfReference,
            target,
            property: property.into(),
            steps: Vec::new(),
        }
    }

    pub fn cyclic_reference(
        target: TargetId,
        property: impl Into<String>,
        steps: Vec<String>,
    ) -> Self {
        CycleError {
            kind: CycleKind::CyclicReference,
            target,
            property: property.into(),
            steps,
        }
    }
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CycleKind::SelfReference => {
                write!(f, "Self reference on target \"{}\".", self.target)
            }
            CycleKind::CyclicReference => {
                write!(f, "Dependency loop found.")?;
                for (index, step) in self.steps.iter().enumerate() {
                    write!(f, "\nLoop step {}\n  {step}", index + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CycleError {}

#[cfg(test)]
mod tests;
