//! Target identity.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Opaque identity of a build target.
///
/// Cloning is a reference-count bump, so identities can be stored freely
/// in accumulator sets and DAG frames.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(Arc<str>);

impl TargetId {
    pub fn new(name: impl AsRef<str>) -> Self {
        TargetId(Arc::from(name.as_ref()))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TargetId({:?})", &*self.0)
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TargetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TargetId {
    fn from(name: &str) -> Self {
        TargetId::new(name)
    }
}
