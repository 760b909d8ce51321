//! Parsed-tree cache owned by property storage.

use std::sync::Arc;

use dashmap::DashMap;
use genex_ir::ExpressionTree;
use genex_parse::{parse_with, ParseOptions};
use tracing::debug;

/// Parsed trees keyed by source text.
///
/// Owned by whatever stores property values, which calls
/// [`ExpressionCache::invalidate`] when a value is replaced. Safe to
/// share between evaluating threads.
#[derive(Debug, Default)]
pub struct ExpressionCache {
    trees: DashMap<String, CachedTree>,
}

/// A tree and the nesting limit it was parsed under.
#[derive(Debug)]
struct CachedTree {
    max_nesting_depth: usize,
    tree: Arc<ExpressionTree>,
}

impl ExpressionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached tree for `source`, parsing it on first use.
    ///
    /// A tree parsed under a different nesting limit is reparsed and
    /// replaced, so the result never depends on which engine parsed first.
    pub fn get_or_parse(&self, source: &str, options: &ParseOptions) -> Arc<ExpressionTree> {
        if let Some(cached) = self.trees.get(source) {
            if cached.max_nesting_depth == options.max_nesting_depth {
                return Arc::clone(&cached.tree);
            }
        }
        let tree = Arc::new(parse_with(source, options));
        self.trees.insert(
            source.to_string(),
            CachedTree {
                max_nesting_depth: options.max_nesting_depth,
                tree: Arc::clone(&tree),
            },
        );
        tree
    }

    /// Drop the tree for `source`. Returns whether one was cached.
    pub fn invalidate(&self, source: &str) -> bool {
        let removed = self.trees.remove(source).is_some();
        if removed {
            debug!(len = source.len(), "invalidated cached expression");
        }
        removed
    }

    pub fn clear(&self) {
        self.trees.clear();
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

#[cfg(test)]
mod tests;
