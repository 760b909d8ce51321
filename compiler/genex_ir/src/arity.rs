//! Parameter-count contracts for named operations.
//!
//! Arity is only checked at evaluation time: a parsed tree never carries
//! arity errors, because some operations are variadic and the operation
//! set is open to host extensions.

use std::fmt;

/// Accepted parameter count of an operation: `min..=max` (`max = None` is
/// unbounded).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Arity {
    min: usize,
    max: Option<usize>,
}

impl Arity {
    /// `$<NAME>` only.
    pub const NONE: Arity = Arity {
        min: 0,
        max: Some(0),
    };
    pub const ZERO_OR_ONE: Arity = Arity {
        min: 0,
        max: Some(1),
    };
    pub const ZERO_OR_MORE: Arity = Arity { min: 0, max: None };
    pub const ONE_OR_MORE: Arity = Arity { min: 1, max: None };
    pub const TWO_OR_MORE: Arity = Arity { min: 2, max: None };

    /// Exactly `n` parameters.
    pub const fn exactly(n: usize) -> Self {
        Arity {
            min: n,
            max: Some(n),
        }
    }

    /// Between `min` and `max` parameters, inclusive.
    pub const fn range(min: usize, max: usize) -> Self {
        Arity {
            min,
            max: Some(max),
        }
    }

    #[inline]
    pub const fn min(self) -> usize {
        self.min
    }

    #[inline]
    pub const fn max(self) -> Option<usize> {
        self.max
    }

    /// Whether `count` parameters satisfy this contract.
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }

    /// Human-readable requirement, phrased to follow `$<NAME> expression`.
    pub fn requirement(self, got: usize) -> String {
        match (self.min, self.max) {
            (0, Some(0)) => "requires no parameters.".to_string(),
            (1, Some(1)) => "requires exactly one parameter.".to_string(),
            (n, Some(m)) if n == m => {
                format!("requires {n} comma separated parameters, but got {got}.")
            }
            (0, Some(1)) => "requires one or zero parameters.".to_string(),
            (1, Some(2)) => "requires one or two parameters.".to_string(),
            (n, Some(m)) => format!("requires between {n} and {m} parameters, but got {got}."),
            (1, None) => "requires at least one parameter.".to_string(),
            (2, None) => "requires at least two parameters.".to_string(),
            (n, None) => format!("requires at least {n} parameters."),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{max}"),
            Some(max) => write!(f, "{}..={max}", self.min),
            None => write!(f, "{}..", self.min),
        }
    }
}
