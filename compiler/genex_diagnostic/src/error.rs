//! Evaluation errors.
//!
//! `EvalErrorKind` carries the structured data; `EvalError` adds the
//! expression text the error was raised in. The rendered form matches
//! what build authors see in configure output:
//!
//! ```text
//! Error evaluating generator expression:
//!
//!   $<BOOL>
//!
//! $<BOOL> expression requires exactly one parameter.
//! ```

use std::fmt;

use genex_ir::Arity;

use crate::{CycleError, ErrorCode};

/// Result of evaluating a node or an operation.
pub type EvalResult = Result<String, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    Cycle(CycleError),

    Arity {
        operation: String,
        arity: Arity,
        got: usize,
    },

    UnknownOperation {
        name: String,
    },

    NestingTooDeep {
        depth: usize,
        limit: usize,
    },

    InvalidParameter {
        operation: String,
        message: String,
    },

    TargetNotFound {
        name: String,
    },

    /// Raised by host-registered operations.
    Custom {
        message: String,
    },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Cycle(_) => ErrorCode::G0001,
            Self::Arity { .. } => ErrorCode::G0002,
            Self::UnknownOperation { .. } => ErrorCode::G0003,
            Self::NestingTooDeep { .. } => ErrorCode::G0004,
            Self::InvalidParameter { .. } => ErrorCode::G0005,
            Self::TargetNotFound { .. } => ErrorCode::G0006,
            Self::Custom { .. } => ErrorCode::G0007,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle(cycle) => write!(f, "{cycle}"),
            Self::Arity {
                operation,
                arity,
                got,
            } => write!(
                f,
                "$<{operation}> expression {}",
                arity.requirement(*got)
            ),
            Self::UnknownOperation { .. } => {
                write!(f, "Expression did not evaluate to a known generator expression")
            }
            Self::NestingTooDeep { depth, limit } => write!(
                f,
                "Expression nests {depth} levels deep, more than the limit of {limit}."
            ),
            Self::InvalidParameter { message, .. } | Self::Custom { message } => {
                write!(f, "{message}")
            }
            Self::TargetNotFound { name } => write!(f, "No target \"{name}\""),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Original text of the expression that failed.
    pub expression: Option<String>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            expression: None,
        }
    }

    /// Attach the failing expression text, keeping an inner one.
    #[must_use]
    pub fn in_expression(mut self, expression: &str) -> Self {
        if self.expression.is_none() {
            self.expression = Some(expression.to_string());
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self.kind, EvalErrorKind::Cycle(_))
    }

    // Factories

    pub fn arity(operation: impl Into<String>, arity: Arity, got: usize) -> Self {
        Self::new(EvalErrorKind::Arity {
            operation: operation.into(),
            arity,
            got,
        })
    }

    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::new(EvalErrorKind::UnknownOperation { name: name.into() })
    }

    pub fn nesting_too_deep(depth: usize, limit: usize) -> Self {
        Self::new(EvalErrorKind::NestingTooDeep { depth, limit })
    }

    pub fn invalid_parameter(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(EvalErrorKind::InvalidParameter {
            operation: operation.into(),
            message: message.into(),
        })
    }

    pub fn target_not_found(name: impl Into<String>) -> Self {
        Self::new(EvalErrorKind::TargetNotFound { name: name.into() })
    }

    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(EvalErrorKind::Custom {
            message: message.into(),
        })
    }
}

impl From<CycleError> for EvalError {
    fn from(cycle: CycleError) -> Self {
        EvalError::new(EvalErrorKind::Cycle(cycle))
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Some(expression) => write!(
                f,
                "Error evaluating generator expression:\n\n  {expression}\n\n{}",
                self.kind
            ),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for EvalError {}
