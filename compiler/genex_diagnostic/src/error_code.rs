use std::fmt;

/// Stable codes for evaluation diagnostics.
///
/// Format: G#### in the order the kinds were introduced.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Property self reference or dependency loop
    G0001,
    /// Wrong number of parameters
    G0002,
    /// No operation with this name
    G0003,
    /// Nesting deeper than the configured limit
    G0004,
    /// Parameter rejected by the operation
    G0005,
    /// Named target does not exist
    G0006,
    /// Error raised by a host-registered operation
    G0007,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::G0001 => "G0001",
            ErrorCode::G0002 => "G0002",
            ErrorCode::G0003 => "G0003",
            ErrorCode::G0004 => "G0004",
            ErrorCode::G0005 => "G0005",
            ErrorCode::G0006 => "G0006",
            ErrorCode::G0007 => "G0007",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
