//! Genex Diagnostic - evaluation errors and where they are reported.
//!
//! Evaluation never panics and never throws through the host: an
//! operation returns an [`EvalError`], the walker stops, and the compiled
//! expression hands the rendered message to a [`DiagnosticSink`] unless
//! it was marked quiet.

mod cycle;
mod error;
mod error_code;
mod sink;

pub use cycle::{CycleError, CycleKind};
pub use error::{EvalError, EvalErrorKind, EvalResult};
pub use error_code::ErrorCode;
pub use sink::{BufferSink, DiagnosticSink, SharedSink, SilentSink, TracingSink};
