//! Error types for app wiring and value injection.

use thiserror::Error;

/// Errors from binding outputs or injecting values from outside the UI.
///
/// The output computation itself is total and cannot fail; these cover the
/// seams around it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// A computation is already bound to this output key.
    #[error("output '{0}' is already bound")]
    DuplicateOutput(String),

    /// No computation is bound to this output key.
    #[error("no computation bound for output '{0}'")]
    UnknownOutput(String),

    /// The page declares an output the server never bound.
    #[error("output '{0}' is declared but has no server binding")]
    UnboundOutput(String),

    /// An injected value falls outside the slider's declared bounds.
    #[error("value {value} is outside the declared range {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
}
