//! Strict-mode error for malformed header lines.

use thiserror::Error;

use crate::header::MalformedKind;

/// A line carried both markers but was unusable.
///
/// Raised only in strict mode; the default pass copies such lines through
/// with a warning instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line_no}: {kind}")]
pub struct MalformedLineError {
    /// 1-based line number in the input.
    pub line_no: usize,
    pub kind: MalformedKind,
}
