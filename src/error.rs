//! Crate-level error types.

use std::fmt;

/// Error returned when a projection-type token is not recognized.
///
/// Carries the offending token. Selecting a projection through
/// [`Camera::set_projection_type`](crate::Camera::set_projection_type)
/// treats this as non-fatal: the error is logged and the prior selection
/// is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProjectionError(pub(crate) String);

impl fmt::Display for ParseProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported projection type {:?} (expected \"perspective\" or \
             \"orthographic\")",
            self.0
        )
    }
}

impl std::error::Error for ParseProjectionError {}
