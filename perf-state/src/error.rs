use thiserror::Error;

/// Errors when decoding integer-coded status values
///
/// An unknown code indicates a contract violation between the producer
/// that persisted the code and this consumer, so callers are expected
/// to fail loudly rather than skip the value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    /// Code does not map to any `ImageLoadStatus`
    #[error("invalid image load status code: {0}")]
    InvalidStatusCode(i32),

    /// Code does not map to any `VisibilityState`
    #[error("invalid visibility state code: {0}")]
    InvalidVisibilityCode(i32),
}
