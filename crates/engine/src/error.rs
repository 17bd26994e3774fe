use thiserror::Error;

/// Why an analysis produced no result.
///
/// Text analysis never fails; every variant here comes from the image path.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The payload could not be read far enough to learn its pixel dimensions.
    #[error("image decode failed: {0}")]
    Decode(String),

    #[error("internal error: {0}")]
    Internal(String),
}
