use thiserror::Error;

/// Failures of the decorative subsystems. None of these reach the user; each
/// one degrades to "this feature is simply absent".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("autoplay rejected: {0}")]
    AutoplayRejected(String),
    #[error("media element unavailable: {0}")]
    MediaUnavailable(String),
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(&'static str),
    #[error("missing animation target #{0}")]
    MissingTarget(String),
}

pub type Result<T> = std::result::Result<T, CardError>;
