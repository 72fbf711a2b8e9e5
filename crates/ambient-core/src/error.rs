use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackdropError {
    /// No drawable surface could be acquired; callers treat this as a silent no-op.
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,
    #[error("invalid backdrop config: {0}")]
    InvalidConfig(String),
    #[error("unknown backdrop variant `{0}`")]
    UnknownVariant(String),
}
