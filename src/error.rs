use thiserror::Error;

pub type ViewportResult<T> = Result<T, ViewportError>;

#[derive(Debug, Error)]
pub enum ViewportError {
    /// Drawing backend or engine setup is unusable; construction must fail.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("singular transform: determinant={determinant}")]
    SingularTransform { determinant: f64 },

    #[error("invalid surface: width={width}, height={height}, dpr={dpr}")]
    InvalidSurface { width: f64, height: f64, dpr: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("painter backend failure: {0}")]
    Backend(String),
}
