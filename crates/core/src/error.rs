use thiserror::Error;

/// Errors raised at the boundary of the rendering pipeline.
///
/// Unknown phonemes are never reported here; they are drawn as fallback
/// glyphs instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("canvas must have a positive, finite size (got {width}x{height})")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("metric `{0}` must be positive and finite")]
    InvalidMetrics(&'static str),

    #[error("failed to write drawing: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
