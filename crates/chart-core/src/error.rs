// File: crates/chart-core/src/error.rs
// Summary: Error type shared by the spec builder and renderers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Every point sequence needs exactly one series name.
    #[error("series/values length mismatch: {series} names for {values} point sequences")]
    SeriesLengthMismatch { series: usize, values: usize },

    #[error("failed to serialize chart spec: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failure reported by the rendering engine.
    #[error("render failed: {0}")]
    Render(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
