//! Errors at the input and configuration boundary.
//!
//! Classification itself never fails; missing landmarks just leave flags at 0.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GestureError {
    #[error("invalid landmark buffer length: {len} (expected 0 or {expected})")]
    InvalidFrameLength { len: usize, expected: usize },

    #[error("unsupported landmark stride: {0} (expected 3 or 4)")]
    UnsupportedStride(usize),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("threshold `{name}` out of range: {value}")]
    InvalidThreshold { name: &'static str, value: f32 },
}
