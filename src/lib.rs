//! WiggleWorld Gestures - Wasm Core
//!
//! Classifies body-landmark frames from a pose-estimation model into
//! kid-friendly gestures (hand raise, squat, jump, clap) for the exergame.

#[cfg(target_arch = "wasm32")]
mod bridge;
pub mod classifier;
mod error;
pub mod events;
pub mod math;
pub mod pose;
pub mod quiz;
pub mod state;
mod threshold_limits;
pub mod thresholds;

pub use classifier::{classify, Gesture, GestureClassifier, GestureResult, GestureState};
pub use error::GestureError;
pub use events::{GestureDebouncer, DEFAULT_COOLDOWN_FRAMES};
pub use math::joint_angle;
pub use pose::{Landmark, PoseFrame, PoseLandmark, POSE_CONNECTIONS};
pub use quiz::{AnswerChoice, GestureTally};
pub use state::{DetectionReport, Session};
pub use thresholds::GestureThresholds;

// Re-exports for WASM API
#[cfg(target_arch = "wasm32")]
pub use bridge::{
    classify_landmarks, classify_landmarks_json, configure, get_tally, init, pose_connections,
    reset_session, start_session,
};

/// Install the panic hook and route `log` to the browser console.
/// Safe to call more than once.
pub fn init_logging() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            console_error_panic_hook::set_once();
            console_log::init_with_level(log::Level::Info).ok();
        } else {
            // Native callers bring their own logger
        }
    }
}
