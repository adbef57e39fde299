//! Bridge module - JS ↔ Rust communication
//!
//! Thin `#[wasm_bindgen]` wrappers around the session. Bad input from the
//! page is logged and answered with an empty report; nothing here throws
//! during the per-frame loop.

use wasm_bindgen::prelude::*;

use crate::pose::{PoseFrame, POSE_CONNECTIONS};
use crate::state::{with_session, with_session_mut, DetectionReport, Session};
use crate::thresholds::GestureThresholds;

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Report for a frame that couldn't be parsed. Still advances the frame
/// counter, same as a frame with no person in it.
fn report_for(frame: Result<PoseFrame, crate::GestureError>) -> DetectionReport {
    let frame = frame.unwrap_or_else(|e| {
        log::warn!("Rejected landmark frame: {}", e);
        PoseFrame::empty()
    });
    with_session_mut(|session| session.process_frame(&frame))
}

/// Set up panic hook and console logging. Call once on page load.
#[wasm_bindgen]
pub fn init() {
    crate::init_logging();
    log::info!("Gesture classifier ready");
}

/// Replace thresholds from a JSON object (missing fields use defaults).
/// Keeps the rolling state, cooldowns and tally.
#[wasm_bindgen]
pub fn configure(thresholds_json: &str) -> Result<(), JsValue> {
    let thresholds = GestureThresholds::from_json(thresholds_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    with_session_mut(|session| session.classifier.set_thresholds(thresholds));
    log::info!("Thresholds updated: {:?}", thresholds);
    Ok(())
}

/// Start a fresh session with the given event cooldown (in frames)
#[wasm_bindgen]
pub fn start_session(cooldown_frames: u32) {
    with_session_mut(|session| {
        let thresholds = *session.classifier.thresholds();
        *session = Session::new(thresholds, cooldown_frames);
    });
    log::info!("Session started (cooldown {} frames)", cooldown_frames);
}

/// Classify a flat Float32Array of landmarks (stride 3 or 4).
/// Returns a `DetectionReport` object.
#[wasm_bindgen]
pub fn classify_landmarks(data: &[f32], stride: usize) -> JsValue {
    to_js(&report_for(PoseFrame::from_flat(data, stride)))
}

/// Classify a JSON landmark array as produced by the pose model
#[wasm_bindgen]
pub fn classify_landmarks_json(json: &str) -> JsValue {
    to_js(&report_for(PoseFrame::from_json(json)))
}

/// Reset rolling state, cooldowns and counters
#[wasm_bindgen]
pub fn reset_session() {
    with_session_mut(|session| session.reset());
}

/// Gesture counts for the current session
#[wasm_bindgen]
pub fn get_tally() -> JsValue {
    with_session(|session| to_js(&session.tally))
}

/// Skeleton edges as a flat index array [a0, b0, a1, b1, ...] for overlay drawing
#[wasm_bindgen]
pub fn pose_connections() -> Vec<u32> {
    POSE_CONNECTIONS
        .iter()
        .flat_map(|(a, b)| [a.index() as u32, b.index() as u32])
        .collect()
}
