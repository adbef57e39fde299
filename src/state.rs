//! Session state with context passing pattern
//!
//! `Session` bundles everything one camera session needs: the classifier with
//! its rolling state, the event debouncer and the gesture tally. Core logic
//! takes explicit references; the thread-local below exists only for the
//! WASM bindings (WASM is single-threaded).

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::classifier::{Gesture, GestureClassifier, GestureResult};
use crate::events::GestureDebouncer;
use crate::pose::PoseFrame;
use crate::quiz::{AnswerChoice, GestureTally};
use crate::thresholds::GestureThresholds;

/// Everything the game layer gets back for one frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Raw per-frame flags
    pub moves: GestureResult,
    /// Gestures that started on this frame
    pub events: Vec<Gesture>,
    /// Quiz answer picked by the first answering event, if any
    pub answer: Option<AnswerChoice>,
    pub frame_count: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub classifier: GestureClassifier,
    pub debouncer: GestureDebouncer,
    pub tally: GestureTally,
}

impl Session {
    pub fn new(thresholds: GestureThresholds, cooldown_frames: u32) -> Self {
        Self {
            classifier: GestureClassifier::new(thresholds),
            debouncer: GestureDebouncer::new(cooldown_frames),
            tally: GestureTally::default(),
        }
    }

    /// Classify a frame, debounce it and count the resulting events
    pub fn process_frame(&mut self, frame: &PoseFrame) -> DetectionReport {
        let moves = self.classifier.process(frame);
        let events = self.debouncer.update(&moves);

        for gesture in &events {
            self.tally.record(*gesture);
        }
        let answer = events.iter().find_map(|g| AnswerChoice::from_gesture(*g));

        DetectionReport {
            moves,
            events,
            answer,
            frame_count: self.classifier.state().frame_count,
        }
    }

    /// Start over: rolling state, cooldowns and counters
    pub fn reset(&mut self) {
        self.classifier.reset();
        self.debouncer.reset();
        self.tally.reset();
    }
}

// Global state access, thin wrapper for WASM bindings only
thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::default());
}

/// Execute a closure with immutable access to the session
pub fn with_session<F, R>(f: F) -> R
where
    F: FnOnce(&Session) -> R,
{
    SESSION.with(|session| f(&session.borrow()))
}

/// Execute a closure with mutable access to the session
pub fn with_session_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Session) -> R,
{
    SESSION.with(|session| f(&mut session.borrow_mut()))
}
