//! Gesture events from per-frame flags
//!
//! The classifier reports a flag on every frame a pose is held. Game logic
//! wants one "jump!" per jump, so events fire on the rising edge of a flag
//! and each gesture then cools down for a number of frames.

use crate::classifier::{Gesture, GestureResult};

/// Cooldown frames between events of the same gesture (~0.5s at 30Hz)
pub const DEFAULT_COOLDOWN_FRAMES: u32 = 15;

/// Rising-edge detector with per-gesture cooldown
#[derive(Debug, Clone)]
pub struct GestureDebouncer {
    /// Frames to suppress a gesture after it fired
    cooldown_frames: u32,
    /// Remaining cooldown per gesture
    cooldown: [u32; Gesture::COUNT],
    /// Flags from the previous frame
    previous: GestureResult,
}

impl GestureDebouncer {
    pub fn new(cooldown_frames: u32) -> Self {
        Self {
            cooldown_frames,
            cooldown: [0; Gesture::COUNT],
            previous: GestureResult::default(),
        }
    }

    pub fn cooldown_frames(&self) -> u32 {
        self.cooldown_frames
    }

    /// Feed one frame's flags, returns gestures that just started
    pub fn update(&mut self, result: &GestureResult) -> Vec<Gesture> {
        let mut events = Vec::new();

        for gesture in Gesture::ALL {
            let i = gesture.index();
            let rising = result.is_active(gesture) && !self.previous.is_active(gesture);

            if self.cooldown[i] > 0 {
                self.cooldown[i] -= 1;
                continue;
            }

            if rising {
                self.cooldown[i] = self.cooldown_frames;
                events.push(gesture);
            }
        }

        if !events.is_empty() {
            log::debug!(
                "gesture events: {:?}",
                events.iter().map(Gesture::name).collect::<Vec<_>>()
            );
        }

        self.previous = *result;
        events
    }

    /// Clear edge memory and cooldowns
    pub fn reset(&mut self) {
        self.cooldown = [0; Gesture::COUNT];
        self.previous = GestureResult::default();
    }
}

impl Default for GestureDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN_FRAMES)
    }
}
