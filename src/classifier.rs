//! Per-frame gesture classification
//!
//! Turns one frame of pose landmarks into five independent gesture flags
//! using geometric rules. The only carried-forward state is the previous hip
//! height (for jump velocity) and a frame counter.

use serde::{Deserialize, Serialize};

use crate::math::{joint_angle, midpoint, Vec2};
use crate::pose::{PoseFrame, PoseLandmark};
use crate::thresholds::GestureThresholds;

/// Gestures the classifier recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    RaiseLeftHand,
    RaiseRightHand,
    Squat,
    Jump,
    Clap,
}

impl Gesture {
    pub const COUNT: usize = 5;

    pub const ALL: [Gesture; Self::COUNT] = [
        Gesture::RaiseLeftHand,
        Gesture::RaiseRightHand,
        Gesture::Squat,
        Gesture::Jump,
        Gesture::Clap,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gesture::RaiseLeftHand => "RAISE_LEFT_HAND",
            Gesture::RaiseRightHand => "RAISE_RIGHT_HAND",
            Gesture::Squat => "SQUAT",
            Gesture::Jump => "JUMP",
            Gesture::Clap => "CLAP",
        }
    }
}

/// Flags for one frame. Not mutually exclusive.
///
/// Serialized as integers 0/1 to match what the game layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GestureResult {
    #[serde(with = "flag")]
    pub raise_left_hand: bool,
    #[serde(with = "flag")]
    pub raise_right_hand: bool,
    #[serde(with = "flag")]
    pub squat: bool,
    #[serde(with = "flag")]
    pub jump: bool,
    #[serde(with = "flag")]
    pub clap: bool,
}

impl GestureResult {
    pub fn is_active(&self, gesture: Gesture) -> bool {
        match gesture {
            Gesture::RaiseLeftHand => self.raise_left_hand,
            Gesture::RaiseRightHand => self.raise_right_hand,
            Gesture::Squat => self.squat,
            Gesture::Jump => self.jump,
            Gesture::Clap => self.clap,
        }
    }

    /// Active gestures in `Gesture::ALL` order
    pub fn active(&self) -> impl Iterator<Item = Gesture> + '_ {
        Gesture::ALL.into_iter().filter(move |g| self.is_active(*g))
    }

    pub fn any(&self) -> bool {
        self.active().next().is_some()
    }
}

/// bool <-> 0/1 integer
mod flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(u8::deserialize(deserializer)? != 0)
    }
}

/// Rolling state carried between frames
///
/// Immutable value type - `classify` returns the next one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureState {
    /// Hip midpoint y from the last frame that had both hips
    pub last_hip_y: f32,
    /// Frames processed since initialization
    pub frame_count: u64,
}

/// Classify one frame.
///
/// Pure function: the same frame and state always give the same result and
/// next state. Missing landmarks leave the gestures that need them at 0.
pub fn classify(
    frame: &PoseFrame,
    state: &GestureState,
    thresholds: &GestureThresholds,
) -> (GestureResult, GestureState) {
    let mut next = GestureState {
        frame_count: state.frame_count + 1,
        ..*state
    };
    let point = |id| frame.point(id, thresholds.min_visibility);

    let left_shoulder = point(PoseLandmark::LeftShoulder);
    let right_shoulder = point(PoseLandmark::RightShoulder);
    let left_wrist = point(PoseLandmark::LeftWrist);
    let right_wrist = point(PoseLandmark::RightWrist);
    let left_hip = point(PoseLandmark::LeftHip);
    let right_hip = point(PoseLandmark::RightHip);
    let left_knee = point(PoseLandmark::LeftKnee);
    let right_knee = point(PoseLandmark::RightKnee);
    let left_ankle = point(PoseLandmark::LeftAnkle);
    let right_ankle = point(PoseLandmark::RightAnkle);

    let mut result = GestureResult {
        raise_left_hand: hand_raised(left_wrist, left_shoulder, thresholds),
        raise_right_hand: hand_raised(right_wrist, right_shoulder, thresholds),
        ..Default::default()
    };

    // Squat: both knees bent past the threshold
    if let (Some(lh), Some(lk), Some(la), Some(rh), Some(rk), Some(ra)) =
        (left_hip, left_knee, left_ankle, right_hip, right_knee, right_ankle)
    {
        let left_angle = joint_angle(lh, lk, la);
        let right_angle = joint_angle(rh, rk, ra);
        result.squat = left_angle < thresholds.squat_knee_angle_deg
            && right_angle < thresholds.squat_knee_angle_deg;
    }

    if let (Some(lh), Some(rh)) = (left_hip, right_hip) {
        let hip_y = midpoint(lh, rh).y;

        // Velocity: y grows downward, so a rising hip shrinks y
        if next.frame_count > 1 && state.last_hip_y - hip_y > thresholds.jump_velocity {
            result.jump = true;
        }
        next.last_hip_y = hip_y;

        // Posture: legs look foreshortened while tucked mid-air
        if let (Some(la), Some(ra)) = (left_ankle, right_ankle) {
            let ankle_y = midpoint(la, ra).y;
            if ankle_y - hip_y < thresholds.jump_posture_distance {
                result.jump = true;
            }
        }
    }

    // Clap: wrists together around chest height
    if let (Some(lw), Some(rw), Some(ls), Some(rs)) =
        (left_wrist, right_wrist, left_shoulder, right_shoulder)
    {
        let wrist_distance = lw.distance(rw);
        let height_offset = (midpoint(lw, rw).y - midpoint(ls, rs).y).abs();
        result.clap = wrist_distance < thresholds.clap_distance
            && height_offset < thresholds.clap_height_tolerance;
    }

    log::trace!(
        "frame {}: {:?}",
        next.frame_count,
        result.active().map(|g| g.name()).collect::<Vec<_>>()
    );

    (result, next)
}

fn hand_raised(wrist: Option<Vec2>, shoulder: Option<Vec2>, thresholds: &GestureThresholds) -> bool {
    match (wrist, shoulder) {
        (Some(wrist), Some(shoulder)) => wrist.y < shoulder.y - thresholds.hand_raise_margin,
        _ => false,
    }
}

/// Classifier owning its thresholds and rolling state.
/// Call `process` once per video frame, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    thresholds: GestureThresholds,
    state: GestureState,
}

impl GestureClassifier {
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            state: GestureState::default(),
        }
    }

    /// Seed the rolling state (e.g. to resume a session)
    pub fn with_state(self, state: GestureState) -> Self {
        Self { state, ..self }
    }

    pub fn process(&mut self, frame: &PoseFrame) -> GestureResult {
        let (result, next) = classify(frame, &self.state, &self.thresholds);
        self.state = next;
        result
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn thresholds(&self) -> &GestureThresholds {
        &self.thresholds
    }

    pub fn set_thresholds(&mut self, thresholds: GestureThresholds) {
        self.thresholds = thresholds;
    }

    /// Forget the previous hip height and frame count
    pub fn reset(&mut self) {
        self.state = GestureState::default();
    }
}
