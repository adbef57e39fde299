use super::id::PoseLandmark;
use super::landmark::Landmark;
use crate::error::GestureError;
use glam::Vec2;

/// Flat buffer layout: x, y, z per landmark
pub const STRIDE_XYZ: usize = 3;
/// Flat buffer layout: x, y, z, visibility per landmark
pub const STRIDE_XYZV: usize = 4;

/// One video frame's worth of landmarks.
///
/// Every slot may be empty: the pose model can lose individual joints
/// (or the whole person) at any time, and that is not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseFrame {
    landmarks: [Option<Landmark>; PoseLandmark::COUNT],
}

impl Default for PoseFrame {
    fn default() -> Self {
        Self {
            landmarks: [None; PoseLandmark::COUNT],
        }
    }
}

impl PoseFrame {
    /// Frame where the provider found no person
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fill slots in index order. Missing trailing slots stay empty,
    /// extra entries are ignored.
    pub fn from_landmarks(landmarks: &[Landmark]) -> Self {
        let mut frame = Self::empty();
        for (slot, landmark) in frame.landmarks.iter_mut().zip(landmarks) {
            *slot = Some(*landmark);
        }
        frame
    }

    /// Parse a flat `Float32Array` from JavaScript.
    ///
    /// `stride` is 3 (x, y, z) or 4 (x, y, z, visibility). An empty buffer is
    /// an empty frame. Slots whose x or y is NaN are left empty.
    pub fn from_flat(data: &[f32], stride: usize) -> Result<Self, GestureError> {
        if stride != STRIDE_XYZ && stride != STRIDE_XYZV {
            return Err(GestureError::UnsupportedStride(stride));
        }
        if data.is_empty() {
            return Ok(Self::empty());
        }

        let expected = PoseLandmark::COUNT * stride;
        if data.len() != expected {
            return Err(GestureError::InvalidFrameLength {
                len: data.len(),
                expected,
            });
        }

        let mut frame = Self::empty();
        for (slot, chunk) in frame.landmarks.iter_mut().zip(data.chunks_exact(stride)) {
            let (x, y) = (chunk[0], chunk[1]);
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            *slot = Some(Landmark {
                x,
                y,
                z: Some(chunk[2]).filter(|z| z.is_finite()),
                visibility: chunk.get(3).copied().filter(|v| v.is_finite()),
            });
        }
        Ok(frame)
    }

    /// Parse the provider's JSON landmark list (`null` entries are empty slots)
    pub fn from_json(json: &str) -> Result<Self, GestureError> {
        let entries: Vec<Option<Landmark>> = serde_json::from_str(json)?;

        let mut frame = Self::empty();
        for (slot, entry) in frame.landmarks.iter_mut().zip(entries) {
            *slot = entry;
        }
        Ok(frame)
    }

    /// Functional set of a single slot
    pub fn with_landmark(mut self, id: PoseLandmark, landmark: Landmark) -> Self {
        self.landmarks[id.index()] = Some(landmark);
        self
    }

    /// Functional clear of a single slot
    pub fn without_landmark(mut self, id: PoseLandmark) -> Self {
        self.landmarks[id.index()] = None;
        self
    }

    pub fn get(&self, id: PoseLandmark) -> Option<&Landmark> {
        self.landmarks[id.index()].as_ref()
    }

    /// Position of a landmark if it is present and usable
    pub fn point(&self, id: PoseLandmark, min_visibility: f32) -> Option<Vec2> {
        self.get(id)
            .filter(|lm| lm.is_usable(min_visibility))
            .map(Landmark::position)
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.iter().all(Option::is_none)
    }

    /// Number of occupied slots
    pub fn present_count(&self) -> usize {
        self.landmarks.iter().filter(|lm| lm.is_some()).count()
    }
}
