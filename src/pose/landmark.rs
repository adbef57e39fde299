use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single body-joint point from the pose model (normalized coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized, left to right
    pub y: f32, // 0-1 normalized, grows downward
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>, // Relative depth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: None,
        }
    }

    pub fn with_visibility(self, visibility: f32) -> Self {
        Self {
            visibility: Some(visibility),
            ..self
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Usable for classification: finite x/y and confident enough.
    /// Landmarks without a visibility score are trusted.
    pub fn is_usable(&self, min_visibility: f32) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.visibility.map_or(true, |v| v >= min_visibility)
    }
}
