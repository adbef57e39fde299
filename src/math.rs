//! 2D geometry helpers on normalized landmark positions using glam.

pub use glam::Vec2;

/// Segments shorter than this are treated as degenerate
pub const MIN_SEGMENT_LENGTH: f32 = 1e-4;

/// Angle at `vertex` between the segments to `a` and `b`, in degrees.
///
/// Uses cos(θ) = (v1 · v2) / (|v1| × |v2|), so the result is undirected:
/// swapping `a` and `b` gives the same angle.
/// - 90° = right-angle bend
/// - 180° = straight (colinear, opposite sides)
///
/// Degenerate segments return 180° (assume straight if we can't calculate).
pub fn joint_angle(a: Vec2, vertex: Vec2, b: Vec2) -> f32 {
    let v1 = a - vertex;
    let v2 = b - vertex;

    let mag1 = v1.length();
    let mag2 = v2.length();
    if mag1 < MIN_SEGMENT_LENGTH || mag2 < MIN_SEGMENT_LENGTH {
        return 180.0;
    }

    let cos_angle = (v1.dot(v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}

/// Midpoint of two positions
#[inline]
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_straight_leg() {
        let hip = Vec2::new(0.5, 0.4);
        let knee = Vec2::new(0.5, 0.6);
        let ankle = Vec2::new(0.5, 0.8);
        let angle = joint_angle(hip, knee, ankle);
        assert!((angle - 180.0).abs() < 0.01, "got {}", angle);
    }

    #[test]
    fn test_right_angle() {
        let hip = Vec2::new(0.3, 0.6);
        let knee = Vec2::new(0.5, 0.6);
        let ankle = Vec2::new(0.5, 0.8);
        let angle = joint_angle(hip, knee, ankle);
        assert!((angle - 90.0).abs() < 0.01, "got {}", angle);
    }

    #[test]
    fn test_degenerate_segment_is_straight() {
        let p = Vec2::new(0.5, 0.5);
        assert_eq!(joint_angle(p, p, Vec2::new(0.6, 0.6)), 180.0);
    }

    #[test]
    fn test_angle_is_symmetric() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let a = Vec2::new(rng.random(), rng.random());
            let v = Vec2::new(rng.random(), rng.random());
            let b = Vec2::new(rng.random(), rng.random());

            let forward = joint_angle(a, v, b);
            let backward = joint_angle(b, v, a);
            assert!(
                (forward - backward).abs() < 1e-3,
                "angle not symmetric: {} vs {}",
                forward,
                backward
            );
            assert!((0.0..=180.0).contains(&forward));
        }
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(Vec2::new(0.2, 0.4), Vec2::new(0.4, 0.8));
        assert!((m - Vec2::new(0.3, 0.6)).length() < 1e-6);
    }
}
