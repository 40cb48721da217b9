//! Pointer repulsion, edge reflection and connection fading.

use crate::constants::COINCIDENT_PUSH;
use glam::{BVec2, Vec2};

/// Linear falloff: 1.0 at distance zero, 0.0 at and beyond `radius`.
pub fn falloff(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 || distance >= radius {
        return 0.0;
    }
    ((radius - distance) / radius).clamp(0.0, 1.0)
}

/// Displacement pushing a particle at `position` away from `pointer`.
///
/// The magnitude is `falloff * strength`, so it is zero outside the
/// interaction radius. A pointer sitting exactly on the particle has no
/// direction; it pushes along [`COINCIDENT_PUSH`] at full strength.
pub fn repulsion(position: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    let away = position - pointer;
    let distance = away.length();
    let force = falloff(distance, radius);
    if force <= 0.0 {
        return Vec2::ZERO;
    }

    let direction = away.try_normalize().unwrap_or(COINCIDENT_PUSH);
    direction * force * strength
}

/// Opacity of the line joining two particles `distance` apart.
///
/// `base_alpha` at distance zero, decaying linearly to exactly zero at `radius`.
pub fn connection_alpha(distance: f32, radius: f32, base_alpha: f32) -> f32 {
    base_alpha * falloff(distance, radius)
}

/// Which velocity components must flip so a particle at `position` heads
/// back into `[0, bounds.x] x [0, bounds.y]`.
///
/// A component flips only while the particle is outside on that axis and
/// still moving outward; the position itself is never clamped.
pub fn reflection(position: Vec2, velocity: Vec2, bounds: Vec2) -> BVec2 {
    let outward = |p: f32, v: f32, extent: f32| (p < 0.0 && v < 0.0) || (p > extent && v > 0.0);
    BVec2::new(
        outward(position.x, velocity.x, bounds.x),
        outward(position.y, velocity.y, bounds.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_falloff_endpoints() {
        assert_eq!(falloff(0.0, 150.0), 1.0);
        assert_eq!(falloff(150.0, 150.0), 0.0);
        assert_eq!(falloff(400.0, 150.0), 0.0);
        assert_eq!(falloff(75.0, 150.0), 0.5);
    }

    #[test]
    fn test_degenerate_radius_has_no_effect() {
        assert_eq!(falloff(0.0, 0.0), 0.0);
        assert_eq!(repulsion(Vec2::ZERO, Vec2::ZERO, 0.0, 2.0), Vec2::ZERO);
    }

    #[test]
    fn test_repulsion_points_away_from_pointer() {
        let push = repulsion(Vec2::new(110.0, 100.0), Vec2::new(100.0, 100.0), 150.0, 1.5);
        assert!(push.x > 0.0);
        assert_eq!(push.y, 0.0);
    }

    #[test]
    fn test_coincident_pointer_is_finite_and_maximal() {
        let push = repulsion(Vec2::splat(50.0), Vec2::splat(50.0), 180.0, 1.5);
        assert!(push.is_finite());
        assert_eq!(push, COINCIDENT_PUSH * 1.5);
    }

    #[test]
    fn test_connection_alpha_endpoints() {
        assert_eq!(connection_alpha(0.0, 120.0, 0.1), 0.1);
        assert_eq!(connection_alpha(120.0, 120.0, 0.1), 0.0);
    }

    #[test]
    fn test_reflection_only_when_leaving() {
        let bounds = Vec2::new(100.0, 50.0);
        let flips = reflection(Vec2::new(-0.1, 25.0), Vec2::new(-0.2, 0.1), bounds);
        assert_eq!(flips, BVec2::new(true, false));

        // Already heading back in: no flip.
        let flips = reflection(Vec2::new(-0.1, 25.0), Vec2::new(0.2, 0.1), bounds);
        assert_eq!(flips, BVec2::FALSE);

        let flips = reflection(Vec2::new(50.0, 50.3), Vec2::new(0.2, 0.3), bounds);
        assert_eq!(flips, BVec2::new(false, true));
    }

    proptest! {
        #[test]
        fn repulsion_zero_outside_radius(d in 150.0f32..10_000.0, angle in 0.0f32..6.28) {
            let pointer = Vec2::new(500.0, 500.0);
            let position = pointer + Vec2::from_angle(angle) * d;
            prop_assert_eq!(repulsion(position, pointer, 150.0, 2.0), Vec2::ZERO);
        }

        #[test]
        fn repulsion_grows_as_pointer_nears(a in 0.0f32..180.0, b in 0.0f32..180.0) {
            prop_assume!((a - b).abs() > 1e-3);
            let (near, far) = if a < b { (a, b) } else { (b, a) };
            let pointer = Vec2::ZERO;
            let push_near = repulsion(Vec2::new(near, 0.0), pointer, 180.0, 1.5).length();
            let push_far = repulsion(Vec2::new(far, 0.0), pointer, 180.0, 1.5).length();
            prop_assert!(push_near > push_far);
        }

        #[test]
        fn connection_alpha_strictly_decreasing(a in 0.0f32..150.0, b in 0.0f32..150.0) {
            prop_assume!((a - b).abs() > 1e-2);
            let (near, far) = if a < b { (a, b) } else { (b, a) };
            prop_assert!(connection_alpha(near, 150.0, 0.15) > connection_alpha(far, 150.0, 0.15));
        }
    }
}
