//! Tuning constants shared by every theme.
//!
//! Distances are in CSS pixels and rates are per animation tick.

use glam::Vec2;

/// Pointer position before the first pointer move, far off every surface.
pub const POINTER_SENTINEL: Vec2 = Vec2::splat(-9999.0);

/// Angular velocities are drawn from `[-SPIN_RANGE / 2, SPIN_RANGE / 2)`.
pub const SPIN_RANGE: f32 = 0.02;

/// Repulsion multiplier of the icon themes.
pub const REPULSION_STRENGTH: f32 = 1.5;

/// Stronger repulsion of the plain dot network.
pub const DOT_REPULSION_STRENGTH: f32 = 2.0;

/// Direction of the push when the pointer sits exactly on a particle.
pub const COINCIDENT_PUSH: Vec2 = Vec2::X;
