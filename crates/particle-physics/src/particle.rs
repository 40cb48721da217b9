//! The particle entity.

use crate::forces::{reflection, repulsion};
use glam::{BVec2, Vec2};
use particle_shapes::{Canvas, ShapeKind};

/// One animated backdrop entity.
///
/// Position and velocity evolve every tick; kind and size are fixed at
/// construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    kind: ShapeKind,
    size: f32,
    angle: f32,
    spin: f32,
}

/// Pointer interaction settings for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repulsion {
    pub pointer: Vec2,
    pub radius: f32,
    pub strength: f32,
}

impl Particle {
    /// Create a non-rotating particle.
    pub fn new(position: Vec2, velocity: Vec2, kind: ShapeKind, size: f32) -> Self {
        Self {
            position,
            velocity,
            kind,
            size,
            angle: 0.0,
            spin: 0.0,
        }
    }

    /// Give the particle an orientation and angular velocity.
    ///
    /// Upright kinds ignore this and stay at zero rotation.
    pub fn with_rotation(mut self, angle: f32, spin: f32) -> Self {
        if !self.kind.is_upright() {
            self.angle = angle;
            self.spin = spin;
        }
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    /// Drift by one tick of velocity and angular velocity.
    pub fn advance(&mut self) {
        self.position += self.velocity;
        self.angle += self.spin;
    }

    /// Bounce off the surface edges. Returns the axes whose velocity flipped.
    pub fn reflect(&mut self, bounds: Vec2) -> BVec2 {
        let flips = reflection(self.position, self.velocity, bounds);
        if flips.x {
            self.velocity.x = -self.velocity.x;
        }
        if flips.y {
            self.velocity.y = -self.velocity.y;
        }
        flips
    }

    /// Push away from the pointer. Returns the applied displacement.
    pub fn repel(&mut self, repulsion_at: &Repulsion) -> Vec2 {
        let push = repulsion(
            self.position,
            repulsion_at.pointer,
            repulsion_at.radius,
            repulsion_at.strength,
        );
        self.position += push;
        push
    }

    /// One full tick: advance, reflect, then repel.
    pub fn step(&mut self, bounds: Vec2, repulsion_at: &Repulsion) -> BVec2 {
        self.advance();
        let flips = self.reflect(bounds);
        self.repel(repulsion_at);
        flips
    }

    /// Draw at the current position and orientation.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.save();
        canvas.translate(self.position);
        if self.angle != 0.0 {
            canvas.rotate(self.angle);
        }
        self.kind.draw(canvas, self.size);
        canvas.restore();
    }
}
