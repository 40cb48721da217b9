//! Per-page simulation context
//!
//! One [`Simulation`] owns everything a backdrop needs between frames: the
//! surface dimensions, the particle population and the last pointer position.
//! Nothing here is global, so several backdrops can coexist and navigation is
//! just dropping one context and creating another.

use crate::ThemeParams;
use glam::Vec2;
use particle_physics::{connection_alpha, Particle, Repulsion, POINTER_SENTINEL, SPIN_RANGE};
use particle_shapes::{Canvas, Stroke};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Bounding box of the drawing surface in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutBox {
    pub origin: Vec2,
    pub size: Vec2,
}

impl LayoutBox {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Box anchored at the viewport origin.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    /// A box with no area has not been laid out yet.
    pub fn is_laid_out(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }
}

/// A link between two particles, endpoints already offset by the theme anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

pub struct Simulation {
    params: ThemeParams,
    layout: Option<LayoutBox>,
    particles: Vec<Particle>,
    pointer: Vec2,
    spawned: bool,
    rng: StdRng,
}

impl Simulation {
    /// Create an empty simulation seeded from the operating system.
    pub fn new(params: ThemeParams) -> Self {
        Self::with_rng(params, StdRng::from_os_rng())
    }

    /// Reproducible population for a given seed.
    pub fn with_seed(params: ThemeParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: ThemeParams, rng: StdRng) -> Self {
        Self {
            params,
            layout: None,
            particles: Vec::with_capacity(params.population),
            pointer: POINTER_SENTINEL,
            spawned: false,
            rng,
        }
    }

    pub fn params(&self) -> &ThemeParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access for hosts that seed particles by hand.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Last pointer position in surface coordinates, or the sentinel.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Current surface dimensions, once laid out.
    pub fn bounds(&self) -> Option<Vec2> {
        self.layout.map(|layout| layout.size)
    }

    pub fn is_initialized(&self) -> bool {
        self.spawned
    }

    /// Store a new container layout.
    ///
    /// The first valid layout spawns the population. Later layouts only
    /// update the dimensions; particles are never moved. A missing or empty
    /// layout is ignored.
    pub fn resize(&mut self, layout: Option<LayoutBox>) {
        let Some(layout) = layout.filter(LayoutBox::is_laid_out) else {
            log::debug!("{}: surface not laid out, skipping resize", self.params.name);
            return;
        };

        log::debug!(
            "{}: surface {}x{} at ({}, {})",
            self.params.name,
            layout.size.x,
            layout.size.y,
            layout.origin.x,
            layout.origin.y
        );
        self.layout = Some(layout);

        if !self.spawned {
            self.spawn(layout.size);
        }
    }

    fn spawn(&mut self, bounds: Vec2) {
        self.spawned = true;
        let params = self.params;

        if params.kinds.is_empty() {
            log::warn!("{}: no shape kinds configured, backdrop stays empty", params.name);
            return;
        }

        let (min_size, max_size) = params.size_range;
        if max_size < min_size {
            log::warn!(
                "{}: size range {}..{} is inverted, using {}",
                params.name,
                min_size,
                max_size,
                min_size
            );
        }
        for _ in 0..params.population {
            let position = Vec2::new(
                self.rng.random::<f32>() * bounds.x,
                self.rng.random::<f32>() * bounds.y,
            );
            let Some(&kind) = params.kinds.choose(&mut self.rng) else {
                break;
            };
            let velocity = Vec2::new(
                self.rng.random::<f32>() - 0.5,
                self.rng.random::<f32>() - 0.5,
            ) * params.speed
                * kind.speed_factor();
            let size = if max_size > min_size {
                self.rng.random_range(min_size..max_size)
            } else {
                min_size
            };
            let angle = self.rng.random::<f32>() * TAU;
            let spin = (self.rng.random::<f32>() - 0.5) * SPIN_RANGE;

            self.particles
                .push(Particle::new(position, velocity, kind, size).with_rotation(angle, spin));
        }

        log::info!(
            "{}: spawned {} particles on a {}x{} surface",
            params.name,
            self.particles.len(),
            bounds.x,
            bounds.y
        );
    }

    /// Record a pointer position given in viewport coordinates.
    pub fn track_pointer(&mut self, client: Vec2) {
        let origin = self.layout.map_or(Vec2::ZERO, |layout| layout.origin);
        self.pointer = client - origin;
    }

    /// Advance every particle by one tick.
    pub fn step(&mut self) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        let repulsion = Repulsion {
            pointer: self.pointer,
            radius: self.params.pointer_radius,
            strength: self.params.repulsion_strength,
        };

        for particle in &mut self.particles {
            particle.step(bounds, &repulsion);
        }
    }

    /// Every unordered pair closer than the connection radius.
    pub fn connections(&self) -> Vec<Connection> {
        let radius = self.params.connection_radius;
        let anchor = self.params.link_anchor;
        let mut links = Vec::new();

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if distance >= radius {
                    continue;
                }
                links.push(Connection {
                    from: a.position + anchor,
                    to: b.position + anchor,
                    alpha: connection_alpha(distance, radius, self.params.link_alpha),
                });
            }
        }

        links
    }

    /// Draw the current state without advancing it.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.clear();

        for particle in &self.particles {
            particle.draw(canvas);
        }

        let base = Stroke::new(self.params.link_width, self.params.link_color);
        let base = match self.params.link_dash {
            Some(dash) => base.dashed(dash),
            None => base,
        };
        for link in self.connections() {
            let stroke = Stroke {
                color: base.color.with_alpha(link.alpha),
                ..base
            };
            canvas.line(link.from, link.to, &stroke);
        }
    }

    /// One animation frame: update then draw.
    pub fn tick(&mut self, canvas: &mut dyn Canvas) {
        self.step();
        self.render(canvas);
    }
}
