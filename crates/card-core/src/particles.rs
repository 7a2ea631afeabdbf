//! Falling snow simulation.
//!
//! The field owns a fixed set of particles for one sizing epoch. Particles are
//! never created or destroyed individually: a flake that falls past the
//! bottom edge is moved back above the top, and one that drifts off a side
//! wraps to the other side. A resize throws the whole set away and samples a
//! new one.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub max_particles: usize,
    pub px_per_particle: f32,
    pub swing_amplitude: f32,
    pub respawn_y: f32,
    pub radius: (f32, f32),
    pub fall_speed: (f32, f32),
    pub opacity: (f32, f32),
    pub drift: (f32, f32),
    pub swing_rate: (f32, f32),
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            px_per_particle: PX_PER_PARTICLE,
            swing_amplitude: SWING_AMPLITUDE,
            respawn_y: RESPAWN_Y,
            radius: RADIUS_RANGE,
            fall_speed: FALL_SPEED_RANGE,
            opacity: OPACITY_RANGE,
            drift: DRIFT_RANGE,
            swing_rate: SWING_RATE_RANGE,
        }
    }
}

impl FieldParams {
    /// `min(max_particles, floor(width / px_per_particle))`, zero for
    /// degenerate widths.
    pub fn particle_count(&self, width: f32) -> usize {
        if !width.is_finite() || width <= 0.0 || self.px_per_particle <= 0.0 {
            return 0;
        }
        ((width / self.px_per_particle).floor() as usize).min(self.max_particles)
    }
}

/// Particle count for a viewport width with the default parameters.
pub fn particle_count(width: f32) -> usize {
    FieldParams::default().particle_count(width)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub radius: f32,
    pub fall_speed: f32,
    pub opacity: f32,
    pub drift: f32,
    pub swing_phase: f32,
    pub swing_rate: f32,
}

/// Anything that can draw a soft round flake. The web frontend implements this
/// on a 2D canvas context.
pub trait ParticleSurface {
    fn clear(&mut self, viewport: Viewport);
    /// Filled circle whose alpha falls from `opacity` at `center` to zero at
    /// `radius`.
    fn draw_glow(&mut self, center: Vec2, radius: f32, opacity: f32);
}

pub struct ParticleField {
    viewport: Viewport,
    particles: Vec<Particle>,
    params: FieldParams,
    rng: StdRng,
    epoch: u64,
}

impl ParticleField {
    pub fn new(viewport: Viewport, params: FieldParams, seed: u64) -> Self {
        let mut field = Self {
            viewport,
            particles: Vec::new(),
            params,
            rng: StdRng::seed_from_u64(seed),
            epoch: 0,
        };
        field.regenerate();
        field
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Incremented every time the set is regenerated.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// New viewport, new particles. The visible jump is accepted; there is no
    /// smoothing between epochs.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.regenerate();
        self.epoch += 1;
        log::debug!(
            "[snow] resized to {:.0}x{:.0}; {} flakes",
            viewport.width,
            viewport.height,
            self.particles.len()
        );
    }

    /// One display frame of motion.
    pub fn step(&mut self) {
        let Viewport { width, height } = self.viewport;
        let amplitude = self.params.swing_amplitude;
        let respawn_y = self.params.respawn_y;
        for p in &mut self.particles {
            p.swing_phase += p.swing_rate;
            p.position.y += p.fall_speed;
            p.position.x += p.drift + p.swing_phase.sin() * amplitude;

            if p.position.y > height {
                p.position.y = respawn_y;
                p.position.x = sample(&mut self.rng, (0.0, width));
            }
            if p.position.x > width {
                p.position.x = 0.0;
            }
            if p.position.x < 0.0 {
                p.position.x = width;
            }
        }
    }

    pub fn render<S: ParticleSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.viewport);
        for p in &self.particles {
            surface.draw_glow(p.position, p.radius, p.opacity);
        }
    }

    fn regenerate(&mut self) {
        let count = self.params.particle_count(self.viewport.width);
        let Viewport { width, height } = self.viewport;
        let params = &self.params;
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(sample(rng, (0.0, width)), sample(rng, (0.0, height))),
                radius: sample(rng, params.radius),
                fall_speed: sample(rng, params.fall_speed),
                opacity: sample(rng, params.opacity),
                drift: sample(rng, params.drift),
                swing_phase: sample(rng, (0.0, TAU)),
                swing_rate: sample(rng, params.swing_rate),
            })
            .collect();
    }
}

// Uniform in [lo, hi); tolerates empty or inverted ranges.
#[inline]
fn sample(rng: &mut StdRng, (lo, hi): (f32, f32)) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo).max(0.0)
}
