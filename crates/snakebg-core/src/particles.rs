//! Ambient particle field: a fixed pool of short-lived drifting points.

use crate::constants::*;
use crate::surface::{Surface, Viewport};
use crate::theme::Theme;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in ticks, always within `0..=max_life`.
    pub life: f32,
    pub max_life: f32,
    pub radius: f32,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let pos = Vec2::new(
            rng.gen::<f32>() * viewport.width,
            rng.gen::<f32>() * viewport.height,
        );
        let vel = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN;
        let max_life = PARTICLE_LIFE_MIN + rng.gen::<f32>() * PARTICLE_LIFE_SPAN;
        Self {
            pos,
            vel,
            life: max_life,
            max_life,
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
        }
    }

    /// Move, wrap and age by `dt` ticks. Returns `false` once expired.
    pub fn step(&mut self, viewport: Viewport, dt: f32) -> bool {
        self.pos += self.vel * dt;
        self.pos = wrap_edges(self.pos, viewport);
        self.life = (self.life - dt).clamp(0.0, self.max_life);
        self.life > 0.0
    }

    /// Fraction of life left, in \[0, 1\].
    #[inline]
    pub fn vitality(&self) -> f32 {
        if self.max_life > 0.0 {
            (self.life / self.max_life).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

fn wrap_edges(pos: Vec2, viewport: Viewport) -> Vec2 {
    let wrap = |v: f32, extent: f32| {
        if v > extent {
            0.0
        } else if v < 0.0 {
            extent
        } else {
            v
        }
    };
    Vec2::new(wrap(pos.x, viewport.width), wrap(pos.y, viewport.height))
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn seed<R: Rng + ?Sized>(rng: &mut R, count: usize, viewport: Viewport) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::spawn(rng, viewport)).collect(),
        }
    }

    /// Expired particles are respawned in their own slot; the pool never
    /// grows or shrinks.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport, dt: f32) {
        for p in &mut self.particles {
            if !p.step(viewport, dt) {
                *p = Particle::spawn(rng, viewport);
            }
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, theme: &Theme) {
        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, theme.accent.alpha(p.vitality() * PARTICLE_MAX_ALPHA));
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
