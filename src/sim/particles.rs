//! Tap burst particles
//!
//! Particles are pure data: position is never integrated, it is derived from
//! `(now - birth_time)` each frame. Advancing the simulation is therefore a
//! filter (cull expired) followed by a map (compute sprites).

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::polar_to_cartesian;
use crate::tuning::{BurstTuning, ParticleProfile, Span};

/// Visual/motion class of a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    /// Heavy debris, pulled down by gravity bias
    Dust,
    /// Fast spark, flies straight
    Spark,
}

/// A live particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: u32,
    /// Spawn timestamp (seconds)
    pub birth_time: f64,
    /// Seconds until culled (always > 0)
    pub lifetime: f32,
    /// Launch direction (radians)
    pub angle: f32,
    /// Points per second
    pub speed: f32,
    pub start_radius: f32,
    pub kind: ParticleKind,
}

/// Render state of a particle for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSprite {
    pub id: u32,
    pub kind: ParticleKind,
    /// Offset from the centre of the tapped control (screen space, +y down)
    pub offset: Vec2,
    pub radius: f32,
    /// In (0, 0.9]
    pub opacity: f32,
}

impl Particle {
    /// Seconds since spawn, clamped to 0 for timestamps before birth
    #[inline]
    pub fn age(&self, now: f64) -> f32 {
        ((now - self.birth_time) as f32).max(0.0)
    }

    #[inline]
    pub fn is_expired(&self, now: f64) -> bool {
        self.age(now) >= self.lifetime
    }

    /// Compute where and how to draw this particle at `now`
    pub fn sprite(&self, now: f64) -> ParticleSprite {
        let age = self.age(now);
        let t = (age / self.lifetime).clamp(0.0, 1.0);
        let distance = self.speed * age;

        let mut offset = polar_to_cartesian(distance, self.angle);
        if self.kind != ParticleKind::Spark {
            offset.y += distance * GRAVITY_BIAS;
        }

        ParticleSprite {
            id: self.id,
            kind: self.kind,
            offset,
            radius: (self.start_radius * (1.0 - t)).max(MIN_PARTICLE_RADIUS),
            opacity: (1.0 - t) * MAX_PARTICLE_OPACITY,
        }
    }
}

/// Drop every particle expired at `now`
pub fn advance(now: f64, mut live: Vec<Particle>) -> Vec<Particle> {
    live.retain(|p| !p.is_expired(now));
    live
}

/// Sprites for every particle in `live` (no culling)
pub fn render(now: f64, live: &[Particle]) -> Vec<ParticleSprite> {
    live.iter().map(|p| p.sprite(now)).collect()
}

/// Owner of the live particle set
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    /// Live particles, oldest first
    particles: Vec<Particle>,
    /// Oldest particles are evicted beyond this
    max_particles: usize,
    next_id: u32,
}

impl ParticleSystem {
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            max_particles,
            next_id: 1,
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

    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    /// Change the live cap; evicts immediately if over it
    pub fn set_max_particles(&mut self, max_particles: usize) {
        self.max_particles = max_particles;
        self.enforce_cap();
    }

    /// Spawn one dust batch and one spark batch, all born at `now`.
    ///
    /// `scale` is floored at 0.5. Returns how many of the new particles are
    /// still live once the cap has evicted the oldest.
    pub fn spawn_burst<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        tuning: &BurstTuning,
        scale: f32,
        now: f64,
    ) -> usize {
        let scale = scale.max(MIN_BURST_SCALE);
        let existing = self.particles.len();
        self.particles.reserve(tuning.burst_size());

        self.spawn_batch(rng, &tuning.dust, ParticleKind::Dust, scale, now);
        self.spawn_batch(rng, &tuning.spark, ParticleKind::Spark, scale, now);

        // Older particles go first; only the overflow past them hits this burst
        let evicted = self.enforce_cap();
        tuning.burst_size() - evicted.saturating_sub(existing)
    }

    /// Cull expired particles and return sprites for the survivors.
    ///
    /// Uses the single `now` for the whole pass.
    pub fn advance_and_cull(&mut self, now: f64) -> Vec<ParticleSprite> {
        let live = std::mem::take(&mut self.particles);
        self.particles = advance(now, live);
        render(now, &self.particles)
    }

    fn spawn_batch<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        profile: &ParticleProfile,
        kind: ParticleKind,
        scale: f32,
        now: f64,
    ) {
        for _ in 0..profile.count {
            let id = self.next_id;
            self.next_id = self.next_id.wrapping_add(1);
            self.particles.push(Particle {
                id,
                birth_time: now,
                lifetime: sample(rng, profile.lifetime).max(f32::EPSILON),
                angle: sample(rng, profile.angle),
                speed: sample(rng, profile.speed) * scale,
                start_radius: sample(rng, profile.start_radius) * scale,
                kind,
            });
        }
    }

    /// Evict oldest particles beyond the cap, returning how many went
    fn enforce_cap(&mut self) -> usize {
        if self.particles.len() <= self.max_particles {
            return 0;
        }
        let excess = self.particles.len() - self.max_particles;
        log::debug!("Particle cap {} reached, evicting {}", self.max_particles, excess);
        self.particles.drain(..excess);
        excess
    }
}

/// Uniform sample from an inclusive span (degenerate spans return `min`)
fn sample<R: Rng + ?Sized>(rng: &mut R, span: Span) -> f32 {
    if span.max > span.min {
        rng.random_range(span.min..=span.max)
    } else {
        span.min
    }
}
