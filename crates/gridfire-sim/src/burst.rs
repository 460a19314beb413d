//! Explosion bursts and the registry that owns them.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridfire_core::config::SimTuning;
use gridfire_core::types::Rgb;

use crate::particle::Particle;

/// One firework explosion: a cloud of particles sharing an origin and color.
///
/// Active while at least one particle lives; once empty it stays inactive
/// and the registry drops it.
#[derive(Debug, Clone)]
pub struct ExplosionBurst {
    origin: DVec2,
    color: Rgb,
    particles: Vec<Particle>,
    active: bool,
}

impl ExplosionBurst {
    /// Create a burst of `count` particles radiating from `origin`.
    ///
    /// Directions are uniform over the full circle, speeds over
    /// [burst_speed_min, burst_speed_max), lifetimes over
    /// [burst_life_min, burst_life_max), sizes over
    /// [particle_size_min, particle_size_max).
    pub fn new(
        origin: DVec2,
        color: Rgb,
        count: usize,
        rng: &mut ChaCha8Rng,
        tuning: &SimTuning,
    ) -> Self {
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let angle = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(tuning.burst_speed_min..tuning.burst_speed_max);
            let life = rng.gen_range(tuning.burst_life_min..tuning.burst_life_max);
            let size = rng.gen_range(tuning.particle_size_min..tuning.particle_size_max);
            let velocity = DVec2::new(angle.cos(), angle.sin()) * speed;
            particles.push(Particle::new(origin, velocity, color, life, size));
        }
        Self {
            origin,
            color,
            particles,
            active: count > 0,
        }
    }

    /// Advance all particles and drop the dead. A burst left with no
    /// particles becomes inactive.
    pub fn advance(&mut self, dt_secs: f64, tuning: &SimTuning) {
        if !self.active {
            return;
        }
        for particle in &mut self.particles {
            particle.advance(dt_secs, tuning);
        }
        self.particles.retain(|p| !p.is_dead());
        if self.particles.is_empty() {
            self.active = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn color(&self) -> Rgb {
        self.color
    }
}

/// Owns every live burst. The sole particle-creation path in the simulation.
#[derive(Debug, Clone, Default)]
pub struct BurstRegistry {
    bursts: Vec<ExplosionBurst>,
}

impl BurstRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a burst and take ownership of it.
    pub fn create_explosion(
        &mut self,
        origin: DVec2,
        color: Rgb,
        count: usize,
        rng: &mut ChaCha8Rng,
        tuning: &SimTuning,
    ) {
        self.bursts
            .push(ExplosionBurst::new(origin, color, count, rng, tuning));
    }

    /// Advance every burst, then drop the inactive.
    pub fn advance(&mut self, dt_secs: f64, tuning: &SimTuning) {
        for burst in &mut self.bursts {
            burst.advance(dt_secs, tuning);
        }
        self.bursts.retain(|b| b.is_active());
    }

    pub fn bursts(&self) -> &[ExplosionBurst] {
        &self.bursts
    }

    pub fn active_count(&self) -> usize {
        self.bursts.len()
    }

    /// Total live particles across all bursts.
    pub fn particle_count(&self) -> usize {
        self.bursts.iter().map(|b| b.particles.len()).sum()
    }
}
