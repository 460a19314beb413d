//! Spawn scheduling: fires paired bursts and shockwaves on a timer.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridfire_core::config::{SimConfig, SpawnPolicy};
use gridfire_core::constants::FIREWORK_PALETTE;

use crate::burst::BurstRegistry;
use crate::shockwave::ShockwaveRegistry;

/// Accumulates frame time and fires one firework whenever the current
/// interval elapses.
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    accumulator_secs: f64,
    next_interval_secs: f64,
    policy: SpawnPolicy,
}

impl SpawnScheduler {
    pub fn new(policy: SpawnPolicy, rng: &mut ChaCha8Rng) -> Self {
        let next_interval_secs = sample_interval(&policy, rng);
        Self {
            accumulator_secs: 0.0,
            next_interval_secs,
            policy,
        }
    }

    /// Accumulate `dt_secs`; on reaching the interval, spawn one burst with
    /// its paired shockwave, reset the accumulator to zero, and resample
    /// the next interval. At most one spawn per step, however large the
    /// delta.
    pub fn advance(
        &mut self,
        dt_secs: f64,
        rng: &mut ChaCha8Rng,
        bursts: &mut BurstRegistry,
        shockwaves: &mut ShockwaveRegistry,
        config: &SimConfig,
    ) {
        self.accumulator_secs += dt_secs;
        if self.accumulator_secs < self.next_interval_secs {
            return;
        }

        let origin = random_spawn_position(rng, config);
        let color = FIREWORK_PALETTE[rng.gen_range(0..FIREWORK_PALETTE.len())];
        bursts.create_explosion(
            origin,
            color,
            config.tuning.particles_per_burst,
            rng,
            &config.tuning,
        );
        shockwaves.spawn(origin, &config.tuning);

        self.accumulator_secs = 0.0;
        self.next_interval_secs = sample_interval(&self.policy, rng);
    }

    pub fn accumulator_secs(&self) -> f64 {
        self.accumulator_secs
    }

    pub fn next_interval_secs(&self) -> f64 {
        self.next_interval_secs
    }
}

/// Draw the next spawn interval from the policy.
fn sample_interval(policy: &SpawnPolicy, rng: &mut ChaCha8Rng) -> f64 {
    match *policy {
        SpawnPolicy::Fixed { interval_secs } => interval_secs,
        SpawnPolicy::Randomized { min_secs, max_secs } => {
            if max_secs > min_secs {
                rng.gen_range(min_secs..max_secs)
            } else {
                min_secs
            }
        }
    }
}

/// Uniform position inside the viewport, inset by the spawn margin.
fn random_spawn_position(rng: &mut ChaCha8Rng, config: &SimConfig) -> DVec2 {
    let margin = config.tuning.spawn_margin;
    DVec2::new(
        rng.gen_range(margin..config.viewport.width - margin),
        rng.gen_range(margin..config.viewport.height - margin),
    )
}
