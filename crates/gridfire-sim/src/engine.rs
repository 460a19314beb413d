//! The simulation engine and its step pipeline.
//!
//! `Simulation` owns the player, registries, grid, scheduler, and RNG,
//! validates the frame delta, advances every component in a fixed order,
//! and produces a `RenderSnapshot` per step. Completely headless (no
//! window, no renderer), enabling deterministic testing.

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gridfire_core::config::SimConfig;
use gridfire_core::error::StepError;
use gridfire_core::input::InputState;
use gridfire_core::snapshot::RenderSnapshot;
use gridfire_core::types::SimTime;

use crate::burst::BurstRegistry;
use crate::grid::DeformationGrid;
use crate::player::PlayerState;
use crate::shockwave::ShockwaveRegistry;
use crate::snapshot;
use crate::spawner::SpawnScheduler;

/// The simulation. Owns all state; the host drives it by calling `step`
/// once per frame with the measured delta and the current input.
pub struct Simulation {
    config: SimConfig,
    time: SimTime,
    player: PlayerState,
    bursts: BurstRegistry,
    shockwaves: ShockwaveRegistry,
    grid: DeformationGrid,
    scheduler: SpawnScheduler,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Create a simulation from the given config. Same config, same seed:
    /// same simulation, step for step.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let grid = DeformationGrid::new(&config.viewport, &config.tuning, &mut rng);
        let scheduler = SpawnScheduler::new(config.spawn_policy, &mut rng);
        let player = PlayerState::new(DVec2::new(
            config.viewport.width / 2.0,
            config.viewport.height / 2.0,
        ));
        Self {
            config,
            time: SimTime::default(),
            player,
            bursts: BurstRegistry::new(),
            shockwaves: ShockwaveRegistry::new(),
            grid,
            scheduler,
            rng,
        }
    }

    /// Advance the simulation by `dt_secs` and return the resulting
    /// snapshot.
    ///
    /// A NaN, infinite, or negative delta is rejected without touching any
    /// state. A zero delta counts a tick but leaves every position,
    /// velocity, offset, and lifetime untouched.
    pub fn step(&mut self, dt_secs: f64, input: &InputState) -> Result<RenderSnapshot, StepError> {
        if !dt_secs.is_finite() || dt_secs < 0.0 {
            return Err(StepError::InvalidDelta { dt_secs });
        }

        self.time.advance(dt_secs);
        // 1. Player kinematics
        self.player.advance(dt_secs, input, &self.config.tuning);
        // 2. Scheduled spawning (may create one burst + shockwave pair)
        self.scheduler.advance(
            dt_secs,
            &mut self.rng,
            &mut self.bursts,
            &mut self.shockwaves,
            &self.config,
        );
        // 3. Particle physics, burst culling
        self.bursts.advance(dt_secs, &self.config.tuning);
        // 4. Shockwave expansion + expiry
        self.shockwaves.advance(dt_secs);
        // 5. Grid deformation (sees only still-live shockwaves)
        self.grid.advance(
            dt_secs,
            self.time.elapsed_secs,
            self.shockwaves.waves(),
            &self.config.tuning,
        );
        // 6. Snapshot assembly (read-only)
        Ok(snapshot::build_snapshot(
            self.time,
            &self.player,
            &self.bursts,
            &self.shockwaves,
            &self.grid,
            &self.config.tuning,
        ))
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the config this simulation was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get a read-only reference to the burst registry.
    #[cfg(test)]
    pub fn bursts(&self) -> &BurstRegistry {
        &self.bursts
    }

    /// Get a read-only reference to the shockwave registry.
    #[cfg(test)]
    pub fn shockwaves(&self) -> &ShockwaveRegistry {
        &self.shockwaves
    }

    /// Get a read-only reference to the deformation grid.
    #[cfg(test)]
    pub fn grid(&self) -> &DeformationGrid {
        &self.grid
    }
}
