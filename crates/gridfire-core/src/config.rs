//! Simulation configuration: seed, viewport, spawn policy, and every tuning
//! value gathered into one overridable structure.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Rectangular world region the simulation plays out in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: constants::VIEWPORT_WIDTH,
            height: constants::VIEWPORT_HEIGHT,
        }
    }
}

/// How the scheduler picks the delay before each firework.
///
/// Intervals must be positive; the randomized bounds collapse to `min_secs`
/// when the range is empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// Fire every `interval_secs` seconds.
    Fixed { interval_secs: f64 },
    /// Resample each interval uniformly from [min_secs, max_secs).
    Randomized { min_secs: f64, max_secs: f64 },
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        SpawnPolicy::Randomized {
            min_secs: constants::SPAWN_INTERVAL_MIN_SECS,
            max_secs: constants::SPAWN_INTERVAL_MAX_SECS,
        }
    }
}

/// Every tuning value the simulation reads, in one place.
///
/// `Default` mirrors the documented values in `constants`; hosts override
/// individual fields with struct-update syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimTuning {
    // --- Particles ---
    /// Downward gravitational acceleration (units/s²).
    pub gravity: f64,
    /// Fraction of velocity kept per second of damping.
    pub damping: f64,
    /// Velocity components below this magnitude snap to zero (units/s).
    pub velocity_epsilon: f64,
    /// Seconds of pre-damping velocity the trail reaches back along.
    pub trail_scale_secs: f64,
    /// Particle visual size lower bound (pixels), inclusive.
    pub particle_size_min: u32,
    /// Particle visual size upper bound (pixels), exclusive.
    pub particle_size_max: u32,

    // --- Bursts ---
    /// Particles created per burst.
    pub particles_per_burst: usize,
    /// Initial particle speed lower bound (units/s), inclusive.
    pub burst_speed_min: f64,
    /// Initial particle speed upper bound (units/s), exclusive.
    pub burst_speed_max: f64,
    /// Particle lifetime lower bound (seconds), inclusive.
    pub burst_life_min: f64,
    /// Particle lifetime upper bound (seconds), exclusive.
    pub burst_life_max: f64,

    // --- Shockwaves ---
    /// Radial expansion speed (units/s).
    pub shockwave_speed: f64,
    /// Expiry threshold (seconds, strict).
    pub shockwave_lifetime_secs: f64,

    // --- Deformation grid ---
    /// Lattice spacing (units).
    pub grid_spacing: f64,
    /// Mean ambient sway amplitude (units).
    pub wave_amplitude: f64,
    /// Half-width of the per-point amplitude band (units).
    pub wave_amplitude_jitter: f64,
    /// Ambient sway spatial wavelength (units).
    pub wave_length: f64,
    /// Ambient sway phase speed (radians/s).
    pub wave_speed: f64,
    /// Half-thickness of the reactive shockwave ring band (units).
    pub shock_band_thickness: f64,
    /// Peak ring displacement (units).
    pub fire_amplitude: f64,
    /// Ring ripple spatial wavelength (units).
    pub fire_wavelength: f64,
    /// Ring ripple temporal frequency (Hz).
    pub fire_frequency: f64,
    /// Spring pull toward the target offset, per tick.
    pub spring_constant: f64,
    /// Offset velocity retained per tick by the spring damper.
    pub spring_drag: f64,

    // --- Spawning ---
    /// Inset from the viewport edges for spawn positions (units).
    pub spawn_margin: f64,

    // --- Player ---
    /// Maximum facing rotation rate (radians/s).
    pub rotation_speed: f64,
    /// Translation speed while input is held (units/s).
    pub movement_speed: f64,
}

impl Default for SimTuning {
    fn default() -> Self {
        Self {
            gravity: constants::PARTICLE_GRAVITY,
            damping: constants::PARTICLE_DAMPING,
            velocity_epsilon: constants::VELOCITY_EPSILON,
            trail_scale_secs: constants::TRAIL_SCALE_SECS,
            particle_size_min: constants::PARTICLE_SIZE_MIN,
            particle_size_max: constants::PARTICLE_SIZE_MAX,
            particles_per_burst: constants::PARTICLES_PER_BURST,
            burst_speed_min: constants::BURST_SPEED_MIN,
            burst_speed_max: constants::BURST_SPEED_MAX,
            burst_life_min: constants::BURST_LIFE_MIN,
            burst_life_max: constants::BURST_LIFE_MAX,
            shockwave_speed: constants::SHOCKWAVE_SPEED,
            shockwave_lifetime_secs: constants::SHOCKWAVE_LIFETIME_SECS,
            grid_spacing: constants::GRID_SPACING,
            wave_amplitude: constants::WAVE_AMPLITUDE,
            wave_amplitude_jitter: constants::WAVE_AMPLITUDE_JITTER,
            wave_length: constants::WAVE_LENGTH,
            wave_speed: constants::WAVE_SPEED,
            shock_band_thickness: constants::SHOCK_BAND_THICKNESS,
            fire_amplitude: constants::FIRE_AMPLITUDE,
            fire_wavelength: constants::FIRE_WAVELENGTH,
            fire_frequency: constants::FIRE_FREQUENCY,
            spring_constant: constants::SPRING_CONSTANT,
            spring_drag: constants::SPRING_DRAG,
            spawn_margin: constants::SPAWN_MARGIN,
            rotation_speed: constants::PLAYER_ROTATION_SPEED,
            movement_speed: constants::PLAYER_MOVEMENT_SPEED,
        }
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub viewport: Viewport,
    pub spawn_policy: SpawnPolicy,
    pub tuning: SimTuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Viewport::default(),
            spawn_policy: SpawnPolicy::default(),
            tuning: SimTuning::default(),
        }
    }
}
