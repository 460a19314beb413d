//! Default tuning values for the simulation.
//!
//! Every value here is a default: the live values travel in `SimTuning`
//! (see `config`), so a host can override any of them per session.

use crate::types::Rgb;

// --- Viewport ---

/// Default viewport width in world units.
pub const VIEWPORT_WIDTH: f64 = 1280.0;

/// Default viewport height in world units.
pub const VIEWPORT_HEIGHT: f64 = 720.0;

// --- Particles ---

/// Downward gravitational acceleration (units/s²). +y is down in screen space.
pub const PARTICLE_GRAVITY: f64 = 50.0;

/// Fraction of velocity retained after one second of damping.
/// Applied as `damping^dt`, so the decay rate is frame-rate independent.
pub const PARTICLE_DAMPING: f64 = 0.2;

/// Velocity components with magnitude below this snap to zero (units/s).
pub const VELOCITY_EPSILON: f64 = 0.01;

/// Seconds of pre-damping velocity the trail segment reaches back along.
pub const TRAIL_SCALE_SECS: f64 = 0.05;

/// Smallest particle visual size (pixels), inclusive.
pub const PARTICLE_SIZE_MIN: u32 = 4;

/// Largest particle visual size (pixels), exclusive.
pub const PARTICLE_SIZE_MAX: u32 = 10;

// --- Explosion bursts ---

/// Particles created per burst.
pub const PARTICLES_PER_BURST: usize = 50;

/// Lowest initial particle speed (units/s), inclusive.
pub const BURST_SPEED_MIN: f64 = 1.0;

/// Highest initial particle speed (units/s), exclusive.
pub const BURST_SPEED_MAX: f64 = 201.0;

/// Shortest particle lifetime (seconds), inclusive.
pub const BURST_LIFE_MIN: f64 = 2.0;

/// Longest particle lifetime (seconds), exclusive.
pub const BURST_LIFE_MAX: f64 = 4.0;

// --- Shockwaves ---

/// Radial expansion speed (units/s).
pub const SHOCKWAVE_SPEED: f64 = 300.0;

/// Shockwaves expire once elapsed time exceeds this (seconds, strict).
pub const SHOCKWAVE_LIFETIME_SECS: f64 = 4.0;

// --- Deformation grid ---

/// Lattice spacing between grid points (units).
pub const GRID_SPACING: f64 = 40.0;

/// Mean ambient sway amplitude (units).
pub const WAVE_AMPLITUDE: f64 = 4.0;

/// Half-width of the per-point amplitude band: each point draws its own
/// amplitude from [WAVE_AMPLITUDE - jitter, WAVE_AMPLITUDE + jitter).
pub const WAVE_AMPLITUDE_JITTER: f64 = 1.0;

/// Ambient sway spatial wavelength (units).
pub const WAVE_LENGTH: f64 = 150.0;

/// Ambient sway phase speed (radians/s).
pub const WAVE_SPEED: f64 = 0.4;

/// Half-thickness of the ring band inside which a shockwave deforms the
/// grid (units).
pub const SHOCK_BAND_THICKNESS: f64 = 30.0;

/// Peak displacement a shockwave adds to a grid point's target (units).
pub const FIRE_AMPLITUDE: f64 = 25.0;

/// Spatial wavelength of the ripple riding a shockwave ring (units).
pub const FIRE_WAVELENGTH: f64 = 80.0;

/// Temporal frequency of the ripple riding a shockwave ring (Hz).
pub const FIRE_FREQUENCY: f64 = 3.0;

/// Spring pull toward the target offset, per tick.
pub const SPRING_CONSTANT: f64 = 0.02;

/// Fraction of offset velocity retained per tick by the spring damper.
pub const SPRING_DRAG: f64 = 0.96;

// --- Spawning ---

/// Inset from the viewport edges inside which bursts may spawn (units).
pub const SPAWN_MARGIN: f64 = 100.0;

/// Fixed-cadence spawn interval (seconds).
pub const SPAWN_INTERVAL_FIXED_SECS: f64 = 2.0;

/// Shortest randomized spawn interval (seconds), inclusive.
pub const SPAWN_INTERVAL_MIN_SECS: f64 = 3.0;

/// Longest randomized spawn interval (seconds), exclusive.
pub const SPAWN_INTERVAL_MAX_SECS: f64 = 4.0;

// --- Player ---

/// Maximum facing rotation rate (radians/s): two full turns per second.
pub const PLAYER_ROTATION_SPEED: f64 = 4.0 * std::f64::consts::PI;

/// Translation speed while movement input is held (units/s).
pub const PLAYER_MOVEMENT_SPEED: f64 = 200.0;

// --- Palette ---

/// Colors a freshly spawned burst draws from, uniformly.
pub const FIREWORK_PALETTE: [Rgb; 8] = [
    Rgb::new(255, 64, 64),   // red
    Rgb::new(255, 160, 32),  // orange
    Rgb::new(255, 232, 64),  // yellow
    Rgb::new(96, 255, 96),   // green
    Rgb::new(64, 224, 255),  // cyan
    Rgb::new(96, 128, 255),  // blue
    Rgb::new(224, 96, 255),  // purple
    Rgb::new(255, 96, 192),  // pink
];
