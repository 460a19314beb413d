//! A single firework particle: ballistic motion, damping, and fade-out.

use glam::DVec2;

use gridfire_core::config::SimTuning;
use gridfire_core::types::{Rgb, Rgba};

/// One particle of an explosion burst.
///
/// Created only by `ExplosionBurst`; dead once `life_secs` reaches zero,
/// after which its burst drops it on the same advance.
#[derive(Debug, Clone)]
pub struct Particle {
    position: DVec2,
    velocity: DVec2,
    /// Velocity after gravity but before damping, captured each advance.
    /// The trail segment reaches backward along this.
    trail_velocity: DVec2,
    color: Rgb,
    life_secs: f64,
    max_life_secs: f64,
    size: u32,
}

impl Particle {
    pub fn new(position: DVec2, velocity: DVec2, color: Rgb, life_secs: f64, size: u32) -> Self {
        Self {
            position,
            velocity,
            trail_velocity: velocity,
            color,
            life_secs,
            max_life_secs: life_secs,
            size,
        }
    }

    /// Advance by `dt_secs`: integrate position, apply gravity, burn life,
    /// damp velocity, and snap near-rest components to zero. A zero or
    /// negative delta changes nothing.
    pub fn advance(&mut self, dt_secs: f64, tuning: &SimTuning) {
        if dt_secs <= 0.0 {
            return;
        }

        self.position += self.velocity * dt_secs;
        self.velocity.y += tuning.gravity * dt_secs;
        self.life_secs -= dt_secs;
        self.trail_velocity = self.velocity;

        // `damping` is the fraction kept per second; powf makes the decay
        // frame-rate independent.
        self.velocity *= tuning.damping.powf(dt_secs);

        if self.velocity.x.abs() < tuning.velocity_epsilon {
            self.velocity.x = 0.0;
        }
        if self.velocity.y.abs() < tuning.velocity_epsilon {
            self.velocity.y = 0.0;
        }
    }

    pub fn is_dead(&self) -> bool {
        self.life_secs <= 0.0
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn life_secs(&self) -> f64 {
        self.life_secs
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Trailing endpoint of the motion streak.
    pub fn trail_point(&self, tuning: &SimTuning) -> DVec2 {
        self.position - self.trail_velocity * tuning.trail_scale_secs
    }

    /// Base color with alpha scaled by the remaining life fraction.
    pub fn faded_color(&self) -> Rgba {
        let fraction = (self.life_secs / self.max_life_secs).clamp(0.0, 1.0);
        self.color.with_alpha((fraction * 255.0) as u8)
    }
}
