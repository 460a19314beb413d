//! Expanding shockwave rings and the registry that owns them.

use glam::DVec2;

use gridfire_core::config::SimTuning;

/// One expanding ring. The radius grows linearly with elapsed time, and the
/// wave expires strictly after its lifetime: a wave at exactly the
/// threshold is still live.
#[derive(Debug, Clone)]
pub struct Shockwave {
    origin: DVec2,
    elapsed_secs: f64,
    speed: f64,
    lifetime_secs: f64,
}

impl Shockwave {
    pub fn new(origin: DVec2, tuning: &SimTuning) -> Self {
        Self {
            origin,
            elapsed_secs: 0.0,
            speed: tuning.shockwave_speed,
            lifetime_secs: tuning.shockwave_lifetime_secs,
        }
    }

    pub fn advance(&mut self, dt_secs: f64) {
        self.elapsed_secs += dt_secs;
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Current ring radius.
    pub fn radius(&self) -> f64 {
        self.speed * self.elapsed_secs
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed_secs > self.lifetime_secs
    }
}

/// Owns every live shockwave. Each wave's lifecycle is independent of the
/// burst that spawned alongside it.
#[derive(Debug, Clone, Default)]
pub struct ShockwaveRegistry {
    waves: Vec<Shockwave>,
}

impl ShockwaveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, origin: DVec2, tuning: &SimTuning) {
        self.waves.push(Shockwave::new(origin, tuning));
    }

    /// Advance every wave, then drop the expired.
    pub fn advance(&mut self, dt_secs: f64) {
        for wave in &mut self.waves {
            wave.advance(dt_secs);
        }
        self.waves.retain(|w| !w.is_expired());
    }

    pub fn waves(&self) -> &[Shockwave] {
        &self.waves
    }

    pub fn active_count(&self) -> usize {
        self.waves.len()
    }
}
