//! The deformation grid: a lattice of spring-damped points displaced by
//! ambient waves and live shockwave rings.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridfire_core::config::{SimTuning, Viewport};

use crate::shockwave::Shockwave;

/// One lattice point. The base position never moves; rendering draws the
/// point at base + offset.
#[derive(Debug, Clone)]
pub struct GridPoint {
    base: DVec2,
    offset: DVec2,
    velocity: DVec2,
    /// Per-point phase terms, fixed at construction from the seeded RNG.
    phase_x: f64,
    phase_y: f64,
    /// Per-point ambient sway amplitude, fixed at construction.
    amplitude: f64,
}

impl GridPoint {
    fn new(base: DVec2, rng: &mut ChaCha8Rng, tuning: &SimTuning) -> Self {
        let jitter = tuning.wave_amplitude_jitter;
        let amplitude = if jitter > 0.0 {
            rng.gen_range(tuning.wave_amplitude - jitter..tuning.wave_amplitude + jitter)
        } else {
            tuning.wave_amplitude
        };
        Self {
            base,
            offset: DVec2::ZERO,
            velocity: DVec2::ZERO,
            phase_x: rng.gen_range(0.0..TAU),
            phase_y: rng.gen_range(0.0..TAU),
            amplitude,
        }
    }

    pub fn base(&self) -> DVec2 {
        self.base
    }

    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    /// Where rendering draws this point.
    pub fn drawn(&self) -> DVec2 {
        self.base + self.offset
    }
}

/// The full lattice: `cols × rows` points spanning the viewport at
/// `grid_spacing` intervals, both edges included. Row-major storage.
#[derive(Debug, Clone)]
pub struct DeformationGrid {
    points: Vec<GridPoint>,
    cols: usize,
    rows: usize,
}

impl DeformationGrid {
    /// Build the lattice. Per-point randomness comes from the engine's
    /// seeded RNG, so two grids built from the same seed are identical.
    pub fn new(viewport: &Viewport, tuning: &SimTuning, rng: &mut ChaCha8Rng) -> Self {
        let cols = (viewport.width / tuning.grid_spacing).floor() as usize + 1;
        let rows = (viewport.height / tuning.grid_spacing).floor() as usize + 1;
        let mut points = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let base = DVec2::new(col as f64, row as f64) * tuning.grid_spacing;
                points.push(GridPoint::new(base, rng, tuning));
            }
        }
        Self { points, cols, rows }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Point at (col, row). Row-major: index = row * cols + col.
    pub fn point(&self, col: usize, row: usize) -> &GridPoint {
        &self.points[row * self.cols + col]
    }

    /// Advance the lattice one step.
    ///
    /// Each point's target offset is its ambient sway plus the superposed
    /// push of every live shockwave ring passing through it. The offset
    /// then chases the target through a spring-damper filter; it never
    /// snaps straight onto it. A zero or negative delta changes nothing.
    pub fn advance(
        &mut self,
        dt_secs: f64,
        elapsed_secs: f64,
        shockwaves: &[Shockwave],
        tuning: &SimTuning,
    ) {
        if dt_secs <= 0.0 {
            return;
        }

        for point in &mut self.points {
            let mut target = ambient_target(point, elapsed_secs, tuning);
            for wave in shockwaves {
                if let Some(push) = shockwave_push(point.base, wave, tuning) {
                    target += push;
                }
            }

            point.velocity += (target - point.offset) * tuning.spring_constant;
            point.velocity *= tuning.spring_drag;
            point.offset += point.velocity;
        }
    }
}

/// Ambient sway target for one point at simulation time `t`. Each axis is
/// driven by the point's other base coordinate.
fn ambient_target(point: &GridPoint, t: f64, tuning: &SimTuning) -> DVec2 {
    let phase = t * tuning.wave_speed;
    DVec2::new(
        point.amplitude * (point.base.y / tuning.wave_length + phase + point.phase_x).sin(),
        point.amplitude * (point.base.x / tuning.wave_length + phase + point.phase_y).sin(),
    )
}

/// Radial push a single shockwave adds to the target of the point at `pos`,
/// or `None` when the point sits outside the ring's active band.
fn shockwave_push(pos: DVec2, wave: &Shockwave, tuning: &SimTuning) -> Option<DVec2> {
    let delta = pos - wave.origin();
    let distance = delta.length();
    let band = (distance - wave.radius()).abs();
    if band >= tuning.shock_band_thickness {
        return None;
    }

    let falloff = 1.0 - band / tuning.shock_band_thickness;
    let ripple =
        TAU * (distance / tuning.fire_wavelength - wave.elapsed_secs() * tuning.fire_frequency);
    let magnitude = tuning.fire_amplitude * ripple.sin() * falloff;
    let angle = delta.y.atan2(delta.x);
    Some(DVec2::new(magnitude * angle.cos(), magnitude * angle.sin()))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn default_grid(seed: u64) -> DeformationGrid {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        DeformationGrid::new(&Viewport::default(), &SimTuning::default(), &mut rng)
    }

    #[test]
    fn test_lattice_covers_viewport_inclusive() {
        let grid = default_grid(1);
        // 1280 / 40 + 1 columns, 720 / 40 + 1 rows.
        assert_eq!(grid.cols(), 33);
        assert_eq!(grid.rows(), 19);
        assert_eq!(grid.points().len(), 33 * 19);

        let last = grid.point(32, 18);
        assert_eq!(last.base(), DVec2::new(1280.0, 720.0));
    }

    #[test]
    fn test_lattice_sizes_follow_the_viewport() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let grid = DeformationGrid::new(
            &Viewport::new(800.0, 600.0),
            &SimTuning::default(),
            &mut rng,
        );
        assert_eq!(grid.cols(), 21);
        assert_eq!(grid.rows(), 16);
        assert_eq!(grid.point(20, 15).base(), DVec2::new(800.0, 600.0));
    }

    #[test]
    fn test_points_start_at_rest() {
        let grid = default_grid(2);
        for point in grid.points() {
            assert_eq!(point.offset(), DVec2::ZERO);
            assert_eq!(point.drawn(), point.base());
        }
    }

    #[test]
    fn test_same_seed_builds_identical_grids() {
        let mut a = default_grid(99);
        let mut b = default_grid(99);
        let tuning = SimTuning::default();

        // Phases and amplitudes are hidden state; drive both grids and
        // compare the observable result.
        for step in 0..60 {
            let t = step as f64 / 60.0;
            a.advance(1.0 / 60.0, t, &[], &tuning);
            b.advance(1.0 / 60.0, t, &[], &tuning);
        }
        for (pa, pb) in a.points().iter().zip(b.points().iter()) {
            assert_eq!(pa.drawn(), pb.drawn(), "Same seed, same sway");
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = default_grid(1);
        let mut b = default_grid(2);
        let tuning = SimTuning::default();
        a.advance(1.0 / 60.0, 0.0, &[], &tuning);
        b.advance(1.0 / 60.0, 0.0, &[], &tuning);

        let moved_apart = a
            .points()
            .iter()
            .zip(b.points().iter())
            .any(|(pa, pb)| pa.drawn() != pb.drawn());
        assert!(moved_apart, "Per-point phases should differ between seeds");
    }

    #[test]
    fn test_ambient_sway_stays_bounded() {
        let mut grid = default_grid(3);
        let tuning = SimTuning::default();
        let dt = 1.0 / 60.0;
        let mut t = 0.0;

        // Bound: per-axis ambient targets never exceed the max per-point
        // amplitude (5.0); the lag filter tracks them without blowing up.
        for _ in 0..2000 {
            t += dt;
            grid.advance(dt, t, &[], &tuning);
            for point in grid.points() {
                assert!(
                    point.offset().x.abs() < 20.0 && point.offset().y.abs() < 20.0,
                    "Ambient-only offset ran away: {:?}",
                    point.offset()
                );
            }
        }
    }

    #[test]
    fn test_shockwave_disturbs_only_its_band() {
        let tuning = SimTuning::default();
        let mut hit = default_grid(5);
        let mut control = default_grid(5);

        // A wave 1.0 s old has radius 300; its band is 270..330 from origin.
        let mut wave = Shockwave::new(DVec2::new(640.0, 360.0), &tuning);
        wave.advance(1.0);

        hit.advance(1.0 / 60.0, 1.0, &[wave], &tuning);
        control.advance(1.0 / 60.0, 1.0, &[], &tuning);

        let mut banded_differs = false;
        for (ph, pc) in hit.points().iter().zip(control.points().iter()) {
            let distance = (ph.base() - DVec2::new(640.0, 360.0)).length();
            let in_band = (distance - 300.0).abs() < tuning.shock_band_thickness;
            if in_band {
                if ph.offset() != pc.offset() {
                    banded_differs = true;
                }
            } else {
                assert_eq!(
                    ph.offset(),
                    pc.offset(),
                    "Point {} units out should not feel a radius-300 ring",
                    distance
                );
            }
        }
        assert!(banded_differs, "Band points should feel the ring");
    }

    #[test]
    fn test_zero_delta_freezes_the_lattice() {
        let mut grid = default_grid(8);
        let tuning = SimTuning::default();
        grid.advance(1.0 / 60.0, 1.0 / 60.0, &[], &tuning);

        let before: Vec<DVec2> = grid.points().iter().map(|p| p.drawn()).collect();
        grid.advance(0.0, 5.0, &[], &tuning);
        for (point, prev) in grid.points().iter().zip(before.iter()) {
            assert_eq!(point.drawn(), *prev, "dt = 0 must not relax the spring");
        }
    }
}
