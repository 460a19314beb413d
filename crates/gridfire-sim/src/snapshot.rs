//! Snapshot assembly: reads the live simulation state and builds a
//! complete `RenderSnapshot`.
//!
//! Assembly is read-only. It never modifies simulation state.

use gridfire_core::config::SimTuning;
use gridfire_core::snapshot::{GridEdgeView, ParticleView, PlayerView, RenderSnapshot};
use gridfire_core::types::SimTime;

use crate::burst::BurstRegistry;
use crate::grid::DeformationGrid;
use crate::player::PlayerState;
use crate::shockwave::ShockwaveRegistry;

/// Build a complete `RenderSnapshot` from the current simulation state.
pub fn build_snapshot(
    time: SimTime,
    player: &PlayerState,
    bursts: &BurstRegistry,
    shockwaves: &ShockwaveRegistry,
    grid: &DeformationGrid,
    tuning: &SimTuning,
) -> RenderSnapshot {
    RenderSnapshot {
        time,
        player: build_player(player),
        particles: build_particles(bursts, tuning),
        grid_edges: build_grid_edges(grid),
        burst_count: bursts.active_count() as u32,
        shockwave_count: shockwaves.active_count() as u32,
    }
}

fn build_player(player: &PlayerState) -> PlayerView {
    PlayerView {
        position: player.position(),
        facing_radians: player.facing_radians(),
    }
}

/// Flatten every live particle across all bursts into draw-ready views.
/// Dead particles never cross this boundary.
fn build_particles(bursts: &BurstRegistry, tuning: &SimTuning) -> Vec<ParticleView> {
    bursts
        .bursts()
        .iter()
        .flat_map(|burst| burst.particles().iter())
        .filter(|particle| !particle.is_dead())
        .map(|particle| ParticleView {
            position: particle.position(),
            trail: particle.trail_point(tuning),
            color: particle.faded_color(),
            size: particle.size(),
        })
        .collect()
}

/// Every lattice edge (right and down neighbours) at its deformed endpoints.
fn build_grid_edges(grid: &DeformationGrid) -> Vec<GridEdgeView> {
    let cols = grid.cols();
    let rows = grid.rows();
    let mut edges = Vec::with_capacity(rows * (cols - 1) + cols * (rows - 1));
    for row in 0..rows {
        for col in 0..cols {
            let a = grid.point(col, row).drawn();
            if col + 1 < cols {
                edges.push(GridEdgeView {
                    a,
                    b: grid.point(col + 1, row).drawn(),
                });
            }
            if row + 1 < rows {
                edges.push(GridEdgeView {
                    a,
                    b: grid.point(col, row + 1).drawn(),
                });
            }
        }
    }
    edges
}
