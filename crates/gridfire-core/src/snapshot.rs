//! Render snapshot: the complete drawable state handed to the host each step.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::types::{Rgba, SimTime};

/// Complete drawable state produced by one simulation step.
///
/// Owns all of its data, so it can be handed to a render thread without
/// touching the simulation again.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub time: SimTime,
    pub player: PlayerView,
    pub particles: Vec<ParticleView>,
    pub grid_edges: Vec<GridEdgeView>,
    /// Live burst count, for debug overlays.
    pub burst_count: u32,
    /// Live shockwave count, for debug overlays.
    pub shockwave_count: u32,
}

/// Player pose for rendering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: DVec2,
    /// Facing angle in radians, normalized to (-π, π]. 0 points along +x.
    pub facing_radians: f64,
}

/// One live particle, ready to draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: DVec2,
    /// Trailing endpoint of the motion-streak segment.
    pub trail: DVec2,
    /// Base color faded by remaining life (alpha 255 = fresh, 0 = expiring).
    pub color: Rgba,
    /// Visual size in pixels.
    pub size: u32,
}

/// One grid edge as a drawn segment between two deformed lattice points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridEdgeView {
    pub a: DVec2,
    pub b: DVec2,
}
