//! Logical movement input sampled by the host each frame.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The set of movement directions held during one step.
///
/// One typed field per direction makes a malformed input set
/// unrepresentable; opposite directions simply cancel to a zero vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Raw direction sum in screen coordinates (+x right, +y down).
    /// Not normalized; zero when nothing (or only cancelling pairs) is held.
    pub fn direction(&self) -> DVec2 {
        let mut dir = DVec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }
}
