//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Toggle a cannon's bombardment: starts the volley trigger when the
    /// cannon is idle, cancels it when one is running. A no-op when no rig
    /// with this number exists.
    ToggleBombardment { cannon_number: u32 },

    /// Pause the simulation. All timelines freeze in place.
    Pause,
    /// Resume a paused simulation.
    Resume,
}
