//! Game state snapshot — the complete visible state sent to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{BurstReason, GamePhase};
use crate::events::RenderEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub cannons: Vec<CannonView>,
    pub shells: Vec<ShellView>,
    pub detonations: Vec<DetonationView>,
    pub supply: SupplyView,
    pub stats: StatsView,
    pub render_events: Vec<RenderEvent>,
}

/// A cannon rig and whether its bombardment is running.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CannonView {
    pub cannon_number: u32,
    pub position: Position,
    /// Whether a volley trigger is currently registered for this cannon.
    pub active: bool,
}

/// An in-flight shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellView {
    pub position: Position,
    /// Completed flight steps (0..SHELL_MAX_STEPS).
    pub step: u32,
    pub launched_tick: u64,
}

/// A running detonation timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetonationView {
    pub id: u32,
    pub origin: Position,
    /// Completed timeline steps (0..DETONATION_MAX_STEPS).
    pub step: u32,
    /// Current shell radius in blocks.
    pub radius: u32,
    pub reason: BurstReason,
    /// Actors struck so far by this detonation.
    pub actors_struck: u32,
}

/// Charge stocks visible to the host HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplyView {
    /// Total charges across all containers in the world.
    pub charges_remaining: u32,
}

/// Running tallies for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsView {
    pub shells_fired: u32,
    pub charges_spent: u32,
    pub detonations: u32,
    pub actors_struck: u32,
}
