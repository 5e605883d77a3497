//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// World block material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// Empty cell; the only passable kind.
    #[default]
    Air,
    Dirt,
    Stone,
    Timber,
}

impl BlockKind {
    /// Whether a shell can fly through this block.
    pub fn is_passable(&self) -> bool {
        matches!(self, BlockKind::Air)
    }
}

/// Item kinds found in storage containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Propellant charge — consumed one per volley.
    Charge,
    /// Solid shot, kept in crates but not consumed by the bombardment.
    RoundShot,
    /// Wadding cloth, likewise inert here.
    Wadding,
}

/// The two orientation reference parts of a cannon rig.
/// The aim direction runs from the breech through the muzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RigPartRole {
    Muzzle,
    Breech,
}

/// Why a shell's flight ended. All three reasons detonate identically;
/// the reason is recorded for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurstReason {
    /// Flew into a non-passable block.
    Obstruction,
    /// Intersected a living actor mid-flight.
    ActorHit,
    /// Ran out its full step budget.
    Expired,
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
}
