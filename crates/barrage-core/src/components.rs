//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{ItemKind, RigPartRole};

/// The anchor actor of an in-world cannon.
/// Parts and gunner are linked by `cannon_number`, not entity references,
/// so a lookup can fail when a part has been removed from the world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CannonRig {
    pub cannon_number: u32,
}

/// One of a cannon's orientation reference points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RigPart {
    pub cannon_number: u32,
    pub role: RigPartRole,
}

/// The operator of a cannon; charges are searched for around this actor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Gunner {
    pub cannon_number: u32,
}

/// A damageable actor. An actor counts as living while `hp > 0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Living {
    pub hp: f64,
}

/// Marks an actor as scenery: excluded from strike detection and damage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Decorative;

/// A stack of items inside a container slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ItemStack {
    pub kind: ItemKind,
    pub count: u32,
}

/// A storage container searched by the resource consumer.
/// Slots are scanned in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Container {
    pub slots: Vec<ItemStack>,
}

/// Marks an entity as an in-flight shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shell;

/// Flight state of one shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShellState {
    /// Unit aim direction, fixed at launch.
    pub direction: DVec3,
    /// Completed flight steps. Monotonic, bounded by SHELL_MAX_STEPS.
    pub step: u32,
    /// Tick at which the shell left the muzzle.
    pub launched_tick: u64,
}
