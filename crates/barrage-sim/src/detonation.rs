//! Detonation data model — the expanding-shell timeline of one burst.
//!
//! Stored in `SimulationEngine`'s detonation map, NOT as ECS entities.

use std::collections::HashSet;

use barrage_core::enums::BurstReason;
use barrage_core::types::Position;

/// One detonation's timeline state and per-detonation damage record.
#[derive(Debug, Clone)]
pub struct Detonation {
    pub id: u32,
    /// Where the shell burst; the timeline expands around this point.
    pub origin: Position,
    /// Completed timeline steps. The timeline ends at DETONATION_MAX_STEPS.
    pub step: u32,
    /// Why the shell burst. Recorded for display only.
    pub reason: BurstReason,
    /// Actors already struck by this detonation. Never shared between
    /// detonations, so overlapping bursts damage independently.
    pub struck: HashSet<hecs::Entity>,
}

impl Detonation {
    pub fn new(id: u32, origin: Position, reason: BurstReason) -> Self {
        Self {
            id,
            origin,
            step: 0,
            reason,
            struck: HashSet::new(),
        }
    }
}

/// Running tallies tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub shells_fired: u32,
    pub charges_spent: u32,
    pub detonations: u32,
    pub actors_struck: u32,
}
