//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use std::collections::HashMap;

use hecs::World;

use barrage_core::components::{CannonRig, Shell, ShellState};
use barrage_core::constants::DETONATION_SAMPLE_STRIDE;
use barrage_core::enums::GamePhase;
use barrage_core::events::RenderEvent;
use barrage_core::state::*;
use barrage_core::types::{Position, SimTime};

use crate::detonation::{Detonation, Stats};
use crate::scheduler::TaskHandle;
use crate::systems::supply;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    bombardments: &HashMap<u32, TaskHandle>,
    detonations: &HashMap<u32, Detonation>,
    stats: &Stats,
    render_events: Vec<RenderEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        cannons: build_cannons(world, bombardments),
        shells: build_shells(world),
        detonations: build_detonations(detonations),
        supply: SupplyView {
            charges_remaining: supply::total_charges(world),
        },
        stats: StatsView {
            shells_fired: stats.shells_fired,
            charges_spent: stats.charges_spent,
            detonations: stats.detonations,
            actors_struck: stats.actors_struck,
        },
        render_events,
    }
}

/// Build CannonView list from all rig anchors.
fn build_cannons(world: &World, bombardments: &HashMap<u32, TaskHandle>) -> Vec<CannonView> {
    let mut cannons: Vec<CannonView> = world
        .query::<(&CannonRig, &Position)>()
        .iter()
        .map(|(_, (rig, pos))| CannonView {
            cannon_number: rig.cannon_number,
            position: *pos,
            active: bombardments.contains_key(&rig.cannon_number),
        })
        .collect();
    cannons.sort_unstable_by_key(|c| c.cannon_number);
    cannons
}

/// Build ShellView list from all in-flight shells.
fn build_shells(world: &World) -> Vec<ShellView> {
    let mut shells: Vec<(u32, ShellView)> = world
        .query::<(&Shell, &ShellState, &Position)>()
        .iter()
        .map(|(entity, (_, state, pos))| {
            (
                entity.id(),
                ShellView {
                    position: *pos,
                    step: state.step,
                    launched_tick: state.launched_tick,
                },
            )
        })
        .collect();
    shells.sort_unstable_by_key(|(id, _)| *id);
    shells.into_iter().map(|(_, view)| view).collect()
}

/// Build DetonationView list, ordered by detonation id.
fn build_detonations(detonations: &HashMap<u32, Detonation>) -> Vec<DetonationView> {
    let mut views: Vec<DetonationView> = detonations
        .values()
        .map(|det| DetonationView {
            id: det.id,
            origin: det.origin,
            step: det.step,
            radius: det.step / DETONATION_SAMPLE_STRIDE,
            reason: det.reason,
            actors_struck: det.struck.len() as u32,
        })
        .collect();
    views.sort_unstable_by_key(|v| v.id);
    views
}
