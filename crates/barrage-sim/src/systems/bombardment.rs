//! Bombardment control — the toggle entry point and the repeating volley
//! trigger.

use std::collections::HashMap;

use hecs::World;

use barrage_core::components::{CannonRig, Gunner, RigPart, Shell, ShellState};
use barrage_core::constants::*;
use barrage_core::enums::RigPartRole;
use barrage_core::types::Position;

use crate::detonation::Stats;
use crate::scheduler::{TaskHandle, TickScheduler};
use crate::systems::supply;

/// Toggle a cannon's bombardment on or off.
///
/// Exactly one of {start, cancel} runs per invocation. The registry update
/// and the scheduler update happen together, so rapid repeated toggling can
/// never double-start a cannon or orphan a handle. When no rig with this
/// number exists the call is a silent no-op (not ready).
pub fn toggle(
    world: &World,
    scheduler: &mut TickScheduler,
    bombardments: &mut HashMap<u32, TaskHandle>,
    cannon_number: u32,
    now: u64,
) {
    if !rig_exists(world, cannon_number) {
        return;
    }

    match bombardments.remove(&cannon_number) {
        Some(handle) => {
            scheduler.cancel(handle);
        }
        None => {
            let handle = scheduler.schedule_repeating(cannon_number, VOLLEY_PERIOD_TICKS, now);
            bombardments.insert(cannon_number, handle);
        }
    }
}

/// Fire every volley whose trigger is due this tick.
///
/// Per firing: resolve the rig's orientation parts and the gunner — a failed
/// resolution skips the firing (transient, no cancellation). Then consume one
/// charge; on exhaustion the trigger cancels itself and the handle is cleared
/// (the ability stays off until the next toggle). On success one shell spawns
/// at the muzzle. In-flight shells from earlier firings are never touched.
pub fn fire_due_volleys(
    world: &mut World,
    scheduler: &mut TickScheduler,
    bombardments: &mut HashMap<u32, TaskHandle>,
    stats: &mut Stats,
    now: u64,
) {
    for (handle, cannon_number) in scheduler.due(now) {
        let Some(muzzle) = resolve_part(world, cannon_number, RigPartRole::Muzzle) else {
            continue;
        };
        let Some(breech) = resolve_part(world, cannon_number, RigPartRole::Breech) else {
            continue;
        };
        let Some(direction) = (muzzle.as_dvec3() - breech.as_dvec3()).try_normalize() else {
            continue;
        };
        let Some(gunner_pos) = resolve_gunner(world, cannon_number) else {
            continue;
        };

        if !supply::consume(world, &gunner_pos) {
            scheduler.cancel(handle);
            bombardments.remove(&cannon_number);
            continue;
        }
        stats.charges_spent += 1;

        let origin = muzzle.offset_by(direction, MUZZLE_OFFSET);
        world.spawn((
            Shell,
            origin,
            ShellState {
                direction,
                step: 0,
                launched_tick: now,
            },
        ));
        stats.shells_fired += 1;
    }
}

/// Whether any rig anchor with this cannon number exists.
fn rig_exists(world: &World, cannon_number: u32) -> bool {
    world
        .query::<&CannonRig>()
        .iter()
        .any(|(_, rig)| rig.cannon_number == cannon_number)
}

/// Position of a rig part, if it is still in the world.
fn resolve_part(world: &World, cannon_number: u32, role: RigPartRole) -> Option<Position> {
    world
        .query::<(&RigPart, &Position)>()
        .iter()
        .find(|(_, (part, _))| part.cannon_number == cannon_number && part.role == role)
        .map(|(_, (_, pos))| *pos)
}

/// Position of the cannon's gunner, if one is still in the world.
fn resolve_gunner(world: &World, cannon_number: u32) -> Option<Position> {
    world
        .query::<(&Gunner, &Position)>()
        .iter()
        .find(|(_, (gunner, _))| gunner.cannon_number == cannon_number)
        .map(|(_, (_, pos))| *pos)
}
