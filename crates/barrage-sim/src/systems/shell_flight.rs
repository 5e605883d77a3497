//! Shell flight system — advances every in-flight shell one step per tick.
//!
//! A step advances the shell along its fixed aim direction, applies the
//! decorative droop, then checks the termination conditions in order:
//! obstruction, actor intersection, step budget. Termination is a state
//! transition returned from the step evaluation — every terminated shell
//! registers exactly one detonation at its final location and despawns.

use std::collections::HashMap;

use hecs::{Entity, World};

use barrage_core::components::{Shell, ShellState};
use barrage_core::constants::*;
use barrage_core::enums::BurstReason;
use barrage_core::events::{CueKind, ParticleKind, RenderEvent};
use barrage_core::shape::Shape;
use barrage_core::types::Position;

use crate::detonation::{Detonation, Stats};
use crate::systems::damage;
use crate::terrain::BlockMap;

/// Advance all shells by one flight step.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    terrain: &BlockMap,
    detonations: &mut HashMap<u32, Detonation>,
    next_detonation_id: &mut u32,
    stats: &mut Stats,
    render_events: &mut Vec<RenderEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let strike = Shape::strike();

    // Collect first: the per-shell checks query the rest of the world.
    let mut shells: Vec<(Entity, Position, ShellState)> = world
        .query::<(&Shell, &ShellState, &Position)>()
        .iter()
        .map(|(entity, (_, state, pos))| (entity, *pos, *state))
        .collect();
    shells.sort_unstable_by_key(|(entity, _, _)| entity.id());

    for (entity, pos, state) in shells {
        let step = state.step;

        let mut new_pos = pos.offset_by(state.direction, SHELL_STEP_LENGTH);
        new_pos.z -= SHELL_DROOP_COEFF * (step as f64) * (step as f64);

        if !terrain.is_passable(&new_pos) {
            burst(
                detonations,
                next_detonation_id,
                stats,
                new_pos,
                BurstReason::Obstruction,
            );
            despawn_buffer.push(entity);
            continue;
        }

        if !damage::actors_within(world, &new_pos, &strike).is_empty() {
            burst(
                detonations,
                next_detonation_id,
                stats,
                new_pos,
                BurstReason::ActorHit,
            );
            despawn_buffer.push(entity);
            continue;
        }

        emit_flight_cues(render_events, &new_pos, step);

        let next_step = step + 1;
        if next_step >= SHELL_MAX_STEPS {
            burst(
                detonations,
                next_detonation_id,
                stats,
                new_pos,
                BurstReason::Expired,
            );
            despawn_buffer.push(entity);
            continue;
        }

        if let Ok(mut p) = world.get::<&mut Position>(entity) {
            *p = new_pos;
        }
        if let Ok(mut s) = world.get::<&mut ShellState>(entity) {
            s.step = next_step;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Register one detonation at the shell's final location.
fn burst(
    detonations: &mut HashMap<u32, Detonation>,
    next_detonation_id: &mut u32,
    stats: &mut Stats,
    origin: Position,
    reason: BurstReason,
) {
    let id = *next_detonation_id;
    *next_detonation_id += 1;
    detonations.insert(id, Detonation::new(id, origin, reason));
    stats.detonations += 1;
}

/// In-flight sound and particle cues for one surviving step.
fn emit_flight_cues(render_events: &mut Vec<RenderEvent>, pos: &Position, step: u32) {
    if step == LAUNCH_CUE_STEP {
        render_events.push(RenderEvent::PlayCue {
            position: *pos,
            cue: CueKind::LaunchBoom,
            volume: LAUNCH_CUE_VOLUME,
            pitch: LAUNCH_CUE_PITCH,
        });
    }
    render_events.push(RenderEvent::EmitParticle {
        position: *pos,
        kind: ParticleKind::SmokeTrail,
        count: SMOKE_TRAIL_COUNT,
    });
    render_events.push(RenderEvent::EmitParticle {
        position: *pos,
        kind: ParticleKind::TracerGlow,
        count: TRACER_GLOW_COUNT,
    });
    if step % FUSE_CUE_INTERVAL == 0 {
        render_events.push(RenderEvent::PlayCue {
            position: *pos,
            cue: CueKind::FuseCrackle,
            volume: FUSE_CUE_VOLUME,
            pitch: FUSE_CUE_PITCH,
        });
    }
}
