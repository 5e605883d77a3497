//! Detonation timeline system — expands each burst's sphere, applies area
//! damage once per sampled radius, and drives the burst particle grid.
//!
//! Damage and rendering are decoupled: one damage pass covers the whole
//! sampled radius, while the 11 × 11 angular grid exists purely to place
//! particles.

use std::collections::HashMap;

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use barrage_core::constants::*;
use barrage_core::events::{CueKind, ParticleKind, RenderEvent};
use barrage_core::shape::Shape;
use barrage_core::types::Position;

use crate::detonation::{Detonation, Stats};
use crate::systems::damage;

/// Advance all detonation timelines by one step.
pub fn run(
    world: &mut World,
    detonations: &mut HashMap<u32, Detonation>,
    rng: &mut ChaCha8Rng,
    stats: &mut Stats,
    render_events: &mut Vec<RenderEvent>,
) {
    let mut ids: Vec<u32> = detonations.keys().copied().collect();
    ids.sort_unstable();

    for id in ids {
        let Some(det) = detonations.get_mut(&id) else {
            continue;
        };
        let step = det.step;

        // Only every sample-stride step performs work; the rest are no-ops.
        if step % DETONATION_SAMPLE_STRIDE == 0 {
            let radius = step / DETONATION_SAMPLE_STRIDE;
            let origin = det.origin;

            if radius == 0 {
                render_events.push(RenderEvent::PlayCue {
                    position: origin,
                    cue: CueKind::DetonationBoom,
                    volume: DETONATION_CUE_VOLUME,
                    pitch: DETONATION_CUE_PITCH,
                });
            }

            // One damage pass for the full sampled radius, guarded by the
            // detonation's own struck set.
            let shape = Shape::Sphere {
                radius: radius as f64 + STRIKE_HALF_EXTENT,
            };
            stats.actors_struck += damage::apply(world, &origin, &shape, &mut det.struck);

            emit_burst_grid(render_events, rng, &origin, radius);
        }

        det.step += 1;
    }

    detonations.retain(|_, det| det.step < DETONATION_MAX_STEPS);
}

/// Particle grid over the burst sphere at the current radius: 11 × 11 points
/// spanning the sphere via two angle parameters, each jittered slightly.
fn emit_burst_grid(
    render_events: &mut Vec<RenderEvent>,
    rng: &mut ChaCha8Rng,
    origin: &Position,
    radius: u32,
) {
    let r = radius as f64;
    for i in 0..=BURST_GRID_DIVISIONS {
        for j in 0..=BURST_GRID_DIVISIONS {
            let angle1 = std::f64::consts::TAU * i as f64 / BURST_GRID_DIVISIONS as f64;
            let angle2 = std::f64::consts::TAU * j as f64 / BURST_GRID_DIVISIONS as f64;
            let offset = DVec3::new(
                r * angle1.sin() * angle2.cos(),
                r * angle1.sin() * angle2.sin(),
                r * angle1.cos(),
            );
            let point = origin.offset_by(offset, 1.0);

            let running_index = i * (BURST_GRID_DIVISIONS + 1) + j;
            if running_index % BLAST_PLUME_STRIDE == 0 {
                render_events.push(RenderEvent::EmitParticle {
                    position: jittered(rng, &point),
                    kind: ParticleKind::BlastPlume,
                    count: BLAST_PLUME_COUNT,
                });
            }
            render_events.push(RenderEvent::EmitParticle {
                position: jittered(rng, &point),
                kind: ParticleKind::Flame,
                count: BURST_FLAME_COUNT,
            });
        }
    }
}

/// A position displaced by up to the jitter half-width on each axis.
fn jittered(rng: &mut ChaCha8Rng, pos: &Position) -> Position {
    Position::new(
        pos.x + rng.gen_range(-PARTICLE_JITTER..=PARTICLE_JITTER),
        pos.y + rng.gen_range(-PARTICLE_JITTER..=PARTICLE_JITTER),
        pos.z + rng.gen_range(-PARTICLE_JITTER..=PARTICLE_JITTER),
    )
}
