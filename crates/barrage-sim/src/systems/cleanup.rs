//! Cleanup system: removes actors that have run out of hit points.

use hecs::{Entity, World};

use barrage_core::components::Living;

/// Despawn every actor at zero hit points or below.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, living) in world.query_mut::<&Living>() {
        if living.hp <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
