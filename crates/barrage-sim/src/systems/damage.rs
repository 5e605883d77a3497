//! Area damage — finds living actors in a shape and strikes each at most
//! once per detonation.

use std::collections::HashSet;

use hecs::{Entity, World};

use barrage_core::components::{Decorative, Living};
use barrage_core::constants::SHELL_DAMAGE;
use barrage_core::shape::Shape;
use barrage_core::types::Position;

/// Living, non-decorative actors inside `shape` at `center`, in ascending
/// entity id order.
pub fn actors_within(world: &World, center: &Position, shape: &Shape) -> Vec<Entity> {
    let mut found: Vec<Entity> = world
        .query::<(&Living, &Position)>()
        .without::<&Decorative>()
        .iter()
        .filter(|(_, (living, pos))| living.hp > 0.0 && shape.contains(center, pos))
        .map(|(entity, _)| entity)
        .collect();
    found.sort_unstable_by_key(|e| e.id());
    found
}

/// Apply the fixed shell damage to every actor in the shape that is not yet
/// in `struck`, adding each to the set. Returns the number newly struck.
///
/// Actors marked in `struck` are skipped even if they are still inside the
/// volume on a later call with the same set.
pub fn apply(
    world: &mut World,
    center: &Position,
    shape: &Shape,
    struck: &mut HashSet<Entity>,
) -> u32 {
    let mut newly_struck = 0;
    for entity in actors_within(world, center, shape) {
        if !struck.insert(entity) {
            continue;
        }
        if let Ok(mut living) = world.get::<&mut Living>(entity) {
            living.hp -= SHELL_DAMAGE;
            newly_struck += 1;
        }
    }
    newly_struck
}
