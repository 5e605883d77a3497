//! Resource consumer — takes one charge from storage near the gunner.

use hecs::World;

use barrage_core::components::Container;
use barrage_core::enums::ItemKind;
use barrage_core::shape::Shape;
use barrage_core::types::Position;

/// Take one charge from the first matching stack in any container within
/// the supply search volume around `around`.
///
/// Containers are scanned in ascending entity id order and each container's
/// slots in order; the first stack with at least one charge is decremented
/// and the scan stops there. Returns false when no container yields a match.
/// Never decrements more than one unit per call.
pub fn consume(world: &mut World, around: &Position) -> bool {
    let search = Shape::supply_search();

    let mut containers: Vec<hecs::Entity> = world
        .query::<(&Container, &Position)>()
        .iter()
        .filter(|(_, (_, pos))| search.contains(around, pos))
        .map(|(entity, _)| entity)
        .collect();
    containers.sort_unstable_by_key(|e| e.id());

    for entity in containers {
        let Ok(mut container) = world.get::<&mut Container>(entity) else {
            continue;
        };
        for slot in container.slots.iter_mut() {
            if slot.kind == ItemKind::Charge && slot.count >= 1 {
                slot.count -= 1;
                return true;
            }
        }
    }

    false
}

/// Total charges across every container in the world (for the supply view).
pub fn total_charges(world: &World) -> u32 {
    world
        .query::<&Container>()
        .iter()
        .flat_map(|(_, container)| container.slots.iter())
        .filter(|slot| slot.kind == ItemKind::Charge)
        .map(|slot| slot.count)
        .sum()
}
