//! Entity spawn factories for setting up the simulation world.
//!
//! Creates cannon rigs (anchor, orientation parts, gunner), supply crates,
//! and practice targets with appropriate component bundles.

use glam::DVec3;
use hecs::World;

use barrage_core::components::*;
use barrage_core::constants::*;
use barrage_core::enums::{BlockKind, ItemKind, RigPartRole};
use barrage_core::types::{BlockPos, Position};

use crate::terrain::BlockMap;

/// Set up a firing range: a stone floor one block below `ground_z`, one
/// cannon aiming east, and a stocked supply crate beside the gunner.
/// Returns the cannon number.
pub fn setup_range(world: &mut World, terrain: &mut BlockMap, ground_z: f64) -> u32 {
    let floor = ground_z.floor() as i64 - 1;
    terrain.fill_box(
        BlockPos::new(-64, -64, floor),
        BlockPos::new(64, 64, floor),
        BlockKind::Stone,
    );

    let cannon_number = 1;
    spawn_cannon(
        world,
        Position::new(0.0, 0.0, ground_z + 1.0),
        DVec3::X,
        cannon_number,
    );
    spawn_supply_crate(world, Position::new(0.0, 2.0, ground_z), 16);
    cannon_number
}

/// Spawn a complete cannon: rig anchor, the two orientation parts spaced
/// one block apart along `facing`, and a gunner standing behind the breech.
/// Returns the rig anchor entity.
pub fn spawn_cannon(
    world: &mut World,
    position: Position,
    facing: DVec3,
    cannon_number: u32,
) -> hecs::Entity {
    let facing = facing.try_normalize().unwrap_or(DVec3::X);

    let rig = world.spawn((CannonRig { cannon_number }, position));

    // Breech at the anchor, muzzle one block ahead: the aim direction runs
    // from the breech through the muzzle.
    world.spawn((
        RigPart {
            cannon_number,
            role: RigPartRole::Breech,
        },
        Decorative,
        position,
    ));
    world.spawn((
        RigPart {
            cannon_number,
            role: RigPartRole::Muzzle,
        },
        Decorative,
        position.offset_by(facing, 1.0),
    ));

    world.spawn((
        Gunner { cannon_number },
        Living {
            hp: DEFAULT_ACTOR_HP,
        },
        position.offset_by(facing, -1.0),
    ));

    rig
}

/// Spawn a supply crate holding `charges` propellant charges behind a slot
/// of inert shot (the consumer must skip past it).
pub fn spawn_supply_crate(world: &mut World, position: Position, charges: u32) -> hecs::Entity {
    world.spawn((
        Container {
            slots: vec![
                ItemStack {
                    kind: ItemKind::RoundShot,
                    count: 8,
                },
                ItemStack {
                    kind: ItemKind::Charge,
                    count: charges,
                },
            ],
        },
        position,
    ))
}

/// Spawn a practice target with the given hit points.
pub fn spawn_target_dummy(world: &mut World, position: Position, hp: f64) -> hecs::Entity {
    world.spawn((Living { hp }, position))
}
