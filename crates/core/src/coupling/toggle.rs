use super::Openable;
use super::align::is_aligned;
use crate::world::block::{Half, StateOps};
use crate::world::direction::Direction;
use crate::world::position::BlockPos;
use crate::world::{Fluid, ReadWorld, UpdateFlags, WriteWorld};

/// Set the block at `pos` to `open` if it is aligned with `origin` for
/// `facing` and not already there. Returns whether a write happened.
///
/// Writes only sync clients; neighbors are not notified.
pub fn try_toggle<W: WriteWorld>(
    world: &mut W,
    variant: Openable,
    origin: &W::State,
    pos: BlockPos,
    facing: Direction,
    open: bool,
) -> bool {
    let other = world.get_state(pos);
    if !is_aligned(variant, origin, &other, facing) || other.is_open() == open {
        return false;
    }

    let written = other.with_open(open);
    world.set_state(pos, written.clone(), UpdateFlags::CLIENTS);
    if other.is_waterlogged() {
        let delay = world.fluid_tick_delay(Fluid::Water);
        world.schedule_fluid_tick(pos, Fluid::Water, delay);
    }

    if variant == Openable::Door {
        sync_door_leaf(world, &written, pos);
    }

    true
}

/// The other half of the door at `pos`, if one is standing there.
pub(crate) fn door_leaf<W: ReadWorld>(world: &W, door: &W::State, pos: BlockPos) -> Option<(BlockPos, W::State)> {
    let half = door.half()?;
    let leaf_pos = match half {
        Half::Bottom => pos.above(),
        Half::Top => pos.below(),
    };
    let leaf = world.get_state(leaf_pos);
    (leaf.kind() == door.kind() && leaf.facing() == door.facing() && leaf.half() == Some(half.opposite()))
        .then_some((leaf_pos, leaf))
}

/// Copy `open` and `powered` from the door half just written at `pos` onto
/// its other half. Shape updates never reach it because coupled writes skip
/// neighbor notification.
pub fn sync_door_leaf<W: WriteWorld>(world: &mut W, door: &W::State, pos: BlockPos) {
    let Some((leaf_pos, leaf)) = door_leaf(world, door, pos) else {
        return;
    };
    if leaf.is_open() != door.is_open() || leaf.is_powered() != door.is_powered() {
        let synced = leaf.with_open(door.is_open()).with_powered(door.is_powered());
        world.set_state(leaf_pos, synced, UpdateFlags::CLIENTS);
    }
}
