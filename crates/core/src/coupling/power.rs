use super::Openable;
use super::align::is_aligned;
use super::scan::{Flow, Role, Scan};
use super::toggle::door_leaf;
use crate::world::ReadWorld;
use crate::world::block::StateOps;
use crate::world::position::BlockPos;

/// Does any block of the coupled run around `pos` receive at least `signal`?
///
/// Walks the same rays as a toggle scan. Aligned but unpowered main-ray
/// blocks keep their ray going; a mis-aligned one ends it.
pub fn is_sufficiently_powered<W: ReadWorld>(
    world: &W,
    variant: Openable,
    origin: &W::State,
    pos: BlockPos,
    distance: u32,
    signal: u8,
) -> bool {
    let Some(facing) = origin.facing() else {
        return false;
    };

    Scan::new(pos, facing, distance)
        .run(|slot| {
            let other = world.get_state(slot.pos);
            if !is_aligned(variant, origin, &other, slot.facing) {
                return match slot.role {
                    Role::Main => Flow::Stop,
                    Role::Paired => Flow::Continue,
                };
            }
            if received_signal(world, variant, &other, slot.pos) >= signal {
                Flow::Found
            } else {
                Flow::Continue
            }
        })
        .is_some()
}

/// Strongest signal reaching the block at `pos`. A door takes power through
/// either of its halves.
pub fn received_signal<W: ReadWorld>(world: &W, variant: Openable, state: &W::State, pos: BlockPos) -> u8 {
    let signal = world.best_neighbor_signal(pos);
    if variant != Openable::Door {
        return signal;
    }
    match door_leaf(world, state, pos) {
        Some((leaf_pos, _)) => signal.max(world.best_neighbor_signal(leaf_pos)),
        None => signal,
    }
}
