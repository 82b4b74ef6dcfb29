use super::Openable;
use crate::world::block::StateOps;
use crate::world::direction::Direction;

/// Is `other` the same kind of openable as `origin`, facing `facing`, in the
/// matching half (and, for doors, hinged on the mirrored side)?
pub fn is_aligned<S: StateOps>(variant: Openable, origin: &S, other: &S, facing: Direction) -> bool {
    if other.kind() != origin.kind() || other.facing() != Some(facing) {
        return false;
    }
    match variant {
        Openable::FenceGate => true,
        Openable::Trapdoor => other.half() == origin.half(),
        Openable::Door => {
            other.half() == origin.half() && other.hinge().is_some() && other.hinge() != origin.hinge()
        }
    }
}
