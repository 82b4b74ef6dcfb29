pub mod block;
pub mod direction;
pub mod position;

use block::StateOps;
use position::BlockPos;

/// Flags passed with every block write, in the host's bit convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UpdateFlags(pub u8);

impl UpdateFlags {
    /// Notify the six neighbors so they re-evaluate (redstone, shapes).
    pub const NEIGHBORS: UpdateFlags = UpdateFlags(1);
    /// Send the new state to clients.
    pub const CLIENTS: UpdateFlags = UpdateFlags(2);

    pub const fn contains(self, other: UpdateFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Fluids that can occupy a waterloggable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fluid {
    Water,
}

/// A player (or other actor) driving an activation.
pub trait Actor {
    fn is_sneaking(&self) -> bool;
}

/// Read-only capabilities the coupling core needs from the host world.
pub trait ReadWorld {
    type State: StateOps;
    type Player: Actor;

    /// The state at `pos`. Unloaded or empty positions return an air state.
    fn get_state(&self, pos: BlockPos) -> Self::State;

    /// Strongest redstone signal (0..=15) any neighbor delivers into `pos`.
    fn best_neighbor_signal(&self, pos: BlockPos) -> u8;

    /// Whether `player` may modify the block at `pos`.
    fn may_interact(&self, player: &Self::Player, pos: BlockPos) -> bool;

    /// Delay in ticks before a scheduled fluid update runs.
    fn fluid_tick_delay(&self, fluid: Fluid) -> u32;
}

/// Mutating capabilities. Writes are treated as total.
pub trait WriteWorld: ReadWorld {
    fn set_state(&mut self, pos: BlockPos, state: Self::State, flags: UpdateFlags);

    fn schedule_fluid_tick(&mut self, pos: BlockPos, fluid: Fluid, delay: u32);
}

#[cfg(test)]
mod tests {
    use super::UpdateFlags;

    #[test]
    fn flags_contains() {
        let both = UpdateFlags(3);
        assert_eq!(both, UpdateFlags(3));
        assert!(both.contains(UpdateFlags::CLIENTS));
        assert!(both.contains(UpdateFlags::NEIGHBORS));
        assert!(!UpdateFlags::CLIENTS.contains(UpdateFlags::NEIGHBORS));
    }
}
