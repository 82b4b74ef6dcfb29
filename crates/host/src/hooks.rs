//! Vanilla activation and redstone handling for openables, with the coupling
//! core called afterwards.
//!
//! These stand in for the game's own `use` and `neighborChanged` code paths:
//! the origin block is flipped here first, then the core drives the rest of
//! the run to match.

use couplings_core::config::ConfigError;
use couplings_core::coupling::{Openable, OpenableCore};
use couplings_core::world::block::{Half, StateOps};
use couplings_core::world::position::BlockPos;
use couplings_core::world::{Fluid, ReadWorld, UpdateFlags};

use crate::block::McState;
use crate::config::HostConfig;
use crate::level::Level;
use crate::player::Player;

/// The per-variant coupling cores enabled by the host config.
#[derive(Debug, Clone)]
pub struct Couplings {
    trapdoors: Option<OpenableCore>,
    fence_gates: Option<OpenableCore>,
    doors: Option<OpenableCore>,
}

impl Couplings {
    pub fn new(config: &HostConfig) -> Result<Self, ConfigError> {
        let coupling = config.coupling()?;
        let enabled = |variant: Openable| {
            config
                .couples(variant)
                .then(|| OpenableCore::new(variant, coupling))
        };
        Ok(Self {
            trapdoors: enabled(Openable::Trapdoor),
            fence_gates: enabled(Openable::FenceGate),
            doors: enabled(Openable::Door),
        })
    }

    pub fn core_for(&self, variant: Openable) -> Option<&OpenableCore> {
        match variant {
            Openable::Trapdoor => self.trapdoors.as_ref(),
            Openable::FenceGate => self.fence_gates.as_ref(),
            Openable::Door => self.doors.as_ref(),
        }
    }

    /// A player used the block at `pos`. Returns whether it was activated.
    pub fn use_block(&self, level: &mut Level, pos: BlockPos, player: &Player) -> bool {
        let state = level.get_block(pos);
        let Some(variant) = state.variant() else {
            return false;
        };
        if !state.opens_by_hand() {
            tracing::trace!("{} at {:?} needs redstone", state.name(), pos);
            return false;
        }
        if !level.may_interact(player, pos) {
            return false;
        }

        let flipped = state.with_open(!state.is_open());
        level.update_block(pos, flipped, UpdateFlags::CLIENTS);
        if variant == Openable::Door {
            sync_other_half(level, pos, flipped);
        }
        if flipped.is_waterlogged() {
            level.schedule_tick(pos, Fluid::Water, level.fluid_tick_delay(Fluid::Water));
        }

        if let Some(core) = self.core_for(variant) {
            core.used(level, &flipped, pos, player);
        }
        true
    }

    /// Re-evaluate the redstone input of the openable at `pos`.
    pub fn neighbor_changed(&self, level: &mut Level, pos: BlockPos) {
        let state = level.get_block(pos);
        let Some(variant) = state.variant() else {
            return;
        };

        let mut powered = level.has_neighbor_signal(pos);
        if variant == Openable::Door {
            if let Some((other, _)) = other_half(level, pos, state) {
                powered |= level.has_neighbor_signal(other);
            }
        }
        if powered == state.is_powered() {
            return;
        }

        let mut latched = state.with_powered(powered);
        if state.is_open() != powered {
            latched = latched.with_open(powered);
        }
        level.update_block(pos, latched, UpdateFlags::CLIENTS);
        if variant == Openable::Door {
            sync_other_half(level, pos, latched);
        }
        if latched.is_waterlogged() {
            level.schedule_tick(pos, Fluid::Water, level.fluid_tick_delay(Fluid::Water));
        }

        if let Some(core) = self.core_for(variant) {
            core.neighbor_changed(level, &latched, pos, powered);
        }
    }

    /// Deliver every queued neighbor notification. Returns how many were
    /// delivered.
    pub fn flush_neighbor_updates(&self, level: &mut Level) -> usize {
        let pending = level.take_neighbor_updates();
        for pos in &pending {
            self.neighbor_changed(level, *pos);
        }
        pending.len()
    }
}

/// The other half of the door at `pos`, if it is still standing.
fn other_half(level: &Level, pos: BlockPos, door: McState) -> Option<(BlockPos, McState)> {
    let other_pos = match door.half()? {
        Half::Bottom => pos.above(),
        Half::Top => pos.below(),
    };
    let other = level.get_block(other_pos);
    (other.kind() == door.kind() && other.half() != door.half()).then_some((other_pos, other))
}

/// Copy `open` and `powered` from `door` onto its other half.
fn sync_other_half(level: &Level, pos: BlockPos, door: McState) {
    if let Some((other_pos, other)) = other_half(level, pos, door) {
        let synced = other.with_open(door.is_open()).with_powered(door.is_powered());
        if synced != other {
            level.update_block(other_pos, synced, UpdateFlags::CLIENTS);
        }
    }
}
