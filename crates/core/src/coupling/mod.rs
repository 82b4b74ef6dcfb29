//! Entry points called from the host's activation and redstone hooks.

pub mod align;
pub mod power;
pub mod scan;
pub mod toggle;

use crate::config::CouplingConfig;
use crate::world::block::StateOps;
use crate::world::position::BlockPos;
use crate::world::{Actor, ReadWorld, UpdateFlags, WriteWorld};
use scan::{Flow, Role, Scan};

/// The openable block families that couple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Openable {
    Trapdoor,
    FenceGate,
    Door,
}

/// Coupling behavior for one openable variant.
#[derive(Debug, Clone, Copy)]
pub struct OpenableCore {
    variant: Openable,
    config: CouplingConfig,
}

impl OpenableCore {
    pub fn new(variant: Openable, config: CouplingConfig) -> Self {
        Self { variant, config }
    }

    pub fn trapdoor(config: CouplingConfig) -> Self {
        Self::new(Openable::Trapdoor, config)
    }

    pub fn fence_gate(config: CouplingConfig) -> Self {
        Self::new(Openable::FenceGate, config)
    }

    pub fn door(config: CouplingConfig) -> Self {
        Self::new(Openable::Door, config)
    }

    /// A player activated the block at `pos`. `state` is the origin after the
    /// host flipped it; the rest of the run is driven to match.
    pub fn used<W: WriteWorld>(&self, world: &mut W, state: &W::State, pos: BlockPos, player: &W::Player) {
        if player.is_sneaking() && !self.config.ignore_sneaking() {
            tracing::trace!("{:?} at {:?}: sneaking, coupling suppressed", self.variant, pos);
            return;
        }
        self.open_close_each(world, state, pos, Some(player), state.is_open());
    }

    /// The redstone input of the block at `pos` changed to `powered`.
    ///
    /// When the origin lost power but another member of its run is still
    /// powered, the origin is held open instead of closing the run.
    pub fn neighbor_changed<W: WriteWorld>(&self, world: &mut W, state: &W::State, pos: BlockPos, powered: bool) {
        if !powered && self.is_sufficiently_powered(world, state, pos) {
            tracing::debug!("{:?} at {:?}: run still powered, holding open", self.variant, pos);
            let held = state.with_powered(false).with_open(true);
            world.set_state(pos, held.clone(), UpdateFlags::CLIENTS);
            if self.variant == Openable::Door {
                toggle::sync_door_leaf(world, &held, pos);
            }
        } else if !powered || power::received_signal(world, self.variant, state, pos) >= self.config.signal() {
            self.open_close_each(world, state, pos, None, powered);
        }
    }

    /// Whether any block in the run around `pos` receives the configured
    /// coupling signal.
    pub fn is_sufficiently_powered<W: ReadWorld>(&self, world: &W, state: &W::State, pos: BlockPos) -> bool {
        power::is_sufficiently_powered(world, self.variant, state, pos, self.config.distance(), self.config.signal())
    }

    /// Drive every aligned block of the run to `open`. Returns how many blocks
    /// were written.
    fn open_close_each<W: WriteWorld>(
        &self,
        world: &mut W,
        state: &W::State,
        pos: BlockPos,
        player: Option<&W::Player>,
        open: bool,
    ) -> usize {
        let Some(facing) = state.facing() else {
            return 0;
        };

        let mut toggled = 0;
        Scan::new(pos, facing, self.config.distance()).run(|slot| {
            if let Some(player) = player {
                if !world.may_interact(player, slot.pos) {
                    return Flow::Stop;
                }
            }
            if toggle::try_toggle(world, self.variant, state, slot.pos, slot.facing, open) {
                toggled += 1;
                Flow::Continue
            } else {
                match slot.role {
                    Role::Main => Flow::Stop,
                    Role::Paired => Flow::Continue,
                }
            }
        });

        if toggled > 0 {
            tracing::debug!(
                "{:?} at {:?}: coupled {} block(s) to open={}",
                self.variant, pos, toggled, open
            );
        }
        toggled
    }
}
