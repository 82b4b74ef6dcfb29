//! In-memory level implementing the coupling core's world capabilities.

use std::sync::atomic::{AtomicU64, Ordering};

use couplings_core::world::position::BlockPos;
use couplings_core::world::{Fluid, ReadWorld, UpdateFlags, WriteWorld};
use dashmap::{DashMap, DashSet};

use crate::block::McState;
use crate::player::Player;

/// Vanilla world border half-width.
pub const DEFAULT_BORDER_RADIUS: i64 = 29_999_984;

/// Ticks between a water update being scheduled and running.
pub const WATER_TICK_DELAY: u32 = 5;

/// Square area around spawn that only operators may modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnProtection {
    pub center: BlockPos,
    pub radius: i64,
}

impl SpawnProtection {
    pub fn contains(&self, pos: BlockPos) -> bool {
        self.center.horizontal_distance(&pos) <= self.radius
    }
}

/// A pending fluid update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    pub fluid: Fluid,
    /// Game time at which the tick is due.
    pub due: u64,
}

/// The block world plus the bits of level state the hooks touch: redstone
/// sources, the fluid tick list and pending update queues.
///
/// Every method takes `&self`; `DashMap` provides interior mutability via
/// per-shard locking.
pub struct Level {
    blocks: DashMap<BlockPos, McState>,
    /// Positions emitting redstone power into all six neighbors.
    sources: DashMap<BlockPos, u8>,
    fluid_ticks: DashMap<BlockPos, ScheduledTick>,
    /// Positions whose state must be sent to clients.
    client_updates: DashSet<BlockPos>,
    /// Positions owed a neighbor-changed notification.
    neighbor_updates: DashSet<BlockPos>,
    game_time: AtomicU64,
    border_radius: i64,
    spawn_protection: Option<SpawnProtection>,
}

impl Level {
    pub fn new() -> Self {
        Self {
            blocks: DashMap::new(),
            sources: DashMap::new(),
            fluid_ticks: DashMap::new(),
            client_updates: DashSet::new(),
            neighbor_updates: DashSet::new(),
            game_time: AtomicU64::new(0),
            border_radius: DEFAULT_BORDER_RADIUS,
            spawn_protection: None,
        }
    }

    pub fn with_border_radius(mut self, radius: i64) -> Self {
        self.border_radius = radius;
        self
    }

    pub fn with_spawn_protection(mut self, protection: SpawnProtection) -> Self {
        self.spawn_protection = Some(protection);
        self
    }

    /// Read a block. Returns AIR for positions never written.
    pub fn get_block(&self, pos: BlockPos) -> McState {
        self.blocks.get(&pos).map_or(McState::AIR, |entry| *entry)
    }

    /// Place a block silently (world generation, test setup).
    pub fn set_block(&self, pos: BlockPos, state: McState) {
        if state.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, state);
        }
    }

    /// Write a block honoring update flags: `CLIENTS` marks it for sync,
    /// `NEIGHBORS` queues notifications for the six neighbors.
    pub fn update_block(&self, pos: BlockPos, state: McState, flags: UpdateFlags) {
        self.set_block(pos, state);
        if flags.contains(UpdateFlags::CLIENTS) {
            self.client_updates.insert(pos);
        }
        if flags.contains(UpdateFlags::NEIGHBORS) {
            self.notify_neighbors(pos);
        }
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Place, change or remove (`signal == 0`) a redstone source. Its
    /// neighbors are queued for notification.
    pub fn set_source(&self, pos: BlockPos, signal: u8) {
        if signal == 0 {
            self.sources.remove(&pos);
        } else {
            self.sources.insert(pos, signal.min(15));
        }
        self.notify_neighbors(pos);
    }

    /// Strongest signal delivered into `pos` by an adjacent source.
    pub fn neighbor_signal(&self, pos: BlockPos) -> u8 {
        pos.neighbors()
            .iter()
            .filter_map(|n| self.sources.get(n).map(|s| *s))
            .max()
            .unwrap_or(0)
    }

    pub fn has_neighbor_signal(&self, pos: BlockPos) -> bool {
        self.neighbor_signal(pos) > 0
    }

    pub fn notify_neighbors(&self, pos: BlockPos) {
        for n in pos.neighbors() {
            self.neighbor_updates.insert(n);
        }
    }

    /// Drain positions owed a neighbor notification, in position order.
    pub fn take_neighbor_updates(&self) -> Vec<BlockPos> {
        drain_sorted(&self.neighbor_updates)
    }

    /// Drain positions whose state changed for clients, in position order.
    pub fn take_client_updates(&self) -> Vec<BlockPos> {
        drain_sorted(&self.client_updates)
    }

    /// Queue a fluid update. A position already on the tick list keeps its
    /// earlier schedule.
    pub fn schedule_tick(&self, pos: BlockPos, fluid: Fluid, delay: u32) {
        let due = self.game_time() + u64::from(delay);
        self.fluid_ticks.entry(pos).or_insert(ScheduledTick { fluid, due });
    }

    pub fn scheduled_tick(&self, pos: BlockPos) -> Option<ScheduledTick> {
        self.fluid_ticks.get(&pos).map(|t| *t)
    }

    pub fn scheduled_tick_count(&self) -> usize {
        self.fluid_ticks.len()
    }

    pub fn game_time(&self) -> u64 {
        self.game_time.load(Ordering::Relaxed)
    }

    /// Move the clock forward and return the fluid ticks that became due.
    pub fn advance(&self, ticks: u64) -> Vec<(BlockPos, ScheduledTick)> {
        let now = self.game_time.fetch_add(ticks, Ordering::Relaxed) + ticks;
        let due: Vec<BlockPos> = self
            .fluid_ticks
            .iter()
            .filter(|entry| entry.due <= now)
            .map(|entry| *entry.key())
            .collect();
        let mut ran: Vec<(BlockPos, ScheduledTick)> = due
            .into_iter()
            .filter_map(|pos| self.fluid_ticks.remove(&pos))
            .collect();
        ran.sort_by_key(|(pos, tick)| (tick.due, *pos));
        ran
    }

    pub fn within_border(&self, pos: BlockPos) -> bool {
        pos.x.abs() <= self.border_radius && pos.z.abs() <= self.border_radius
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new()
    }
}

fn drain_sorted(set: &DashSet<BlockPos>) -> Vec<BlockPos> {
    let mut out: Vec<BlockPos> = set.iter().map(|entry| *entry).collect();
    for pos in &out {
        set.remove(pos);
    }
    out.sort();
    out
}

impl ReadWorld for Level {
    type State = McState;
    type Player = Player;

    fn get_state(&self, pos: BlockPos) -> McState {
        self.get_block(pos)
    }

    fn best_neighbor_signal(&self, pos: BlockPos) -> u8 {
        self.neighbor_signal(pos)
    }

    fn may_interact(&self, player: &Player, pos: BlockPos) -> bool {
        if !self.within_border(pos) {
            return false;
        }
        match self.spawn_protection {
            Some(protection) => player.operator || !protection.contains(pos),
            None => true,
        }
    }

    fn fluid_tick_delay(&self, fluid: Fluid) -> u32 {
        match fluid {
            Fluid::Water => WATER_TICK_DELAY,
        }
    }
}

impl WriteWorld for Level {
    fn set_state(&mut self, pos: BlockPos, state: McState, flags: UpdateFlags) {
        self.update_block(pos, state, flags);
    }

    fn schedule_fluid_tick(&mut self, pos: BlockPos, fluid: Fluid, delay: u32) {
        self.schedule_tick(pos, fluid, delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_positions_are_air() {
        let level = Level::new();
        assert_eq!(level.get_block(BlockPos::new(3, 64, -2)), McState::AIR);
        assert_eq!(level.block_count(), 0);
    }

    #[test]
    fn neighbor_signal_takes_strongest_source() {
        let level = Level::new();
        let pos = BlockPos::new(0, 64, 0);
        level.set_source(pos.offset(1, 0, 0), 7);
        level.set_source(pos.offset(0, -1, 0), 12);
        level.set_source(pos.offset(2, 0, 0), 15);
        assert_eq!(level.neighbor_signal(pos), 12);
        level.set_source(pos.offset(0, -1, 0), 0);
        assert_eq!(level.neighbor_signal(pos), 7);
    }

    #[test]
    fn update_flags_drive_queues() {
        let level = Level::new();
        let pos = BlockPos::new(0, 0, 0);
        level.update_block(pos, McState(1), UpdateFlags::CLIENTS);
        assert_eq!(level.take_client_updates(), vec![pos]);
        assert!(level.take_neighbor_updates().is_empty());

        level.update_block(pos, McState::AIR, UpdateFlags::NEIGHBORS);
        assert!(level.take_client_updates().is_empty());
        assert_eq!(level.take_neighbor_updates().len(), 6);
        assert_eq!(level.get_block(pos), McState::AIR);
    }

    #[test]
    fn fluid_ticks_keep_first_schedule_and_run_when_due() {
        let level = Level::new();
        let pos = BlockPos::new(4, 0, 4);
        level.schedule_tick(pos, Fluid::Water, 5);
        level.advance(2);
        level.schedule_tick(pos, Fluid::Water, 5);
        assert_eq!(level.scheduled_tick(pos).map(|t| t.due), Some(5));

        assert!(level.advance(2).is_empty());
        let ran = level.advance(1);
        assert_eq!(ran, vec![(pos, ScheduledTick { fluid: Fluid::Water, due: 5 })]);
        assert_eq!(level.scheduled_tick_count(), 0);
    }

    #[test]
    fn spawn_protection_blocks_non_operators() {
        let level = Level::new().with_spawn_protection(SpawnProtection {
            center: BlockPos::new(0, 64, 0),
            radius: 4,
        });
        let guest = Player::new("guest");
        let op = Player::new("op").operator(true);
        let near = BlockPos::new(4, 70, -3);
        let far = BlockPos::new(5, 64, 0);

        assert!(!level.may_interact(&guest, near));
        assert!(level.may_interact(&op, near));
        assert!(level.may_interact(&guest, far));
    }

    #[test]
    fn border_limits_everyone() {
        let level = Level::new().with_border_radius(10);
        let op = Player::new("op").operator(true);
        assert!(level.may_interact(&op, BlockPos::new(10, 0, -10)));
        assert!(!level.may_interact(&op, BlockPos::new(11, 0, 0)));
    }
}
