use std::path::PathBuf;

use anyhow::{Context, Result};
use couplings_core::world::block::{Half, Hinge, StateOps};
use couplings_core::world::direction::Direction;
use couplings_core::world::position::BlockPos;
use couplings_host::block::McState;
use couplings_host::config;
use couplings_host::player::Player;
use couplings_host::{Couplings, Level};

/// Ground level of the demo builds.
const Y: i64 = 64;

fn main() -> Result<()> {
    let config_path: PathBuf = std::env::args()
        .skip_while(|a| a != "--config")
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_PATH.into())
        .into();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Couplings -- reference host demo");

    let config = config::load(&config_path)?;
    let couplings = Couplings::new(&config).context("building coupling cores")?;
    let mut level = Level::new();

    trapdoor_bank(&mut level, &couplings)?;
    double_door(&mut level, &couplings)?;
    redstone_bank(&mut level, &couplings)?;

    tracing::info!(
        "Done: {} blocks placed, {} water ticks pending",
        level.block_count(),
        level.scheduled_tick_count()
    );
    Ok(())
}

/// Two facing rows of oak trapdoors; opening the middle one couples the rest.
fn trapdoor_bank(level: &mut Level, couplings: &Couplings) -> Result<()> {
    let east = McState::trapdoor("oak_trapdoor", Direction::East, Half::Bottom).context("oak_trapdoor state")?;
    let west = McState::trapdoor("oak_trapdoor", Direction::West, Half::Bottom).context("oak_trapdoor state")?;
    for z in -2..=2 {
        level.set_block(BlockPos::new(0, Y, z), east);
        level.set_block(BlockPos::new(1, Y, z), west);
    }

    let player = Player::new("alex");
    couplings.use_block(level, BlockPos::new(0, Y, 0), &player);
    report(level, "trapdoor bank", (0..=1).flat_map(|x| (-2..=2).map(move |z| BlockPos::new(x, Y, z))));
    Ok(())
}

/// A left and a right oak door side by side.
fn double_door(level: &mut Level, couplings: &Couplings) -> Result<()> {
    for (z, hinge) in [(10, Hinge::Left), (11, Hinge::Right)] {
        for (dy, half) in [(0, Half::Bottom), (1, Half::Top)] {
            let state = McState::door("oak_door", Direction::East, half, hinge).context("oak_door state")?;
            level.set_block(BlockPos::new(0, Y + dy, z), state);
        }
    }

    let player = Player::new("alex");
    couplings.use_block(level, BlockPos::new(0, Y, 10), &player);
    report(
        level,
        "double door",
        [(10, 0), (10, 1), (11, 0), (11, 1)].map(|(z, dy)| BlockPos::new(0, Y + dy, z)),
    );
    Ok(())
}

/// Iron trapdoors only move on redstone: power one, then cut it.
fn redstone_bank(level: &mut Level, couplings: &Couplings) -> Result<()> {
    let north = McState::trapdoor("iron_trapdoor", Direction::North, Half::Top).context("iron_trapdoor state")?;
    for x in 20..=22 {
        level.set_block(BlockPos::new(x, Y, 0), north);
    }
    let row = || (20..=22).map(|x| BlockPos::new(x, Y, 0));

    let player = Player::new("alex");
    if !couplings.use_block(level, BlockPos::new(21, Y, 0), &player) {
        tracing::info!("iron trapdoor ignored the player");
    }

    let source = BlockPos::new(21, Y - 1, 0);
    level.set_source(source, 15);
    couplings.flush_neighbor_updates(level);
    report(level, "redstone bank (powered)", row());

    level.set_source(source, 0);
    couplings.flush_neighbor_updates(level);
    report(level, "redstone bank (unpowered)", row());
    Ok(())
}

fn report(level: &Level, label: &str, positions: impl IntoIterator<Item = BlockPos>) {
    let states: Vec<McState> = positions.into_iter().map(|pos| level.get_block(pos)).collect();
    let open = states.iter().filter(|s| s.is_open()).count();
    let synced = level.take_client_updates().len();
    tracing::info!("{}: {}/{} open, {} client updates", label, open, states.len(), synced);
    for state in &states {
        tracing::debug!("  {}", state);
    }
}
