//! Couplings core: propagate an open/close action from one openable block to
//! the neighbors that are visually aligned with it.
//!
//! The crate knows nothing about a concrete game. Hosts implement the
//! capability traits in [`world`] and call the entry points on
//! [`coupling::OpenableCore`] from their activation and redstone hooks.

pub mod config;
pub mod coupling;
pub mod world;

pub use config::{ConfigError, CouplingConfig};
pub use coupling::{Openable, OpenableCore};
