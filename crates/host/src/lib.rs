//! Minecraft reference host for the couplings core.
//!
//! ```text
//! Couplings (hooks.rs)      ← activation + redstone, then the core
//!   └── Level (level.rs)    ← ReadWorld / WriteWorld over DashMap storage
//!         └── McState (block.rs) ← StateOps over azalea-block state ids
//! ```

pub mod block;
pub mod config;
pub mod hooks;
pub mod level;
pub mod player;

pub use hooks::Couplings;
pub use level::Level;
