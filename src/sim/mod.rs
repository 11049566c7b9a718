//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::Aabb;
pub use input::{InputState, Key};
pub use spawner::{next_category, should_spawn, spawn_object};
pub use state::{Category, FallingObject, GameEvent, GamePhase, GameState, ObjectKind, Shark};
pub use tick::tick;
