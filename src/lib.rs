//! Shark Catch - steer the shark, catch the good stuff, dodge the rest
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, spawning, collisions, scoring)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser key mapping
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants that are not part of [`Tuning`]
pub mod consts {
    /// Seed used when the platform can't provide one
    pub const FALLBACK_SEED: u64 = 0x5EA_F00D;

    /// Fraction of the arena height covered by water; the rest is sand
    pub const WATERLINE: f32 = 0.7;
    /// Edge of one sand checker cell (pixels)
    pub const SAND_CELL: f32 = 20.0;

    /// Font used for emoji glyphs on the overlay canvas
    pub const GLYPH_FONT: &str = "40px Arial";
}
