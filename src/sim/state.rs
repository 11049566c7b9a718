//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives in [`GameState`]; systems take it
//! by `&mut` instead of reaching for globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::input::{InputState, Key};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay, frames are being scheduled
    Running,
    /// Score hit zero; the loop is halted until restart
    GameOver,
}

/// Scoring category of a falling object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Good,
    Bad,
}

/// Everything that can fall from the sky
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    // Good
    Computer,
    Book,
    House,
    Briefcase,
    // Bad
    LuxuryCar,
    Candy,
    GameConsole,
    Phone,
}

impl ObjectKind {
    pub const GOOD: [ObjectKind; 4] = [
        ObjectKind::Computer,
        ObjectKind::Book,
        ObjectKind::House,
        ObjectKind::Briefcase,
    ];

    pub const BAD: [ObjectKind; 4] = [
        ObjectKind::LuxuryCar,
        ObjectKind::Candy,
        ObjectKind::GameConsole,
        ObjectKind::Phone,
    ];

    /// All kinds belonging to a category
    pub fn of(category: Category) -> &'static [ObjectKind] {
        match category {
            Category::Good => &Self::GOOD,
            Category::Bad => &Self::BAD,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ObjectKind::Computer | ObjectKind::Book | ObjectKind::House | ObjectKind::Briefcase => {
                Category::Good
            }
            ObjectKind::LuxuryCar | ObjectKind::Candy | ObjectKind::GameConsole | ObjectKind::Phone => {
                Category::Bad
            }
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ObjectKind::Computer => "💻",
            ObjectKind::Book => "📚",
            ObjectKind::House => "🏠",
            ObjectKind::Briefcase => "💼",
            ObjectKind::LuxuryCar => "🚗",
            ObjectKind::Candy => "🍬",
            ObjectKind::GameConsole => "🎮",
            ObjectKind::Phone => "📱",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Computer => "Computer",
            ObjectKind::Book => "Book",
            ObjectKind::House => "House",
            ObjectKind::Briefcase => "Briefcase",
            ObjectKind::LuxuryCar => "Luxury Car",
            ObjectKind::Candy => "Candy",
            ObjectKind::GameConsole => "Game Console",
            ObjectKind::Phone => "Phone",
        }
    }
}

/// The player
#[derive(Debug, Clone)]
pub struct Shark {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per frame
    pub speed: f32,
}

impl Shark {
    /// Spawn horizontally centered, resting just above the floor
    pub fn new(tuning: &Tuning) -> Self {
        let size = Vec2::new(tuning.player_width, tuning.player_height);
        Self {
            pos: Vec2::new(
                tuning.arena_width / 2.0 - size.x / 2.0,
                tuning.arena_height - size.y - tuning.player_bottom_margin,
            ),
            size,
            speed: tuning.player_speed,
        }
    }

    /// Move one frame's worth according to held keys, staying inside the arena
    /// Each held key takes its own step, guarded by the wall it heads for.
    /// With both held the shark leaves the left wall but stays on the right.
    pub fn update(&mut self, input: &InputState, arena_width: f32) {
        let max_x = arena_width - self.size.x;
        if input.is_pressed(Key::Left) && self.pos.x > 0.0 {
            self.pos.x = (self.pos.x - self.speed).max(0.0);
        }
        if input.is_pressed(Key::Right) && self.pos.x < max_x {
            self.pos.x = (self.pos.x + self.speed).min(max_x);
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A falling emoji
#[derive(Debug, Clone)]
pub struct FallingObject {
    pub id: u32,
    pub kind: ObjectKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per frame
    pub fall_speed: f32,
    /// Radians, visual only
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl FallingObject {
    pub fn is_good(&self) -> bool {
        self.kind.category() == Category::Good
    }

    /// Fall and spin one frame
    pub fn update(&mut self) {
        self.pos.y += self.fall_speed;
        self.rotation += self.rotation_speed;
    }

    /// Fully below the bottom edge
    pub fn is_off_screen(&self, arena_height: f32) -> bool {
        self.pos.y > arena_height
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Things that happened during a frame, for the HUD and logs
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Spawned { id: u32, kind: ObjectKind },
    /// Shark touched an object; `points` is the signed delta requested
    Caught { kind: ObjectKind, points: i64 },
    /// A good object fell past the shark
    Missed { kind: ObjectKind },
    /// A bad object fell past the shark (no penalty)
    Escaped { kind: ObjectKind },
    GameOver { missed: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Never negative; a drop to zero ends the run
    pub score: u64,
    /// Good objects that left the screen uncaught
    pub missed: u32,
    pub phase: GamePhase,
    /// Objects spawned this run
    pub objects_spawned: u32,
    /// Guaranteed-good onboarding spawns handed out so far
    pub initial_good_spawned: u32,
    /// Frames simulated this run
    pub frame: u64,
    pub shark: Shark,
    /// Active falling objects, oldest first
    pub objects: Vec<FallingObject>,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            missed: 0,
            phase: GamePhase::Running,
            objects_spawned: 0,
            initial_good_spawned: 0,
            frame: 0,
            shark: Shark::new(tuning),
            objects: Vec::new(),
            next_id: 1,
        }
    }

    /// Reset every counter, clear the sky and re-center the shark
    pub fn restart(&mut self, seed: u64, tuning: &Tuning) {
        *self = Self::new(seed, tuning);
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Apply a signed score change, clamping at zero.
    ///
    /// Returns true if this change ended the run.
    pub fn apply_points(&mut self, delta: i64) -> bool {
        self.score = if delta >= 0 {
            self.score.saturating_add(delta as u64)
        } else {
            self.score.saturating_sub(delta.unsigned_abs())
        };

        if self.score == 0 && self.is_running() {
            self.phase = GamePhase::GameOver;
            return true;
        }
        false
    }
}
