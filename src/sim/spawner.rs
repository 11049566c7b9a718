//! Falling object spawner
//!
//! The first few objects of a run are always good so a new player gets a
//! score cushion before the first penalty can end the game. After that each
//! spawn rolls against `good_ratio`.
//!
//! Spawning is rolled once per frame, so the spawn rate follows the frame
//! rate.

use glam::Vec2;
use rand::Rng;

use super::state::{Category, FallingObject, GameEvent, GameState, ObjectKind};
use crate::tuning::Tuning;

/// Per-frame spawn roll
pub fn should_spawn<R: Rng>(rng: &mut R, tuning: &Tuning) -> bool {
    rng.random_bool(tuning.spawn_chance)
}

/// Decide the category of the next spawn, consuming an onboarding slot if
/// any remain
pub fn next_category(state: &mut GameState, tuning: &Tuning) -> Category {
    if state.initial_good_spawned < tuning.initial_good_objects {
        state.initial_good_spawned += 1;
        return Category::Good;
    }

    if state.rng.random_bool(tuning.good_ratio) {
        Category::Good
    } else {
        Category::Bad
    }
}

/// Create a new object above the top edge and add it to the state
pub fn spawn_object(state: &mut GameState, tuning: &Tuning) -> GameEvent {
    let category = next_category(state, tuning);
    let kinds = ObjectKind::of(category);
    let kind = kinds[state.rng.random_range(0..kinds.len())];

    let size = tuning.object_size;
    let x = state.rng.random_range(0.0..tuning.arena_width - size);
    let fall_speed = state
        .rng
        .random_range(tuning.fall_speed_min..tuning.fall_speed_max);
    let rotation_speed = if tuning.max_rotation_speed > 0.0 {
        state
            .rng
            .random_range(-tuning.max_rotation_speed..tuning.max_rotation_speed)
    } else {
        0.0
    };

    let id = state.next_entity_id();
    state.objects.push(FallingObject {
        id,
        kind,
        pos: Vec2::new(x, -size),
        size: Vec2::splat(size),
        fall_speed,
        rotation: 0.0,
        rotation_speed,
    });
    state.objects_spawned += 1;

    log::debug!("Spawned {} {} (#{})", kind.emoji(), kind.name(), id);
    GameEvent::Spawned { id, kind }
}
