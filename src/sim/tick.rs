//! Per-frame simulation step
//!
//! One call advances the game by exactly one frame. Order matters and matches
//! what the player sees: spawn, move the shark, then move/score/cull objects.

use super::input::InputState;
use super::spawner::{should_spawn, spawn_object};
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Advance the game state by one frame, returning what happened
pub fn tick(state: &mut GameState, input: &InputState, tuning: &Tuning) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Nothing moves once the run is over
    if !state.is_running() {
        return events;
    }

    state.frame += 1;

    if should_spawn(&mut state.rng, tuning) {
        events.push(spawn_object(state, tuning));
    }

    state.shark.update(input, tuning.arena_width);
    let shark = state.shark.bounds();

    // Newest first so removal never disturbs unvisited entries
    for i in (0..state.objects.len()).rev() {
        let obj = &mut state.objects[i];
        obj.update();

        if shark.overlaps(&obj.bounds()) {
            let kind = obj.kind;
            let points = if obj.is_good() {
                tuning.points_good
            } else {
                tuning.points_bad
            };
            state.objects.remove(i);
            events.push(GameEvent::Caught { kind, points });
            log::debug!("Caught {} ({:+})", kind.name(), points);

            if state.apply_points(points) {
                log::info!(
                    "Game over at frame {} ({} missed)",
                    state.frame,
                    state.missed
                );
                events.push(GameEvent::GameOver {
                    missed: state.missed,
                });
                break;
            }
            continue;
        }

        if obj.is_off_screen(tuning.arena_height) {
            let kind = obj.kind;
            if obj.is_good() {
                state.missed += 1;
                events.push(GameEvent::Missed { kind });
            } else {
                events.push(GameEvent::Escaped { kind });
            }
            state.objects.remove(i);
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Key;
    use crate::sim::state::{FallingObject, GamePhase, ObjectKind};
    use glam::Vec2;
    use proptest::prelude::*;

    /// Tuning with spawning disabled so tests control every object
    fn quiet() -> Tuning {
        Tuning {
            spawn_chance: 0.0,
            ..Default::default()
        }
    }

    fn object(state: &mut GameState, kind: ObjectKind, x: f32, y: f32) {
        let id = state.next_entity_id();
        state.objects.push(FallingObject {
            id,
            kind,
            pos: Vec2::new(x, y),
            size: Vec2::splat(50.0),
            fall_speed: 3.0,
            rotation: 0.0,
            rotation_speed: 0.0,
        });
    }

    #[test]
    fn test_catch_good_scores() {
        let tuning = quiet();
        let mut state = GameState::new(1, &tuning);
        // Shark spans x 260..340, y 620..680
        object(&mut state, ObjectKind::Book, 270.0, 580.0);

        let events = tick(&mut state, &InputState::new(), &tuning);
        assert_eq!(state.score, 5);
        assert!(state.objects.is_empty());
        assert_eq!(
            events,
            vec![GameEvent::Caught {
                kind: ObjectKind::Book,
                points: 5
            }]
        );
    }

    #[test]
    fn test_catch_bad_ends_game_at_zero() {
        let tuning = quiet();
        let mut state = GameState::new(1, &tuning);
        state.apply_points(10);
        object(&mut state, ObjectKind::Candy, 270.0, 580.0);

        let events = tick(&mut state, &InputState::new(), &tuning);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(events.contains(&GameEvent::GameOver { missed: 0 }));
    }

    #[test]
    fn test_game_over_stops_frame() {
        let tuning = quiet();
        let mut state = GameState::new(1, &tuning);
        // Older object (index 0) would be a catch too, but the newer bad one
        // ends the run first
        object(&mut state, ObjectKind::House, 280.0, 580.0);
        object(&mut state, ObjectKind::Phone, 270.0, 580.0);

        tick(&mut state, &InputState::new(), &tuning);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 0);
        assert_eq!(state.objects.len(), 1);
        assert_eq!(state.objects[0].kind, ObjectKind::House);

        // Halted: further ticks change nothing
        let before = state.objects[0].pos;
        assert!(tick(&mut state, &InputState::new(), &tuning).is_empty());
        assert_eq!(state.objects[0].pos, before);
    }

    #[test]
    fn test_missed_good_counts_bad_does_not() {
        let tuning = quiet();
        let mut state = GameState::new(1, &tuning);
        object(&mut state, ObjectKind::Computer, 0.0, 699.0);
        object(&mut state, ObjectKind::LuxuryCar, 500.0, 699.0);

        let events = tick(&mut state, &InputState::new(), &tuning);
        assert!(state.objects.is_empty());
        assert_eq!(state.missed, 1);
        assert_eq!(state.score, 0);
        assert!(state.is_running());
        assert!(events.contains(&GameEvent::Missed {
            kind: ObjectKind::Computer
        }));
        assert!(events.contains(&GameEvent::Escaped {
            kind: ObjectKind::LuxuryCar
        }));
    }

    #[test]
    fn test_object_exactly_at_edge_stays() {
        let tuning = quiet();
        let mut state = GameState::new(1, &tuning);
        // Lands on y = 700, which is still on screen
        object(&mut state, ObjectKind::Book, 0.0, 697.0);
        tick(&mut state, &InputState::new(), &tuning);
        assert_eq!(state.objects.len(), 1);
        assert_eq!(state.missed, 0);
    }

    #[test]
    fn test_shark_moves_with_keys() {
        let tuning = quiet();
        let mut state = GameState::new(1, &tuning);
        let mut input = InputState::new();
        input.press(Key::Left);
        tick(&mut state, &input, &tuning);
        assert_eq!(state.shark.pos.x, 255.0);

        input.release(Key::Left);
        input.press(Key::Right);
        tick(&mut state, &input, &tuning);
        tick(&mut state, &input, &tuning);
        assert_eq!(state.shark.pos.x, 265.0);
    }

    /// A run with every counter moved away from its starting value
    fn played_state(tuning: &Tuning) -> GameState {
        let mut state = GameState::new(9, tuning);
        state.apply_points(20);
        spawn_object(&mut state, tuning);
        spawn_object(&mut state, tuning);
        // Good object about to fall past the floor, far from the shark
        object(&mut state, ObjectKind::Computer, 0.0, 699.0);

        let mut input = InputState::new();
        input.press(Key::Left);
        for _ in 0..3 {
            tick(&mut state, &input, tuning);
        }
        state
    }

    fn assert_fresh(state: &mut GameState, tuning: &Tuning) {
        let fresh = GameState::new(10, tuning);
        assert_eq!(state.seed, 10);
        assert_eq!(state.score, 0);
        assert_eq!(state.missed, 0);
        assert_eq!(state.objects_spawned, 0);
        assert_eq!(state.initial_good_spawned, 0);
        assert_eq!(state.frame, 0);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.objects.is_empty());
        assert_eq!(state.shark.pos, fresh.shark.pos);
        assert_eq!(state.next_entity_id(), 1);
    }

    #[test]
    fn test_restart_resets_running_game() {
        let tuning = quiet();
        let mut state = played_state(&tuning);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 20);
        assert_eq!(state.missed, 1);
        assert_eq!(state.objects_spawned, 2);
        assert_eq!(state.initial_good_spawned, 2);
        assert_eq!(state.frame, 3);
        assert_eq!(state.objects.len(), 2);
        assert_eq!(state.shark.pos.x, 245.0);

        state.restart(10, &tuning);
        assert_fresh(&mut state, &tuning);
    }

    #[test]
    fn test_restart_resets_finished_game() {
        let tuning = quiet();
        let mut state = played_state(&tuning);
        assert!(state.apply_points(-100));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.missed, 1);
        assert_eq!(state.objects_spawned, 2);
        assert!(!state.objects.is_empty());

        state.restart(10, &tuning);
        assert_fresh(&mut state, &tuning);

        // Running again: ticks advance
        tick(&mut state, &InputState::new(), &tuning);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let tuning = Tuning::default();
        let mut state1 = GameState::new(99999, &tuning);
        let mut state2 = GameState::new(99999, &tuning);

        let mut input = InputState::new();
        for frame in 0..3000 {
            if frame % 200 == 0 {
                input.clear();
                input.press(if frame % 400 == 0 { Key::Left } else { Key::Right });
            }
            let e1 = tick(&mut state1, &input, &tuning);
            let e2 = tick(&mut state2, &input, &tuning);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.missed, state2.missed);
        assert_eq!(state1.objects.len(), state2.objects.len());
        assert_eq!(state1.shark.pos, state2.shark.pos);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_invariants_hold_for_random_play(
            seed in any::<u64>(),
            keys in proptest::collection::vec(0u8..4, 1..60),
        ) {
            let tuning = Tuning {
                spawn_chance: 0.2,
                ..Default::default()
            };
            let mut state = GameState::new(seed, &tuning);
            let mut input = InputState::new();

            // Each key choice is held for 20 frames
            for k in keys {
                input.clear();
                match k {
                    1 => input.press(Key::Left),
                    2 => input.press(Key::Right),
                    3 => {
                        input.press(Key::Left);
                        input.press(Key::Right);
                    }
                    _ => {}
                }
                for _ in 0..20 {
                    let was_running = state.is_running();
                    let events = tick(&mut state, &input, &tuning);

                    prop_assert!(state.shark.pos.x >= 0.0);
                    prop_assert!(state.shark.pos.x <= tuning.arena_width - state.shark.size.x);

                    let ended = events.iter().any(|e| matches!(e, GameEvent::GameOver { .. }));
                    prop_assert_eq!(ended, was_running && !state.is_running());
                    if ended {
                        prop_assert_eq!(state.score, 0);
                    }
                }
            }
        }
    }
}
