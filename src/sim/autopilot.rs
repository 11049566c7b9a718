//! Demo player
//!
//! Drives the shark from the game state alone: dodge bad objects that are
//! about to land on it, otherwise chase the lowest good one. Used by the
//! headless runner and the idle mode in the browser.

use super::input::{InputState, Key};
use super::state::GameState;
use crate::tuning::Tuning;

/// How far above the shark a bad object starts to count as a threat
const DANGER_HEIGHT: f32 = 150.0;

/// Overwrite `input` with this frame's keys
pub fn autopilot(state: &GameState, tuning: &Tuning, input: &mut InputState) {
    input.clear();

    let shark = state.shark.bounds();
    let shark_center = shark.center().x;

    let threat = state
        .objects
        .iter()
        .filter(|o| !o.is_good())
        .map(|o| o.bounds())
        .filter(|b| b.right() > shark.left() && b.left() < shark.right())
        .filter(|b| b.bottom() > shark.top() - DANGER_HEIGHT && b.top() < shark.bottom())
        .max_by(|a, b| a.top().total_cmp(&b.top()));

    if let Some(bad) = threat {
        let flee_left = bad.center().x >= shark_center;
        // Pinned against a wall: run the other way
        let at_left_wall = shark.left() <= 0.0;
        let at_right_wall = shark.right() >= tuning.arena_width;
        let key = match (flee_left, at_left_wall, at_right_wall) {
            (true, true, _) => Key::Right,
            (false, _, true) => Key::Left,
            (true, _, _) => Key::Left,
            (false, _, _) => Key::Right,
        };
        input.press(key);
        return;
    }

    let target = state
        .objects
        .iter()
        .filter(|o| o.is_good() && o.bounds().top() < shark.bottom())
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    if let Some(good) = target {
        let dx = good.bounds().center().x - shark_center;
        if dx.abs() > state.shark.speed / 2.0 {
            input.press(if dx < 0.0 { Key::Left } else { Key::Right });
        }
    }
}
