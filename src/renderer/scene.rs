//! Builds one frame of geometry from the game state
//!
//! Output is in arena pixels; [`super::pipeline::RenderState`] maps it to
//! clip space. Emoji glyphs are not part of the mesh, only the tinted tile
//! each one sits on.

use glam::Vec2;
use std::f32::consts::PI;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{SAND_CELL, WATERLINE};
use crate::settings::Settings;
use crate::sim::{GameState, Shark};
use crate::tuning::Tuning;

/// Emit all vertices for the current frame, back to front
pub fn build_scene(state: &GameState, settings: &Settings, tuning: &Tuning) -> Vec<Vertex> {
    let mut vertices = background(tuning, settings.sand_pattern);
    vertices.extend(shark(&state.shark));

    for obj in &state.objects {
        let color = if obj.is_good() {
            colors::GOOD_TILE
        } else {
            colors::BAD_TILE
        };
        let half = obj.size / 2.0;
        vertices.extend(shapes::rotated_rect(
            obj.pos + half,
            half * 0.8,
            settings.display_rotation(obj.rotation),
            color,
        ));
    }

    vertices
}

/// Water above the waterline, sand below with an optional checker pattern
pub fn background(tuning: &Tuning, sand_pattern: bool) -> Vec<Vertex> {
    let (w, h) = (tuning.arena_width, tuning.arena_height);
    let sand_top = h * WATERLINE;

    let mut vertices = shapes::rect(Vec2::ZERO, Vec2::new(w, sand_top), colors::SKY);
    vertices.extend(shapes::rect(
        Vec2::new(0.0, sand_top),
        Vec2::new(w, h - sand_top),
        colors::SAND,
    ));

    if sand_pattern {
        let mut y = sand_top;
        while y < h {
            // Alternate rows shift by one cell
            let offset = if ((y / SAND_CELL).floor() as i64) % 2 == 0 {
                0.0
            } else {
                SAND_CELL
            };
            let mut x = 0.0;
            while x < w {
                vertices.extend(shapes::rect(
                    Vec2::new(x + offset, y),
                    Vec2::splat(SAND_CELL),
                    colors::SAND_CHECK,
                ));
                x += SAND_CELL * 2.0;
            }
            y += SAND_CELL;
        }
    }

    vertices
}

/// Body, fins, eye and mouth, laid out relative to the shark's box
pub fn shark(shark: &Shark) -> Vec<Vertex> {
    let Vec2 { x, y } = shark.pos;
    let Vec2 { x: w, y: h } = shark.size;
    let center = shark.pos + shark.size / 2.0;

    let mut vertices = shapes::ellipse(center, shark.size / 2.0, colors::SHARK, 32);

    // Dorsal fin
    vertices.extend(shapes::triangle(
        Vec2::new(center.x, y),
        Vec2::new(center.x - 15.0, y - 10.0),
        Vec2::new(center.x + 15.0, y - 10.0),
        colors::SHARK,
    ));
    // Ventral fin
    vertices.extend(shapes::triangle(
        Vec2::new(center.x, y + h),
        Vec2::new(center.x - 15.0, y + h + 10.0),
        Vec2::new(center.x + 15.0, y + h + 10.0),
        colors::SHARK,
    ));

    let eye = Vec2::new(x + w / 2.0 + 10.0, center.y - 5.0);
    vertices.extend(shapes::circle(eye, 8.0, colors::EYE, 16));
    vertices.extend(shapes::circle(eye + Vec2::new(2.0, 0.0), 5.0, colors::PUPIL, 16));

    vertices.extend(shapes::arc_stroke(
        Vec2::new(center.x - 10.0, center.y + 5.0),
        15.0,
        2.0,
        0.0,
        PI,
        colors::MOUTH,
        16,
    ));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn_object;

    #[test]
    fn test_scene_has_tile_per_object() {
        let tuning = Tuning::default();
        let settings = Settings::default();
        let mut state = GameState::new(4, &tuning);

        let empty = build_scene(&state, &settings, &tuning).len();
        for _ in 0..5 {
            spawn_object(&mut state, &tuning);
        }
        let full = build_scene(&state, &settings, &tuning).len();
        assert_eq!(full - empty, 5 * 6);
    }

    #[test]
    fn test_background_without_pattern_is_two_rects() {
        let tuning = Tuning::default();
        assert_eq!(background(&tuning, false).len(), 12);
        assert!(background(&tuning, true).len() > 12);
    }

    #[test]
    fn test_checker_cells_stay_in_sand() {
        let tuning = Tuning::default();
        let sand_top = tuning.arena_height * WATERLINE;
        let verts = background(&tuning, true);
        for v in verts.iter().filter(|v| v.color == colors::SAND_CHECK) {
            assert!(v.position[1] >= sand_top - 1e-3);
        }
    }

    #[test]
    fn test_shark_mesh_follows_position() {
        let tuning = Tuning::default();
        let mut s = Shark::new(&tuning);
        let before = shark(&s);
        s.pos.x -= 100.0;
        let after = shark(&s);
        assert_eq!(before.len(), after.len());
        for (a, b) in before.iter().zip(&after) {
            assert!((a.position[0] - b.position[0] - 100.0).abs() < 1e-3);
            assert_eq!(a.position[1], b.position[1]);
        }
    }
}
