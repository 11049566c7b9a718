//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in arena pixel coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a rectangle rotated about its center
pub fn rotated_rect(center: Vec2, half_size: Vec2, rotation: f32, color: [f32; 4]) -> Vec<Vertex> {
    let rot = Vec2::from_angle(rotation);
    let corners = [
        Vec2::new(-half_size.x, -half_size.y),
        Vec2::new(half_size.x, -half_size.y),
        Vec2::new(half_size.x, half_size.y),
        Vec2::new(-half_size.x, half_size.y),
    ]
    .map(|c| center + rot.rotate(c));

    let [a, b, c, d] = corners;
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
        Vertex::new(d.x, d.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Generate vertices for a single triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, Vec2::splat(radius), color, segments)
}

/// Generate vertices for a stroked circular arc
///
/// Angles follow screen convention (y down), so `0..PI` is the lower half.
pub fn arc_stroke(
    center: Vec2,
    radius: f32,
    width: f32,
    theta_start: f32,
    theta_end: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let inner_r = radius - width / 2.0;
    let outer_r = radius + width / 2.0;
    let span = theta_end - theta_start;

    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = theta_start + (i as f32 / segments as f32) * span;
        let theta2 = theta_start + ((i + 1) as f32 / segments as f32) * span;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());
        let inner1 = center + dir1 * inner_r;
        let outer1 = center + dir1 * outer_r;
        let inner2 = center + dir2 * inner_r;
        let outer2 = center + dir2 * outer_r;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().any(|v| v.position == [10.0, 20.0]));
        assert!(verts.iter().any(|v| v.position == [40.0, 60.0]));
    }

    #[test]
    fn test_unrotated_rect_matches_rect() {
        let verts = rotated_rect(Vec2::new(25.0, 25.0), Vec2::splat(25.0), 0.0, [1.0; 4]);
        for v in &verts {
            assert!(v.position[0].abs() < 1e-4 || (v.position[0] - 50.0).abs() < 1e-4);
            assert!(v.position[1].abs() < 1e-4 || (v.position[1] - 50.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_ellipse_stays_within_radii() {
        let center = Vec2::new(100.0, 50.0);
        let verts = ellipse(center, Vec2::new(40.0, 30.0), [1.0; 4], 24);
        assert_eq!(verts.len(), 72);
        for v in &verts {
            let dx = (v.position[0] - center.x) / 40.0;
            let dy = (v.position[1] - center.y) / 30.0;
            assert!(dx * dx + dy * dy <= 1.0001);
        }
    }

    #[test]
    fn test_lower_half_arc_is_below_center() {
        let center = Vec2::new(0.0, 0.0);
        let verts = arc_stroke(center, 15.0, 2.0, 0.0, PI, [1.0; 4], 12);
        assert!(verts.iter().all(|v| v.position[1] >= -1e-4));
    }
}
