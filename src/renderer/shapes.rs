//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in game space (y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Replace the alpha channel of a color
#[inline]
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha]
}

/// Two triangles from four corners (clockwise or counter-clockwise)
fn quad(corners: [Vec2; 4], colors: [[f32; 4]; 4]) -> [Vertex; 6] {
    let v = |i: usize| Vertex::new(corners[i].x, corners[i].y, colors[i]);
    [v(0), v(1), v(2), v(2), v(3), v(0)]
}

/// Filled axis-aligned rectangle
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    vertical_gradient(x, y, width, height, color, color)
}

/// Rectangle blending from `top` to `bottom`
pub fn vertical_gradient(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    top: [f32; 4],
    bottom: [f32; 4],
) -> Vec<Vertex> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let corners = [
        Vec2::new(x, y),
        Vec2::new(x + width, y),
        Vec2::new(x + width, y + height),
        Vec2::new(x, y + height),
    ];
    quad(corners, [top, top, bottom, bottom]).to_vec()
}

/// Rectangle blending `edge` -> `middle` -> `edge` left to right
pub fn horizontal_band(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    edge: [f32; 4],
    middle: [f32; 4],
) -> Vec<Vertex> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let half = width / 2.0;
    let mut vertices = Vec::with_capacity(12);
    for (x0, c0, c1) in [(x, edge, middle), (x + half, middle, edge)] {
        let corners = [
            Vec2::new(x0, y),
            Vec2::new(x0 + half, y),
            Vec2::new(x0 + half, y + height),
            Vec2::new(x0, y + height),
        ];
        vertices.extend_from_slice(&quad(corners, [c0, c1, c1, c0]));
    }
    vertices
}

/// Rectangle outline drawn inside-out around the given bounds
pub fn outline(x: f32, y: f32, width: f32, height: f32, line: f32, color: [f32; 4]) -> Vec<Vertex> {
    let h = line / 2.0;
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(x - h, y - h, width + line, line, color));
    vertices.extend(rect(x - h, y + height - h, width + line, line, color));
    vertices.extend(rect(x - h, y + h, line, height - line, color));
    vertices.extend(rect(x + width - h, y + h, line, height - line, color));
    vertices
}

/// Rectangle of `size` centered at `center`, rotated by `angle` radians
pub fn rotated_rect(center: Vec2, size: Vec2, angle: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (sin, cos) = angle.sin_cos();
    let half = size / 2.0;
    let rotate = |p: Vec2| center + Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
    let corners = [
        rotate(Vec2::new(-half.x, -half.y)),
        rotate(Vec2::new(half.x, -half.y)),
        rotate(Vec2::new(half.x, half.y)),
        rotate(Vec2::new(-half.x, half.y)),
    ];
    quad(corners, [color; 4]).to_vec()
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

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_is_two_triangles() {
        let vertices = rect(10.0, 20.0, 30.0, 40.0, WHITE);
        assert_eq!(vertices.len(), 6);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        assert!(xs.iter().all(|&x| x == 10.0 || x == 40.0));
    }

    #[test]
    fn test_empty_rect_emits_nothing() {
        assert!(rect(0.0, 0.0, 0.0, 10.0, WHITE).is_empty());
        assert!(rect(0.0, 0.0, 10.0, -1.0, WHITE).is_empty());
    }

    #[test]
    fn test_gradient_colors_by_edge() {
        let top = [1.0, 0.0, 0.0, 1.0];
        let bottom = [0.0, 0.0, 1.0, 1.0];
        for v in vertical_gradient(0.0, 0.0, 10.0, 10.0, top, bottom) {
            let expected = if v.position[1] == 0.0 { top } else { bottom };
            assert_eq!(v.color, expected);
        }
    }

    #[test]
    fn test_rotated_rect_keeps_center() {
        let center = Vec2::new(50.0, 50.0);
        let vertices = rotated_rect(center, Vec2::new(20.0, 10.0), 0.7, WHITE);
        let sum = vertices[..3]
            .iter()
            .chain(&vertices[4..5])
            .fold(Vec2::ZERO, |acc, v| acc + Vec2::from(v.position));
        let mean = sum / 4.0;
        assert!((mean - center).length() < 1e-3);
    }

    #[test]
    fn test_circle_segment_count() {
        let vertices = circle(Vec2::ZERO, 5.0, WHITE, 24);
        assert_eq!(vertices.len(), 72);
        for v in vertices.iter().skip(1).step_by(3) {
            assert!((Vec2::from(v.position).length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha([0.1, 0.2, 0.3, 1.0], 0.5), [0.1, 0.2, 0.3, 0.5]);
    }
}
