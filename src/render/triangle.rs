//! Triangle rasterization: Gouraud-shaded fill or stroked outline.
//!
//! Filled triangles are scanned over their bounding box with edge functions.
//! Pixels lying exactly on an edge are owned by only one of the two triangles
//! sharing that edge, so meshes have neither seams nor double-drawn pixels.

use crate::framebuffer::RasterTarget;
use crate::geometry::{BoundingBox, Point};
use crate::render::interpolate::interpolate_gouraud;
use crate::render::line::draw_line;
use crate::vertex::Vertex;

/// Draw a triangle. The first vertex's fill flag selects fill or outline.
pub fn draw_triangle<T: RasterTarget + ?Sized>(
    target: &mut T,
    p0: &Vertex,
    p1: &Vertex,
    p2: &Vertex,
) {
    if p0.fill() {
        fill_triangle(target, p0, p1, p2);
    } else {
        outline_triangle(target, p0, p1, p2);
    }
}

/// Stroke the three edges as independent lines.
pub fn outline_triangle<T: RasterTarget + ?Sized>(
    target: &mut T,
    p0: &Vertex,
    p1: &Vertex,
    p2: &Vertex,
) {
    draw_line(target, p0, p1);
    draw_line(target, p1, p2);
    draw_line(target, p2, p0);
}

/// Fill the triangle with barycentric color interpolation.
///
/// Collinear corners span no area and draw nothing.
pub fn fill_triangle<T: RasterTarget + ?Sized>(
    target: &mut T,
    p0: &Vertex,
    p1: &Vertex,
    p2: &Vertex,
) {
    let Some(edges) = Edges::new(p0.point, p1.point, p2.point) else {
        return;
    };
    let Some(bbox) = BoundingBox::enclosing(&[p0.point, p1.point, p2.point])
        .and_then(|bbox| bbox.clip(target.bounds()))
    else {
        return;
    };

    for p in bbox.points() {
        if let Some([alpha, beta, gamma]) = edges.weights(p) {
            let color = interpolate_gouraud(p0, p1, p2, alpha, beta, gamma);
            target.write_pixel(p.x as u32, p.y as u32, color);
        }
    }
}

/// Implicit line through `a` and `b`, evaluated at `p`.
///
/// Zero on the line, one sign on each side.
#[inline]
#[must_use]
pub fn edge_function(a: Point, b: Point, p: Point) -> i64 {
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    let (bx, by) = (i64::from(b.x), i64::from(b.y));
    (by - ay) * (i64::from(p.x) - ax) - (bx - ax) * (i64::from(p.y) - ay)
}

/// Sign of the edge function at a point infinitely far to the left of the
/// canvas and nudged upward.
///
/// The edge function's gradient is `(by - ay, -(bx - ax))`; dotted with the
/// direction `(-1, -e)` for vanishing `e` its sign is decided by `-(by - ay)`
/// first and by `bx - ax` when the edge is horizontal. No edge line passes
/// through that point, so every edge gets a definite side.
#[inline]
fn offscreen_sign(a: Point, b: Point) -> i64 {
    let dy = i64::from(b.y) - i64::from(a.y);
    let dx = i64::from(b.x) - i64::from(a.x);
    if dy == 0 {
        dx.signum()
    } else {
        -dy.signum()
    }
}

/// Edge functions of a non-degenerate triangle, each paired with its value at
/// the opposite corner.
#[derive(Debug, Clone, Copy)]
struct Edges {
    /// `(from, to, value at opposite corner, ownership of boundary points)`
    edges: [(Point, Point, i64, bool); 3],
}

impl Edges {
    fn new(p0: Point, p1: Point, p2: Point) -> Option<Self> {
        let edge = |a: Point, b: Point, opposite: Point| {
            let f = edge_function(a, b, opposite);
            (a, b, f, f.signum() * offscreen_sign(a, b) > 0)
        };
        let edges = [edge(p1, p2, p0), edge(p2, p0, p1), edge(p0, p1, p2)];
        if edges[0].2 == 0 {
            return None;
        }
        Some(Self { edges })
    }

    /// Normalized barycentric weights of `p`, or `None` if the triangle does
    /// not own `p`.
    fn weights(&self, p: Point) -> Option<[f32; 3]> {
        let mut weights = [0.0f32; 3];
        for (weight, &(a, b, f, owns_boundary)) in weights.iter_mut().zip(&self.edges) {
            let e = edge_function(a, b, p);
            // Same sign as the opposite corner means inside this edge
            let side = e.signum() * f.signum();
            if side < 0 || (side == 0 && !owns_boundary) {
                return None;
            }
            *weight = (e as f64 / f as f64) as f32;
        }
        Some(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::framebuffer::Framebuffer;
    use crate::render::testing::RecordingTarget;
    use crate::vertex::Shape;
    use approx::assert_relative_eq;

    fn corner(x: i32, y: i32, color: Rgb, fill: bool) -> Vertex {
        Vertex {
            point: Point::new(x, y),
            color,
            width: 1,
            shape: Shape::Corner { fill },
        }
    }

    #[test]
    fn test_edge_function_sign() {
        let a = Point::new(0, 0);
        let b = Point::new(10, 0);
        assert_eq!(edge_function(a, b, Point::new(5, 0)), 0);
        assert!(edge_function(a, b, Point::new(5, 5)) < 0);
        assert!(edge_function(a, b, Point::new(5, -5)) > 0);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let edges = Edges::new(Point::new(10, 0), Point::new(90, 50), Point::new(10, 90)).unwrap();
        let [alpha, beta, gamma] = edges.weights(Point::new(40, 45)).unwrap();
        assert_relative_eq!(alpha + beta + gamma, 1.0, epsilon = 1e-5);
        assert!(alpha > 0.0 && beta > 0.0 && gamma > 0.0);
    }

    #[test]
    fn test_weights_at_corners() {
        let edges = Edges::new(Point::new(0, 0), Point::new(0, 20), Point::new(20, 20)).unwrap();
        // Corner (0, 20) lies on two edges; whichever owns it, weight is all on p1
        if let Some([alpha, beta, gamma]) = edges.weights(Point::new(0, 20)) {
            assert_relative_eq!(alpha, 0.0);
            assert_relative_eq!(beta, 1.0);
            assert_relative_eq!(gamma, 0.0);
        }
        assert!(edges.weights(Point::new(15, 2)).is_none());
    }

    #[test]
    fn test_fill_gouraud_at_interior_point() {
        let p0 = corner(10, 0, Rgb::MAGENTA, true);
        let p1 = corner(90, 50, Rgb::CYAN, true);
        let p2 = corner(10, 90, Rgb::YELLOW, true);
        let mut fb = Framebuffer::new(100, 100).unwrap();
        draw_triangle(&mut fb, &p0, &p1, &p2);

        let p = Point::new(40, 45);
        let edges = Edges::new(p0.point, p1.point, p2.point).unwrap();
        let [alpha, beta, gamma] = edges.weights(p).unwrap();
        let expected = interpolate_gouraud(&p0, &p1, &p2, alpha, beta, gamma);
        assert_eq!(fb.get_pixel(40, 45), Some(expected));

        // Manual blend of the same weights, within one unit of rounding
        let manual = |c0: u8, c1: u8, c2: u8| {
            alpha * f32::from(c0) + beta * f32::from(c1) + gamma * f32::from(c2)
        };
        let got = fb.get_pixel(40, 45).unwrap();
        assert!((f32::from(got.r) - manual(255, 0, 255)).abs() < 1.0);
        assert!((f32::from(got.g) - manual(0, 255, 255)).abs() < 1.0);
        assert!((f32::from(got.b) - manual(255, 255, 0)).abs() < 1.0);
    }

    #[test]
    fn test_fill_corner_colors() {
        let p0 = corner(0, 0, Rgb::RED, true);
        let p1 = corner(0, 40, Rgb::GREEN, true);
        let p2 = corner(40, 40, Rgb::BLUE, true);
        let mut target = RecordingTarget::new(50, 50);
        draw_triangle(&mut target, &p0, &p1, &p2);

        let map = target.pixel_map();
        for v in [&p0, &p1, &p2] {
            if let Some(&c) = map.get(&v.point) {
                assert_eq!(c, v.color);
            }
        }
        // Interior is solid
        assert!(map.contains_key(&Point::new(5, 30)));
        assert!(!map.contains_key(&Point::new(30, 5)));
    }

    #[test]
    fn test_fill_is_winding_independent() {
        let a = corner(5, 5, Rgb::WHITE, true);
        let b = corner(40, 12, Rgb::WHITE, true);
        let c = corner(18, 44, Rgb::WHITE, true);

        let mut cw = RecordingTarget::new(50, 50);
        draw_triangle(&mut cw, &a, &b, &c);
        let mut ccw = RecordingTarget::new(50, 50);
        draw_triangle(&mut ccw, &a, &c, &b);

        let cw_pixels: std::collections::HashSet<_> = cw.pixel_map().into_keys().collect();
        let ccw_pixels: std::collections::HashSet<_> = ccw.pixel_map().into_keys().collect();
        assert_eq!(cw_pixels, ccw_pixels);
    }

    #[test]
    fn test_shared_edge_no_overlap_no_gap() {
        // Two triangles forming the square [10, 90] x [10, 90]
        let mut target = RecordingTarget::new(100, 100);
        let c = |x, y| corner(x, y, Rgb::WHITE, true);
        draw_triangle(&mut target, &c(10, 10), &c(10, 90), &c(90, 90));
        draw_triangle(&mut target, &c(90, 90), &c(90, 10), &c(10, 10));

        let counts = target.write_counts();
        for i in 11..=90 {
            let on_diagonal = Point::new(i, i);
            assert_eq!(counts.get(&on_diagonal), Some(&1), "diagonal pixel {i}");
        }
        assert!(counts.values().all(|&n| n == 1));

        // Left and top outer edges belong to neighbours that are not drawn
        assert!(!counts.contains_key(&Point::new(10, 10)));
        assert!(!counts.contains_key(&Point::new(10, 50)));
        assert!(!counts.contains_key(&Point::new(50, 10)));
        assert_eq!(counts.len(), 80 * 80);
    }

    #[test]
    fn test_fan_around_shared_vertex() {
        // Four triangles around (20, 20) tiling the square [0, 40] x [0, 40]
        let mut target = RecordingTarget::new(50, 50);
        let c = |x, y| corner(x, y, Rgb::WHITE, true);
        let center = c(20, 20);
        let ring = [c(0, 0), c(40, 0), c(40, 40), c(0, 40)];
        for i in 0..4 {
            draw_triangle(&mut target, &center, &ring[i], &ring[(i + 1) % 4]);
        }

        let counts = target.write_counts();
        assert_eq!(counts.get(&Point::new(20, 20)), Some(&1));
        assert!(counts.values().all(|&n| n == 1));
        // Interior pixels of the square are all covered
        for y in 1..40 {
            for x in 1..40 {
                assert!(counts.contains_key(&Point::new(x, y)), "gap at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_degenerate_triangle_draws_nothing() {
        let mut target = RecordingTarget::new(50, 50);
        let c = |x, y| corner(x, y, Rgb::WHITE, true);
        draw_triangle(&mut target, &c(0, 0), &c(10, 10), &c(20, 20));
        draw_triangle(&mut target, &c(5, 5), &c(5, 5), &c(5, 5));
        assert!(target.writes.is_empty());
    }

    #[test]
    fn test_outline_draws_edges_only() {
        let c = |x, y| corner(x, y, Rgb::WHITE, false);
        let mut target = RecordingTarget::new(50, 50);
        draw_triangle(&mut target, &c(0, 0), &c(0, 40), &c(40, 40));

        let map = target.pixel_map();
        assert!(map.contains_key(&Point::new(0, 20)));
        assert!(map.contains_key(&Point::new(20, 40)));
        assert!(map.contains_key(&Point::new(20, 20)));
        assert!(!map.contains_key(&Point::new(5, 30)));
    }

    #[test]
    fn test_first_vertex_governs_fill() {
        let mut target = RecordingTarget::new(50, 50);
        draw_triangle(
            &mut target,
            &corner(0, 0, Rgb::WHITE, false),
            &corner(0, 40, Rgb::WHITE, true),
            &corner(40, 40, Rgb::WHITE, true),
        );
        assert!(!target.pixel_map().contains_key(&Point::new(5, 30)));
    }
}
