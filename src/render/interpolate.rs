//! Color interpolation shared by the line and triangle rasterizers.

use crate::color::Rgb;
use crate::geometry::Point;
use crate::vertex::Vertex;

/// Color at `p` on the segment `a`-`b`.
///
/// `t` is the distance from `a` to `p` over the length of the segment, so
/// `a` itself gets `a.color` and `b` gets `b.color`. A zero-length segment
/// takes the color of `a`.
#[must_use]
pub fn interpolate_linear(a: &Vertex, b: &Vertex, p: Point) -> Rgb {
    let length = a.point.distance(b.point);
    if length == 0.0 {
        return a.color;
    }
    let t = p.distance(a.point) / length;
    a.color.lerp(b.color, t)
}

/// Gouraud blend of three vertex colors with barycentric weights.
///
/// Weights are expected to sum to 1. Each channel is truncated to 8 bits
/// (float-to-int casts saturate, so rounding noise at the corners cannot wrap).
#[must_use]
pub fn interpolate_gouraud(
    p0: &Vertex,
    p1: &Vertex,
    p2: &Vertex,
    alpha: f32,
    beta: f32,
    gamma: f32,
) -> Rgb {
    let blend = |c0: u8, c1: u8, c2: u8| -> u8 {
        (alpha * f32::from(c0) + beta * f32::from(c1) + gamma * f32::from(c2)) as u8
    };

    Rgb::new(
        blend(p0.color.r, p1.color.r, p2.color.r),
        blend(p0.color.g, p1.color.g, p2.color.g),
        blend(p0.color.b, p1.color.b, p2.color.b),
    )
}
