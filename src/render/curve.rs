//! Parametric curves: circles, rose curves and Maurer roses.
//!
//! Curves are sampled lazily into clamped raster points and streamed into
//! [`draw_polyline`], so memory use does not grow with the radius or the rose
//! frequency. Filled circles are scanned directly.
//!
//! # References
//!
//! - Maurer, P. M. (1987). "A Rose is a Rose..." *The American Mathematical Monthly*, 94(7).

use std::f64::consts::TAU;

use crate::framebuffer::RasterTarget;
use crate::geometry::{BoundingBox, Bounds, Point};
use crate::render::line::{draw_line, draw_polyline};
use crate::vertex::{Frequency, Vertex};

/// Degrees sampled per period of a rose curve, both ends included.
pub const ROSE_STEPS_PER_PERIOD: i32 = 360;

/// Number of points on a Maurer rose.
pub const MAURER_POINTS: i32 = 361;

/// Point at polar coordinates `(r, theta)` around `center`, rounded to the grid
/// and clamped to the canvas.
fn polar(center: Point, r: f64, theta: f64, bounds: Bounds) -> Point {
    let x = f64::from(center.x) + r * theta.cos();
    let y = f64::from(center.y) + r * theta.sin();
    bounds.clamp(Point::new(x.round() as i32, y.round() as i32))
}

/// Points along a circle outline, as an open polyline.
///
/// Uses `2 * radius` segments, so larger circles get finer steps. The last
/// point repeats the first.
pub fn circle_samples(center: Point, radius: i32, bounds: Bounds) -> impl Iterator<Item = Point> {
    let count = radius.max(0).saturating_mul(2);
    let r = f64::from(radius);
    (0..=count).map(move |i| {
        let theta = if count == 0 {
            0.0
        } else {
            TAU * f64::from(i) / f64::from(count)
        };
        polar(center, r, theta, bounds)
    })
}

/// Points along the rose `r = amplitude * cos((n / d) * theta)`, as an open
/// polyline.
///
/// Sampled every degree over `d` full turns, which is one whole period for any
/// `n / d`, so the last point coincides with the first.
pub fn rose_samples(
    center: Point,
    amplitude: i32,
    frequency: Frequency,
    bounds: Bounds,
) -> impl Iterator<Item = Point> {
    let k = frequency.ratio();
    let a = f64::from(amplitude);
    let steps = ROSE_STEPS_PER_PERIOD.saturating_mul(frequency.d.max(1));
    (0..=steps).map(move |deg| {
        let theta = f64::from(deg).to_radians();
        polar(center, a * (k * theta).cos(), theta, bounds)
    })
}

/// Points of the Maurer rose over `r = amplitude * cos((n / d) * theta)`, to be
/// stroked as a closed polyline.
///
/// Point `j` sits on the rose at `theta = j * d` degrees, so consecutive
/// points are joined by chords across the petals instead of following them.
pub fn maurer_samples(
    center: Point,
    amplitude: i32,
    frequency: Frequency,
    bounds: Bounds,
) -> impl Iterator<Item = Point> {
    let k = frequency.ratio();
    let a = f64::from(amplitude);
    (0..MAURER_POINTS).map(move |j| {
        let theta = (f64::from(j) * f64::from(frequency.d)).to_radians();
        polar(center, a * (k * theta).cos(), theta, bounds)
    })
}

/// Draw a circle around `center` in its pen color.
pub fn draw_circle<T: RasterTarget + ?Sized>(
    target: &mut T,
    center: &Vertex,
    radius: i32,
    fill: bool,
) {
    if fill {
        fill_circle(target, center, radius);
    } else if radius == 0 {
        draw_line(target, center, center);
    } else {
        let samples = circle_samples(center.point, radius, target.bounds());
        draw_polyline(target, samples, center, false);
    }
}

/// Fill every pixel within `radius` of the center, in a single color.
pub fn fill_circle<T: RasterTarget + ?Sized>(target: &mut T, center: &Vertex, radius: i32) {
    let Some(bbox) = BoundingBox::around(center.point, radius).clip(target.bounds()) else {
        return;
    };
    let r2 = i64::from(radius) * i64::from(radius);
    for p in bbox.points() {
        let dx = i64::from(p.x - center.point.x);
        let dy = i64::from(p.y - center.point.y);
        if dx * dx + dy * dy <= r2 {
            target.write_pixel(p.x as u32, p.y as u32, center.color);
        }
    }
}

/// Stroke a rose curve.
pub fn draw_rose<T: RasterTarget + ?Sized>(
    target: &mut T,
    center: &Vertex,
    amplitude: i32,
    frequency: Frequency,
) {
    let samples = rose_samples(center.point, amplitude, frequency, target.bounds());
    draw_polyline(target, samples, center, false);
}

/// Stroke a Maurer rose.
pub fn draw_maurer_rose<T: RasterTarget + ?Sized>(
    target: &mut T,
    center: &Vertex,
    amplitude: i32,
    frequency: Frequency,
) {
    let samples = maurer_samples(center.point, amplitude, frequency, target.bounds());
    draw_polyline(target, samples, center, true);
}
