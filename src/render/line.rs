//! Bresenham line rasterization with per-endpoint colors and stroke width.

use crate::color::Rgb;
use crate::framebuffer::RasterTarget;
use crate::geometry::{Bounds, Point};
use crate::render::interpolate::interpolate_linear;
use crate::vertex::Vertex;

/// Draw the segment `a`-`b` using Bresenham's algorithm.
///
/// Colors are linearly interpolated between the endpoint colors. Both
/// endpoints must already lie on the target.
///
/// Endpoints are put in a canonical order before stepping, so `draw_line(a, b)`
/// and `draw_line(b, a)` write the same pixels with the same colors. The stroke
/// width is the one of the endpoint that comes first in that order.
pub fn draw_line<T: RasterTarget + ?Sized>(target: &mut T, a: &Vertex, b: &Vertex) {
    let w = b.point.x - a.point.x;
    let h = b.point.y - a.point.y;

    if h.abs() < w.abs() {
        let (a, b) = ordered(a, b, |p| (p.x, p.y));
        draw_line_low(target, a, b);
    } else {
        let (a, b) = ordered(a, b, |p| (p.y, p.x));
        draw_line_high(target, a, b);
    }
}

/// Sort two endpoints along the driving axis. Color breaks the tie for a
/// zero-length segment.
fn ordered<'v, K: Ord>(
    a: &'v Vertex,
    b: &'v Vertex,
    key: impl Fn(Point) -> K,
) -> (&'v Vertex, &'v Vertex) {
    if (key(a.point), a.color.to_array()) > (key(b.point), b.color.to_array()) {
        (b, a)
    } else {
        (a, b)
    }
}

/// Shallow lines: step x every iteration, y when the error term crosses.
fn draw_line_low<T: RasterTarget + ?Sized>(target: &mut T, a: &Vertex, b: &Vertex) {
    let bounds = target.bounds();
    let width = a.width.max(1);
    let w = b.point.x - a.point.x;
    let mut h = b.point.y - a.point.y;
    let mut dy = 1;
    if h < 0 {
        dy = -1;
        h = -h;
    }

    let mut y = a.point.y;
    let mut f = 2 * h - w;
    for x in a.point.x..=b.point.x {
        let p = Point::new(x, y);
        let color = interpolate_linear(a, b, p);
        for offset in stroke_offsets(width) {
            plot(target, bounds, Point::new(x, bounds.clamp_y(y + offset)), color);
        }
        if f > 0 {
            y += dy;
            f += 2 * (h - w);
        } else {
            f += 2 * h;
        }
    }
}

/// Steep lines: step y every iteration, x when the error term crosses.
fn draw_line_high<T: RasterTarget + ?Sized>(target: &mut T, a: &Vertex, b: &Vertex) {
    let bounds = target.bounds();
    let width = a.width.max(1);
    let mut w = b.point.x - a.point.x;
    let h = b.point.y - a.point.y;
    let mut dx = 1;
    if w < 0 {
        dx = -1;
        w = -w;
    }

    let mut x = a.point.x;
    let mut f = 2 * w - h;
    for y in a.point.y..=b.point.y {
        let p = Point::new(x, y);
        let color = interpolate_linear(a, b, p);
        for offset in stroke_offsets(width) {
            plot(target, bounds, Point::new(bounds.clamp_x(x + offset), y), color);
        }
        if f > 0 {
            x += dx;
            f += 2 * (w - h);
        } else {
            f += 2 * w;
        }
    }
}

/// Perpendicular offsets covered by a stroke of `width` pixels:
/// `0, +1, -1, +2, -2, ...`.
fn stroke_offsets(width: u32) -> impl Iterator<Item = i32> {
    (0..width as i32).map(|k| {
        let step = (k + 1) / 2;
        if k % 2 == 1 {
            step
        } else {
            -step
        }
    })
}

#[inline]
fn plot<T: RasterTarget + ?Sized>(target: &mut T, bounds: Bounds, p: Point, color: Rgb) {
    if bounds.contains(p) {
        target.write_pixel(p.x as u32, p.y as u32, color);
    }
}

/// Draw consecutive point pairs of a polyline with the pen of `pen`.
///
/// Points are consumed one at a time, so arbitrarily long sample runs need no
/// buffering. When `closed`, the last point is also joined back to the first.
/// Returns the number of segments drawn.
pub fn draw_polyline<T, I>(target: &mut T, points: I, pen: &Vertex, closed: bool) -> usize
where
    T: RasterTarget + ?Sized,
    I: IntoIterator<Item = Point>,
{
    let mut points = points.into_iter();
    let Some(first) = points.next() else {
        return 0;
    };

    let mut segments = 0;
    let mut last = first;
    for p in points {
        draw_line(target, &pen.endpoint_at(last), &pen.endpoint_at(p));
        last = p;
        segments += 1;
    }
    if closed {
        draw_line(target, &pen.endpoint_at(last), &pen.endpoint_at(first));
        segments += 1;
    }
    segments
}
