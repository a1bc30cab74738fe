//! Recorded vertices.
//!
//! Every vertex shares a header (position, pen color, stroke width). What else
//! it carries depends on the primitive it was recorded for, so the rest lives
//! in a [`Shape`] payload rather than in fields that mean different things for
//! different primitives.

use crate::color::Rgb;
use crate::geometry::Point;

/// Rational frequency `n / d` of a rose curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frequency {
    /// Numerator. Odd `n` gives `n` petals, even `n` gives `2n` (for `d = 1`).
    pub n: i32,
    /// Denominator; always positive once recorded.
    pub d: i32,
}

impl Frequency {
    /// Frequency `n / d`.
    #[must_use]
    pub const fn new(n: i32, d: i32) -> Self {
        Self { n, d }
    }

    /// The ratio as a float.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        f64::from(self.n) / f64::from(self.d)
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Kind-specific part of a vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Endpoint of a line segment.
    Endpoint,
    /// Corner of a triangle. The first corner's `fill` decides outline vs fill.
    Corner {
        /// Fill the interior instead of stroking the edges.
        fill: bool,
    },
    /// Center of a circle.
    Circle {
        /// Radius in pixels.
        radius: i32,
        /// Fill the disc instead of stroking the circumference.
        fill: bool,
    },
    /// Center of a rose or Maurer rose.
    Rose {
        /// Peak polar radius in pixels.
        amplitude: i32,
        /// Angular frequency.
        frequency: Frequency,
    },
}

/// A recorded raster-space vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position, already clamped to the canvas.
    pub point: Point,
    /// Pen color at the time of recording.
    pub color: Rgb,
    /// Stroke width at the time of recording, at least 1.
    pub width: u32,
    /// Kind-specific payload.
    pub shape: Shape,
}

impl Vertex {
    /// A line endpoint.
    #[must_use]
    pub const fn endpoint(point: Point, color: Rgb, width: u32) -> Self {
        Self {
            point,
            color,
            width,
            shape: Shape::Endpoint,
        }
    }

    /// Whether this vertex asks for a filled primitive.
    #[must_use]
    pub const fn fill(&self) -> bool {
        matches!(
            self.shape,
            Shape::Corner { fill: true } | Shape::Circle { fill: true, .. }
        )
    }

    /// The same vertex moved to `point`, as a line endpoint.
    #[must_use]
    pub const fn endpoint_at(&self, point: Point) -> Self {
        Self::endpoint(point, self.color, self.width)
    }
}
