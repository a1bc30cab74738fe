//! Primitive recording state machine.
//!
//! A session is opened for one [`PrimitiveKind`], collects clamped vertices,
//! and on [`Session::end`] hands them to the matching rasterizer in a single
//! pass. Rejected calls leave the session untouched and report an [`Error`].

use std::fmt;

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::framebuffer::RasterTarget;
use crate::geometry::Point;
use crate::render::{draw_circle, draw_line, draw_maurer_rose, draw_rose, draw_triangle};
use crate::vertex::{Frequency, Shape, Vertex};

/// What the recorded vertices describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Each pair of vertices is a line segment.
    Line,
    /// Each triple of vertices is a triangle.
    Triangle,
    /// Each center is a circle.
    Circle,
    /// Each center is a rose curve.
    Rose,
    /// Each center is a Maurer rose.
    MaurerRose,
}

impl PrimitiveKind {
    /// Entry point that records vertices for this kind.
    #[must_use]
    pub const fn entry_point(self) -> EntryPoint {
        match self {
            Self::Line | Self::Triangle => EntryPoint::Vertex,
            Self::Circle | Self::Rose | Self::MaurerRose => EntryPoint::Center,
        }
    }

    /// Vertices consumed per primitive.
    #[must_use]
    pub const fn group_size(self) -> usize {
        match self {
            Self::Line => 2,
            Self::Triangle => 3,
            Self::Circle | Self::Rose | Self::MaurerRose => 1,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Line => "line",
            Self::Triangle => "triangle",
            Self::Circle => "circle",
            Self::Rose => "rose",
            Self::MaurerRose => "Maurer rose",
        };
        f.write_str(name)
    }
}

/// How a vertex was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    /// `vertex(x, y)`, for point-pair primitives.
    Vertex,
    /// `center(x, y, radius)`, for center-based primitives.
    Center,
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex()"),
            Self::Center => f.write_str("center()"),
        }
    }
}

/// Whether a session is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// No session open; vertices are rejected.
    #[default]
    Idle,
    /// Collecting vertices for the given kind.
    Recording(PrimitiveKind),
}

/// Optional parameters of a center-based primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Rose frequency numerator.
    pub n: i32,
    /// Rose frequency denominator, positive.
    pub d: i32,
    /// Fill a circle instead of stroking it.
    pub fill: bool,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            n: 1,
            d: 1,
            fill: false,
        }
    }
}

/// Pen state and pending vertices of one canvas.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    vertices: Vec<Vertex>,
    color: Rgb,
    width: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Idle session with a black pen of width 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SessionState::Idle,
            vertices: Vec::new(),
            color: Rgb::BLACK,
            width: 1,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Current pen color.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Current stroke width.
    #[must_use]
    pub const fn line_width(&self) -> u32 {
        self.width
    }

    /// Vertices recorded since `begin`.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Open a session for `kind`.
    pub fn begin(&mut self, kind: PrimitiveKind) -> Result<()> {
        if let SessionState::Recording(active) = self.state {
            return Err(Error::SessionOpen { active });
        }
        log::trace!("begin {kind}");
        self.state = SessionState::Recording(kind);
        Ok(())
    }

    /// Record a vertex for a line or triangle. `p` must already be clamped.
    pub fn vertex(&mut self, p: Point, fill: bool) -> Result<()> {
        let kind = self.expect_entry(EntryPoint::Vertex)?;
        let shape = match kind {
            PrimitiveKind::Triangle => Shape::Corner { fill },
            _ => Shape::Endpoint,
        };
        self.push(p, shape);
        Ok(())
    }

    /// Record the center of a circle or rose. `p` must already be clamped.
    pub fn center(&mut self, p: Point, radius: i32, params: CurveParams) -> Result<()> {
        let kind = self.expect_entry(EntryPoint::Center)?;
        if radius < 0 {
            return Err(Error::InvalidRadius(radius));
        }
        let shape = match kind {
            PrimitiveKind::Circle => Shape::Circle {
                radius,
                fill: params.fill,
            },
            _ => {
                if params.d <= 0 {
                    return Err(Error::InvalidFrequency {
                        n: params.n,
                        d: params.d,
                    });
                }
                Shape::Rose {
                    amplitude: radius,
                    frequency: Frequency::new(params.n, params.d),
                }
            }
        };
        self.push(p, shape);
        Ok(())
    }

    /// Select the pen color for subsequent vertices.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Select the stroke width for subsequent vertices.
    pub fn set_line_width(&mut self, width: i32) -> Result<()> {
        match u32::try_from(width) {
            Ok(w) if w > 0 => {
                self.width = w;
                Ok(())
            }
            _ => Err(Error::InvalidLineWidth(width)),
        }
    }

    /// Rasterize the recorded vertices into `target` and return to idle.
    ///
    /// Returns the number of primitives drawn. Trailing vertices that do not
    /// complete a line or triangle are dropped.
    pub fn end<T: RasterTarget + ?Sized>(&mut self, target: &mut T) -> usize {
        let drawn = match self.state {
            SessionState::Idle => 0,
            SessionState::Recording(kind) => {
                let drawn = rasterize(target, kind, &self.vertices);
                log::debug!("end {kind}: {drawn} primitive(s) from {} vertices", self.vertices.len());
                drawn
            }
        };
        self.state = SessionState::Idle;
        self.vertices.clear();
        drawn
    }

    fn expect_entry(&self, used: EntryPoint) -> Result<PrimitiveKind> {
        match self.state {
            SessionState::Idle => Err(Error::NoSession),
            SessionState::Recording(kind) if kind.entry_point() != used => {
                Err(Error::WrongEntryPoint { kind, used })
            }
            SessionState::Recording(kind) => Ok(kind),
        }
    }

    fn push(&mut self, point: Point, shape: Shape) {
        self.vertices.push(Vertex {
            point,
            color: self.color,
            width: self.width,
            shape,
        });
    }
}

/// Draw every complete group of `vertices` as a `kind` primitive.
pub fn rasterize<T: RasterTarget + ?Sized>(
    target: &mut T,
    kind: PrimitiveKind,
    vertices: &[Vertex],
) -> usize {
    let groups = vertices.chunks_exact(kind.group_size());
    let count = groups.len();
    for group in groups {
        match (kind, group) {
            (PrimitiveKind::Line, [a, b]) => draw_line(target, a, b),
            (PrimitiveKind::Triangle, [p0, p1, p2]) => draw_triangle(target, p0, p1, p2),
            (PrimitiveKind::Circle, [c]) => {
                if let Shape::Circle { radius, fill } = c.shape {
                    draw_circle(target, c, radius, fill);
                }
            }
            (PrimitiveKind::Rose, [c]) => {
                if let Shape::Rose { amplitude, frequency } = c.shape {
                    draw_rose(target, c, amplitude, frequency);
                }
            }
            (PrimitiveKind::MaurerRose, [c]) => {
                if let Shape::Rose { amplitude, frequency } = c.shape {
                    draw_maurer_rose(target, c, amplitude, frequency);
                }
            }
            _ => {}
        }
    }
    count
}
