//! Immediate-mode drawing surface.
//!
//! ```
//! use trueno_raster::prelude::*;
//!
//! let mut canvas = Canvas::new(100, 100).unwrap();
//! canvas.background(0, 0, 0);
//!
//! // A red line followed by a green one
//! canvas.begin(PrimitiveKind::Line).unwrap();
//! canvas.color(255, 0, 0);
//! canvas.vertex(0, 0).unwrap();
//! canvas.vertex(99, 0).unwrap();
//! canvas.color(0, 255, 0);
//! canvas.vertex(0, 0).unwrap();
//! canvas.vertex(0, 99).unwrap();
//! canvas.end();
//!
//! assert_eq!(canvas.target().get_pixel(50, 0), Some(Rgb::RED));
//! ```

use crate::color::Rgb;
use crate::error::Result;
use crate::framebuffer::{Framebuffer, RasterTarget};
use crate::geometry::Point;
use crate::session::{CurveParams, PrimitiveKind, Session, SessionState};

/// A raster target plus the primitive session drawing into it.
///
/// Coordinates outside the target are clamped onto its border, never rejected.
/// Calls that break the session protocol are logged, returned as errors, and
/// otherwise ignored.
#[derive(Debug, Clone)]
pub struct Canvas<T: RasterTarget = Framebuffer> {
    target: T,
    session: Session,
}

impl Canvas<Framebuffer> {
    /// Create a black `width` x `height` canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self::with_target(Framebuffer::new(width, height)?))
    }
}

impl<T: RasterTarget> Canvas<T> {
    /// Draw into an existing target.
    pub fn with_target(target: T) -> Self {
        Self {
            target,
            session: Session::new(),
        }
    }

    /// The target drawn into.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable access to the target.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Give up the canvas and keep the target.
    pub fn into_target(self) -> T {
        self.target
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.target.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.target.height()
    }

    /// Whether a session is open, and for what.
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Current pen color.
    pub fn current_color(&self) -> Rgb {
        self.session.color()
    }

    /// Current stroke width.
    pub fn current_line_width(&self) -> u32 {
        self.session.line_width()
    }

    /// Number of vertices recorded in the open session.
    pub fn pending_vertices(&self) -> usize {
        self.session.vertices().len()
    }

    /// Start recording a primitive.
    pub fn begin(&mut self, kind: PrimitiveKind) -> Result<()> {
        diagnose(self.session.begin(kind))
    }

    /// Record a line endpoint or an outlined triangle corner at column `x`, row `y`.
    pub fn vertex(&mut self, x: i32, y: i32) -> Result<()> {
        self.vertex_fill(x, y, false)
    }

    /// Record a vertex; for triangles, `fill` on the first corner fills the triangle.
    pub fn vertex_fill(&mut self, x: i32, y: i32, fill: bool) -> Result<()> {
        let p = self.target.bounds().clamp(Point::new(x, y));
        diagnose(self.session.vertex(p, fill))
    }

    /// Record the center of a circle or a rose with frequency `1/1`.
    ///
    /// `radius` is the circle radius, or the rose amplitude, in pixels.
    pub fn center(&mut self, x: i32, y: i32, radius: i32) -> Result<()> {
        self.center_with(x, y, radius, CurveParams::default())
    }

    /// Record a center with explicit rose frequency and circle fill.
    pub fn center_with(&mut self, x: i32, y: i32, radius: i32, params: CurveParams) -> Result<()> {
        let p = self.target.bounds().clamp(Point::new(x, y));
        diagnose(self.session.center(p, radius, params))
    }

    /// Set the pen color for subsequent vertices.
    pub fn color(&mut self, r: u8, g: u8, b: u8) {
        self.session.set_color(Rgb::new(r, g, b));
    }

    /// Set the stroke width for subsequent vertices. Must be positive; the
    /// previous width is kept otherwise.
    pub fn line_width(&mut self, width: i32) -> Result<()> {
        diagnose(self.session.set_line_width(width))
    }

    /// Rasterize everything recorded since `begin` and close the session.
    ///
    /// Returns the number of primitives drawn. Always leaves the canvas idle.
    pub fn end(&mut self) -> usize {
        self.session.end(&mut self.target)
    }

    /// Paint every pixel, regardless of any open session.
    pub fn background(&mut self, r: u8, g: u8, b: u8) {
        self.target.fill(Rgb::new(r, g, b));
    }
}

fn diagnose(result: Result<()>) -> Result<()> {
    if let Err(err) = &result {
        log::warn!("{err}");
    }
    result
}
