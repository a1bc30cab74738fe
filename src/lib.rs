//! # Trueno-Raster
//!
//! Immediate-mode software rasterizer for integer raster coordinates.
//!
//! Primitives are recorded between `begin` and `end` on a [`Canvas`](canvas::Canvas),
//! then scan-converted in one pass: Bresenham lines with per-vertex color ramps,
//! Gouraud-shaded triangles with exact shared-edge ownership, sampled circles,
//! rose curves and Maurer roses.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut canvas = Canvas::new(100, 100)?;
//! canvas.background(0, 0, 0);
//!
//! canvas.begin(PrimitiveKind::Triangle)?;
//! canvas.color(255, 0, 255);
//! canvas.vertex_fill(10, 0, true)?;
//! canvas.color(0, 255, 255);
//! canvas.vertex_fill(90, 50, true)?;
//! canvas.color(255, 255, 0);
//! canvas.vertex_fill(10, 90, true)?;
//! canvas.end();
//!
//! assert_ne!(canvas.target().get_pixel(40, 45), Some(Rgb::BLACK));
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: YAML canvas configuration
//! - `full`: All features enabled
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pineda, J. (1988). "A Parallel Algorithm for Polygon Rasterization." SIGGRAPH '88.
//! - Maurer, P. M. (1987). "A Rose is a Rose..." *The American Mathematical Monthly*.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and interpolation helpers.
pub mod color;

/// Raster-space points, bounds and clamping.
pub mod geometry;

/// Recorded vertices and their kind-specific payloads.
pub mod vertex;

/// Pixel storage and the raster target trait.
pub mod framebuffer;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line, triangle and curve rasterization.
pub mod render;

/// Primitive recording state machine.
pub mod session;

/// Public drawing surface.
pub mod canvas;

// ============================================================================
// Optional Modules
// ============================================================================

/// YAML canvas configuration.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Rgb;
    #[cfg(feature = "config")]
    pub use crate::config::CanvasConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::{Framebuffer, RasterTarget};
    pub use crate::geometry::{Bounds, Point};
    pub use crate::session::{CurveParams, PrimitiveKind, SessionState};
    pub use crate::vertex::{Frequency, Shape, Vertex};
}
