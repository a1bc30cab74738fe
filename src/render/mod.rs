//! Rasterization algorithms.
//!
//! Every algorithm writes through a [`RasterTarget`](crate::framebuffer::RasterTarget)
//! and expects its input vertices to lie on that target already.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer error-term stepping, widened strokes, linear color ramps
//! - **Edge-function Triangle**: barycentric fill with Gouraud shading and shared-edge ownership
//! - **Parametric Curves**: sampled circles, rose curves and Maurer roses
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pineda, J. (1988). "A Parallel Algorithm for Polygon Rasterization." SIGGRAPH '88.
//! - Gouraud, H. (1971). "Continuous Shading of Curved Surfaces." IEEE Trans. Computers.

mod curve;
mod interpolate;
mod line;
mod triangle;

#[cfg(test)]
pub(crate) mod testing;

pub use curve::{
    circle_samples, draw_circle, draw_maurer_rose, draw_rose, fill_circle, maurer_samples,
    rose_samples, MAURER_POINTS, ROSE_STEPS_PER_PERIOD,
};
pub use interpolate::{interpolate_gouraud, interpolate_linear};
pub use line::{draw_line, draw_polyline};
pub use triangle::{draw_triangle, edge_function, fill_triangle, outline_triangle};
