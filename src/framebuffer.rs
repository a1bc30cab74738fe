//! Pixel storage the rasterizer draws into.
//!
//! The rasterizer only needs the canvas extent and an unconditional pixel
//! write, expressed by [`RasterTarget`]. [`Framebuffer`] is the owned RGB
//! buffer that backs a [`Canvas`](crate::canvas::Canvas) by default.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::Bounds;

/// Bytes per RGB pixel.
const BYTES_PER_PIXEL: usize = 3;

/// Anything a canvas can rasterize into.
///
/// Callers of [`write_pixel`](Self::write_pixel) guarantee `x < width()` and
/// `y < height()`.
pub trait RasterTarget {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Overwrite the pixel at column `x`, row `y`.
    fn write_pixel(&mut self, x: u32, y: u32, color: Rgb);

    /// Overwrite every pixel with `color`.
    fn fill(&mut self, color: Rgb) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.write_pixel(x, y, color);
            }
        }
    }

    /// Extent used for clamping.
    fn bounds(&self) -> Bounds {
        Bounds::new(self.width(), self.height())
    }
}

/// Row-major RGB framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGB pixels in row-major order, 3 bytes each, no row padding.
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new black framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 || i32::try_from(width.max(height)).is_err() {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * BYTES_PER_PIXEL;

        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let row_bytes = self.row_bytes();
        let start = (y as usize) * row_bytes;
        Some(&self.pixels[start..start + row_bytes])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgb) {
        let [r, g, b] = color.to_array();
        let row_bytes = self.row_bytes();

        // Paint the first row, then copy it down
        let (first, rest) = self.pixels.split_at_mut(row_bytes);
        for chunk in first.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk[0] = r;
            chunk[1] = g;
            chunk[2] = b;
        }
        for row in rest.chunks_exact_mut(row_bytes) {
            row.copy_from_slice(first);
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgb::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&color.to_array());
    }

    /// Number of pixels exactly equal to `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgb) -> usize {
        let needle = color.to_array();
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|px| *px == needle)
            .count()
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.row_bytes() + (x as usize) * BYTES_PER_PIXEL
    }

    #[inline]
    fn row_bytes(&self) -> usize {
        (self.width as usize) * BYTES_PER_PIXEL
    }
}

impl RasterTarget for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn write_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        self.set_pixel(x, y, color);
    }

    fn fill(&mut self, color: Rgb) {
        self.clear(color);
    }
}
