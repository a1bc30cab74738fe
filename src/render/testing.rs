//! Test target that records every pixel write.

use std::collections::HashMap;

use crate::color::Rgb;
use crate::framebuffer::RasterTarget;
use crate::geometry::Point;

/// Remembers each write in order instead of storing pixels.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingTarget {
    width: u32,
    height: u32,
    pub(crate) writes: Vec<(Point, Rgb)>,
}

impl RecordingTarget {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            writes: Vec::new(),
        }
    }

    /// Final color of every written pixel.
    pub(crate) fn pixel_map(&self) -> HashMap<Point, Rgb> {
        self.writes.iter().copied().collect()
    }

    /// How many times each pixel was written.
    pub(crate) fn write_counts(&self) -> HashMap<Point, usize> {
        let mut counts = HashMap::new();
        for (p, _) in &self.writes {
            *counts.entry(*p).or_insert(0) += 1;
        }
        counts
    }
}

impl RasterTarget for RecordingTarget {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn write_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        assert!(x < self.width && y < self.height, "write outside target at ({x}, {y})");
        self.writes.push((Point::new(x as i32, y as i32), color));
    }
}
