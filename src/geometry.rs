//! Raster-space geometry: integer points, canvas bounds and bounding boxes.

/// A point in raster space. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Canvas extent used for clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Bounds {
    /// Create bounds for a `width` x `height` canvas.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Largest valid column.
    #[must_use]
    pub fn max_x(&self) -> i32 {
        last_index(self.width)
    }

    /// Largest valid row.
    #[must_use]
    pub fn max_y(&self) -> i32 {
        last_index(self.height)
    }

    /// Saturate `x` into `[0, width - 1]`.
    #[must_use]
    pub fn clamp_x(&self, x: i32) -> i32 {
        x.clamp(0, self.max_x())
    }

    /// Saturate `y` into `[0, height - 1]`.
    #[must_use]
    pub fn clamp_y(&self, y: i32) -> i32 {
        y.clamp(0, self.max_y())
    }

    /// Saturate a point into the canvas, each axis independently.
    #[must_use]
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(self.clamp_x(p.x), self.clamp_y(p.y))
    }

    /// Whether the point lies on the canvas.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x <= self.max_x() && p.y <= self.max_y()
    }
}

fn last_index(extent: u32) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX).saturating_sub(1).max(0)
}

/// Inclusive axis-aligned box of integer points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Smallest column.
    pub min_x: i32,
    /// Smallest row.
    pub min_y: i32,
    /// Largest column.
    pub max_x: i32,
    /// Largest row.
    pub max_y: i32,
}

impl BoundingBox {
    /// Smallest box containing every point. `None` for an empty slice.
    #[must_use]
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in rest {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.max_y = bbox.max_y.max(p.y);
        }
        Some(bbox)
    }

    /// Square of half-size `radius` around `center`.
    #[must_use]
    pub const fn around(center: Point, radius: i32) -> Self {
        Self {
            min_x: center.x.saturating_sub(radius),
            min_y: center.y.saturating_sub(radius),
            max_x: center.x.saturating_add(radius),
            max_y: center.y.saturating_add(radius),
        }
    }

    /// Intersection with the canvas. `None` if the box lies entirely off it.
    #[must_use]
    pub fn clip(&self, bounds: Bounds) -> Option<Self> {
        let clipped = Self {
            min_x: self.min_x.max(0),
            min_y: self.min_y.max(0),
            max_x: self.max_x.min(bounds.max_x()),
            max_y: self.max_y.min(bounds.max_y()),
        };
        (clipped.min_x <= clipped.max_x && clipped.min_y <= clipped.max_y).then_some(clipped)
    }

    /// Every point in the box, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (min_x, max_x) = (self.min_x, self.max_x);
        (self.min_y..=self.max_y).flat_map(move |y| (min_x..=max_x).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0, 0);
        let p2 = Point::new(3, 4);
        assert!((p1.distance(p2) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_saturates_each_axis() {
        let bounds = Bounds::new(100, 100);
        assert_eq!(bounds.clamp(Point::new(-5, 9999)), Point::new(0, 99));
        assert_eq!(bounds.clamp(Point::new(250, -1)), Point::new(99, 0));
        assert_eq!(bounds.clamp(Point::new(42, 17)), Point::new(42, 17));
    }

    #[test]
    fn test_clamp_extreme_values() {
        let bounds = Bounds::new(10, 20);
        assert_eq!(bounds.clamp(Point::new(i32::MIN, i32::MAX)), Point::new(0, 19));
    }

    #[test]
    fn test_contains() {
        let bounds = Bounds::new(10, 10);
        assert!(bounds.contains(Point::new(0, 0)));
        assert!(bounds.contains(Point::new(9, 9)));
        assert!(!bounds.contains(Point::new(10, 0)));
        assert!(!bounds.contains(Point::new(0, -1)));
    }

    #[test]
    fn test_bounding_box_enclosing() {
        let bbox = BoundingBox::enclosing(&[
            Point::new(10, 0),
            Point::new(90, 50),
            Point::new(10, 90),
        ])
        .unwrap();
        assert_eq!((bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y), (10, 0, 90, 90));
        assert!(BoundingBox::enclosing(&[]).is_none());
    }

    #[test]
    fn test_bounding_box_clip() {
        let bounds = Bounds::new(20, 20);
        let clipped = BoundingBox::around(Point::new(2, 18), 5).clip(bounds).unwrap();
        assert_eq!((clipped.min_x, clipped.min_y, clipped.max_x, clipped.max_y), (0, 13, 7, 19));

        assert!(BoundingBox::around(Point::new(-50, -50), 5).clip(bounds).is_none());
    }

    #[test]
    fn test_bounding_box_points_count() {
        let bbox = BoundingBox::around(Point::new(5, 5), 1);
        assert_eq!(bbox.points().count(), 9);
    }
}
