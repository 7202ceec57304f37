#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in surface pixels, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of side `2 * half_extent` centered on `center`. A negative
    /// extent yields an inverted rect, which surfaces treat as empty.
    pub fn from_center(center: Point, half_extent: f64) -> Self {
        Self::new(
            center.x - half_extent,
            center.y - half_extent,
            center.x + half_extent,
            center.y + half_extent,
        )
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Where the ring sits inside the viewport.
///
/// `oval` bounds the data arcs and `track` bounds the background circle. Both
/// are the same square today; they are kept apart so the two layers can be
/// inset independently.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RingGeometry {
    pub center: Point,
    pub radius: f64,
    pub oval: Rect,
    pub track: Rect,
}

impl RingGeometry {
    /// Fits the ring into a `width` x `height` viewport, pulling the radius in
    /// by the stroke width so the stroke does not clip at the edge.
    pub fn resolve(width: f64, height: f64, stroke_width: f64) -> Self {
        let radius = width.min(height) / 2.0 - stroke_width;
        let center = Point::new(width / 2.0, height / 2.0);

        Self {
            center,
            radius,
            oval: Rect::from_center(center, radius),
            track: Rect::from_center(center, radius),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.radius > 0.0
    }
}
