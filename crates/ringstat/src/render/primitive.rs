use crate::geometry::{Point, Rect};
use palette::Srgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Stroke settings for one primitive. Built per draw, never shared mutably.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
    pub color: Srgba<f64>,
}

impl StrokeStyle {
    pub fn round(width: f64, color: Srgba<f64>) -> Self {
        Self {
            width,
            cap: LineCap::Round,
            join: LineJoin::Round,
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: Srgba<f64>,
    pub align: TextAlign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcRole {
    Category(usize),
    Closing,
}

/// Arc along the ellipse inscribed in `bounds`. Angles are in degrees, 0 at
/// three o'clock, positive sweeps run clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub bounds: Rect,
    pub start: f64,
    pub sweep: f64,
    pub stroke: StrokeStyle,
    pub role: ArcRole,
}

impl ArcSegment {
    pub fn end(&self) -> f64 {
        self.start + self.sweep
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// `anchor` is the baseline point the text is aligned on.
    Label {
        text: String,
        anchor: Point,
        style: TextStyle,
    },
    Circle {
        center: Point,
        radius: f64,
        stroke: StrokeStyle,
    },
    Arc(ArcSegment),
}

impl DrawCommand {
    pub fn as_arc(&self) -> Option<&ArcSegment> {
        match self {
            Self::Arc(arc) => Some(arc),
            _ => None,
        }
    }
}
