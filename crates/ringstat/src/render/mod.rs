pub mod mode;
pub mod primitive;
pub mod ring;
pub mod surface;

pub use mode::{RenderMode, Sweep};
pub use primitive::{
    ArcRole, ArcSegment, DrawCommand, LineCap, LineJoin, StrokeStyle, TextAlign, TextStyle,
};
pub use ring::{RingFrame, RingRenderer, RingStyle};
pub use surface::{DrawSurface, RecordingSurface};

pub const FULL_CIRCLE: f64 = 360.0;
pub const START_ANGLE: f64 = -90.0; // 12 o'clock
pub const ANGLE_EPSILON: f64 = 1e-9; // float slack when comparing accumulated angles
