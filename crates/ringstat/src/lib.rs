pub mod color;
pub mod config;
pub mod geometry;
pub mod progress;
pub mod render;
pub mod series;
pub mod view;

pub use color::{FallbackColors, HexColor, Palette, RandomColors};
pub use config::StatsConfig;
pub use geometry::{Point, Rect, RingGeometry};
pub use progress::{Phase, ProgressDriver, TaskId, TickAction};
pub use render::{DrawCommand, DrawSurface, RecordingSurface, RenderMode, RingRenderer};
pub use series::CategorySeries;
pub use view::StatsView;
