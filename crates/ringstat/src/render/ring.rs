use super::mode::{RenderMode, Sweep};
use super::primitive::{ArcRole, ArcSegment, DrawCommand, StrokeStyle, TextAlign, TextStyle};
use super::surface::DrawSurface;
use super::{ANGLE_EPSILON, FULL_CIRCLE, START_ANGLE};
use crate::color::{FallbackColors, OPAQUE_BLACK, Palette, TRANSPARENT_WHITE};
use crate::geometry::{Point, RingGeometry};
use crate::series::CategorySeries;
use palette::Srgba;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStyle {
    pub stroke_width: f64,
    pub text_size: f64,
    pub text_color: Srgba<f64>,
    pub background: Srgba<f64>,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            stroke_width: 5.0,
            text_size: 20.0,
            text_color: OPAQUE_BLACK,
            background: TRANSPARENT_WHITE,
        }
    }
}

/// Values shared by every category in one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingFrame {
    pub sum: f64,
    pub percent: f64,
    /// Angle the arcs span once fully revealed, `360 * percent / 100`.
    pub max_angle: f64,
    pub progress: f64,
    /// How far round the ring the animation has got, capped at `max_angle`.
    pub progress_angle: f64,
    pub closes_ring: bool,
}

impl RingFrame {
    pub fn compute(series: &CategorySeries, progress: f64) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        let percent = series.percent();
        let max_angle = FULL_CIRCLE * percent / 100.0;

        Self {
            sum: series.sum(),
            percent,
            max_angle,
            progress,
            progress_angle: (FULL_CIRCLE * progress).min(max_angle),
            closes_ring: series.all_non_zero(),
        }
    }

    pub fn has_arcs(&self) -> bool {
        self.sum > 0.0 && self.sum.is_finite()
    }

    pub fn share(&self, value: f64) -> f64 {
        self.max_angle * (value / self.sum)
    }

    pub fn label(&self) -> String {
        format!("{:.2}%", self.percent)
    }
}

pub struct RingRenderer<'a> {
    series: &'a CategorySeries,
    palette: &'a Palette,
    style: &'a RingStyle,
    geometry: &'a RingGeometry,
    mode: RenderMode,
    progress: f64,
}

impl<'a> RingRenderer<'a> {
    pub fn new(
        series: &'a CategorySeries,
        palette: &'a Palette,
        style: &'a RingStyle,
        geometry: &'a RingGeometry,
    ) -> Self {
        Self {
            series,
            palette,
            style,
            geometry,
            mode: RenderMode::default(),
            progress: 1.0,
        }
    }

    pub fn mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }

    pub fn draw<S: DrawSurface>(
        &self,
        surface: &mut S,
        fallback: &impl FallbackColors,
    ) -> Result<(), S::Error> {
        self.commands(fallback)
            .iter()
            .try_for_each(|command| surface.emit(command))
    }

    /// Primitives in paint order: label, background track, category arcs,
    /// then the closing arc when one applies.
    pub fn commands(&self, fallback: &impl FallbackColors) -> Vec<DrawCommand> {
        if self.series.is_empty() {
            return Vec::new();
        }

        let frame = RingFrame::compute(self.series, self.progress);
        let mut commands = vec![self.label(&frame), self.track()];

        if !frame.has_arcs() {
            log::debug!("Series sums to {}, drawing no arcs", frame.sum);
            return commands;
        }

        let mut start = START_ANGLE;
        let mut filled = 0.0;
        let mut first_color = None;

        for (index, &value) in self.series.iter().enumerate() {
            let share = frame.share(value);
            let color = self.palette.resolve(index, fallback);
            first_color.get_or_insert(color);
            let role = ArcRole::Category(index);

            match self
                .mode
                .sweep(share, frame.progress, filled, frame.progress_angle)
            {
                Sweep::Forward(sweep) => commands.push(self.arc(start, sweep, color, role)),
                Sweep::Mirrored(half) => {
                    let middle = start + share / 2.0;
                    commands.push(self.arc(middle, half, color, role));
                    commands.push(self.arc(middle, -half, color, role));
                }
            }

            start += share;
            filled += share;

            // slack absorbs float drift in the summed shares at full progress
            if self.mode.stops_at_frontier() && filled > frame.progress_angle + ANGLE_EPSILON {
                return commands;
            }
        }

        if self.mode.draws_closing_segment()
            && frame.closes_ring
            && let Some(color) = first_color
        {
            // Fixed sliver of the first category's color over the seam.
            let sweep = frame.share(self.series[0]) / FULL_CIRCLE;
            commands.push(self.arc(start, sweep, color, ArcRole::Closing));
        }

        commands
    }

    fn label(&self, frame: &RingFrame) -> DrawCommand {
        let center = self.geometry.center;
        DrawCommand::Label {
            text: frame.label(),
            anchor: Point::new(center.x, center.y + self.style.text_size / 4.0),
            style: TextStyle {
                size: self.style.text_size,
                color: self.style.text_color,
                align: TextAlign::Center,
            },
        }
    }

    fn track(&self) -> DrawCommand {
        let track = self.geometry.track;
        DrawCommand::Circle {
            center: track.center(),
            radius: track.width() / 2.0,
            stroke: StrokeStyle::round(self.style.stroke_width, self.style.background),
        }
    }

    fn arc(&self, start: f64, sweep: f64, color: Srgba<f64>, role: ArcRole) -> DrawCommand {
        DrawCommand::Arc(ArcSegment {
            bounds: self.geometry.oval,
            start,
            sweep,
            stroke: StrokeStyle::round(self.style.stroke_width, color),
            role,
        })
    }
}
