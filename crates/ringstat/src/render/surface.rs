use super::primitive::{ArcSegment, DrawCommand};
use std::convert::Infallible;

/// Something the ring can be painted onto.
pub trait DrawSurface {
    type Error;

    fn emit(&mut self, command: &DrawCommand) -> Result<(), Self::Error>;
}

/// Keeps every emitted command in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcSegment> {
        self.commands.iter().filter_map(DrawCommand::as_arc)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl DrawSurface for RecordingSurface {
    type Error = Infallible;

    fn emit(&mut self, command: &DrawCommand) -> Result<(), Infallible> {
        self.commands.push(command.clone());
        Ok(())
    }
}

#[cfg(feature = "cairo")]
mod cairo_surface {
    use super::DrawSurface;
    use crate::geometry::Point;
    use crate::render::primitive::{
        ArcSegment, DrawCommand, LineCap, LineJoin, StrokeStyle, TextAlign, TextStyle,
    };
    use cairo::Context;
    use palette::Srgba;
    use std::f64::consts::PI;

    const MIN_SWEEP: f64 = 1e-6;

    impl DrawSurface for Context {
        type Error = cairo::Error;

        fn emit(&mut self, command: &DrawCommand) -> Result<(), cairo::Error> {
            match command {
                DrawCommand::Label {
                    text,
                    anchor,
                    style,
                } => draw_label(self, text, *anchor, style),
                DrawCommand::Circle {
                    center,
                    radius,
                    stroke,
                } => draw_circle(self, *center, *radius, stroke),
                DrawCommand::Arc(arc) => draw_arc(self, arc),
            }
        }
    }

    fn set_source(cr: &Context, color: Srgba<f64>) {
        let (r, g, b, a) = color.into_components();
        cr.set_source_rgba(r, g, b, a);
    }

    fn apply_stroke(cr: &Context, stroke: &StrokeStyle) {
        set_source(cr, stroke.color);
        cr.set_line_width(stroke.width);
        cr.set_line_cap(match stroke.cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        });
        cr.set_line_join(match stroke.join {
            LineJoin::Miter => cairo::LineJoin::Miter,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Bevel => cairo::LineJoin::Bevel,
        });
    }

    fn draw_label(
        cr: &Context,
        text: &str,
        anchor: Point,
        style: &TextStyle,
    ) -> Result<(), cairo::Error> {
        set_source(cr, style.color);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_font_size(style.size);
        let ext = cr.text_extents(text)?;
        let x = match style.align {
            TextAlign::Left => anchor.x,
            TextAlign::Center => anchor.x - ext.width() / 2.0 - ext.x_bearing(),
            TextAlign::Right => anchor.x - ext.x_advance(),
        };
        cr.new_path();
        cr.move_to(x, anchor.y);
        cr.show_text(text)
    }

    fn draw_circle(
        cr: &Context,
        center: Point,
        radius: f64,
        stroke: &StrokeStyle,
    ) -> Result<(), cairo::Error> {
        if radius <= 0.0 {
            return Ok(());
        }
        apply_stroke(cr, stroke);
        cr.new_path();
        cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        cr.stroke()
    }

    fn draw_arc(cr: &Context, arc: &ArcSegment) -> Result<(), cairo::Error> {
        let radius = arc.bounds.width().min(arc.bounds.height()) / 2.0;
        // round caps would turn an empty arc into a dot
        if radius <= 0.0 || arc.sweep.abs() < MIN_SWEEP {
            return Ok(());
        }

        let center = arc.bounds.center();
        let (start, end) = (arc.start.to_radians(), arc.end().to_radians());

        apply_stroke(cr, &arc.stroke);
        cr.new_path();
        if arc.sweep > 0.0 {
            cr.arc(center.x, center.y, radius, start, end);
        } else {
            cr.arc_negative(center.x, center.y, radius, start, end);
        }
        cr.stroke()
    }

}
