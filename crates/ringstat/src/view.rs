use crate::color::{FallbackColors, Palette, RandomColors};
use crate::config::StatsConfig;
use crate::geometry::RingGeometry;
use crate::progress::{Phase, ProgressDriver, TaskId, TickAction};
use crate::render::{DrawCommand, DrawSurface, RenderMode, RingRenderer, RingStyle};
use crate::series::CategorySeries;
use std::time::Instant;

/// The radial stats widget: data, geometry and animation state for one ring.
///
/// The host calls [`on_resize`](Self::on_resize) when its surface changes
/// size, [`set_data`](Self::set_data) when a new series arrives, forwards
/// frame ticks to [`tick`](Self::tick) and paints with [`draw`](Self::draw).
pub struct StatsView<F: FallbackColors = RandomColors> {
    style: RingStyle,
    palette: Palette,
    mode: RenderMode,
    series: CategorySeries,
    geometry: RingGeometry,
    driver: ProgressDriver,
    fallback: F,
}

impl StatsView<RandomColors> {
    pub fn new(config: &StatsConfig) -> Self {
        Self::with_fallback(config, RandomColors)
    }
}

impl<F: FallbackColors> StatsView<F> {
    pub fn with_fallback(config: &StatsConfig, fallback: F) -> Self {
        Self {
            style: config.style(),
            palette: config.palette().filled(&fallback),
            mode: config.render_mode,
            series: CategorySeries::default(),
            geometry: RingGeometry::default(),
            driver: ProgressDriver::default(),
            fallback,
        }
    }

    pub fn with_driver(mut self, driver: ProgressDriver) -> Self {
        self.driver = driver;
        self
    }

    /// Replaces the series and restarts the reveal from zero. Returns the id
    /// the host must pass back with every tick of the new run.
    pub fn set_data(&mut self, series: impl Into<CategorySeries>, now: Instant) -> TaskId {
        self.series = series.into();
        let task = self.driver.restart(now);
        log::debug!(
            "New series of {} categories ({:.2}%), animation {:?}",
            self.series.len(),
            self.series.percent(),
            task
        );
        task
    }

    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.geometry = RingGeometry::resolve(width, height, self.style.stroke_width);
    }

    pub fn tick(&mut self, task: TaskId, now: Instant) -> TickAction {
        self.driver.tick(task, now)
    }

    pub fn draw<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        self.renderer().draw(surface, &self.fallback)
    }

    pub fn commands(&self) -> Vec<DrawCommand> {
        self.renderer().commands(&self.fallback)
    }

    fn renderer(&self) -> RingRenderer<'_> {
        RingRenderer::new(&self.series, &self.palette, &self.style, &self.geometry)
            .mode(self.mode)
            .progress(self.driver.progress())
    }

    pub fn series(&self) -> &CategorySeries {
        &self.series
    }

    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    pub fn progress(&self) -> f64 {
        self.driver.progress()
    }

    pub fn phase(&self) -> Phase {
        self.driver.phase()
    }

    pub fn percent(&self) -> f64 {
        self.series.percent()
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;
    use palette::Srgba;
    use std::time::Duration;

    fn view(mode: RenderMode) -> StatsView<fn(usize) -> Srgba<f64>> {
        let config = StatsConfig {
            render_mode: mode,
            ..StatsConfig::default()
        };
        let grey: fn(usize) -> Srgba<f64> = |_| Srgba::new(0.5, 0.5, 0.5, 1.0);
        let mut view = StatsView::with_fallback(&config, grey);
        view.on_resize(300.0, 200.0);
        view
    }

    #[test]
    fn test_nothing_drawn_before_data() {
        let view = view(RenderMode::Synchronous);
        let mut surface = RecordingSurface::new();

        view.draw(&mut surface).unwrap();

        assert!(surface.commands().is_empty());
        assert_eq!(view.phase(), Phase::Idle);
    }

    #[test]
    fn test_resize_recomputes_geometry() {
        let mut view = view(RenderMode::Synchronous);
        assert_eq!(view.geometry().radius, 95.0);

        view.on_resize(50.0, 80.0);
        assert_eq!(view.geometry().radius, 20.0);
        assert_eq!(view.geometry().center.y, 40.0);
    }

    #[test]
    fn test_set_data_restarts_from_zero() {
        let start = Instant::now();
        let mut view = view(RenderMode::Synchronous);

        let first = view.set_data([1.0, 1.0], start);
        view.tick(first, start + Duration::from_millis(2000));
        assert!(view.progress() > 0.5);

        let second = view.set_data([1.0, 0.0, 1.0], start + Duration::from_millis(2100));
        assert_eq!(view.progress(), 0.0);
        assert_eq!(view.phase(), Phase::Running);
        assert!(view.tick(first, start + Duration::from_millis(2200)).stale);
        assert!(!view.tick(second, start + Duration::from_millis(2200)).stale);
        assert!((view.percent() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_draw_reflects_progress() {
        let start = Instant::now();
        let mut view = view(RenderMode::Synchronous);
        let task = view.set_data([1.0, 1.0, 1.0, 1.0], start);
        view.tick(task, start + Duration::from_millis(1250));

        let sweeps: Vec<f64> = view
            .commands()
            .iter()
            .filter_map(DrawCommand::as_arc)
            .map(|a| a.sweep)
            .collect();

        assert_eq!(sweeps.len(), 5);
        for sweep in &sweeps[..4] {
            assert!((sweep - 45.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unconfigured_colors_stay_put_across_paints() {
        let mut view = StatsView::new(&StatsConfig::default());
        view.on_resize(100.0, 100.0);
        view.set_data([1.0, 1.0], Instant::now());

        let colors = |commands: Vec<DrawCommand>| -> Vec<Srgba<f64>> {
            commands
                .iter()
                .filter_map(DrawCommand::as_arc)
                .map(|a| a.stroke.color)
                .collect()
        };
        let first = colors(view.commands());
        let second = colors(view.commands());

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
        assert_eq!(first[2], first[0]);
    }

    #[test]
    fn test_default_view_uses_random_fallback() {
        let mut view = StatsView::new(&StatsConfig::default());
        view.on_resize(100.0, 100.0);
        view.set_data([1.0], Instant::now());

        assert_eq!(view.mode(), RenderMode::Synchronous);
        assert_eq!(view.commands().len(), 4);
        assert_eq!(view.series().len(), 1);
    }
}
