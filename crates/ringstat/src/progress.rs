use std::time::{Duration, Instant};

pub const ANIMATION_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Completed,
}

/// Identifies one animation run. Ticks carrying an older id are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct AnimationTask {
    id: TaskId,
    started_at: Instant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickAction {
    pub should_redraw: bool,
    pub finished: bool,
    pub stale: bool,
}

impl TickAction {
    pub fn new(should_redraw: bool, finished: bool) -> Self {
        Self {
            should_redraw,
            finished,
            stale: false,
        }
    }

    fn ignored() -> Self {
        Self {
            should_redraw: false,
            finished: true,
            stale: true,
        }
    }
}

/// Linear 0 -> 1 clock over a fixed duration, restarted on every new series.
///
/// The driver owns at most one [`AnimationTask`]. `restart` replaces it, so a
/// tick from a cancelled run can never move `progress`.
#[derive(Debug)]
pub struct ProgressDriver {
    duration: Duration,
    phase: Phase,
    progress: f64,
    task: Option<AnimationTask>,
    next_id: u64,
}

impl Default for ProgressDriver {
    fn default() -> Self {
        Self::new(ANIMATION_DURATION)
    }
}

impl ProgressDriver {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            phase: Phase::Idle,
            progress: 0.0,
            task: None,
            next_id: 0,
        }
    }

    pub fn restart(&mut self, now: Instant) -> TaskId {
        if let Some(old) = self.task.take() {
            log::debug!("Cancelling animation {:?} at progress {:.3}", old.id, self.progress);
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.task = Some(AnimationTask {
            id,
            started_at: now,
        });
        self.progress = 0.0;
        self.phase = Phase::Running;
        id
    }

    pub fn tick(&mut self, task: TaskId, now: Instant) -> TickAction {
        let started_at = match &self.task {
            Some(active) if active.id == task && self.phase == Phase::Running => active.started_at,
            _ => return TickAction::ignored(),
        };

        self.progress = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(started_at);
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        };
        log::trace!("Animation {:?} progress {:.3}", task, self.progress);

        if self.progress >= 1.0 {
            self.phase = Phase::Completed;
            self.task = None;
            return TickAction::new(true, true);
        }
        TickAction::new(true, false)
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_task(&self) -> Option<TaskId> {
        self.task.as_ref().map(|t| t.id)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
