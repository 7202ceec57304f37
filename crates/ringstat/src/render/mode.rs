use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum RenderMode {
    /// Every category grows at the same rate.
    #[default]
    #[strum(to_string = "synchronous", serialize = "sync", serialize = "0")]
    Synchronous,
    /// Categories fill one after another in series order.
    #[strum(to_string = "sequential", serialize = "seq", serialize = "1")]
    Sequential,
    /// Each category opens outwards from the middle of its span.
    #[strum(to_string = "bidirectional", serialize = "mirror", serialize = "2")]
    Bidirectional,
}

/// How much of a category's share is visible at the current progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sweep {
    /// One arc from the start of the share.
    Forward(f64),
    /// Two arcs of this length from the share's midpoint, one each way.
    Mirrored(f64),
}

impl RenderMode {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx)
    }

    /// `filled` is the angle already handed to earlier categories and
    /// `progress_angle` the frontier the animation has reached; only the
    /// sequential mode looks at them.
    pub fn sweep(&self, share: f64, progress: f64, filled: f64, progress_angle: f64) -> Sweep {
        match self {
            Self::Synchronous => Sweep::Forward(share * progress),
            Self::Sequential => Sweep::Forward((progress_angle - filled).min(share).max(0.0)),
            Self::Bidirectional => Sweep::Mirrored(share / 2.0 * progress),
        }
    }

    pub fn draws_closing_segment(&self) -> bool {
        !matches!(self, Self::Bidirectional)
    }

    /// Whether categories past the progress frontier are left out entirely.
    pub fn stops_at_frontier(&self) -> bool {
        matches!(self, Self::Sequential)
    }
}
