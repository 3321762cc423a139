//! Data models for evoscope
//!
//! UI-independent data structures: the raw log entry, the evolution
//! snapshot derived from it, and the generated artifacts (forge
//! candidates, constellation positions, home insights).

mod axis;
mod entry;
mod evolution;
mod insight;
mod layout;
mod metrics;
mod mutation;
mod notification;

pub use axis::Axis;
pub use entry::{DAY_PREFIX_LEN, LogEntry};
pub use evolution::{AxisCount, EvolutionModel, TimelineNode, UNKNOWN_DATE};
pub use insight::{
    Continuity, Drift, DriftItem, Forecast, ForecastStatus, MemoryShard, Pulse, Volatility,
};
pub use layout::NodePosition;
pub use metrics::{Cadence, Repetition, RiskLevel, Streaks};
pub use mutation::{DEFAULT_CANDIDATE_COUNT, DEFAULT_NOVELTY, ForgeOptions, MutationCandidate};
pub use notification::{Notification, NotificationKind};
