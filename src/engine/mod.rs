//! Analytics and generation engine
//!
//! Pure, synchronous computations over an in-memory entry collection:
//! temporal metrics, axis classification, the evolution snapshot, and the
//! seeded generators behind the forge and the constellation layout.
//!
//! The render boundary consists of [`build_model`], [`layout_constellation`]
//! and [`generate_mutations`]; everything they return is plain data.

pub mod axis;
mod builder;
pub mod constants;
mod forge;
pub mod insight;
mod layout;
pub mod metrics;
pub mod normalize;
pub mod random;
pub mod repetition;
pub mod time;

pub use axis::{classify_axis, classify_axis_with};
pub use builder::{build_model, collect_file_frequency, top_files};
pub use forge::{format_novelty, generate_mutations, underused_axis};
pub use layout::{LayoutParams, layout_constellation, nearest_node, node_radius, overlaps_any};
pub use metrics::{compute_streaks, summarize_cadence};
pub use normalize::{sort_by_date_asc, sort_by_date_desc, unique_days};
pub use random::{SeededRandom, hash_seed};
pub use repetition::detect_repetition;
