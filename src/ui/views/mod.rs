//! View components
//!
//! Each view represents a screen of the dashboard. Views hold display state
//! derived from the current model; `App` feeds them engine output.

mod constellation;
mod forge;
mod history;
mod home;

pub use constellation::{
    ConstellationAction, ConstellationNode, ConstellationView, MAX_SPACING, MIN_SPACING,
    SPACING_STEP,
};
pub use forge::{ForgeAction, ForgeView, NOVELTY_STEP};
pub use history::{HistoryAction, HistoryRow, HistoryView};
pub use home::{HomeAction, HomePanels, HomeView};
