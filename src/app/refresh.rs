//! Data refresh operations (reload the log, recompute engine output)

use tracing::{debug, warn};

use super::state::App;
use crate::engine::{LayoutParams, build_model, format_novelty, generate_mutations, layout_constellation};
use crate::model::{LogEntry, Notification};
use crate::source::load_log;

impl App {
    /// Reload the log from disk and rebuild everything
    ///
    /// Re-reads today's date first, so a reload after midnight sees the new
    /// day. A missing or unreadable file shows the error banner and leaves
    /// an empty model in place.
    pub fn reload(&mut self) {
        self.today = self.config.today();
        match load_log(&self.config.log) {
            Ok(entries) => {
                self.error_message = None;
                self.apply_entries(entries);
            }
            Err(e) => {
                warn!(error = %e, "log reload failed");
                self.error_message = Some(e.to_string());
                self.apply_entries(Vec::new());
            }
        }
    }

    /// Rebuild the model from `entries` and push it to every view
    pub fn apply_entries(&mut self, entries: Vec<LogEntry>) {
        self.model = build_model(entries, self.today);
        self.home_view.set_model(&self.model, self.today);
        self.history_view.set_model(&self.model);
        self.constellation_view.set_model(&self.model);
        self.forge_view.set_model(&self.model);
        self.relayout();
        self.regenerate();
    }

    /// Recompute constellation positions with the view's spacing
    pub(crate) fn relayout(&mut self) {
        let params = LayoutParams {
            spacing: self.constellation_view.spacing(),
            ..LayoutParams::default()
        };
        let positions = layout_constellation(&self.model, params);
        debug!(nodes = positions.len(), spacing = params.spacing, "constellation laid out");
        self.constellation_view.set_positions(positions);
    }

    /// Generate forge candidates with the view's options
    pub(crate) fn regenerate(&mut self) {
        let options = self.forge_view.options();
        let candidates = generate_mutations(&self.model, options);
        debug!(
            novelty = %format_novelty(options.novelty),
            count = candidates.len(),
            "forge candidates generated"
        );
        self.forge_view.set_candidates(candidates);
    }

    /// Reload on Ctrl+L and report the result
    pub(crate) fn execute_refresh(&mut self) {
        self.reload();
        if self.error_message.is_some() {
            return;
        }
        self.notification = Some(if self.model.is_empty() {
            Notification::warning("Log has no entries")
        } else {
            Notification::info(format!("Reloaded {} entries", self.model.entries.len()))
        });
    }
}
