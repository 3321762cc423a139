//! Constellation layout
//!
//! Best-effort overlap reduction, not a force-directed solver: `x` is fixed
//! by chronology and only `y` is redrawn, at most
//! [`layout::MAX_RETRIES`](super::constants::layout::MAX_RETRIES) times per
//! node. When the budget runs out the last candidate is kept.

use super::constants::layout;
use super::random::SeededRandom;
use crate::model::{EvolutionModel, NodePosition};

/// Size of the plane and minimum gap between node rims
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub width: f64,
    pub height: f64,
    pub spacing: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            width: layout::DEFAULT_WIDTH,
            height: layout::DEFAULT_HEIGHT,
            spacing: layout::DEFAULT_SPACING,
        }
    }
}

/// Node radius for a change touching `files_changed` files
pub fn node_radius(files_changed: usize) -> f64 {
    (layout::MIN_RADIUS + files_changed as f64 * layout::RADIUS_PER_FILE)
        .clamp(layout::MIN_RADIUS, layout::MAX_RADIUS)
}

/// Place every timeline node on the plane
///
/// Seeded from `latest_date|timeline length`, so identical inputs always
/// give identical positions.
pub fn layout_constellation(model: &EvolutionModel, params: LayoutParams) -> Vec<NodePosition> {
    let count = model.timeline.len();
    let pad = layout::PADDING;
    let band = params.height - pad * 2.0;
    let mut random = SeededRandom::from_text(&format!("{}|{}", model.latest_date, count));

    let mut placed: Vec<NodePosition> = Vec::with_capacity(count);
    for (index, node) in model.timeline.iter().enumerate() {
        let progress = if count > 1 {
            index as f64 / (count - 1) as f64
        } else {
            0.5
        };
        let mut candidate = NodePosition {
            index,
            x: pad + (params.width - pad * 2.0) * progress,
            y: pad + random.next_f64() * band,
            radius: node_radius(node.files_changed),
            progress,
        };

        for _ in 0..layout::MAX_RETRIES {
            if !overlaps_any(&candidate, &placed, params.spacing) {
                break;
            }
            candidate.y = pad + random.next_f64() * band;
        }

        placed.push(candidate);
    }

    placed
}

/// True when `candidate` is closer than `spacing` (rim to rim) to any placed node
pub fn overlaps_any(candidate: &NodePosition, placed: &[NodePosition], spacing: f64) -> bool {
    placed
        .iter()
        .any(|prior| candidate.distance_to(prior) < spacing + candidate.radius + prior.radius)
}

/// Index of the placed node whose disc (plus `slack`) contains the point
pub fn nearest_node(positions: &[NodePosition], x: f64, y: f64, slack: f64) -> Option<usize> {
    let target = NodePosition {
        index: usize::MAX,
        x,
        y,
        radius: 0.0,
        progress: 0.0,
    };
    positions
        .iter()
        .map(|p| (p.index, p.distance_to(&target), p.radius))
        .filter(|(_, distance, radius)| *distance < radius + slack)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_radius_clamped() {
        assert_eq!(node_radius(0), 6.0);
        assert_eq!(node_radius(3), 6.0 + 3.0 * 1.8);
        assert_eq!(node_radius(50), 18.0);
    }

    #[test]
    fn test_overlaps_any() {
        let a = NodePosition {
            index: 0,
            x: 0.0,
            y: 0.0,
            radius: 6.0,
            progress: 0.0,
        };
        let near = NodePosition { x: 20.0, ..a };
        let far = NodePosition { x: 40.0, ..a };
        assert!(overlaps_any(&near, &[a], 24.0));
        assert!(!overlaps_any(&far, &[a], 24.0));
        assert!(!overlaps_any(&near, &[], 24.0));
    }

    #[test]
    fn test_nearest_node() {
        let base = NodePosition {
            index: 0,
            x: 10.0,
            y: 10.0,
            radius: 6.0,
            progress: 0.0,
        };
        let other = NodePosition {
            index: 1,
            x: 40.0,
            ..base
        };
        let positions = [base, other];
        assert_eq!(nearest_node(&positions, 12.0, 10.0, 8.0), Some(0));
        assert_eq!(nearest_node(&positions, 38.0, 12.0, 8.0), Some(1));
        assert_eq!(nearest_node(&positions, 25.0, 100.0, 8.0), None);
    }
}
