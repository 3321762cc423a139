//! Constellation layout output

/// Placement of one timeline node on the constellation plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePosition {
    /// Index into `EvolutionModel::timeline`
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Chronological progress in `[0, 1]` (0.5 for a single node)
    pub progress: f64,
}

impl NodePosition {
    /// Euclidean distance between two node centres
    pub fn distance_to(&self, other: &NodePosition) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}
