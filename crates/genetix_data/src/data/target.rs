use crate::data::vector::Vec2;
use serde::{Deserialize, Serialize};

/// The spatial goal of a run: an immovable point with a capture radius.
///
/// Immutable after creation and shared read-only by every phenotype's
/// evaluation. A phenotype closer than `radius / 2` has reached the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub position: Vec2,
    pub radius: f64,
}

impl Target {
    #[must_use]
    pub fn new(position: Vec2, radius: f64) -> Self {
        Self { position, radius }
    }

    /// Whether `position` falls within the capture radius.
    #[must_use]
    pub fn captures(&self, position: Vec2) -> bool {
        self.captures_at_distance(position.distance(self.position))
    }

    /// Capture check for a precomputed distance to the target.
    #[must_use]
    pub fn captures_at_distance(&self, dist: f64) -> bool {
        dist < self.radius / 2.0
    }
}
