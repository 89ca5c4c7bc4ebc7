use crate::data::vector::Vec2;
use serde::{Deserialize, Serialize};

/// Fitness statistics of one completed generation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerationStats {
    pub average: f64,
    pub best: f64,
    pub worst: f64,
}

/// Read-only view of the engine, polled by the host once per rendered frame.
///
/// Fitness figures describe the *previous* completed generation; they are
/// zero until the first generation finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub generation: u64,
    pub tick: u64,
    pub alive: usize,
    pub population_size: usize,
    pub genome_length: usize,
    pub mutation_rate: f64,
    pub average_fitness: f64,
    pub previous_best: f64,
    pub previous_worst: f64,
    pub target_position: Vec2,
    pub target_radius: f64,
    pub positions: Vec<Vec2>,
    pub halted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = EngineSnapshot {
            generation: 1,
            tick: 0,
            alive: 2,
            population_size: 2,
            genome_length: 10,
            mutation_rate: 0.01,
            average_fitness: 0.0,
            previous_best: 0.0,
            previous_worst: 0.0,
            target_position: Vec2::new(100.0, 50.0),
            target_radius: 10.0,
            positions: vec![Vec2::ZERO, Vec2::new(1.0, 1.0)],
            halted: false,
        };
        let json = serde_json::to_string(&snapshot).expect("snapshot must serialize");
        let back: EngineSnapshot = serde_json::from_str(&json).expect("snapshot must deserialize");
        assert_eq!(back, snapshot);
    }
}
