use crate::data::genome::Genome;
use crate::data::vector::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Why a phenotype died.
///
/// Death is a terminal, ordinary state transition — never an error. The
/// cause feeds the fitness formula: wall hits score a hard zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// The genome ran out of genes to consume.
    Exhausted,
    /// Left the arena on an axis with wrapping disabled.
    WallHit,
    /// Came within the target's capture radius.
    TargetReached,
}

/// One simulated individual: a genome plus kinematic state.
///
/// The cursor walks the genome one gene per tick; each gene is consumed
/// exactly once as an acceleration impulse. `fitness` is unset until the
/// first evaluation and final from the tick the phenotype dies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phenotype {
    pub id: Uuid,
    pub genome: Genome,
    /// Next gene to consume. Monotone, never exceeds the genome length.
    pub cursor: usize,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Copy of the initial position; offspring are born here.
    pub birth_position: Vec2,
    /// In `[0, 1]` once assigned by evaluation.
    pub fitness: Option<f64>,
    /// `None` while alive; set exactly once.
    pub death: Option<DeathCause>,
}

impl Phenotype {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.death.is_none()
    }

    /// Whether death was caused by an out-of-bounds exit.
    #[must_use]
    pub fn hit_wall(&self) -> bool {
        matches!(self.death, Some(DeathCause::WallHit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(death: Option<DeathCause>) -> Phenotype {
        Phenotype {
            id: Uuid::nil(),
            genome: Genome::new(vec![Vec2::new(1.0, 0.0)]),
            cursor: 0,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            birth_position: Vec2::ZERO,
            fitness: None,
            death,
        }
    }

    #[test]
    fn test_alive_and_wall_flags() {
        assert!(sample(None).is_alive());
        assert!(!sample(Some(DeathCause::Exhausted)).is_alive());
        assert!(sample(Some(DeathCause::WallHit)).hit_wall());
        assert!(!sample(Some(DeathCause::TargetReached)).hit_wall());
    }
}
