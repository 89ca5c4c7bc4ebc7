use crate::data::vector::Vec2;
use serde::{Deserialize, Serialize};

/// An ordered, fixed-length sequence of impulse vectors.
///
/// Genome length is fixed at population-creation time; every genome within
/// one population shares the same length. A genome is immutable once attached
/// to a phenotype — the phenotype's cursor consumes genes without mutating
/// them. Construction happens in `genetix_core` (random generation or
/// crossover).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    pub genes: Vec<Vec2>,
}

impl Genome {
    #[must_use]
    pub fn new(genes: Vec<Vec2>) -> Self {
        Self { genes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    #[must_use]
    pub fn gene(&self, index: usize) -> Option<Vec2> {
        self.genes.get(index).copied()
    }
}
