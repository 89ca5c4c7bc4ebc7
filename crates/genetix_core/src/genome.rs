//! Genome generation and crossover.
//!
//! Genes are unit impulse vectors. Crossover is elementwise and
//! order-preserving: every index is an independent coin flip between the
//! componentwise average of the parents and a freshly random gene — there is
//! no single-point recombination.

use genetix_data::{Genome, Vec2};
use rand::Rng;
use std::f64::consts::TAU;

/// Trait defining the genetic operators for genomes.
pub trait GenomeLogic: Sized {
    fn generate_with_rng<R: Rng>(length: usize, rng: &mut R) -> Self;
    #[must_use]
    fn crossover_with_rng<R: Rng>(&self, other: &Self, mutation_rate: f64, rng: &mut R) -> Self;
}

fn random_gene<R: Rng>(rng: &mut R) -> Vec2 {
    Vec2::from_angle(rng.gen_range(0.0..TAU))
}

impl GenomeLogic for Genome {
    /// Produces `length` genes, each a unit vector at a uniform random angle.
    fn generate_with_rng<R: Rng>(length: usize, rng: &mut R) -> Self {
        Genome::new((0..length).map(|_| random_gene(rng)).collect())
    }

    /// Child genome from two parents of equal length.
    ///
    /// Per gene index, independently: with probability `mutation_rate` the
    /// child gene is freshly random, otherwise it is the componentwise
    /// average of the parents' genes at that index. Out-of-range rates are
    /// clamped into `[0, 1]`.
    fn crossover_with_rng<R: Rng>(&self, other: &Self, mutation_rate: f64, rng: &mut R) -> Self {
        debug_assert_eq!(self.len(), other.len(), "parent genomes must match in length");
        let mutation_rate = mutation_rate.clamp(0.0, 1.0);
        let genes = self
            .genes
            .iter()
            .zip(other.genes.iter())
            .map(|(a, b)| {
                if rng.gen_bool(mutation_rate) {
                    random_gene(rng)
                } else {
                    (*a + *b) * 0.5
                }
            })
            .collect();
        Genome::new(genes)
    }
}
