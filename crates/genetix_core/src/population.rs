//! Population-level passes, statistics and the reproduction protocol.
//!
//! A population is one generation's cohort. Every tick runs a full advance
//! pass then a full evaluate pass over the stored order; phenotypes never
//! read each other's state, so pass order between individuals is immaterial.
//! When the alive count reaches zero the generation is complete and the
//! reproduction protocol replaces the cohort in place.

use crate::config::EvolutionConfig;
use crate::error::EngineError;
use crate::phenotype::{EvalContext, PhenotypeLogic};
use genetix_data::{remap, GenerationStats, Phenotype, Vec2};
use rand::Rng;

/// Copies of a phenotype granted to the fittest individual in the pool.
const SELECTION_WEIGHT_SCALE: f64 = 100.0;

/// One generation of phenotypes plus its bookkeeping.
#[derive(Debug, Clone)]
pub struct Population {
    pub phenotypes: Vec<Phenotype>,
    /// Starts at 1; incremented exactly once per reproduction event.
    pub generation: u64,
    /// Count of living phenotypes; never increments within a generation.
    pub alive: usize,
}

impl Population {
    /// Builds the initial cohort: `size` phenotypes with random genomes of
    /// `genome_length`, all sharing one birth position.
    pub fn generate_with_rng<R: Rng>(
        size: usize,
        genome_length: usize,
        birth_position: Vec2,
        rng: &mut R,
    ) -> Self {
        let phenotypes = (0..size)
            .map(|_| Phenotype::spawn_with_rng(genome_length, birth_position, rng))
            .collect();
        Self {
            phenotypes,
            generation: 1,
            alive: size,
        }
    }

    /// Wraps a prebuilt cohort (tests, custom bootstrapping).
    #[must_use]
    pub fn from_phenotypes(phenotypes: Vec<Phenotype>) -> Self {
        let alive = phenotypes.iter().filter(|p| p.is_alive()).count();
        Self {
            phenotypes,
            generation: 1,
            alive,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.phenotypes.len()
    }

    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.alive == 0
    }

    /// Advance pass: every phenotype consumes its next gene.
    pub fn advance(&mut self) {
        for p in &mut self.phenotypes {
            if p.advance() {
                self.alive -= 1;
            }
        }
    }

    /// Evaluate pass: boundary handling and fitness scoring for everyone.
    pub fn evaluate(&mut self, ctx: &EvalContext<'_>) {
        for p in &mut self.phenotypes {
            if p.evaluate(ctx) {
                self.alive -= 1;
            }
        }
    }

    /// Average/best/worst fitness of the cohort in a single linear pass.
    ///
    /// Phenotypes that never got a fitness assigned count as zero.
    #[must_use]
    pub fn generation_stats(&self) -> GenerationStats {
        if self.phenotypes.is_empty() {
            return GenerationStats::default();
        }
        let mut sum = 0.0;
        let mut best = f64::NEG_INFINITY;
        let mut worst = f64::INFINITY;
        for p in &self.phenotypes {
            let fitness = p.fitness.unwrap_or(0.0);
            sum += fitness;
            best = best.max(fitness);
            worst = worst.min(fitness);
        }
        GenerationStats {
            average: sum / self.phenotypes.len() as f64,
            best,
            worst,
        }
    }

    /// Selection pool as indices into the outgoing cohort.
    ///
    /// Each phenotype is inserted `floor(remap(fitness, worst, best, 0, 1) *
    /// 100)` times: the worst individual contributes zero copies, the best
    /// about a hundred. When the whole generation shares one fitness value
    /// the proportional map divides by zero; the uniform fallback gives every
    /// phenotype equal weight instead, and with the fallback disabled the
    /// pool degenerates into an error.
    fn selection_pool(
        &self,
        stats: &GenerationStats,
        uniform_fallback: bool,
    ) -> Result<Vec<usize>, EngineError> {
        let mut pool = Vec::new();
        if stats.best == stats.worst {
            if uniform_fallback {
                tracing::warn!(
                    generation = self.generation,
                    fitness = stats.best,
                    "Uniform fitness across generation, falling back to equal selection weights"
                );
                pool.extend(0..self.phenotypes.len());
            }
        } else {
            for (index, p) in self.phenotypes.iter().enumerate() {
                let fitness = p.fitness.unwrap_or(0.0);
                let weight =
                    (remap(fitness, stats.worst, stats.best, 0.0, 1.0) * SELECTION_WEIGHT_SCALE)
                        .floor() as usize;
                pool.extend(std::iter::repeat(index).take(weight));
            }
        }
        if pool.is_empty() {
            return Err(EngineError::DegenerateSelection {
                generation: self.generation,
            });
        }
        Ok(pool)
    }

    /// Replaces the cohort with the next generation.
    ///
    /// Offspring come from repeated pairs of independent uniform draws (with
    /// replacement — a phenotype may mate with itself) from the selection
    /// pool. On success the alive count resets to the cohort size and the
    /// generation index increments.
    pub fn reproduce_with_rng<R: Rng>(
        &mut self,
        stats: &GenerationStats,
        evolution: &EvolutionConfig,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        let pool = self.selection_pool(stats, evolution.uniform_selection_fallback)?;
        let size = self.phenotypes.len();
        let mut offspring = Vec::with_capacity(size);
        while offspring.len() < size {
            let a = pool[rng.gen_range(0..pool.len())];
            let b = pool[rng.gen_range(0..pool.len())];
            offspring.push(self.phenotypes[a].mate_with_rng(
                &self.phenotypes[b],
                evolution.mutation_rate,
                rng,
            ));
        }
        self.phenotypes = offspring;
        self.alive = size;
        self.generation += 1;
        Ok(())
    }
}
