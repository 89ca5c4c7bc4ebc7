//! Engine facade: owns all live simulation state and drives the frame loop.
//!
//! The host collaborator calls [`Engine::tick`] once per frame and reads
//! [`Engine::snapshot`] afterwards; nothing here reaches into host-owned
//! rendering state. All tunables and live counters live on the engine
//! instance — there is no ambient global state.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::metrics::Metrics;
use crate::phenotype::EvalContext;
use crate::population::Population;
use genetix_data::{EngineSnapshot, GenerationStats, Target, Vec2};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Events surfaced by a single tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// The outgoing generation went extinct and was replaced.
    GenerationCompleted {
        generation: u64,
        stats: GenerationStats,
    },
    /// The outgoing generation went extinct and the engine halted
    /// (`continue_after_extinction` disabled). The engine is terminal;
    /// further ticks are no-ops.
    Halted { generation: u64 },
}

/// One simulation instance: configuration, target, population, RNG and
/// previous-generation statistics under a single owner.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    target: Target,
    population: Population,
    rng: ChaCha8Rng,
    previous: GenerationStats,
    metrics: Metrics,
    halted: bool,
}

impl Engine {
    /// Builds an engine from configuration.
    ///
    /// The mutation rate is clamped into `[0, 1]`; everything else must
    /// validate or construction fails. The RNG is seeded from `config.seed`
    /// when present, so equal seeds give identical runs.
    pub fn new(mut config: EngineConfig) -> Result<Self, EngineError> {
        config.sanitize();
        config
            .validate()
            .map_err(|e| EngineError::Configuration(e.to_string()))?;

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let population = Population::generate_with_rng(
            config.population.size,
            config.population.genome_length,
            Vec2::new(config.population.spawn_x, config.population.spawn_y),
            &mut rng,
        );
        Self::assemble(config, population, rng)
    }

    /// Builds an engine around a prebuilt cohort (tests, custom bootstraps).
    ///
    /// The cohort replaces the randomly generated initial population; the
    /// configured population size and genome length must match it.
    pub fn with_population(
        mut config: EngineConfig,
        population: Population,
    ) -> Result<Self, EngineError> {
        config.sanitize();
        config
            .validate()
            .map_err(|e| EngineError::Configuration(e.to_string()))?;
        if population.size() != config.population.size {
            return Err(EngineError::configuration(format!(
                "Population size {} does not match configured size {}",
                population.size(),
                config.population.size
            )));
        }
        if let Some(p) = population.phenotypes.first() {
            if p.genome.len() != config.population.genome_length {
                return Err(EngineError::configuration(format!(
                    "Genome length {} does not match configured length {}",
                    p.genome.len(),
                    config.population.genome_length
                )));
            }
        }

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::assemble(config, population, rng)
    }

    fn assemble(
        config: EngineConfig,
        population: Population,
        rng: ChaCha8Rng,
    ) -> Result<Self, EngineError> {
        let target = Target::new(Vec2::new(config.target.x, config.target.y), config.target.radius);
        tracing::info!(
            population = config.population.size,
            genome_length = config.population.genome_length,
            mutation_rate = config.evolution.mutation_rate,
            "Engine initialized"
        );
        Ok(Self {
            config,
            target,
            population,
            rng,
            previous: GenerationStats::default(),
            metrics: Metrics::new(),
            halted: false,
        })
    }

    /// Advances the simulation by one frame.
    ///
    /// Runs the advance pass, then the evaluate pass. When the alive count
    /// reaches zero the generation statistics are recorded, and the engine
    /// either reproduces into the next generation or halts, depending on
    /// `continue_after_extinction`. Ticking a halted engine is a no-op.
    pub fn tick(&mut self) -> Result<Vec<TickEvent>, EngineError> {
        let mut events = Vec::new();
        if self.halted {
            return Ok(events);
        }

        self.population.advance();
        let ctx = EvalContext {
            target: &self.target,
            arena: &self.config.arena,
        };
        self.population.evaluate(&ctx);
        self.metrics.record_tick(self.population.alive);

        if self.population.is_extinct() {
            let completed = self.population.generation;
            let stats = self.population.generation_stats();
            self.previous = stats;
            tracing::info!(
                generation = completed,
                average = stats.average,
                best = stats.best,
                worst = stats.worst,
                "Generation completed"
            );

            if !self.config.evolution.continue_after_extinction {
                self.halted = true;
                events.push(TickEvent::Halted {
                    generation: completed,
                });
                return Ok(events);
            }

            self.population
                .reproduce_with_rng(&stats, &self.config.evolution, &mut self.rng)?;
            self.metrics.record_generation();
            events.push(TickEvent::GenerationCompleted {
                generation: completed,
                stats,
            });
        }

        Ok(events)
    }

    /// Read-only snapshot for the host's render loop.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            generation: self.population.generation,
            tick: self.metrics.tick_count(),
            alive: self.population.alive,
            population_size: self.population.size(),
            genome_length: self.config.population.genome_length,
            mutation_rate: self.config.evolution.mutation_rate,
            average_fitness: self.previous.average,
            previous_best: self.previous.best,
            previous_worst: self.previous.worst,
            target_position: self.target.position,
            target_radius: self.target.radius,
            positions: self.population.phenotypes.iter().map(|p| p.position).collect(),
            halted: self.halted,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.population.generation
    }

    #[must_use]
    pub fn alive(&self) -> usize {
        self.population.alive
    }

    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    #[must_use]
    pub fn population(&self) -> &Population {
        &self.population
    }

    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
