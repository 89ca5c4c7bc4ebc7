//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! a `config.toml` file. All parameters are provided once at construction,
//! validated, then immutable for the run.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [arena]
//! width = 1500.0
//! height = 500.0
//! wrap_x = false
//! wrap_y = false
//!
//! [population]
//! size = 500
//! genome_length = 1000
//! spawn_x = 200.0
//! spawn_y = 250.0
//!
//! [evolution]
//! mutation_rate = 0.01
//!
//! [target]
//! x = 1250.0
//! y = 250.0
//! radius = 100.0
//! ```

use serde::{Deserialize, Serialize};

/// Arena dimensions and per-axis boundary policy.
///
/// With wrapping enabled on an axis, a phenotype leaving one edge re-enters
/// at the opposite edge; otherwise leaving the arena on that axis is lethal.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
    pub wrap_x: bool,
    pub wrap_y: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 1500.0,
            height: 500.0,
            wrap_x: false,
            wrap_y: false,
        }
    }
}

/// Population shape: cohort size, genome length and spawn point.
///
/// Both size and genome length are fixed for the lifetime of the run; every
/// generation has exactly `size` phenotypes with `genome_length` genes each.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PopulationConfig {
    pub size: usize,
    pub genome_length: usize,
    pub spawn_x: f64,
    pub spawn_y: f64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: 500,
            genome_length: 1000,
            spawn_x: 200.0,
            spawn_y: 250.0,
        }
    }
}

/// Reproduction tunables.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EvolutionConfig {
    /// Per-gene probability of mutation during crossover. Out-of-range
    /// values are clamped into `[0, 1]`, never rejected.
    pub mutation_rate: f64,
    /// When false, the engine halts after the first extinction instead of
    /// building a new generation.
    pub continue_after_extinction: bool,
    /// When the whole generation shares one fitness value the proportional
    /// weighting degenerates; with this flag set every phenotype gets equal
    /// weight, otherwise reproduction fails.
    pub uniform_selection_fallback: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.01,
            continue_after_extinction: true,
            uniform_selection_fallback: true,
        }
    }
}

/// Target placement and capture radius.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TargetConfig {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            x: 1250.0,
            y: 250.0,
            radius: 100.0,
        }
    }
}

/// Complete engine configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    pub arena: ArenaConfig,
    pub population: PopulationConfig,
    pub evolution: EvolutionConfig,
    pub target: TargetConfig,
    /// Seed for the simulation RNG; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Clamps recoverable out-of-range values into their legal range.
    ///
    /// Only the mutation rate is recoverable; everything else is rejected by
    /// [`EngineConfig::validate`].
    pub fn sanitize(&mut self) {
        if !(0.0..=1.0).contains(&self.evolution.mutation_rate) {
            let clamped = self.evolution.mutation_rate.clamp(0.0, 1.0);
            tracing::warn!(
                requested = self.evolution.mutation_rate,
                clamped = clamped,
                "Mutation rate out of range, clamping"
            );
            self.evolution.mutation_rate = clamped;
        }
    }

    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.arena.width > 0.0, "Arena width must be positive");
        anyhow::ensure!(self.arena.height > 0.0, "Arena height must be positive");
        anyhow::ensure!(
            self.arena.width.is_finite() && self.arena.height.is_finite(),
            "Arena dimensions must be finite"
        );

        anyhow::ensure!(self.population.size > 0, "Population size must be positive");
        anyhow::ensure!(
            self.population.genome_length > 0,
            "Genome length must be positive"
        );
        anyhow::ensure!(
            self.population.spawn_x.is_finite() && self.population.spawn_y.is_finite(),
            "Spawn position must be finite"
        );

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.evolution.mutation_rate),
            "Mutation rate must be in [0.0, 1.0]"
        );

        anyhow::ensure!(self.target.radius > 0.0, "Target radius must be positive");
        anyhow::ensure!(
            self.target.x.is_finite() && self.target.y.is_finite(),
            "Target position must be finite"
        );

        Ok(())
    }

    /// Loads and validates configuration from TOML content.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let mut config = toml::from_str::<Self>(content)?;
        config.sanitize();
        config.validate()?;
        Ok(config)
    }
}
