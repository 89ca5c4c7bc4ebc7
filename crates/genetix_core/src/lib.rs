//! # Genetix Core
//!
//! The evolutionary engine for Genetix - a genetic-algorithm simulation in
//! which a population of phenotypes evolves toward a spatial target.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Genome generation and averaging crossover with per-gene mutation
//! - Phenotype kinematics driven by genome playback
//! - Boundary handling, fitness scoring and death bookkeeping
//! - Fitness-proportionate selection and generation replacement
//! - Configuration validation and structured logging
//!
//! ## Architecture
//!
//! Data structures live in `genetix_data`; logic is attached via traits
//! (`GenomeLogic`, `PhenotypeLogic`) and owned aggregates (`Population`,
//! `Engine`). The engine is single-threaded and frame-driven: the host calls
//! [`Engine::tick`] once per frame and polls [`Engine::snapshot`] afterwards.
//!
//! ## Example
//!
//! ```
//! use genetix_core::config::EngineConfig;
//! use genetix_core::engine::Engine;
//!
//! let mut config = EngineConfig::default();
//! config.population.size = 20;
//! config.population.genome_length = 50;
//! config.seed = Some(42);
//!
//! let mut engine = Engine::new(config).expect("valid config");
//! for _ in 0..100 {
//!     engine.tick().expect("tick");
//! }
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.population_size, 20);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Engine facade: owns all live state, drives ticks, exposes the read model
pub mod engine;
/// Error types for engine construction and reproduction
pub mod error;
/// Genome generation and crossover
pub mod genome;
/// Structured logging and tick/generation counters
pub mod metrics;
/// Phenotype kinematics, evaluation and mating
pub mod phenotype;
/// Population-level passes, statistics and the reproduction protocol
pub mod population;

pub use engine::{Engine, TickEvent};
pub use error::{EngineError, Result};
pub use genome::GenomeLogic;
pub use metrics::{init_logging, Metrics};
pub use phenotype::{EvalContext, PhenotypeLogic};
pub use population::Population;
