//! # Genetix
//!
//! A genetic-algorithm simulation engine: fixed-length genomes of 2D impulse
//! vectors drive a population of phenotypes toward a spatial target across
//! discrete generations.
//!
//! This facade crate re-exports the workspace members:
//! - [`genetix_data`]: pure, serializable data structures
//! - [`genetix_core`]: the evolutionary engine
//!
//! A host application owns its own frame loop: it calls
//! [`genetix_core::Engine::tick`] once per frame and polls
//! [`genetix_core::Engine::snapshot`] for rendering.

pub use genetix_core::{config, engine, error, genome, metrics, phenotype, population};
pub use genetix_data as data;

/// Commonly used items for hosts and tests.
pub mod prelude {
    pub use genetix_core::config::{
        ArenaConfig, EngineConfig, EvolutionConfig, PopulationConfig, TargetConfig,
    };
    pub use genetix_core::{
        init_logging, Engine, EngineError, EvalContext, GenomeLogic, Metrics, PhenotypeLogic,
        Population, TickEvent,
    };
    pub use genetix_data::{
        remap, DeathCause, EngineSnapshot, GenerationStats, Genome, Phenotype, Target, Vec2,
    };
}
