//! Pure data structures for the Genetix simulation.
//!
//! This crate holds the value types shared across the workspace: vectors,
//! genomes, phenotypes, targets and statistics snapshots. All simulation
//! logic lives in `genetix_core`; everything here is plain, serializable
//! state.

pub mod data;

pub use data::genome::Genome;
pub use data::phenotype::{DeathCause, Phenotype};
pub use data::stats::{EngineSnapshot, GenerationStats};
pub use data::target::Target;
pub use data::vector::{remap, Vec2};
