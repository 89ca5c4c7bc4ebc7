//! Core data structures for the Genetix simulation.

pub mod genome;
pub mod phenotype;
pub mod stats;
pub mod target;
pub mod vector;
