//! Error types for the Genetix engine.
//!
//! Per-phenotype deaths (wall hit, exhaustion, target reached) are ordinary
//! state transitions and never surface here. The engine has no internal
//! retries; the only recovery path is the host discarding the instance and
//! constructing a fresh one.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid construction-time configuration. Fatal - the engine cannot run.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The selection pool came up empty during reproduction: every phenotype
    /// received zero weight and the uniform-weight fallback is disabled.
    /// Fatal for the run.
    #[error("Degenerate selection pool in generation {generation}")]
    DegenerateSelection { generation: u64 },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::configuration("population size must be positive");
        assert_eq!(
            err.to_string(),
            "Configuration error: population size must be positive"
        );
    }

    #[test]
    fn test_degenerate_selection_display() {
        let err = EngineError::DegenerateSelection { generation: 7 };
        assert!(err.to_string().contains("generation 7"));
    }
}
