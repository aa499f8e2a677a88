// File: crates/graph-core/src/error.rs
// Summary: Crate-level error taxonomy (configuration, parse, evaluation).

use std::path::PathBuf;

use thiserror::Error;

use crate::expr::ExprError;
use crate::sampler::SampleError;

#[derive(Debug, Error)]
pub enum GraphError {
    /// Invalid session setup (ratio <= 0, non-finite origin, bad config). Fatal for the session.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The text is not an evaluable formula. Scoped to one expression.
    #[error("invalid expression: {0}")]
    Parse(#[from] ExprError),
    /// The formula failed at a sample under the abort policy. Scoped to one expression.
    #[error(transparent)]
    Evaluation(#[from] SampleError),
    #[error("cannot read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GraphError {
    /// Whether the session can keep accepting expressions after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GraphError::Parse(_) | GraphError::Evaluation(_))
    }
}
