//! Error types for dependency graph operations.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for dependency graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while ordering a dependency graph.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum Error {
    /// The graph contains a directed cycle, so no order exists.
    #[error("Cyclic dependency detected: {cycle}")]
    #[diagnostic(
        code(ant4eclipse_depgraph::cycle),
        help("remove one of the references along the reported path")
    )]
    CyclicDependency {
        /// Rendered path through the cycle, e.g. `"A -> B -> A"`.
        cycle: String,
    },
}

impl Error {
    /// Create a cyclic dependency error from a rendered cycle path.
    pub fn cyclic_dependency(cycle: impl Into<String>) -> Self {
        Self::CyclicDependency {
            cycle: cycle.into(),
        }
    }

    /// The rendered cycle path, if this is a cycle error.
    #[must_use]
    pub fn cycle(&self) -> Option<&str> {
        match self {
            Self::CyclicDependency { cycle } => Some(cycle),
        }
    }
}
