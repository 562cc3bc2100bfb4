//! Validation utilities for dependency graphs.

use crate::{DependencyGraph, Error, VertexRenderer};
use std::hash::Hash;

/// Result of graph validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the graph can be ordered.
    pub is_valid: bool,
    /// List of validation errors, if any.
    pub errors: Vec<Error>,
}

impl ValidationResult {
    /// Create a valid result.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: vec![],
        }
    }

    /// Create an invalid result with errors.
    #[must_use]
    pub fn invalid(errors: Vec<Error>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }
}

impl<T, R> DependencyGraph<T, R>
where
    T: Eq + Hash + Clone,
    R: VertexRenderer<T>,
{
    /// Validate the graph structure.
    ///
    /// Unlike [`calculate_order`](Self::calculate_order) this reports problems
    /// as data, with the rendered cycle path attached.
    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        match self.calculate_order().err() {
            None => ValidationResult::valid(),
            Some(err) => ValidationResult::invalid(vec![err]),
        }
    }
}
