//! Dependency ordering and cycle detection for ant4eclipse.
//!
//! Build scripts need to know in which order Eclipse projects, plugins and
//! features have to be built. This crate provides the generic ordering core:
//! a [`DependencyGraph`] that accepts vertices and `parent -> child` edges
//! ("parent depends on child") and computes an order in which every child is
//! emitted before the parents that reference it.
//!
//! # Key Types
//!
//! - [`DependencyGraph`]: collects vertices and edges, computes orders and levels
//! - [`VertexRenderer`]: formats vertices inside cycle messages
//! - [`GraphDescription`]: declarative graph input (requires the `serde` feature)
//!
//! # Example
//!
//! ```
//! use ant4eclipse_depgraph::DependencyGraph;
//!
//! let mut graph = DependencyGraph::new();
//! graph.add_edge("app", "core");
//! graph.add_edge("app", "ui");
//! graph.add_edge("ui", "core");
//!
//! let order = graph.calculate_order()?;
//! assert_eq!(order, vec!["core", "ui", "app"]);
//! # Ok::<(), ant4eclipse_depgraph::Error>(())
//! ```

#[cfg(feature = "serde")]
mod description;
mod error;
mod graph;
mod reduction;
mod render;
mod traversal;
mod validation;

#[cfg(feature = "serde")]
pub use description::{EdgeDescription, GraphDescription};
pub use error::{Error, Result};
pub use graph::DependencyGraph;
pub use render::DisplayRenderer;
pub use traversal::{DependencyLevels, DependencyOrder};
pub use validation::ValidationResult;

/// Formats a vertex for inclusion in a cycle description.
///
/// Any `Fn(&T) -> String` closure is a renderer, so custom formatting can be
/// supplied inline:
///
/// ```
/// use ant4eclipse_depgraph::DependencyGraph;
///
/// let mut graph = DependencyGraph::with_renderer(|id: &u32| format!("#{id}"));
/// graph.add_edge(1_u32, 2);
/// graph.add_edge(2, 1);
///
/// let err = graph.calculate_order().unwrap_err();
/// assert_eq!(err.cycle(), Some("#1 -> #2 -> #1"));
/// ```
pub trait VertexRenderer<T> {
    /// Returns the human readable form of `vertex`.
    fn render(&self, vertex: &T) -> String;
}

impl<T, F> VertexRenderer<T> for F
where
    F: Fn(&T) -> String,
{
    fn render(&self, vertex: &T) -> String {
        self(vertex)
    }
}
