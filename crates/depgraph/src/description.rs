//! Declarative graph input.
//!
//! Build scripts can describe a graph as data (JSON, TOML, ...) instead of
//! calling [`DependencyGraph::add_vertex`] and [`DependencyGraph::add_edge`]
//! one by one:
//!
//! ```json
//! {
//!   "vertices": ["core", "ui"],
//!   "edges": [{ "parent": "ui", "child": "core" }]
//! }
//! ```

use crate::DependencyGraph;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use tracing::debug;

/// A single `parent -> child` dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeDescription<T> {
    /// The depending vertex.
    pub parent: T,
    /// The vertex `parent` depends on.
    pub child: T,
}

/// Serializable description of a dependency graph.
///
/// Vertices are replayed before edges, both in listed order, so the
/// resulting graph orders vertices exactly as a hand-built one would.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDescription<T> {
    /// Vertices in insertion order. Edge endpoints need not be listed.
    #[serde(default)]
    pub vertices: Vec<T>,
    /// Edges in insertion order.
    #[serde(default)]
    pub edges: Vec<EdgeDescription<T>>,
}

impl<T> Default for GraphDescription<T> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<T> GraphDescription<T>
where
    T: Eq + Hash + Clone,
{
    /// Build a graph that renders vertices through `Display`.
    #[must_use]
    pub fn into_graph(self) -> DependencyGraph<T> {
        let mut graph = DependencyGraph::new();
        self.replay_into(&mut graph);
        graph
    }

    /// Add the described vertices and edges to an existing graph.
    pub fn replay_into<R>(self, graph: &mut DependencyGraph<T, R>) {
        debug!(
            vertices = self.vertices.len(),
            edges = self.edges.len(),
            "Loading graph description"
        );
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for edge in self.edges {
            graph.add_edge(edge.parent, edge.child);
        }
    }
}

impl<T> DependencyGraph<T>
where
    T: Eq + Hash + Clone,
{
    /// Create a graph from a [`GraphDescription`].
    #[must_use]
    pub fn from_description(description: GraphDescription<T>) -> Self {
        description.into_graph()
    }
}

impl<T> From<GraphDescription<T>> for DependencyGraph<T>
where
    T: Eq + Hash + Clone,
{
    fn from(description: GraphDescription<T>) -> Self {
        description.into_graph()
    }
}
