//! Dependency graph storage using petgraph.
//!
//! Vertices are kept in insertion order (petgraph node indices are dense and
//! assigned in insertion order) and edges are kept in insertion order without
//! deduplication. All ordering work happens on transient copies, see
//! [`crate::reduction`].

use crate::DisplayRenderer;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::{debug, trace};

/// Graph of `parent -> child` dependencies between vertices.
///
/// An edge `(parent, child)` means "parent depends on child": in every order
/// computed from the graph the child is emitted before the parent.
///
/// The renderer `R` is only used to format vertices in cycle messages. Graphs
/// created with [`DependencyGraph::new`] render vertices through `Display`.
pub struct DependencyGraph<T, R = DisplayRenderer> {
    /// Vertices in insertion order, edges in insertion order.
    graph: DiGraph<T, ()>,
    /// Map from vertex to its node index.
    vertex_to_node: HashMap<T, NodeIndex>,
    renderer: R,
}

impl<T> DependencyGraph<T>
where
    T: Eq + Hash + Clone,
{
    /// Create a new empty graph that renders vertices through `Display`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_renderer(DisplayRenderer)
    }
}

impl<T, R> DependencyGraph<T, R>
where
    T: Eq + Hash + Clone,
{
    /// Create a new empty graph with a custom vertex renderer.
    ///
    /// The renderer is any [`VertexRenderer`](crate::VertexRenderer), including
    /// a `Fn(&T) -> String` closure.
    #[must_use]
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            graph: DiGraph::new(),
            vertex_to_node: HashMap::new(),
            renderer,
        }
    }

    /// Add a vertex to the graph.
    ///
    /// Adding a vertex that is already present has no effect.
    pub fn add_vertex(&mut self, vertex: T) {
        self.ensure_vertex(vertex);
    }

    /// Check if a vertex exists in the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.vertex_to_node.contains_key(vertex)
    }

    /// Add a `parent -> child` dependency.
    ///
    /// Both endpoints are added as vertices if they are new, parent first.
    /// `parent` and `child` may be equal, which creates a self loop. Duplicate
    /// edges are stored again; they do not change any computed order.
    pub fn add_edge(&mut self, parent: T, child: T) {
        let from = self.ensure_vertex(parent);
        let to = self.ensure_vertex(child);
        self.graph.add_edge(from, to, ());
        trace!(
            parent = from.index(),
            child = to.index(),
            "Added dependency edge"
        );
    }

    /// Get the number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of stored edges, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterate over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &T> {
        self.graph.node_weights()
    }

    /// Iterate over all `(parent, child)` edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T)> {
        self.graph
            .edge_references()
            .map(|edge| (&self.graph[edge.source()], &self.graph[edge.target()]))
    }

    /// Check if the graph has cycles.
    ///
    /// Self loops count as cycles.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    pub(crate) fn node_index(&self, vertex: &T) -> Option<NodeIndex> {
        self.vertex_to_node.get(vertex).copied()
    }

    pub(crate) fn inner(&self) -> &DiGraph<T, ()> {
        &self.graph
    }

    pub(crate) fn renderer(&self) -> &R {
        &self.renderer
    }

    fn ensure_vertex(&mut self, vertex: T) -> NodeIndex {
        if let Some(&node) = self.vertex_to_node.get(&vertex) {
            return node;
        }

        let node = self.graph.add_node(vertex.clone());
        self.vertex_to_node.insert(vertex, node);
        debug!(index = node.index(), "Added vertex");

        node
    }
}

impl<T> Default for DependencyGraph<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> std::fmt::Debug for DependencyGraph<T, R>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyGraph")
            .field("vertices", &self.graph.node_weights().collect::<Vec<_>>())
            .field("edges", &self.graph.edge_count())
            .finish_non_exhaustive()
    }
}
