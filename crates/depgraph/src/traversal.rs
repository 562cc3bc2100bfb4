//! Traversal of dependency graphs and the result shapes produced by ordering.

use crate::DependencyGraph;
use petgraph::visit::Dfs;
use std::hash::Hash;

/// Vertices ordered so that every vertex follows all of its dependencies.
pub type DependencyOrder<T> = Vec<T>;

/// Vertices grouped by reduction pass.
///
/// Each inner vector contains vertices that do not depend on each other and
/// whose dependencies all appear in earlier groups. The outer vector is
/// ordered by dependency level, and within a level vertices keep their
/// insertion order.
pub type DependencyLevels<T> = Vec<Vec<T>>;

impl<T, R> DependencyGraph<T, R>
where
    T: Eq + Hash + Clone,
{
    /// Collect every vertex `vertex` depends on, directly or transitively.
    ///
    /// The result is in vertex insertion order. `vertex` itself is only part
    /// of the result when it lies on a cycle. Unknown vertices have no
    /// dependencies.
    #[must_use]
    pub fn transitive_dependencies(&self, vertex: &T) -> DependencyOrder<T> {
        let Some(start) = self.node_index(vertex) else {
            return Vec::new();
        };
        let graph = self.inner();

        // Seed the walk with the direct children so the start vertex is only
        // reached again through a cycle.
        let mut dfs = Dfs::empty(graph);
        dfs.stack.extend(graph.neighbors(start));

        let mut reached = vec![false; graph.node_count()];
        while let Some(node) = dfs.next(graph) {
            reached[node.index()] = true;
        }

        graph
            .node_indices()
            .filter(|node| reached[node.index()])
            .map(|node| graph[node].clone())
            .collect()
    }
}
