//! Ordering by iterative adjacency-matrix reduction.
//!
//! Each call builds a dense `N x N` matrix from the stored edges, where cell
//! `(i, j)` is set when vertex `i` depends on vertex `j`. A reduction pass
//! removes every not-yet-emitted vertex whose row is empty and clears its
//! column, which marks it as satisfied for every parent. Vertices removed in
//! the same pass are emitted in insertion order.
//!
//! When a pass finds nothing to remove while some rows are still non-empty,
//! the remaining vertices form (or lead into) a cycle. The reported path
//! starts at the first vertex with a non-empty row and greedily follows the
//! first set cell of each row until a vertex repeats.

use crate::{DependencyGraph, DependencyLevels, DependencyOrder, Error, Result, VertexRenderer};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::hash::Hash;
use tracing::{debug, trace};

const CYCLE_SEPARATOR: &str = " -> ";

impl<T, R> DependencyGraph<T, R>
where
    T: Eq + Hash + Clone,
    R: VertexRenderer<T>,
{
    /// Compute an order in which every vertex follows all of its dependencies.
    ///
    /// Vertices that become free in the same reduction pass keep their
    /// relative insertion order, so the result is deterministic. The stored
    /// vertices and edges are not modified; calling this again after adding
    /// more edges reflects the new state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CyclicDependency`] if the graph contains a cycle. No
    /// partial order is returned in that case.
    pub fn calculate_order(&self) -> Result<DependencyOrder<T>> {
        let levels = self.calculate_levels()?;
        Ok(levels.into_iter().flatten().collect())
    }

    /// Compute the reduction passes as dependency levels.
    ///
    /// Every level holds vertices whose dependencies are all in earlier
    /// levels, so the vertices of one level can be processed in parallel.
    /// Flattening the levels yields exactly [`calculate_order`](Self::calculate_order).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CyclicDependency`] if the graph contains a cycle.
    pub fn calculate_levels(&self) -> Result<DependencyLevels<T>> {
        let graph = self.inner();
        let mut matrix = DependencyMatrix::from_graph(graph);

        match matrix.reduce() {
            Ok(passes) => {
                debug!(
                    vertices = graph.node_count(),
                    levels = passes.len(),
                    "Calculated dependency order"
                );
                Ok(passes
                    .into_iter()
                    .map(|pass| {
                        pass.into_iter()
                            .map(|i| graph[NodeIndex::new(i)].clone())
                            .collect()
                    })
                    .collect())
            }
            Err(path) => {
                let cycle = path
                    .into_iter()
                    .map(|i| self.renderer().render(&graph[NodeIndex::new(i)]))
                    .collect::<Vec<_>>()
                    .join(CYCLE_SEPARATOR);
                debug!(%cycle, "Dependency graph contains a cycle");
                Err(Error::cyclic_dependency(cycle))
            }
        }
    }
}

/// Transient boolean adjacency matrix, row = parent, column = child.
struct DependencyMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl DependencyMatrix {
    fn from_graph<T>(graph: &DiGraph<T, ()>) -> Self {
        let size = graph.node_count();
        let mut matrix = Self {
            size,
            cells: vec![false; size * size],
        };
        // Parallel edges land in the same cell.
        for edge in graph.edge_references() {
            matrix.set(edge.source().index(), edge.target().index());
        }
        matrix
    }

    fn set(&mut self, row: usize, column: usize) {
        self.cells[row * self.size + column] = true;
    }

    fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    fn outdegree(&self, row: usize) -> usize {
        self.row(row).iter().filter(|&&cell| cell).count()
    }

    fn first_child(&self, row: usize) -> Option<usize> {
        self.row(row).iter().position(|&cell| cell)
    }

    fn clear_column(&mut self, column: usize) {
        for row in 0..self.size {
            self.cells[row * self.size + column] = false;
        }
    }

    /// Run reduction passes until every row is empty.
    ///
    /// Returns the vertex indices removed by each pass, or the traced cycle
    /// path if a pass gets stuck.
    fn reduce(&mut self) -> std::result::Result<Vec<Vec<usize>>, Vec<usize>> {
        let mut emitted = vec![false; self.size];
        let mut passes = Vec::new();

        loop {
            let outdegrees: Vec<usize> = (0..self.size).map(|row| self.outdegree(row)).collect();
            let zeros = outdegrees.iter().filter(|&&degree| degree == 0).count();
            let removable: Vec<usize> = (0..self.size)
                .filter(|&i| outdegrees[i] == 0 && !emitted[i])
                .collect();

            if removable.is_empty() {
                if zeros < self.size {
                    return Err(self.trace_cycle(&outdegrees));
                }
                break;
            }

            for &column in &removable {
                self.clear_column(column);
                emitted[column] = true;
            }
            trace!(
                pass = passes.len(),
                removed = removable.len(),
                remaining = self.size - zeros,
                "Reduction pass"
            );
            passes.push(removable);

            if zeros >= self.size {
                break;
            }
        }

        Ok(passes)
    }

    /// Follow first set cells from the first non-empty row until a vertex repeats.
    ///
    /// The path ends with the repeated vertex, e.g. `[x, y, x]`.
    fn trace_cycle(&self, outdegrees: &[usize]) -> Vec<usize> {
        let mut path = Vec::new();
        let Some(mut current) = outdegrees.iter().position(|&degree| degree > 0) else {
            return path;
        };

        let mut visited = vec![false; self.size];
        while !visited[current] {
            visited[current] = true;
            path.push(current);
            // Every remaining child still has a non-empty row, otherwise its
            // column would have been cleared.
            let Some(next) = self.first_child(current) else {
                return path;
            };
            current = next;
        }
        path.push(current);

        path
    }
}
