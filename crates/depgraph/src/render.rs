//! Default vertex rendering.

use crate::VertexRenderer;
use std::fmt::Display;

/// Renders vertices through their [`Display`] implementation.
///
/// This is the renderer used by [`DependencyGraph::new`](crate::DependencyGraph::new).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayRenderer;

impl<T: Display> VertexRenderer<T> for DisplayRenderer {
    fn render(&self, vertex: &T) -> String {
        vertex.to_string()
    }
}
