//! 2-D graph layout algorithms over `selkie-graph`.
//!
//! A layout computes a location inside a caller-supplied rectangle for every
//! vertex of a graph. Four algorithms ship: Fruchterman-Reingold
//! force-directed placement plus deterministic grid, spiral and random
//! placement. All of them honor margins, vertex subsets, vertex locking and
//! cooperative cancellation, and can run synchronously or on a background
//! worker thread.

pub use selkie_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod background;
mod common;
mod context;
mod error;
mod fruchterman_reingold;
mod grid;
mod random;
mod sort;
mod spiral;
mod spring_embedder;
pub mod transform;

pub use background::BackgroundLayout;
pub use common::{margin_rect, randomize_locations, selected_edges, selected_vertices};
pub use context::{
    CancelToken, LayoutConfig, LayoutContext, RandomizeMode, is_unplaced, unplaced,
};
pub use error::LayoutError;
pub use fruchterman_reingold::FruchtermanReingoldLayout;
pub use grid::GridLayout;
pub use random::RandomLayout;
pub use sort::VertexSorter;
pub use spiral::SpiralLayout;
pub use spring_embedder::SpringEmbedderLayout;

use selkie_graph::geom::{Point, Rect};
use selkie_graph::{Graph, VertexId};

/// How a layout run ended. Cancellation is a normal result, not an error;
/// the graph keeps whatever state the last committed iteration produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    /// A layout parameter changed (margin, sorter); any existing layout is
    /// stale and should be recomputed.
    LayoutRequired,
    /// An iteration committed; positions snapshot the selected vertices for
    /// progressive redraw.
    IterationCompleted {
        iteration: usize,
        total: usize,
        positions: Vec<(VertexId, Point)>,
    },
    LayoutFinished(Outcome),
}

/// A layout algorithm. `lay_out` is the entry point; implementations provide
/// `lay_out_core` over the margin-reduced rectangle.
pub trait Layout: Send {
    /// Non-negative inset applied to all four sides of the caller rectangle
    /// before the algorithm runs.
    fn margin(&self) -> f64;

    /// Algorithm-specific placement. `rect` is already margin-reduced and
    /// has positive extent, and the graph has at least one vertex.
    fn lay_out_core(
        &mut self,
        graph: &mut Graph,
        ctx: &mut LayoutContext,
        rect: Rect,
    ) -> Result<Outcome, LayoutError>;

    /// Lays out the graph inside the context rectangle. A graph with no
    /// vertices, or a rectangle that collapses under the margin, is a
    /// completed no-op. On completion the rectangle used is recorded on the
    /// graph so later calls can detect "already laid out".
    fn lay_out(
        &mut self,
        graph: &mut Graph,
        ctx: &mut LayoutContext,
    ) -> Result<Outcome, LayoutError> {
        if graph.vertex_count() == 0 {
            return Ok(Outcome::Completed);
        }
        let Some(rect) = common::margin_rect(ctx.rect(), self.margin()) else {
            return Ok(Outcome::Completed);
        };
        tracing::debug!(vertices = graph.vertex_count(), ?rect, "laying out graph");
        let outcome = self.lay_out_core(graph, ctx, rect)?;
        if outcome == Outcome::Completed {
            graph.set_layout_rect(rect);
        }
        tracing::debug!(?outcome, "layout finished");
        Ok(outcome)
    }

    /// Re-projects every vertex location from `old_rect` space to `new_rect`
    /// space without re-running the algorithm.
    fn transform_layout(&mut self, graph: &mut Graph, old_rect: &Rect, new_rect: &Rect) {
        let t = transform::rect_to_rect(old_rect, new_rect);
        graph.for_each_vertex_mut(|vertex| {
            vertex.location = t.transform_point(vertex.location);
        });
        graph.set_layout_rect(*new_rect);
    }

    /// Hook invoked after an external actor repositions a vertex post-layout,
    /// for algorithms that maintain auxiliary geometry.
    fn on_vertex_move(&mut self, _graph: &mut Graph, _vertex: VertexId) {}
}
