//! Shared layout machinery: margin insets, subset selection, randomization
//! and iteration reporting. Algorithm-agnostic; every concrete layout
//! composes these.

use crate::context::{LayoutConfig, LayoutContext, RandomizeMode, is_unplaced};
use crate::error::LayoutError;
use crate::{LayoutEvent, Outcome};
use rand::Rng;
use rustc_hash::FxHashSet;
use selkie_graph::geom::{Rect, point};
use selkie_graph::{EdgeId, Graph, VertexId};
use std::sync::mpsc::Sender;
use std::time::Duration;

/// Animation step count for the lightly-animated deterministic layouts, and
/// the pause between committed steps.
pub(crate) const ANIMATION_ITERATIONS: usize = 10;
pub(crate) const ANIMATION_SLEEP: Duration = Duration::from_millis(10);

/// Margin plus change notification, embedded by every concrete layout.
pub(crate) struct LayoutOptions {
    pub margin: f64,
    change_tx: Option<Sender<LayoutEvent>>,
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self {
            margin: 0.0,
            change_tx: None,
        }
    }

    pub fn set_margin(&mut self, margin: f64) -> Result<(), LayoutError> {
        if !(margin >= 0.0) {
            return Err(LayoutError::InvalidMargin(margin));
        }
        if margin != self.margin {
            self.margin = margin;
            self.notify();
        }
        Ok(())
    }

    pub fn set_change_sender(&mut self, sender: Sender<LayoutEvent>) {
        self.change_tx = Some(sender);
    }

    /// Fires "layout required" to whoever subscribed.
    pub fn notify(&self) {
        if let Some(tx) = &self.change_tx {
            let _ = tx.send(LayoutEvent::LayoutRequired);
        }
    }
}

/// The rectangle left after insetting `margin` from all four sides, or `None`
/// when it collapses.
pub fn margin_rect(rect: Rect, margin: f64) -> Option<Rect> {
    let reduced = rect.inflate(-margin, -margin);
    (reduced.width() > 0.0 && reduced.height() > 0.0).then_some(reduced)
}

/// Vertices participating in this pass, in caller order. Subset entries that
/// no longer belong to the graph are dropped.
pub fn selected_vertices(graph: &Graph, config: &LayoutConfig) -> Vec<VertexId> {
    match &config.subset {
        Some(subset) => subset
            .iter()
            .copied()
            .filter(|&v| graph.contains_vertex(v))
            .collect(),
        None => graph.vertex_ids(),
    }
}

/// Edges with both endpoints selected; everything else is inert.
pub fn selected_edges(graph: &Graph, selected: &[VertexId]) -> Vec<EdgeId> {
    let in_play: FxHashSet<VertexId> = selected.iter().copied().collect();
    graph
        .edges()
        .filter(|e| in_play.contains(&e.back()) && in_play.contains(&e.front()))
        .map(|e| e.id())
        .collect()
}

/// Assigns uniformly random integer coordinates inside `rect` to every
/// eligible selected vertex: unlocked, and under `UnplacedOnly` still at the
/// sentinel location.
pub fn randomize_locations(
    graph: &mut Graph,
    selected: &[VertexId],
    ctx: &mut LayoutContext,
    rect: Rect,
    mode: RandomizeMode,
) {
    let (config, rng) = ctx.config_and_rng();
    for &v in selected {
        if config.locked.contains(&v) {
            continue;
        }
        let Some(vertex) = graph.vertex_mut(v) else {
            continue;
        };
        if mode == RandomizeMode::UnplacedOnly && !is_unplaced(vertex.location) {
            continue;
        }
        vertex.location = point(
            random_coordinate(rng, rect.min_x(), rect.max_x()),
            random_coordinate(rng, rect.min_y(), rect.max_y()),
        );
    }
}

fn random_coordinate(rng: &mut (dyn rand::RngCore + Send), lo: f64, hi: f64) -> f64 {
    let lo = lo.ceil() as i64;
    let hi = (hi.floor() as i64).max(lo);
    rng.gen_range(lo..=hi) as f64
}

/// How many steps an animated layout runs: the full schedule on first layout,
/// a single step once the graph has been laid out before.
pub(crate) fn animation_steps(graph: &Graph) -> usize {
    if graph.layout_rect().is_some() {
        1
    } else {
        ANIMATION_ITERATIONS
    }
}

/// Emits the post-iteration snapshot for progressive redraw.
pub(crate) fn report_iteration(
    graph: &Graph,
    selected: &[VertexId],
    ctx: &LayoutContext,
    iteration: usize,
    total: usize,
) {
    let positions = selected
        .iter()
        .filter_map(|&v| graph.vertex(v).map(|vertex| (v, vertex.location)))
        .collect();
    ctx.send(LayoutEvent::IterationCompleted {
        iteration,
        total,
        positions,
    });
}

/// Shared per-step bookkeeping for the animated deterministic layouts:
/// report, then sleep unless this was the last step.
pub(crate) fn finish_step(
    graph: &Graph,
    selected: &[VertexId],
    ctx: &LayoutContext,
    step: usize,
    steps: usize,
) {
    report_iteration(graph, selected, ctx, step, steps);
    if step + 1 < steps {
        std::thread::sleep(ANIMATION_SLEEP);
    }
}

/// Cancellation poll at an iteration boundary.
pub(crate) fn cancelled(ctx: &LayoutContext) -> Option<Outcome> {
    ctx.is_cancelled().then_some(Outcome::Cancelled)
}
