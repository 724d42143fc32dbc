//! Spiral placement: vertices at equal angular increments along an
//! Archimedean spiral bounded by the rectangle's half-size.

use crate::common::{self, LayoutOptions};
use crate::context::{LayoutConfig, LayoutContext};
use crate::error::LayoutError;
use crate::sort::VertexSorter;
use crate::{Layout, LayoutEvent, Outcome};
use selkie_graph::geom::{Rect, point};
use selkie_graph::{Graph, VertexId};
use std::f64::consts::PI;
use std::sync::mpsc::Sender;

/// Total sweep angle of the spiral (three full turns).
const SWEEP: f64 = 6.0 * PI;

pub struct SpiralLayout {
    opts: LayoutOptions,
    sorter: Option<VertexSorter>,
}

impl SpiralLayout {
    pub fn new() -> Self {
        Self {
            opts: LayoutOptions::new(),
            sorter: None,
        }
    }

    pub fn set_margin(&mut self, margin: f64) -> Result<(), LayoutError> {
        self.opts.set_margin(margin)
    }

    pub fn sorter(&self) -> Option<&VertexSorter> {
        self.sorter.as_ref()
    }

    pub fn set_sorter(&mut self, sorter: Option<VertexSorter>) {
        self.sorter = sorter;
        self.opts.notify();
    }

    pub fn set_change_sender(&mut self, sender: Sender<LayoutEvent>) {
        self.opts.set_change_sender(sender);
    }
}

impl Default for SpiralLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout for SpiralLayout {
    fn margin(&self) -> f64 {
        self.opts.margin
    }

    fn lay_out_core(
        &mut self,
        graph: &mut Graph,
        ctx: &mut LayoutContext,
        rect: Rect,
    ) -> Result<Outcome, LayoutError> {
        let mut selected = common::selected_vertices(graph, ctx.config());
        if selected.is_empty() {
            return Ok(Outcome::Completed);
        }
        if let Some(sorter) = &self.sorter {
            sorter.sort(graph, &mut selected);
        }

        let half_size = rect.width().min(rect.height()) / 2.0;
        let steps = common::animation_steps(graph);
        for step in 0..steps {
            if let Some(outcome) = common::cancelled(ctx) {
                return Ok(outcome);
            }
            // The outer radius grows linearly to the final half-size.
            let outer_radius = half_size * (step + 1) as f64 / steps as f64;
            place_on_spiral(graph, &selected, ctx.config(), rect, outer_radius);
            common::finish_step(graph, &selected, ctx, step, steps);
        }
        Ok(Outcome::Completed)
    }
}

fn place_on_spiral(
    graph: &mut Graph,
    selected: &[VertexId],
    config: &LayoutConfig,
    rect: Rect,
    outer_radius: f64,
) {
    let center = rect.center();
    let a = outer_radius / SWEEP;
    let count = selected.len() as f64;

    for (i, &v) in selected.iter().enumerate() {
        if config.locked.contains(&v) {
            continue;
        }
        let theta = SWEEP * (i + 1) as f64 / count;
        let location = point(
            center.x + a * theta * theta.cos(),
            center.y + a * theta * theta.sin(),
        );
        if let Some(vertex) = graph.vertex_mut(v) {
            vertex.location = location;
        }
    }
}
