//! Fruchterman-Reingold force-directed placement.
//!
//! Repulsive forces between every vertex pair, attractive forces along edges,
//! a linearly-cooling temperature cap on per-iteration movement, and a
//! projection of the unbounded simulation rectangle onto the target rectangle
//! after every iteration. The projection each iteration (not only the last)
//! and the temperature cap together give the algorithm its visible
//! convergence behavior.

use crate::common::{self, LayoutOptions};
use crate::context::LayoutContext;
use crate::error::LayoutError;
use crate::{Layout, LayoutEvent, Outcome, transform};
use rustc_hash::FxHashMap;
use selkie_graph::geom::{Point, Rect, Vector, point, vector};
use selkie_graph::{Graph, VertexId};
use std::sync::mpsc::Sender;

const ITERATIONS: usize = 10;

/// Working state for one vertex, held in a side-table parallel to the
/// selected-vertex list; vertex tags are never touched.
struct WorkRecord {
    /// Unbounded location: where the simulation thinks the vertex is before
    /// projection into the target rectangle.
    pos: Point,
    disp: Vector,
}

pub struct FruchtermanReingoldLayout {
    opts: LayoutOptions,
}

impl FruchtermanReingoldLayout {
    pub fn new() -> Self {
        Self {
            opts: LayoutOptions::new(),
        }
    }

    pub fn set_margin(&mut self, margin: f64) -> Result<(), LayoutError> {
        self.opts.set_margin(margin)
    }

    pub fn set_change_sender(&mut self, sender: Sender<LayoutEvent>) {
        self.opts.set_change_sender(sender);
    }
}

impl Default for FruchtermanReingoldLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout for FruchtermanReingoldLayout {
    fn margin(&self) -> f64 {
        self.opts.margin
    }

    fn lay_out_core(
        &mut self,
        graph: &mut Graph,
        ctx: &mut LayoutContext,
        rect: Rect,
    ) -> Result<Outcome, LayoutError> {
        let selected = common::selected_vertices(graph, ctx.config());
        if selected.is_empty() {
            return Ok(Outcome::Completed);
        }

        if graph.layout_rect().is_none() {
            let mode = ctx.config().randomize;
            common::randomize_locations(graph, &selected, ctx, rect, mode);
        }

        let mut work: Vec<WorkRecord> = selected
            .iter()
            .map(|&v| WorkRecord {
                pos: graph.vertex(v).map(|vx| vx.location).unwrap_or_else(Point::zero),
                disp: Vector::zero(),
            })
            .collect();
        let index: FxHashMap<VertexId, usize> = selected
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();

        // Edges with both endpoints selected, resolved to work-table indexes.
        // A vertex is never attracted to itself, so self-loops drop out here.
        let springs: Vec<(usize, usize)> = common::selected_edges(graph, &selected)
            .into_iter()
            .filter_map(|e| {
                let edge = graph.edge(e)?;
                if edge.is_self_loop() {
                    return None;
                }
                Some((*index.get(&edge.back())?, *index.get(&edge.front())?))
            })
            .collect();

        let k = (rect.width() * rect.height() / selected.len() as f64).sqrt();
        let initial_temperature = rect.width() / 10.0;
        let cooling_step = initial_temperature / ITERATIONS as f64;
        let mut temperature = initial_temperature;

        for iteration in 0..ITERATIONS {
            if let Some(outcome) = common::cancelled(ctx) {
                return Ok(outcome);
            }
            tracing::trace!(iteration, temperature, "force-directed iteration");

            for record in &mut work {
                record.disp = Vector::zero();
            }

            // Repulsion over every ordered pair.
            for v in 0..work.len() {
                for u in 0..work.len() {
                    if v == u {
                        continue;
                    }
                    let mut delta = work[v].pos - work[u].pos;
                    if delta.x == 0.0 && delta.y == 0.0 {
                        // Coincident vertices must separate; nudge instead of
                        // dividing by zero.
                        delta = vector(1.0, 1.0);
                    }
                    let d2 = delta.square_length();
                    work[v].disp += delta * (k * k / d2);
                }
            }

            // Attraction along edges, applied equal and opposite. No
            // attractive adjustment is defined for coincident endpoints.
            for &(v, u) in &springs {
                let delta = work[v].pos - work[u].pos;
                let d = delta.length();
                if d == 0.0 {
                    continue;
                }
                let fa = d * d / k;
                let pull = delta * (fa / d);
                work[v].disp -= pull;
                work[u].disp += pull;
            }

            // Temperature-capped move; track the unbounded bounding box.
            let mut min = point(f64::INFINITY, f64::INFINITY);
            let mut max = point(f64::NEG_INFINITY, f64::NEG_INFINITY);
            for record in &mut work {
                let d = record.disp.length();
                if d != 0.0 {
                    record.pos += record.disp * (d.min(temperature) / d);
                }
                min.x = min.x.min(record.pos.x);
                min.y = min.y.min(record.pos.y);
                max.x = max.x.max(record.pos.x);
                max.y = max.y.max(record.pos.y);
            }

            // Project the unbounded rectangle onto the target rectangle.
            // Locked vertices keep their displayed location but their
            // unbounded location is projected with everyone else's.
            let bounds = Rect::new(min, (max - min).to_size());
            let project = transform::rect_to_rect(&bounds, &rect);
            for (i, &v) in selected.iter().enumerate() {
                let projected = project.transform_point(work[i].pos);
                work[i].pos = projected;
                if !ctx.config().locked.contains(&v) {
                    if let Some(vertex) = graph.vertex_mut(v) {
                        vertex.location = projected;
                    }
                }
            }

            temperature = (temperature - cooling_step).max(0.0);
            common::report_iteration(graph, &selected, ctx, iteration, ITERATIONS);
        }
        Ok(Outcome::Completed)
    }
}
