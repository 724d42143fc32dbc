//! Grid placement: vertices at successive interior grid-line intersections,
//! row-major, with the row/column counts chosen to approximate the target
//! rectangle's aspect ratio.

use crate::common::{self, LayoutOptions};
use crate::context::{LayoutConfig, LayoutContext};
use crate::error::LayoutError;
use crate::sort::VertexSorter;
use crate::{Layout, LayoutEvent, Outcome};
use selkie_graph::geom::{Rect, Size, point};
use selkie_graph::{Graph, VertexId};
use std::sync::mpsc::Sender;

pub struct GridLayout {
    opts: LayoutOptions,
    sorter: Option<VertexSorter>,
}

impl GridLayout {
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

    /// Replacing the sorter invalidates any existing layout.
    pub fn set_sorter(&mut self, sorter: Option<VertexSorter>) {
        self.sorter = sorter;
        self.opts.notify();
    }

    pub fn set_change_sender(&mut self, sender: Sender<LayoutEvent>) {
        self.opts.set_change_sender(sender);
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout for GridLayout {
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

        let (columns, rows) = grid_dimensions(selected.len(), &rect);
        let steps = common::animation_steps(graph);
        for step in 0..steps {
            if let Some(outcome) = common::cancelled(ctx) {
                return Ok(outcome);
            }
            // Animation grows the rectangle from its origin to full size.
            let scale = (step + 1) as f64 / steps as f64;
            let step_rect = Rect::new(
                rect.origin,
                Size::new(rect.width() * scale, rect.height() * scale),
            );
            place_on_grid(graph, &selected, ctx.config(), step_rect, columns, rows);
            common::finish_step(graph, &selected, ctx, step, steps);
        }
        Ok(Outcome::Completed)
    }
}

/// Row/column counts satisfying `(columns-1)*(rows-1) >= vertices` while
/// `columns/rows` approximates the rectangle's aspect ratio: the smallest
/// positive integer ceiling root of `C^2 + (-A-1)*C + A*(1-V) = 0`, with rows
/// following from the aspect ratio and bumped until capacity suffices.
pub(crate) fn grid_dimensions(vertices: usize, rect: &Rect) -> (usize, usize) {
    let v = vertices as f64;
    let aspect = rect.width() / rect.height();

    let b = -aspect - 1.0;
    let c = aspect * (1.0 - v);
    let disc = (b * b - 4.0 * c).max(0.0).sqrt();
    let columns = [(-b - disc) / 2.0, (-b + disc) / 2.0]
        .into_iter()
        .map(f64::ceil)
        .filter(|&r| r > 0.0)
        .fold(f64::INFINITY, f64::min)
        .max(2.0) as usize;

    let mut rows = (columns as f64 / aspect).ceil().max(2.0) as usize;
    while (columns - 1) * (rows - 1) < vertices {
        rows += 1;
    }
    (columns, rows)
}

fn place_on_grid(
    graph: &mut Graph,
    selected: &[VertexId],
    config: &LayoutConfig,
    rect: Rect,
    columns: usize,
    rows: usize,
) {
    let column_spacing = rect.width() / columns as f64;
    let row_spacing = rect.height() / rows as f64;
    let usable_columns = columns - 1;

    for (i, &v) in selected.iter().enumerate() {
        // Locked vertices keep their position but still consume a slot.
        if config.locked.contains(&v) {
            continue;
        }
        let column = i % usable_columns;
        let row = i / usable_columns;
        // The leftmost/topmost grid line is skipped; vertices sit one cell in.
        let location = point(
            rect.min_x() + (column + 1) as f64 * column_spacing,
            rect.min_y() + (row + 1) as f64 * row_spacing,
        );
        if let Some(vertex) = graph.vertex_mut(v) {
            vertex.location = location;
        }
    }
}
