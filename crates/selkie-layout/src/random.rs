//! Random placement, re-drawn across the animation steps purely for visual
//! effect; the last draw is final.

use crate::common::{self, LayoutOptions};
use crate::context::{LayoutContext, RandomizeMode};
use crate::error::LayoutError;
use crate::{Layout, LayoutEvent, Outcome};
use selkie_graph::Graph;
use selkie_graph::geom::Rect;
use std::sync::mpsc::Sender;

pub struct RandomLayout {
    opts: LayoutOptions,
}

impl RandomLayout {
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

impl Default for RandomLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout for RandomLayout {
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

        let steps = common::animation_steps(graph);
        for step in 0..steps {
            if let Some(outcome) = common::cancelled(ctx) {
                return Ok(outcome);
            }
            common::randomize_locations(graph, &selected, ctx, rect, RandomizeMode::All);
            common::finish_step(graph, &selected, ctx, step, steps);
        }
        Ok(Outcome::Completed)
    }
}
