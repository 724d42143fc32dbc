//! Eades spring-embedder placement. A future extension point: invoking it
//! fails loudly rather than silently returning an unlaid-out graph.

use crate::common::LayoutOptions;
use crate::context::LayoutContext;
use crate::error::LayoutError;
use crate::{Layout, Outcome};
use selkie_graph::Graph;
use selkie_graph::geom::Rect;

pub struct SpringEmbedderLayout {
    opts: LayoutOptions,
}

impl SpringEmbedderLayout {
    pub fn new() -> Self {
        Self {
            opts: LayoutOptions::new(),
        }
    }

    pub fn set_margin(&mut self, margin: f64) -> Result<(), LayoutError> {
        self.opts.set_margin(margin)
    }
}

impl Default for SpringEmbedderLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout for SpringEmbedderLayout {
    fn margin(&self) -> f64 {
        self.opts.margin
    }

    fn lay_out_core(
        &mut self,
        _graph: &mut Graph,
        _ctx: &mut LayoutContext,
        _rect: Rect,
    ) -> Result<Outcome, LayoutError> {
        Err(LayoutError::Unimplemented("spring embedder"))
    }
}
