//! Per-invocation layout inputs: target rectangle, configuration, cancellation
//! and the random source.
//!
//! Everything that used to travel out-of-band (vertex subsets, lock flags,
//! selective randomization) is explicit configuration here.

use crate::LayoutEvent;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use selkie_graph::VertexId;
use selkie_graph::geom::{Point, Rect, point};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;

/// Cooperative cancellation flag, polled at iteration boundaries.
///
/// Clones share the flag; any clone can cancel.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.inner.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

/// Which vertices the initial randomization pass may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomizeMode {
    /// Every selected, unlocked vertex.
    #[default]
    All,
    /// Only vertices still at the [`unplaced`] sentinel, so callers can mix
    /// pre-placed and to-be-randomized vertices in one pass.
    UnplacedOnly,
}

/// Sentinel location meaning "this vertex has not been placed yet".
pub fn unplaced() -> Point {
    point(f64::MAX, f64::MAX)
}

pub fn is_unplaced(location: Point) -> bool {
    location.x == f64::MAX && location.y == f64::MAX
}

#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Lay out these vertices only; edges count only when both endpoints are
    /// listed. `None` selects the whole graph.
    pub subset: Option<Vec<VertexId>>,
    /// Locked vertices participate in force and adjacency calculations but
    /// their location is never overwritten.
    pub locked: FxHashSet<VertexId>,
    pub randomize: RandomizeMode,
}

pub struct LayoutContext {
    rect: Rect,
    config: LayoutConfig,
    cancel: CancelToken,
    events: Option<Sender<LayoutEvent>>,
    rng: Box<dyn RngCore + Send>,
}

impl LayoutContext {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            config: LayoutConfig::default(),
            cancel: CancelToken::new(),
            events: None,
            rng: Box::new(StdRng::from_entropy()),
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn with_events(mut self, sender: Sender<LayoutEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    /// Injectable random source, for reproducible layouts in tests.
    pub fn with_rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub(crate) fn set_event_sender(&mut self, sender: Sender<LayoutEvent>) {
        self.events = Some(sender);
    }

    pub(crate) fn send(&self, event: LayoutEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }

    /// Splits the borrow so callers can read configuration while drawing from
    /// the random source.
    pub(crate) fn config_and_rng(&mut self) -> (&LayoutConfig, &mut (dyn RngCore + Send)) {
        (&self.config, self.rng.as_mut())
    }
}
