//! Asynchronous layout execution on a single worker thread.
//!
//! The worker owns the graph for the duration of the run, so concurrent
//! layouts of one graph are impossible by construction. The caller keeps a
//! cancellation token and an event channel; `join` hands ownership back.

use crate::context::{CancelToken, LayoutContext};
use crate::error::LayoutError;
use crate::{Layout, LayoutEvent, Outcome};
use selkie_graph::Graph;
use std::sync::mpsc::{Receiver, channel};
use std::thread::{self, JoinHandle};

pub struct BackgroundLayout<L: Layout + Send + 'static> {
    handle: JoinHandle<(L, Graph, Result<Outcome, LayoutError>)>,
    cancel: CancelToken,
    events: Receiver<LayoutEvent>,
}

impl<L: Layout + Send + 'static> BackgroundLayout<L> {
    /// Moves the layout and graph onto a worker thread and starts the run.
    /// Iteration-completed events stream to [`events`](Self::events); a
    /// finished event follows the last iteration.
    pub fn spawn(mut layout: L, mut graph: Graph, mut ctx: LayoutContext) -> Self {
        let (tx, rx) = channel();
        ctx.set_event_sender(tx.clone());
        let cancel = ctx.cancel_token();
        let handle = thread::spawn(move || {
            let result = layout.lay_out(&mut graph, &mut ctx);
            if let Ok(outcome) = &result {
                let _ = tx.send(LayoutEvent::LayoutFinished(*outcome));
            }
            (layout, graph, result)
        });
        Self {
            handle,
            cancel,
            events: rx,
        }
    }

    /// Requests cancellation; the worker notices at the next iteration
    /// boundary and leaves the last-committed vertex locations in place.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn events(&self) -> &Receiver<LayoutEvent> {
        &self.events
    }

    /// Blocks until the worker returns, handing back the layout, the graph
    /// and the outcome.
    pub fn join(self) -> (L, Graph, Result<Outcome, LayoutError>) {
        match self.handle.join() {
            Ok(finished) => finished,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}
