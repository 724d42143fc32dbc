//! Structural change notifications.
//!
//! Fired after the mutation commits, so observers (layout invalidation,
//! incremental indexes) always see post-change state.

use crate::ident::{EdgeId, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphEvent {
    VertexAdded(VertexId),
    VertexRemoved(VertexId),
    EdgeAdded(EdgeId),
    EdgeRemoved(EdgeId),
}

pub(crate) type Listener = Box<dyn Fn(&GraphEvent) + Send>;
