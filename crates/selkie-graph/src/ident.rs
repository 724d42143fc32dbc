//! Process-unique identities for graphs, vertices and edges.
//!
//! Each category draws from its own counter, so vertex and edge IDs are
//! independently unique within their category, not globally. IDs are never
//! reused during the process lifetime.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static GRAPH_ID_COUNTER: AtomicU64 = AtomicU64::new(0);
static VERTEX_ID_COUNTER: AtomicU64 = AtomicU64::new(0);
static EDGE_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_id(counter: &AtomicU64) -> u64 {
    counter.fetch_add(1, Ordering::Relaxed) + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        Self(next_id(&GRAPH_ID_COUNTER))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl VertexId {
    pub(crate) fn next() -> Self {
        Self(next_id(&VERTEX_ID_COUNTER))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl EdgeId {
    pub(crate) fn next() -> Self {
        Self(next_id(&EDGE_ID_COUNTER))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}
