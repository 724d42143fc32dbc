use crate::ident::{EdgeId, VertexId};
use crate::metadata::{MetadataMap, MetadataValue};

/// An edge connecting two vertices of the same graph.
///
/// Direction is fixed at creation. For a directed edge, `back` is the tail
/// and `front` the head. Edges never exist detached from two concrete
/// vertices.
#[derive(Debug)]
pub struct Edge {
    id: EdgeId,
    pub name: Option<String>,
    back: VertexId,
    front: VertexId,
    directed: bool,
    pub metadata: MetadataMap,
    pub tag: Option<MetadataValue>,
}

impl Edge {
    pub(crate) fn new(
        name: Option<String>,
        back: VertexId,
        front: VertexId,
        directed: bool,
    ) -> Self {
        Self {
            id: EdgeId::next(),
            name,
            back,
            front,
            directed,
            metadata: MetadataMap::new(),
            tag: None,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Tail vertex when directed; an arbitrary but stable endpoint otherwise.
    pub fn back(&self) -> VertexId {
        self.back
    }

    /// Head vertex when directed.
    pub fn front(&self) -> VertexId {
        self.front
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.back, self.front)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_self_loop(&self) -> bool {
        self.back == self.front
    }

    /// The endpoint opposite `v`, or `None` if `v` is not an endpoint.
    /// For a self-loop the opposite endpoint is the vertex itself.
    pub fn other_endpoint(&self, v: VertexId) -> Option<VertexId> {
        if v == self.back {
            Some(self.front)
        } else if v == self.front {
            Some(self.back)
        } else {
            None
        }
    }

    /// Whether this edge runs alongside `other`.
    ///
    /// Two directed edges are parallel iff they share the same (back, front)
    /// pair. If either edge is undirected, orientation is meaningless and the
    /// edges are parallel iff they join the same unordered pair.
    pub fn is_parallel_to(&self, other: &Edge) -> bool {
        if self.directed && other.directed {
            self.back == other.back && self.front == other.front
        } else {
            (self.back == other.back && self.front == other.front)
                || (self.back == other.front && self.front == other.back)
        }
    }

    /// Whether this edge runs opposite `other`: both directed, between the
    /// same pair, with reversed orientation. Never true when either edge is
    /// undirected.
    pub fn is_antiparallel_to(&self, other: &Edge) -> bool {
        self.directed
            && other.directed
            && self.back == other.front
            && self.front == other.back
    }

    pub(crate) fn clone_with(
        &self,
        back: VertexId,
        front: VertexId,
        copy_metadata: bool,
        copy_tag: bool,
    ) -> Edge {
        Edge {
            id: EdgeId::next(),
            name: self.name.clone(),
            back,
            front,
            directed: self.directed,
            metadata: if copy_metadata {
                self.metadata.clone()
            } else {
                MetadataMap::new()
            },
            tag: if copy_tag { self.tag.clone() } else { None },
        }
    }
}
