use crate::graph::Directedness;
use crate::ident::{EdgeId, VertexId};

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {0:?} does not belong to this graph")]
    VertexNotFound(VertexId),

    #[error("edge {0:?} does not belong to this graph")]
    EdgeNotFound(EdgeId),

    #[error("cannot add an edge with directed = {directed} to a {graph:?} graph")]
    IncompatibleDirectedness {
        graph: Directedness,
        directed: bool,
    },
}
