//! Graph container APIs used by `selkie-layout`.
//!
//! A mutable graph of vertices and edges with fixed directedness, per-category
//! process-unique IDs, typed metadata, always-consistent adjacency views and
//! structural change events. Layout algorithms write vertex locations; this
//! crate owns everything structural.

pub mod geom;

mod edge;
mod error;
mod event;
mod graph;
mod ident;
mod metadata;
mod vertex;

pub use edge::Edge;
pub use error::{GraphError, Result};
pub use event::GraphEvent;
pub use graph::{Directedness, Graph};
pub use ident::{EdgeId, GraphId, VertexId};
pub use metadata::{MetadataMap, MetadataValue};
pub use vertex::Vertex;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
