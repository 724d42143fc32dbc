use crate::geom::Point;
use crate::ident::VertexId;
use crate::metadata::{MetadataMap, MetadataValue};

/// A vertex owned by exactly one [`Graph`](crate::Graph).
///
/// The `location` is written by layout algorithms; everything else is caller
/// data. Names are not unique.
#[derive(Debug)]
pub struct Vertex {
    id: VertexId,
    pub name: String,
    pub location: Point,
    pub metadata: MetadataMap,
    pub tag: Option<MetadataValue>,
}

impl Vertex {
    pub(crate) fn new(name: impl Into<String>, location: Point) -> Self {
        Self {
            id: VertexId::next(),
            name: name.into(),
            location,
            metadata: MetadataMap::new(),
            tag: None,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Structurally independent copy with a fresh ID and the same name and
    /// location. Metadata values are shallow-cloned when requested.
    pub fn clone_with(&self, copy_metadata: bool, copy_tag: bool) -> Vertex {
        Vertex {
            id: VertexId::next(),
            name: self.name.clone(),
            location: self.location,
            metadata: if copy_metadata {
                self.metadata.clone()
            } else {
                MetadataMap::new()
            },
            tag: if copy_tag { self.tag.clone() } else { None },
        }
    }
}
