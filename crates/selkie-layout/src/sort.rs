//! Vertex ordering applied before placement in the grid and spiral layouts,
//! so visual order follows a caller-chosen key.

use selkie_graph::{Graph, MetadataValue, Vertex, VertexId};
use std::cmp::Ordering;

pub enum VertexSorter {
    ByName,
    ById,
    /// Compare by a metadata value; vertices missing the key sort first.
    ByMetadata(String),
    By(Box<dyn Fn(&Vertex, &Vertex) -> Ordering + Send + Sync>),
}

impl VertexSorter {
    /// Stable sort of `ids` by the configured key.
    pub fn sort(&self, graph: &Graph, ids: &mut [VertexId]) {
        ids.sort_by(|&a, &b| {
            let (Some(va), Some(vb)) = (graph.vertex(a), graph.vertex(b)) else {
                return Ordering::Equal;
            };
            self.compare(va, vb)
        });
    }

    fn compare(&self, a: &Vertex, b: &Vertex) -> Ordering {
        match self {
            VertexSorter::ByName => a.name.cmp(&b.name),
            VertexSorter::ById => a.id().cmp(&b.id()),
            VertexSorter::ByMetadata(key) => {
                compare_values(a.metadata.get(key), b.metadata.get(key))
            }
            VertexSorter::By(compare) => compare(a, b),
        }
    }
}

fn compare_values(a: Option<&MetadataValue>, b: Option<&MetadataValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_value(a, b),
    }
}

// Cross-variant comparisons are meaningless and compare equal; numeric
// variants compare numerically across Int/Float.
fn compare_value(a: &MetadataValue, b: &MetadataValue) -> Ordering {
    use MetadataValue::*;
    match (a, b) {
        (Bool(a), Bool(b)) => a.cmp(b),
        (Int(a), Int(b)) => a.cmp(b),
        (Float(a), Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (Int(a), Float(b)) => (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal),
        (Float(a), Int(b)) => a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal),
        (Str(a), Str(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}
