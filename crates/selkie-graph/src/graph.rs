//! The core `Graph` container: vertex/edge ownership, adjacency views, events.
//!
//! Storage is an arena layout: entries live in insertion-order vectors with an
//! ID index on top; removal swaps the tail entry into the hole and patches the
//! index, so lookup stays O(1) expected.

use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::event::{GraphEvent, Listener};
use crate::geom::{Point, Rect};
use crate::ident::{EdgeId, GraphId, VertexId};
use crate::metadata::{MetadataMap, MetadataValue};
use crate::vertex::Vertex;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Which edge kinds a graph accepts. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Directedness {
    Directed,
    Undirected,
    Mixed,
}

impl Directedness {
    pub fn permits(self, directed: bool) -> bool {
        match self {
            Directedness::Directed => directed,
            Directedness::Undirected => !directed,
            Directedness::Mixed => true,
        }
    }
}

#[derive(Debug)]
struct VertexEntry {
    vertex: Vertex,
    // Adjacency views are maintained eagerly on every edge mutation. An
    // undirected edge is both incoming and outgoing for each endpoint; a
    // self-loop appears once in each list for its single vertex.
    incoming: Vec<EdgeId>,
    outgoing: Vec<EdgeId>,
}

pub struct Graph {
    id: GraphId,
    name: String,
    directedness: Directedness,
    pub metadata: MetadataMap,
    pub tag: Option<MetadataValue>,

    vertices: Vec<VertexEntry>,
    vertex_index: HashMap<VertexId, usize>,

    edges: Vec<Edge>,
    edge_index: HashMap<EdgeId, usize>,

    // Rectangle of the most recent completed layout. Layout algorithms use
    // its presence to detect "already laid out" (skip animation, skip the
    // initial randomize).
    layout_rect: Option<Rect>,

    listeners: Vec<Listener>,
}

impl Graph {
    pub fn new(directedness: Directedness) -> Self {
        Self::with_name(String::new(), directedness)
    }

    pub fn with_name(name: impl Into<String>, directedness: Directedness) -> Self {
        Self {
            id: GraphId::next(),
            name: name.into(),
            directedness,
            metadata: MetadataMap::new(),
            tag: None,
            vertices: Vec::new(),
            vertex_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            layout_rect: None,
            listeners: Vec::new(),
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    /// Observers are called after each structural mutation commits.
    pub fn subscribe(&mut self, listener: impl Fn(&GraphEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&self, event: GraphEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }

    // ---- vertices ----

    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        self.add_vertex_at(name, Point::zero())
    }

    pub fn add_vertex_at(&mut self, name: impl Into<String>, location: Point) -> VertexId {
        self.insert_vertex(Vertex::new(name, location))
    }

    fn insert_vertex(&mut self, vertex: Vertex) -> VertexId {
        let id = vertex.id();
        self.vertex_index.insert(id, self.vertices.len());
        self.vertices.push(VertexEntry {
            vertex,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        });
        self.emit(GraphEvent::VertexAdded(id));
        id
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertex_index.contains_key(&v)
    }

    pub fn vertex(&self, v: VertexId) -> Option<&Vertex> {
        self.entry(v).map(|e| &e.vertex)
    }

    pub fn vertex_mut(&mut self, v: VertexId) -> Option<&mut Vertex> {
        self.entry_mut(v).map(|e| &mut e.vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter().map(|e| &e.vertex)
    }

    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.iter().map(|e| e.vertex.id()).collect()
    }

    pub fn for_each_vertex_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Vertex),
    {
        for entry in &mut self.vertices {
            f(&mut entry.vertex);
        }
    }

    /// Linear lookup; names are not unique.
    pub fn vertices_named(&self, name: &str) -> Vec<VertexId> {
        self.vertices
            .iter()
            .filter(|e| e.vertex.name == name)
            .map(|e| e.vertex.id())
            .collect()
    }

    /// Removes the vertex and every edge incident to it. Edge-removed events
    /// fire before the vertex-removed event.
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<Vertex> {
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotFound(v));
        }
        for edge in self.incident_edges(v) {
            let _ = self.remove_edge(edge);
        }
        let idx = *self
            .vertex_index
            .get(&v)
            .ok_or(GraphError::VertexNotFound(v))?;
        self.vertex_index.remove(&v);
        let entry = self.vertices.swap_remove(idx);
        if let Some(moved) = self.vertices.get(idx) {
            self.vertex_index.insert(moved.vertex.id(), idx);
        }
        self.emit(GraphEvent::VertexRemoved(v));
        Ok(entry.vertex)
    }

    // ---- edges ----

    pub fn add_edge(&mut self, back: VertexId, front: VertexId, directed: bool) -> Result<EdgeId> {
        self.add_edge_named(None, back, front, directed)
    }

    pub fn add_edge_named(
        &mut self,
        name: Option<String>,
        back: VertexId,
        front: VertexId,
        directed: bool,
    ) -> Result<EdgeId> {
        if !self.directedness.permits(directed) {
            return Err(GraphError::IncompatibleDirectedness {
                graph: self.directedness,
                directed,
            });
        }
        if !self.contains_vertex(back) {
            return Err(GraphError::VertexNotFound(back));
        }
        if !self.contains_vertex(front) {
            return Err(GraphError::VertexNotFound(front));
        }
        let edge = Edge::new(name, back, front, directed);
        let id = edge.id();
        self.attach(id, back, front, directed);
        self.edge_index.insert(id, self.edges.len());
        self.edges.push(edge);
        self.emit(GraphEvent::EdgeAdded(id));
        Ok(id)
    }

    fn attach(&mut self, id: EdgeId, back: VertexId, front: VertexId, directed: bool) {
        if directed {
            if let Some(e) = self.entry_mut(back) {
                e.outgoing.push(id);
            }
            if let Some(e) = self.entry_mut(front) {
                e.incoming.push(id);
            }
        } else if back == front {
            if let Some(e) = self.entry_mut(back) {
                e.outgoing.push(id);
                e.incoming.push(id);
            }
        } else {
            for v in [back, front] {
                if let Some(e) = self.entry_mut(v) {
                    e.outgoing.push(id);
                    e.incoming.push(id);
                }
            }
        }
    }

    pub fn contains_edge(&self, e: EdgeId) -> bool {
        self.edge_index.contains_key(&e)
    }

    pub fn edge(&self, e: EdgeId) -> Option<&Edge> {
        let idx = *self.edge_index.get(&e)?;
        self.edges.get(idx)
    }

    pub fn edge_mut(&mut self, e: EdgeId) -> Option<&mut Edge> {
        let idx = *self.edge_index.get(&e)?;
        self.edges.get_mut(idx)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.iter().map(|e| e.id()).collect()
    }

    pub fn edges_named(&self, name: &str) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|e| e.name.as_deref() == Some(name))
            .map(|e| e.id())
            .collect()
    }

    /// All edges joining `v` and `w` in either orientation. With `v == w`
    /// this returns the self-loops at `v`, each once.
    pub fn connecting_edges(&self, v: VertexId, w: VertexId) -> Vec<EdgeId> {
        self.incident_edges(v)
            .into_iter()
            .filter(|&eid| {
                self.edge(eid)
                    .and_then(|e| e.other_endpoint(v))
                    .is_some_and(|u| u == w)
            })
            .collect()
    }

    pub fn remove_edge(&mut self, e: EdgeId) -> Result<Edge> {
        let idx = *self.edge_index.get(&e).ok_or(GraphError::EdgeNotFound(e))?;
        let (back, front) = self.edges[idx].endpoints();
        for v in [back, front] {
            if let Some(entry) = self.entry_mut(v) {
                entry.incoming.retain(|&other| other != e);
                entry.outgoing.retain(|&other| other != e);
            }
        }
        self.edge_index.remove(&e);
        let edge = self.edges.swap_remove(idx);
        if let Some(moved) = self.edges.get(idx) {
            self.edge_index.insert(moved.id(), idx);
        }
        self.emit(GraphEvent::EdgeRemoved(e));
        Ok(edge)
    }

    /// Removes all edges, then all vertices. Events fire per removal.
    pub fn clear(&mut self) {
        for e in self.edge_ids() {
            let _ = self.remove_edge(e);
        }
        for v in self.vertex_ids() {
            let _ = self.remove_vertex(v);
        }
    }

    // ---- adjacency views ----

    pub fn incoming_edges(&self, v: VertexId) -> &[EdgeId] {
        self.entry(v).map(|e| e.incoming.as_slice()).unwrap_or(&[])
    }

    pub fn outgoing_edges(&self, v: VertexId) -> &[EdgeId] {
        self.entry(v).map(|e| e.outgoing.as_slice()).unwrap_or(&[])
    }

    /// Union of incoming and outgoing edges; every incident edge appears
    /// exactly once regardless of direction or self-loops.
    pub fn incident_edges(&self, v: VertexId) -> Vec<EdgeId> {
        let Some(entry) = self.entry(v) else {
            return Vec::new();
        };
        let mut out = entry.outgoing.clone();
        for &e in &entry.incoming {
            if !out.contains(&e) {
                out.push(e);
            }
        }
        out
    }

    pub fn degree(&self, v: VertexId) -> usize {
        self.incident_edges(v).len()
    }

    /// Deduplicated: parallel edges to the same neighbor count once. A
    /// self-loop makes a vertex its own predecessor.
    pub fn predecessors(&self, v: VertexId) -> Vec<VertexId> {
        self.adjacent_over(v, |entry| &entry.incoming)
    }

    pub fn successors(&self, v: VertexId) -> Vec<VertexId> {
        self.adjacent_over(v, |entry| &entry.outgoing)
    }

    pub fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        let mut out = Vec::new();
        for eid in self.incident_edges(v) {
            if let Some(u) = self.edge(eid).and_then(|e| e.other_endpoint(v)) {
                if !out.contains(&u) {
                    out.push(u);
                }
            }
        }
        out
    }

    fn adjacent_over<F>(&self, v: VertexId, pick: F) -> Vec<VertexId>
    where
        F: Fn(&VertexEntry) -> &Vec<EdgeId>,
    {
        let Some(entry) = self.entry(v) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for &eid in pick(entry) {
            if let Some(u) = self.edge(eid).and_then(|e| e.other_endpoint(v)) {
                if !out.contains(&u) {
                    out.push(u);
                }
            }
        }
        out
    }

    // ---- layout bookkeeping ----

    pub fn layout_rect(&self) -> Option<Rect> {
        self.layout_rect
    }

    pub fn set_layout_rect(&mut self, rect: Rect) {
        self.layout_rect = Some(rect);
    }

    pub fn clear_layout_rect(&mut self) {
        self.layout_rect = None;
    }

    // ---- clone ----

    /// Structurally independent copy: fresh graph/vertex/edge IDs, same
    /// names, locations, directedness and topology. Listeners are not
    /// carried over. The recorded layout rectangle travels with metadata.
    pub fn clone_graph(&self, copy_metadata: bool, copy_tag: bool) -> Graph {
        let mut out = Graph::with_name(self.name.clone(), self.directedness);
        if copy_metadata {
            out.metadata = self.metadata.clone();
            out.layout_rect = self.layout_rect;
        }
        if copy_tag {
            out.tag = self.tag.clone();
        }

        let mut ids: HashMap<VertexId, VertexId> = HashMap::default();
        for entry in &self.vertices {
            let clone = entry.vertex.clone_with(copy_metadata, copy_tag);
            ids.insert(entry.vertex.id(), clone.id());
            out.insert_vertex(clone);
        }
        for edge in &self.edges {
            let (Some(&back), Some(&front)) = (ids.get(&edge.back()), ids.get(&edge.front()))
            else {
                continue;
            };
            let clone = edge.clone_with(back, front, copy_metadata, copy_tag);
            let id = clone.id();
            out.attach(id, back, front, clone.is_directed());
            out.edge_index.insert(id, out.edges.len());
            out.edges.push(clone);
        }
        out
    }

    // ---- internal ----

    fn entry(&self, v: VertexId) -> Option<&VertexEntry> {
        let idx = *self.vertex_index.get(&v)?;
        self.vertices.get(idx)
    }

    fn entry_mut(&mut self, v: VertexId) -> Option<&mut VertexEntry> {
        let idx = *self.vertex_index.get(&v)?;
        self.vertices.get_mut(idx)
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("directedness", &self.directedness)
            .field("vertices", &self.vertices.len())
            .field("edges", &self.edges.len())
            .finish()
    }
}
