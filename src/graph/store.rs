//! The graph store: vertices, weighted adjacency lists, lookups.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Bound for vertex identities.
///
/// Graphs in this tool use `i64` keys, but the store and the algorithms
/// are generic over any copyable, totally ordered, hashable, printable
/// key type.
pub trait VertexKey: Copy + Eq + Ord + Hash + Debug + Display {}

impl<T: Copy + Eq + Ord + Hash + Debug + Display> VertexKey for T {}

/// A vertex and its outgoing weighted adjacency list.
#[derive(Debug, Clone, Serialize)]
pub struct Vertex<K: VertexKey> {
    /// Vertex identity. Immutable once set.
    pub id: K,
    /// Outgoing edges as `(neighbor, weight)` pairs, in definition order.
    /// Weights are finite and non-negative.
    pub edges: Vec<(K, f64)>,
}

impl<K: VertexKey> Vertex<K> {
    /// Create a vertex with no outgoing edges.
    pub fn new(id: K) -> Self {
        Self {
            id,
            edges: Vec::new(),
        }
    }

    /// Append an outgoing edge to `neighbor` with `weight`.
    pub fn add_edge(&mut self, neighbor: K, weight: f64) {
        self.edges.push((neighbor, weight));
    }

    /// Weight of the direct edge to `neighbor`, if one exists.
    pub fn edge_weight(&self, neighbor: &K) -> Option<f64> {
        self.edges
            .iter()
            .find(|(to, _)| to == neighbor)
            .map(|&(_, weight)| weight)
    }
}

/// A directed graph: a mapping from vertex identity to its record.
///
/// Built once by the loader and read-only afterwards; the algorithms keep
/// their per-vertex bookkeeping in their own result structures. Iteration
/// is in key order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph<K: VertexKey> {
    vertices: BTreeMap<K, Vertex<K>>,
}

impl<K: VertexKey> Graph<K> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Add a vertex with no edges. Returns false if `id` already exists.
    pub fn add_vertex(&mut self, id: K) -> bool {
        if self.vertices.contains_key(&id) {
            return false;
        }
        self.vertices.insert(id, Vertex::new(id));
        true
    }

    /// Insert a fully built vertex record. Returns false (and leaves the
    /// existing record in place) if the identity is already present.
    pub fn insert(&mut self, vertex: Vertex<K>) -> bool {
        if self.vertices.contains_key(&vertex.id) {
            return false;
        }
        self.vertices.insert(vertex.id, vertex);
        true
    }

    /// True when `id` is a vertex of this graph.
    pub fn contains(&self, id: &K) -> bool {
        self.vertices.contains_key(id)
    }

    /// Look up a vertex record.
    pub fn vertex(&self, id: &K) -> Option<&Vertex<K>> {
        self.vertices.get(id)
    }

    /// Weight of the direct edge `from -> to`.
    ///
    /// `None` when the edge is absent or `from` is not a vertex; an absent
    /// edge is an answer, not an error.
    pub fn edge_weight(&self, from: &K, to: &K) -> Option<f64> {
        self.vertices.get(from)?.edge_weight(to)
    }

    /// Iterate vertices in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex<K>> {
        self.vertices.values()
    }

    /// Iterate vertex identities in key order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.vertices.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph<i64> {
        let mut v1 = Vertex::new(1);
        v1.add_edge(2, 1.0);
        v1.add_edge(3, 5.0);
        let mut graph = Graph::new();
        graph.insert(v1);
        graph.add_vertex(2);
        graph.add_vertex(3);
        graph
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut graph = Graph::new();
        assert!(graph.add_vertex(1));
        assert!(!graph.add_vertex(1));
        assert!(!graph.insert(Vertex::new(1)));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_edge_weight_present_and_absent() {
        let graph = sample();
        assert_eq!(graph.edge_weight(&1, &2), Some(1.0));
        assert_eq!(graph.edge_weight(&1, &3), Some(5.0));
        // Absent edge and absent endpoint are both "no edge", not errors.
        assert_eq!(graph.edge_weight(&2, &1), None);
        assert_eq!(graph.edge_weight(&99, &1), None);
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let mut graph = Graph::new();
        for id in [5, 1, 3] {
            graph.add_vertex(id);
        }
        let keys: Vec<i64> = graph.keys().copied().collect();
        assert_eq!(keys, vec![1, 3, 5]);
    }
}
