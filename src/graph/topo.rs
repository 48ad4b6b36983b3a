//! Topological ordering (Kahn's algorithm) with cycle detection.

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexKey};
use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};

/// A total order over the graph's vertices consistent with every edge.
#[derive(Debug, Clone, Serialize)]
pub struct TopoOrder<K: VertexKey> {
    order: Vec<K>,
    positions: BTreeMap<K, usize>,
}

impl<K: VertexKey> TopoOrder<K> {
    /// Vertices in topological order.
    pub fn order(&self) -> &[K] {
        &self.order
    }

    /// 1-based topological index of `id`, assigned in visitation order.
    pub fn position(&self, id: &K) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Number of ordered vertices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the order is empty (the graph had no vertices).
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Order the vertices of `graph` so that every edge u -> v has u before v.
///
/// Indegrees are recomputed from scratch on every call. Returns
/// [`Error::CycleDetected`] when no such order exists; no partial order is
/// exposed. An adjacency entry pointing outside the store aborts with
/// [`Error::VertexNotFound`].
pub fn topological_sort<K: VertexKey>(graph: &Graph<K>) -> Result<TopoOrder<K>> {
    // Zero-init, then one increment per incoming edge.
    let mut indegree: BTreeMap<K, usize> = graph.keys().map(|&id| (id, 0)).collect();
    for vertex in graph.iter() {
        for (to, _) in &vertex.edges {
            let count = indegree.get_mut(to).ok_or_else(|| Error::VertexNotFound {
                vertex: to.to_string(),
            })?;
            *count += 1;
        }
    }

    // FIFO worklist seeded with every indegree-zero vertex, in key order
    // so the produced order is deterministic.
    let mut worklist: VecDeque<K> = indegree
        .iter()
        .filter(|(_, &count)| count == 0)
        .map(|(&id, _)| id)
        .collect();

    let mut order = Vec::with_capacity(graph.len());
    let mut positions = BTreeMap::new();

    while let Some(u) = worklist.pop_front() {
        order.push(u);
        positions.insert(u, order.len());
        let vertex = graph.vertex(&u).ok_or_else(|| Error::VertexNotFound {
            vertex: u.to_string(),
        })?;
        for (v, _) in &vertex.edges {
            let count = indegree.get_mut(v).ok_or_else(|| Error::VertexNotFound {
                vertex: v.to_string(),
            })?;
            *count -= 1;
            if *count == 0 {
                worklist.push_back(*v);
            }
        }
    }

    if order.len() < graph.len() {
        return Err(Error::CycleDetected {
            ordered: order.len(),
            total: graph.len(),
        });
    }
    Ok(TopoOrder { order, positions })
}
