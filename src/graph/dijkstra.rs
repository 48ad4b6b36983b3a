//! Single-source shortest paths (Dijkstra's algorithm).

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexKey};
use crate::heap::IndexedHeap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Shortest-path data for one vertex.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PathInfo<K: VertexKey> {
    /// Minimum sum of edge weights from the source, `f64::INFINITY` when
    /// the vertex is unreachable.
    pub distance: f64,
    /// The vertex that last relaxed this one; `None` for the source and
    /// for unreachable vertices.
    pub predecessor: Option<K>,
}

/// Result of one Dijkstra run: per-vertex distance and predecessor chain.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths<K: VertexKey> {
    source: K,
    paths: BTreeMap<K, PathInfo<K>>,
}

impl<K: VertexKey> ShortestPaths<K> {
    /// The source vertex of the run.
    pub fn source(&self) -> K {
        self.source
    }

    /// Shortest distance from the source, `None` for an unknown vertex.
    pub fn distance(&self, id: &K) -> Option<f64> {
        self.paths.get(id).map(|info| info.distance)
    }

    /// Predecessor on the shortest path to `id`.
    pub fn predecessor(&self, id: &K) -> Option<K> {
        self.paths.get(id).and_then(|info| info.predecessor)
    }

    /// True when `id` is reachable from the source.
    pub fn is_reachable(&self, id: &K) -> bool {
        self.paths
            .get(id)
            .is_some_and(|info| info.distance.is_finite())
    }

    /// The shortest path from the source to `id`, in source-to-target
    /// order. `None` when `id` is unknown or unreachable.
    pub fn path(&self, id: &K) -> Option<Vec<K>> {
        if !self.is_reachable(id) {
            return None;
        }
        let mut path = vec![*id];
        let mut current = *id;
        while let Some(prev) = self.paths.get(&current).and_then(|info| info.predecessor) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Iterate `(vertex, info)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &PathInfo<K>)> {
        self.paths.iter()
    }
}

/// Compute shortest paths from `source` to every vertex of `graph`.
///
/// Weights are non-negative by construction (the loader enforces it),
/// which is what lets an extracted vertex's distance be final. An
/// adjacency entry pointing outside the store is a malformed graph and
/// aborts the run with [`Error::VertexNotFound`].
pub fn shortest_paths<K: VertexKey>(graph: &Graph<K>, source: K) -> Result<ShortestPaths<K>> {
    if !graph.contains(&source) {
        return Err(Error::VertexNotFound {
            vertex: source.to_string(),
        });
    }

    // Seed: source at 0, everything else at the infinity sentinel.
    let mut paths: BTreeMap<K, PathInfo<K>> = BTreeMap::new();
    let mut heap = IndexedHeap::with_capacity(graph.len());
    for vertex in graph.iter() {
        let distance = if vertex.id == source { 0.0 } else { f64::INFINITY };
        paths.insert(
            vertex.id,
            PathInfo {
                distance,
                predecessor: None,
            },
        );
        heap.insert(vertex.id, distance);
    }

    while !heap.is_empty() {
        // Unreachable vertices come out with the infinity sentinel; their
        // adjacency still gets the existence check below, and relaxation is
        // a no-op since infinity + w is never an improvement.
        let (u, dist_u) = heap.pop_min()?;
        let vertex = graph.vertex(&u).ok_or_else(|| Error::VertexNotFound {
            vertex: u.to_string(),
        })?;
        for &(v, weight) in &vertex.edges {
            if !graph.contains(&v) {
                return Err(Error::VertexNotFound {
                    vertex: v.to_string(),
                });
            }
            let candidate = dist_u + weight;
            let info = paths.get_mut(&v).ok_or_else(|| Error::VertexNotFound {
                vertex: v.to_string(),
            })?;
            if candidate < info.distance {
                // Relax: update our table and the heap entry in one step.
                info.distance = candidate;
                info.predecessor = Some(u);
                heap.decrease_key(&v, candidate)?;
            }
        }
    }

    Ok(ShortestPaths { source, paths })
}
