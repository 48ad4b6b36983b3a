//! # gq - Weighted Digraph Query Tool
//!
//! Loads a weighted directed graph from a simple text description and
//! answers queries over it: single-source shortest paths (Dijkstra's
//! algorithm over an indexable binary-heap priority queue), a topological
//! ordering (Kahn's algorithm with cycle detection), and direct-adjacency
//! checks.

pub mod cli;
pub mod error;
pub mod graph;
pub mod heap;

// Re-export commonly used types
pub use error::{Error, Result};
pub use graph::{shortest_paths, topological_sort, Graph, ShortestPaths, TopoOrder, Vertex};
pub use heap::IndexedHeap;
