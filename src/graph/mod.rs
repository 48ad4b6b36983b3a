//! Graph store, loaders, and the two query algorithms.

pub mod dijkstra;
pub mod parse;
pub mod store;
pub mod topo;

pub use dijkstra::{shortest_paths, PathInfo, ShortestPaths};
pub use parse::{load_graph, load_queries, parse_graph, parse_queries};
pub use store::{Graph, Vertex, VertexKey};
pub use topo::{topological_sort, TopoOrder};
