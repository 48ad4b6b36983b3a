//! Text loaders for graph files and adjacency-query files.
//!
//! Graph format: the first non-blank line is the declared vertex count;
//! every following non-blank line defines one vertex as
//! `id neighbor weight neighbor weight ...`. Query format: one
//! `from to` pair per non-blank line.

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use std::fs;
use std::path::Path;

/// Parse a graph description.
///
/// Blank lines are skipped anywhere. Weights must be finite and
/// non-negative (Dijkstra's correctness depends on it). Edges may point at
/// vertices the file never defines; the algorithms report those as
/// [`Error::VertexNotFound`] when they walk the adjacency list.
pub fn parse_graph(text: &str) -> Result<Graph<i64>> {
    let mut lines = numbered_lines(text);

    let (line_no, header) = lines.next().ok_or(Error::Parse {
        line: 1,
        reason: "empty graph file, expected a vertex count".into(),
    })?;
    let declared: usize = header.trim().parse().map_err(|_| Error::Parse {
        line: line_no,
        reason: format!("invalid vertex count {:?}", header.trim()),
    })?;

    let mut graph = Graph::new();
    for (line_no, line) in lines {
        let vertex = parse_vertex_line(line, line_no)?;
        let id = vertex.id;
        if !graph.insert(vertex) {
            return Err(Error::DuplicateVertex {
                vertex: id.to_string(),
                line: line_no,
            });
        }
    }

    if graph.len() != declared {
        return Err(Error::VertexCountMismatch {
            declared,
            actual: graph.len(),
        });
    }
    Ok(graph)
}

/// Parse one `id neighbor weight ...` definition line.
fn parse_vertex_line(line: &str, line_no: usize) -> Result<Vertex<i64>> {
    let mut tokens = line.split_whitespace();

    let id = parse_id(tokens.next().unwrap_or(""), line_no)?;
    let mut vertex = Vertex::new(id);

    while let Some(token) = tokens.next() {
        let neighbor = parse_id(token, line_no)?;
        let weight_token = tokens.next().ok_or(Error::Parse {
            line: line_no,
            reason: format!("neighbor {neighbor} has no edge weight"),
        })?;
        let weight: f64 = weight_token.parse().map_err(|_| Error::Parse {
            line: line_no,
            reason: format!("invalid edge weight {weight_token:?}"),
        })?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight {
                vertex: id.to_string(),
                weight,
                line: line_no,
            });
        }
        vertex.add_edge(neighbor, weight);
    }
    Ok(vertex)
}

/// Parse an adjacency-query file: one `from to` pair per line.
pub fn parse_queries(text: &str) -> Result<Vec<(i64, i64)>> {
    let mut queries = Vec::new();
    for (line_no, line) in numbered_lines(text) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(Error::Parse {
                line: line_no,
                reason: format!("expected two vertex ids, got {}", tokens.len()),
            });
        }
        let from = parse_id(tokens[0], line_no)?;
        let to = parse_id(tokens[1], line_no)?;
        queries.push((from, to));
    }
    Ok(queries)
}

/// Read and parse a graph file.
pub fn load_graph(path: &Path) -> Result<Graph<i64>> {
    parse_graph(&fs::read_to_string(path)?)
}

/// Read and parse an adjacency-query file.
pub fn load_queries(path: &Path) -> Result<Vec<(i64, i64)>> {
    parse_queries(&fs::read_to_string(path)?)
}

fn parse_id(token: &str, line_no: usize) -> Result<i64> {
    token.parse().map_err(|_| Error::Parse {
        line: line_no,
        reason: format!("invalid vertex id {token:?}"),
    })
}

/// Non-blank lines with their 1-based line numbers.
fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}
