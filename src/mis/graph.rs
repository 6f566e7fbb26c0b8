//! Undirected graph of a Maximum Independent Set instance.

use petgraph::graph::{NodeIndex, UnGraph};
use std::fs;
use std::io;
use std::path::Path;

/// An undirected graph with vertices `0..n`.
#[derive(Debug, Clone)]
pub struct Graph {
    graph: UnGraph<(), ()>,
}

impl Graph {
    /// Create a graph with `number_of_vertices` vertices and the given edges.
    ///
    /// Edges with an endpoint out of range, self-loops and repeated edges are
    /// ignored.
    pub fn from_edges<I>(number_of_vertices: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = UnGraph::with_capacity(number_of_vertices, 0);
        for _ in 0..number_of_vertices {
            graph.add_node(());
        }
        for (u, v) in edges {
            if u >= number_of_vertices || v >= number_of_vertices || u == v {
                continue;
            }
            graph.update_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }
        Graph { graph }
    }

    /// Load a graph from a file.
    ///
    /// The first token is the number of vertices, followed by pairs of vertex
    /// indices, one pair per edge. Reading stops at the first token that is
    /// not an integer.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse the text format read by [`Graph::from_file`].
    pub fn parse(content: &str) -> io::Result<Self> {
        let mut tokens = content.split_whitespace();

        let number_of_vertices = tokens
            .next()
            .and_then(|token| token.parse::<usize>().ok())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    "expected the number of vertices as first token",
                )
            })?;

        let mut edges = Vec::new();
        let mut values = tokens.map_while(|token| token.parse::<i64>().ok());
        while let (Some(u), Some(v)) = (values.next(), values.next()) {
            if u < 0 || v < 0 {
                continue;
            }
            edges.push((u as usize, v as usize));
        }

        Ok(Self::from_edges(number_of_vertices, edges))
    }

    pub fn number_of_vertices(&self) -> usize {
        self.graph.node_count()
    }

    pub fn number_of_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// Vertices adjacent to `vertex`.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .neighbors(NodeIndex::new(vertex))
            .map(|node| node.index())
    }

    pub fn are_adjacent(&self, u: usize, v: usize) -> bool {
        self.graph
            .contains_edge(NodeIndex::new(u), NodeIndex::new(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_skips_invalid_edges() {
        let graph = Graph::from_edges(3, vec![(0, 1), (1, 0), (2, 2), (1, 7)]);
        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.are_adjacent(0, 1));
        assert!(graph.are_adjacent(1, 0));
        assert!(!graph.are_adjacent(1, 2));
    }

    #[test]
    fn test_parse() {
        let graph = Graph::parse("4\n0 1\n1 2\n-1 3\n2 3\n").unwrap();
        assert_eq!(graph.number_of_vertices(), 4);
        assert_eq!(graph.number_of_edges(), 3);

        let mut neighbors: Vec<usize> = graph.neighbors(2).collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![1, 3]);
    }

    #[test]
    fn test_parse_stops_at_garbage() {
        let graph = Graph::parse("3 0 1 x 1 2").unwrap();
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn test_parse_rejects_missing_header() {
        let err = Graph::parse("").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
