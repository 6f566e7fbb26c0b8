//! Solution representation for the Maximum Independent Set problem.

use super::graph::Graph;
use itertools::Itertools;
use std::fmt;

/// A set of vertices, stored as a membership vector.
#[derive(Clone, PartialEq, Eq)]
pub struct MisSolution {
    /// Membership of every vertex
    pub in_set: Vec<bool>,
    /// Number of vertices in the set
    pub size: usize,
}

impl MisSolution {
    /// Create an empty set over `number_of_vertices` vertices.
    pub fn new(number_of_vertices: usize) -> Self {
        MisSolution {
            in_set: vec![false; number_of_vertices],
            size: 0,
        }
    }

    /// Whether `vertex` is outside the set and has no neighbor in it.
    pub fn can_add(&self, graph: &Graph, vertex: usize) -> bool {
        !self.in_set[vertex] && graph.neighbors(vertex).all(|u| !self.in_set[u])
    }

    /// Add `vertex` if that keeps the set independent.
    pub fn add(&mut self, graph: &Graph, vertex: usize) -> bool {
        if !self.can_add(graph, vertex) {
            return false;
        }
        self.in_set[vertex] = true;
        self.size += 1;
        true
    }

    /// Remove `vertex` if it is in the set.
    pub fn remove(&mut self, vertex: usize) -> bool {
        if !self.in_set[vertex] {
            return false;
        }
        self.in_set[vertex] = false;
        self.size -= 1;
        true
    }

    /// Vertices of the set in increasing order.
    pub fn vertices(&self) -> Vec<usize> {
        self.in_set.iter().positions(|&member| member).collect()
    }

    /// Check that no two vertices of the set are adjacent.
    pub fn is_independent(&self, graph: &Graph) -> bool {
        self.vertices()
            .into_iter()
            .all(|v| graph.neighbors(v).all(|u| !self.in_set[u]))
    }
}

impl fmt::Debug for MisSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MisSolution(size {}: {})", self.size, self.vertices().iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> Graph {
        Graph::from_edges(4, vec![(0, 1), (1, 2), (2, 3)])
    }

    #[test]
    fn test_add_respects_independence() {
        let graph = path_graph();
        let mut solution = MisSolution::new(4);

        assert!(solution.add(&graph, 1));
        assert!(!solution.add(&graph, 0));
        assert!(!solution.add(&graph, 1));
        assert!(solution.add(&graph, 3));
        assert_eq!(solution.size, 2);
        assert_eq!(solution.vertices(), vec![1, 3]);
        assert!(solution.is_independent(&graph));
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let graph = path_graph();
        let mut solution = MisSolution::new(4);
        solution.add(&graph, 0);

        assert!(!solution.remove(2));
        assert!(solution.remove(0));
        assert!(!solution.remove(0));
        assert_eq!(solution.size, 0);
    }

    #[test]
    fn test_debug_lists_vertices() {
        let graph = path_graph();
        let mut solution = MisSolution::new(4);
        solution.add(&graph, 0);
        solution.add(&graph, 2);
        assert_eq!(format!("{:?}", solution), "MisSolution(size 2: 0 2)");
    }
}
