//! Iterated local search scheme for the Maximum Independent Set problem.

use super::graph::Graph;
use super::solution::MisSolution;
use crate::population::Distance;
use crate::scheme::Scheme;
use rand::seq::SliceRandom;
use rand::Rng;

/// A move that adds or removes one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MisPerturbation {
    pub vertex: usize,
    /// `true` to add the vertex, `false` to remove it
    pub add: bool,
    /// Cost of the solution once the move is applied
    pub global_cost: i64,
}

/// Maximum Independent Set as a minimization scheme.
///
/// The cost of a set is minus its size.
pub struct MisScheme<'a> {
    graph: &'a Graph,
}

impl<'a> MisScheme<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        MisScheme { graph }
    }

    pub fn graph(&self) -> &Graph {
        self.graph
    }

    fn shuffled_vertices<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.graph.number_of_vertices()).collect();
        order.shuffle(rng);
        order
    }
}

impl<'a> Scheme for MisScheme<'a> {
    type Solution = MisSolution;
    type Perturbation = MisPerturbation;
    type GlobalCost = i64;

    fn empty_solution(&self) -> MisSolution {
        MisSolution::new(self.graph.number_of_vertices())
    }

    /// Randomized greedy: visit the vertices in random order and keep every
    /// one that has no neighbor in the set yet.
    fn initial_solution<R: Rng>(&mut self, _seed_index: usize, rng: &mut R) -> MisSolution {
        let mut solution = self.empty_solution();
        for vertex in self.shuffled_vertices(rng) {
            solution.add(self.graph, vertex);
        }
        solution
    }

    fn global_cost(&self, solution: &MisSolution) -> i64 {
        penalized_cost(solution)
    }

    /// Add every vertex that fits, visited in random order.
    ///
    /// Adding a vertex never makes another one addable, so one pass reaches
    /// a maximal set.
    fn local_search<R: Rng>(&mut self, solution: &mut MisSolution, rng: &mut R) {
        for vertex in self.shuffled_vertices(rng) {
            solution.add(self.graph, vertex);
        }
    }

    /// One move per vertex of the set: take it out.
    fn perturbations<R: Rng>(&mut self, solution: &MisSolution, _rng: &mut R) -> Vec<MisPerturbation> {
        let global_cost = -(solution.size as i64 - 1);
        solution
            .vertices()
            .into_iter()
            .map(|vertex| MisPerturbation {
                vertex,
                add: false,
                global_cost,
            })
            .collect()
    }

    fn apply_perturbation<R: Rng>(
        &mut self,
        solution: &mut MisSolution,
        perturbation: &MisPerturbation,
        _rng: &mut R,
    ) {
        if perturbation.add {
            solution.add(self.graph, perturbation.vertex);
        } else {
            solution.remove(perturbation.vertex);
        }
    }

    fn perturbation_cost(&self, perturbation: &MisPerturbation) -> Option<i64> {
        Some(perturbation.global_cost)
    }

    /// The set size.
    fn format_cost(&self, cost: &i64) -> String {
        (-cost).to_string()
    }
}

/// Penalized cost of a set for population management: minus its size.
pub fn penalized_cost(solution: &MisSolution) -> i64 {
    -(solution.size as i64)
}

/// Number of vertices in exactly one of the two sets.
pub fn symmetric_difference(a: &MisSolution, b: &MisSolution) -> Distance {
    a.in_set
        .iter()
        .zip(&b.in_set)
        .filter(|(x, y)| x != y)
        .count() as Distance
}
