//! The contract between the generic search and a concrete problem.
//!
//! A scheme supplies construction, evaluation, local search and
//! perturbation for one problem type. The driver and the population only
//! ever talk to a problem through this trait.

use rand::Rng;
use std::fmt::Debug;

/// How the driver picks perturbations out of the candidates a scheme returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerturbationSelection {
    /// Rank candidates by their provisional cost (random tie-break) and
    /// apply the configured minimum number of them.
    Ranked,
    /// The scheme already curated the list: apply every returned move.
    All,
}

/// A problem plug-in for the iterated local search.
pub trait Scheme {
    /// One candidate solution.
    type Solution: Clone;
    /// A lightweight description of one move away from a solution.
    type Perturbation: Clone;
    /// Totally ordered objective; lower is better.
    type GlobalCost: Ord + Clone + Debug;

    /// The neutral solution of the problem.
    fn empty_solution(&self) -> Self::Solution;

    /// Build a randomized starting solution.
    fn initial_solution<R: Rng>(&mut self, seed_index: usize, rng: &mut R) -> Self::Solution;

    /// Cost of a solution. Must return the same value for the same solution.
    fn global_cost(&self, solution: &Self::Solution) -> Self::GlobalCost;

    /// Improve `solution` in place up to a local optimum.
    fn local_search<R: Rng>(&mut self, solution: &mut Self::Solution, rng: &mut R);

    /// Repair `solution` after `perturbation` has been applied to it.
    fn local_search_after<R: Rng>(
        &mut self,
        solution: &mut Self::Solution,
        rng: &mut R,
        _perturbation: &Self::Perturbation,
    ) {
        self.local_search(solution, rng);
    }

    /// Candidate moves away from `solution`.
    fn perturbations<R: Rng>(
        &mut self,
        solution: &Self::Solution,
        rng: &mut R,
    ) -> Vec<Self::Perturbation>;

    /// Apply `perturbation`; a move that no longer applies leaves the
    /// solution unchanged.
    fn apply_perturbation<R: Rng>(
        &mut self,
        solution: &mut Self::Solution,
        perturbation: &Self::Perturbation,
        rng: &mut R,
    );

    /// Estimated cost after applying `perturbation`, if the scheme has one.
    fn perturbation_cost(&self, _perturbation: &Self::Perturbation) -> Option<Self::GlobalCost> {
        None
    }

    fn perturbation_selection(&self) -> PerturbationSelection {
        PerturbationSelection::Ranked
    }

    /// Human readable rendering of a cost, for reports only.
    fn format_cost(&self, cost: &Self::GlobalCost) -> String {
        format!("{:?}", cost)
    }
}
