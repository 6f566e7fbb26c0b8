//! Population management with diversity-aware survivor selection.
//!
//! Members are scored by a biased fitness that mixes their penalized cost
//! rank with their diversity rank, as in the hybrid genetic search of
//! Vidal et al. (2012). When the population grows above its maximum size,
//! members are removed one at a time, clones first, until it is back at
//! its minimum size.

use crate::config::{Config, PopulationParameters};
use crate::error::SolverError;
use crate::ranking::{randomized_order, randomized_ranks};
use rand::seq::{index, SliceRandom};
use rand::Rng;
use std::cmp::Ordering;

/// Distance between two solutions; 0 means the two are clones.
pub type Distance = i64;

/// Computes the penalized cost used to rank members.
pub type PenalizedCostCallback<S, C> = Box<dyn Fn(&S) -> C>;

/// Computes the symmetric distance between two members.
pub type DistanceCallback<S> = Box<dyn Fn(&S, &S) -> Distance>;

/// A member of the population and its selection bookkeeping.
///
/// Everything but `solution` is recomputed by each survivor selection.
#[derive(Debug, Clone)]
pub struct PopulationSolution<S, C> {
    pub solution: S,
    /// Penalized cost, set by the first survivor selection seeing this member
    pub penalized_cost: Option<C>,
    /// Rank by penalized cost, 0 is the cheapest
    pub penalized_cost_rank: usize,
    /// Average distance to the closest other members
    pub diversity: f64,
    /// Rank by diversity, 0 is the most diverse
    pub diversity_rank: usize,
    /// Combined rank score, lower is better
    pub biased_fitness: f64,
    to_remove: bool,
}

impl<S, C> PopulationSolution<S, C> {
    fn new(solution: S) -> Self {
        PopulationSolution {
            solution,
            penalized_cost: None,
            penalized_cost_rank: 0,
            diversity: f64::INFINITY,
            diversity_rank: 0,
            biased_fitness: 0.0,
            to_remove: false,
        }
    }
}

/// A size-bounded set of diverse, high-quality solutions.
pub struct Population<S, C> {
    solutions: Vec<PopulationSolution<S, C>>,
    parameters: PopulationParameters,
    penalized_cost: PenalizedCostCallback<S, C>,
    distance: DistanceCallback<S>,
}

impl<S, C: Ord> Population<S, C> {
    /// Create an empty population.
    pub fn new<F, D>(
        penalized_cost: F,
        distance: D,
        parameters: PopulationParameters,
    ) -> Result<Self, SolverError>
    where
        F: Fn(&S) -> C + 'static,
        D: Fn(&S, &S) -> Distance + 'static,
    {
        parameters.validate()?;
        Ok(Population {
            solutions: Vec::with_capacity(parameters.maximum_size + 1),
            parameters,
            penalized_cost: Box::new(penalized_cost),
            distance: Box::new(distance),
        })
    }

    /// Create an empty population sized by `config.population`.
    pub fn from_config<F, D>(
        penalized_cost: F,
        distance: D,
        config: &Config,
    ) -> Result<Self, SolverError>
    where
        F: Fn(&S) -> C + 'static,
        D: Fn(&S, &S) -> Distance + 'static,
    {
        Population::new(penalized_cost, distance, config.population)
    }

    pub fn parameters(&self) -> &PopulationParameters {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Get a member by index.
    pub fn solution(&self, solution_id: usize) -> &PopulationSolution<S, C> {
        &self.solutions[solution_id]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PopulationSolution<S, C>> {
        self.solutions.iter()
    }

    /// Add a solution, running survivor selection if the population
    /// exceeds its maximum size.
    pub fn add<R: Rng + ?Sized>(&mut self, solution: S, rng: &mut R) {
        self.solutions.push(PopulationSolution::new(solution));
        if self.solutions.len() > self.parameters.maximum_size {
            self.survivor_selection(rng);
        }
    }

    /// Remove members one at a time until the population is back at its
    /// minimum size, then refresh the ranks of the survivors.
    pub fn survivor_selection<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let size = self.solutions.len();

        let costs: Vec<C> = self
            .solutions
            .iter()
            .map(|member| (self.penalized_cost)(&member.solution))
            .collect();
        let cost_order = randomized_order(rng, (0..size).collect(), |a, b| costs[a].cmp(&costs[b]));
        for (member, cost) in self.solutions.iter_mut().zip(costs) {
            member.penalized_cost = Some(cost);
            member.to_remove = false;
        }

        // Computed once; removals only change which rows are read.
        let mut distances = vec![vec![0; size]; size];
        for i in 0..size {
            for j in 0..i {
                let d = (self.distance)(&self.solutions[i].solution, &self.solutions[j].solution);
                distances[i][j] = d;
                distances[j][i] = d;
            }
        }

        let mut active_size = size;
        while active_size > self.parameters.minimum_size {
            self.update_biased_fitness(rng, &cost_order, &distances);
            let worst = self.worst_member(&distances);
            log::trace!(
                "survivor selection: removing member {} (biased fitness {:.3})",
                worst,
                self.solutions[worst].biased_fitness
            );
            self.solutions[worst].to_remove = true;
            active_size -= 1;
        }
        self.update_biased_fitness(rng, &cost_order, &distances);

        self.solutions.retain(|member| !member.to_remove);
        log::debug!(
            "survivor selection: {} -> {} members",
            size,
            self.solutions.len()
        );
    }

    /// Recompute ranks, diversity and biased fitness of the active members.
    fn update_biased_fitness<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        cost_order: &[usize],
        distances: &[Vec<Distance>],
    ) {
        let active: Vec<usize> = (0..self.solutions.len())
            .filter(|&i| !self.solutions[i].to_remove)
            .collect();

        let ranked_by_cost: Vec<usize> = cost_order
            .iter()
            .copied()
            .filter(|&i| !self.solutions[i].to_remove)
            .collect();
        for (rank, &i) in ranked_by_cost.iter().enumerate() {
            self.solutions[i].penalized_cost_rank = rank;
        }

        let k = self.parameters.number_of_closest_neighbors;
        for &i in &active {
            let mut neighbor_distances: Vec<Distance> = active
                .iter()
                .filter(|&&j| j != i)
                .map(|&j| distances[i][j])
                .collect();
            self.solutions[i].diversity = average_of_smallest(&mut neighbor_distances, k);
        }

        let diversity: Vec<f64> = active.iter().map(|&i| self.solutions[i].diversity).collect();
        let diversity_ranks = randomized_ranks(rng, active.len(), |a, b| {
            diversity[b]
                .partial_cmp(&diversity[a])
                .unwrap_or(Ordering::Equal)
        });
        for (&i, rank) in active.iter().zip(diversity_ranks) {
            self.solutions[i].diversity_rank = rank;
        }

        let elite_fraction = self.parameters.number_of_elite_solutions as f64 / active.len() as f64;
        for &i in &active {
            let member = &mut self.solutions[i];
            member.biased_fitness = member.penalized_cost_rank as f64
                + (1.0 - elite_fraction) * member.diversity_rank as f64;
        }
    }

    /// The active member to remove next: clones before everything else,
    /// then the highest biased fitness.
    fn worst_member(&self, distances: &[Vec<Distance>]) -> usize {
        let active: Vec<usize> = (0..self.solutions.len())
            .filter(|&i| !self.solutions[i].to_remove)
            .collect();

        let mut worst: Option<(usize, bool, f64)> = None;
        for &i in &active {
            let is_clone = active.iter().any(|&j| j != i && distances[i][j] == 0);
            let fitness = self.solutions[i].biased_fitness;
            let replace = match worst {
                None => true,
                Some((_, worst_is_clone, worst_fitness)) => {
                    (!worst_is_clone && is_clone)
                        || (worst_is_clone == is_clone && worst_fitness < fitness)
                }
            };
            if replace {
                worst = Some((i, is_clone, fitness));
            }
        }

        // Only called while more than `minimum_size >= 1` members are active.
        worst.map(|(i, _, _)| i).unwrap_or(0)
    }

    /// Indices of two parents, each the winner of a binary tournament
    /// among four distinct members.
    pub fn binary_tournament_ids<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(usize, usize), SolverError> {
        if self.solutions.len() < 4 {
            return Err(SolverError::PopulationTooSmall {
                required: 4,
                actual: self.solutions.len(),
            });
        }

        let mut ids = index::sample(rng, self.solutions.len(), 4).into_vec();
        ids.shuffle(rng);

        Ok((
            self.tournament_winner(ids[0], ids[1]),
            self.tournament_winner(ids[2], ids[3]),
        ))
    }

    /// Two parent solutions from binary tournaments.
    pub fn binary_tournament<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(&S, &S), SolverError> {
        let (first, second) = self.binary_tournament_ids(rng)?;
        Ok((&self.solutions[first].solution, &self.solutions[second].solution))
    }

    /// Index of a single parent from a binary tournament.
    pub fn binary_tournament_single_id<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<usize, SolverError> {
        match self.solutions.len() {
            0 => Err(SolverError::PopulationTooSmall {
                required: 1,
                actual: 0,
            }),
            1 => Ok(0),
            size => {
                let mut ids = index::sample(rng, size, 2).into_vec();
                ids.shuffle(rng);
                Ok(self.tournament_winner(ids[0], ids[1]))
            }
        }
    }

    /// A single parent solution from a binary tournament.
    pub fn binary_tournament_single<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&S, SolverError> {
        let id = self.binary_tournament_single_id(rng)?;
        Ok(&self.solutions[id].solution)
    }

    fn tournament_winner(&self, a: usize, b: usize) -> usize {
        if self.solutions[a].biased_fitness < self.solutions[b].biased_fitness {
            a
        } else {
            b
        }
    }
}

/// Average of the `k` smallest values (or of all of them if fewer).
fn average_of_smallest(values: &mut [Distance], k: usize) -> f64 {
    let count = k.min(values.len());
    if count == 0 {
        return 0.0;
    }
    values.select_nth_unstable(count - 1);
    let sum: Distance = values[..count].iter().sum();
    sum as f64 / count as f64
}
