//! Iterated local search driver.
//!
//! A run builds a starting solution, descends to a local optimum, then
//! repeats perturb / repair / accept cycles until its budget is spent.
//! The trajectory restarts from a fresh starting solution when it
//! stagnates and the restart budget allows it.

use crate::config::Config;
use crate::error::SolverError;
use crate::observer::SearchObserver;
use crate::ranking::randomized_order;
use crate::scheme::{PerturbationSelection, Scheme};
use crate::solution_pool::SolutionPool;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;
use std::time::{Duration, Instant};

/// Result of an iterated local search run.
pub struct IteratedLocalSearchOutput<S: Scheme> {
    /// Best solutions found, cheapest first
    pub solution_pool: SolutionPool<S::Solution, S::GlobalCost>,
    /// Number of completed perturbation cycles
    pub number_of_iterations: u64,
    /// Number of restarts from a fresh initial solution
    pub number_of_restarts: u64,
    pub elapsed: Duration,
    /// Elapsed time at which the best cost was first reached
    pub time_to_best: Option<Duration>,
}

/// Bookkeeping of a single run.
struct RunState<S: Scheme> {
    start: Instant,
    solution_pool: SolutionPool<S::Solution, S::GlobalCost>,
    number_of_iterations: u64,
    number_of_restarts: u64,
    best_cost: Option<S::GlobalCost>,
    time_to_best: Option<Duration>,
}

impl<S: Scheme> RunState<S> {
    fn new(config: &Config) -> Self {
        RunState {
            start: Instant::now(),
            solution_pool: SolutionPool::new(config.maximum_size_of_the_solution_pool),
            number_of_iterations: 0,
            number_of_restarts: 0,
            best_cost: None,
            time_to_best: None,
        }
    }

    /// Evaluate `solution`, notify the observer and store it in the pool.
    fn evaluate<O: SearchObserver<S>>(
        &mut self,
        scheme: &S,
        solution: &S::Solution,
        observer: &mut O,
    ) -> S::GlobalCost {
        let cost = scheme.global_cost(solution);
        let elapsed = self.start.elapsed();
        observer.on_evaluation(scheme, solution, &cost, elapsed);

        let improved = match &self.best_cost {
            Some(best) => cost < *best,
            None => true,
        };
        if improved {
            log::debug!(
                "iteration {}: new best {}",
                self.number_of_iterations,
                scheme.format_cost(&cost)
            );
            self.best_cost = Some(cost.clone());
            self.time_to_best = Some(elapsed);
            observer.on_new_best(scheme, solution, &cost, elapsed);
        }

        if self.solution_pool.would_accept(&cost) {
            self.solution_pool.insert(solution.clone(), cost.clone());
        }
        cost
    }
}

/// Iterated local search over a scheme.
pub struct IteratedLocalSearch<S: Scheme> {
    pub scheme: S,
    pub config: Config,
    rng: ChaCha8Rng,
}

impl<S: Scheme> IteratedLocalSearch<S> {
    /// Create a driver, rejecting an invalid configuration up front.
    pub fn new(scheme: S, config: Config) -> Result<Self, SolverError> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(IteratedLocalSearch {
            scheme,
            config,
            rng,
        })
    }

    /// Give the scheme back, e.g. to inspect problem data after a run.
    pub fn into_scheme(self) -> S {
        self.scheme
    }

    /// Run the search until its budget is exhausted.
    pub fn run(&mut self) -> IteratedLocalSearchOutput<S> {
        self.run_with_observer(&mut ())
    }

    /// Run the search, reporting events to `observer`.
    pub fn run_with_observer<O: SearchObserver<S>>(
        &mut self,
        observer: &mut O,
    ) -> IteratedLocalSearchOutput<S> {
        let mut state: RunState<S> = RunState::new(&self.config);
        observer.on_start(&self.scheme);
        log::info!(
            "starting iterated local search (time limit {:.1}s, seed {})",
            self.config.time_limit.as_secs_f64(),
            self.config.seed
        );

        let mut current = self.initial_local_optimum(0);
        let mut trajectory_best = state.evaluate(&self.scheme, &current, observer);
        let mut iterations_without_improvement: u64 = 0;
        let mut restart_pending = false;

        while !self.should_terminate(&state) {
            if restart_pending {
                state.number_of_restarts += 1;
                observer.on_restart(state.number_of_restarts);
                log::debug!(
                    "restart {} after {} iterations",
                    state.number_of_restarts,
                    state.number_of_iterations
                );
                current = self.initial_local_optimum(state.number_of_restarts as usize);
                trajectory_best = state.evaluate(&self.scheme, &current, observer);
                iterations_without_improvement = 0;
                restart_pending = false;
                continue;
            }

            let candidates = self.scheme.perturbations(&current, &mut self.rng);
            if candidates.is_empty() {
                // Nothing left to explore from here.
                if self.can_restart(&state) {
                    restart_pending = true;
                    continue;
                }
                log::debug!("no perturbation available and no restart left");
                break;
            }

            let selected = self.select_perturbations(candidates);
            for perturbation in &selected {
                self.scheme
                    .apply_perturbation(&mut current, perturbation, &mut self.rng);
            }
            if let Some(last) = selected.last() {
                self.scheme
                    .local_search_after(&mut current, &mut self.rng, last);
            }
            state.number_of_iterations += 1;

            let cost = state.evaluate(&self.scheme, &current, observer);
            log::trace!(
                "iteration {}: {} perturbation(s), cost {}",
                state.number_of_iterations,
                selected.len(),
                self.scheme.format_cost(&cost)
            );
            if cost < trajectory_best {
                trajectory_best = cost;
                iterations_without_improvement = 0;
            } else {
                iterations_without_improvement += 1;
            }

            if let Some(limit) = self.config.maximum_number_of_iterations_without_improvement {
                if iterations_without_improvement >= limit && self.can_restart(&state) {
                    restart_pending = true;
                }
            }
        }

        let elapsed = state.start.elapsed();
        observer.on_end(
            state.number_of_iterations,
            state.number_of_restarts,
            elapsed,
        );
        if let Some(best) = &state.best_cost {
            log::info!(
                "search finished: best {}, {} iterations, {} restarts, {:.3}s",
                self.scheme.format_cost(best),
                state.number_of_iterations,
                state.number_of_restarts,
                elapsed.as_secs_f64()
            );
        }

        IteratedLocalSearchOutput {
            solution_pool: state.solution_pool,
            number_of_iterations: state.number_of_iterations,
            number_of_restarts: state.number_of_restarts,
            elapsed,
            time_to_best: state.time_to_best,
        }
    }

    /// Build a starting solution and descend to its local optimum.
    fn initial_local_optimum(&mut self, seed_index: usize) -> S::Solution {
        let mut solution = self.scheme.initial_solution(seed_index, &mut self.rng);
        self.scheme.local_search(&mut solution, &mut self.rng);
        solution
    }

    /// Pick the perturbations applied in this cycle.
    fn select_perturbations(&mut self, candidates: Vec<S::Perturbation>) -> Vec<S::Perturbation> {
        match self.scheme.perturbation_selection() {
            PerturbationSelection::All => candidates,
            PerturbationSelection::Ranked => {
                let costs: Vec<Option<S::GlobalCost>> = candidates
                    .iter()
                    .map(|perturbation| self.scheme.perturbation_cost(perturbation))
                    .collect();
                let order = randomized_order(
                    &mut self.rng,
                    (0..candidates.len()).collect(),
                    |a, b| compare_estimates(&costs[a], &costs[b]),
                );
                order
                    .into_iter()
                    .take(self.config.minimum_number_of_perturbations)
                    .map(|index| candidates[index].clone())
                    .collect()
            }
        }
    }

    fn can_restart(&self, state: &RunState<S>) -> bool {
        match self.config.maximum_number_of_restarts {
            Some(limit) => state.number_of_restarts < limit,
            None => true,
        }
    }

    /// Check the time and iteration budgets.
    fn should_terminate(&self, state: &RunState<S>) -> bool {
        if let Some(limit) = self.config.maximum_number_of_iterations {
            if state.number_of_iterations >= limit {
                return true;
            }
        }

        state.start.elapsed() >= self.config.time_limit
    }
}

/// Moves with an estimate come first, cheapest first.
fn compare_estimates<C: Ord>(a: &Option<C>, b: &Option<C>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
