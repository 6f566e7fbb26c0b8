//! Hooks called by the driver while a search runs.
//!
//! Bookkeeping such as "when was the best cost found" lives here, outside
//! of the scheme's cost function, which stays a pure evaluator.

use crate::scheme::Scheme;
use std::time::Duration;

/// Receives search events from the iterated local search driver.
///
/// Every hook has an empty default so an observer only implements the
/// events it cares about.
pub trait SearchObserver<S: Scheme> {
    fn on_start(&mut self, _scheme: &S) {}

    /// Called after every cost evaluation made by the driver.
    fn on_evaluation(
        &mut self,
        _scheme: &S,
        _solution: &S::Solution,
        _cost: &S::GlobalCost,
        _elapsed: Duration,
    ) {
    }

    /// Called when a cost strictly better than every previous one is found.
    fn on_new_best(
        &mut self,
        _scheme: &S,
        _solution: &S::Solution,
        _cost: &S::GlobalCost,
        _elapsed: Duration,
    ) {
    }

    fn on_restart(&mut self, _number_of_restarts: u64) {}

    fn on_end(&mut self, _number_of_iterations: u64, _number_of_restarts: u64, _elapsed: Duration) {
    }
}

impl<S: Scheme> SearchObserver<S> for () {}

/// Forwards every event to both observers, first `A` then `B`.
impl<S, A, B> SearchObserver<S> for (A, B)
where
    S: Scheme,
    A: SearchObserver<S>,
    B: SearchObserver<S>,
{
    fn on_start(&mut self, scheme: &S) {
        self.0.on_start(scheme);
        self.1.on_start(scheme);
    }

    fn on_evaluation(
        &mut self,
        scheme: &S,
        solution: &S::Solution,
        cost: &S::GlobalCost,
        elapsed: Duration,
    ) {
        self.0.on_evaluation(scheme, solution, cost, elapsed);
        self.1.on_evaluation(scheme, solution, cost, elapsed);
    }

    fn on_new_best(
        &mut self,
        scheme: &S,
        solution: &S::Solution,
        cost: &S::GlobalCost,
        elapsed: Duration,
    ) {
        self.0.on_new_best(scheme, solution, cost, elapsed);
        self.1.on_new_best(scheme, solution, cost, elapsed);
    }

    fn on_restart(&mut self, number_of_restarts: u64) {
        self.0.on_restart(number_of_restarts);
        self.1.on_restart(number_of_restarts);
    }

    fn on_end(&mut self, number_of_iterations: u64, number_of_restarts: u64, elapsed: Duration) {
        self.0.on_end(number_of_iterations, number_of_restarts, elapsed);
        self.1.on_end(number_of_iterations, number_of_restarts, elapsed);
    }
}

/// Records the best cost seen and the elapsed time at which it was found.
#[derive(Debug, Clone)]
pub struct BestCostTimer<C> {
    pub best_cost: Option<C>,
    pub time_to_best: Option<Duration>,
    pub number_of_evaluations: u64,
}

impl<C> Default for BestCostTimer<C> {
    fn default() -> Self {
        BestCostTimer {
            best_cost: None,
            time_to_best: None,
            number_of_evaluations: 0,
        }
    }
}

impl<C> BestCostTimer<C> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Scheme> SearchObserver<S> for BestCostTimer<S::GlobalCost> {
    fn on_evaluation(
        &mut self,
        _scheme: &S,
        _solution: &S::Solution,
        cost: &S::GlobalCost,
        elapsed: Duration,
    ) {
        self.number_of_evaluations += 1;
        let improved = match &self.best_cost {
            Some(best) => cost < best,
            None => true,
        };
        if improved {
            self.best_cost = Some(cost.clone());
            self.time_to_best = Some(elapsed);
        }
    }
}

/// Logs new best costs and restarts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<S: Scheme> SearchObserver<S> for LogObserver {
    fn on_new_best(
        &mut self,
        scheme: &S,
        _solution: &S::Solution,
        cost: &S::GlobalCost,
        elapsed: Duration,
    ) {
        log::info!(
            "new best {} at {:.3}s",
            scheme.format_cost(cost),
            elapsed.as_secs_f64()
        );
    }

    fn on_restart(&mut self, number_of_restarts: u64) {
        log::debug!("restart #{}", number_of_restarts);
    }
}
