//! Configuration parameters for the iterated local search and the population.

use crate::error::SolverError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration settings for the iterated local search driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Wall-clock budget of a run, checked between cycles
    pub time_limit: Duration,
    /// Maximum number of perturbation cycles (`None` = unbounded)
    pub maximum_number_of_iterations: Option<u64>,
    /// Number of perturbations applied in each cycle
    pub minimum_number_of_perturbations: usize,
    /// Maximum number of restarts from a fresh initial solution (`None` = unbounded)
    pub maximum_number_of_restarts: Option<u64>,
    /// Cycles without improving the best cost of the current trajectory
    /// before a restart is triggered (`None` = restart only when no
    /// perturbation is available)
    pub maximum_number_of_iterations_without_improvement: Option<u64>,
    /// Capacity of the solution pool
    pub maximum_size_of_the_solution_pool: usize,
    /// Seed of the random stream
    pub seed: u64,
    /// Parameters of the population manager
    pub population: PopulationParameters,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_limit: Duration::from_secs(10),
            maximum_number_of_iterations: None,
            minimum_number_of_perturbations: 1,
            maximum_number_of_restarts: None,
            maximum_number_of_iterations_without_improvement: None,
            maximum_size_of_the_solution_pool: 1,
            seed: 0,
            population: PopulationParameters::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the time limit.
    pub fn with_time_limit(mut self, duration: Duration) -> Self {
        self.time_limit = duration;
        self
    }

    /// Set the maximum number of iterations.
    pub fn with_maximum_number_of_iterations(mut self, iterations: u64) -> Self {
        self.maximum_number_of_iterations = Some(iterations);
        self
    }

    /// Set the number of perturbations applied per cycle.
    pub fn with_minimum_number_of_perturbations(mut self, n: usize) -> Self {
        self.minimum_number_of_perturbations = n;
        self
    }

    /// Set the maximum number of restarts.
    pub fn with_maximum_number_of_restarts(mut self, restarts: u64) -> Self {
        self.maximum_number_of_restarts = Some(restarts);
        self
    }

    /// Set the stagnation threshold that triggers a restart.
    pub fn with_maximum_number_of_iterations_without_improvement(mut self, iterations: u64) -> Self {
        self.maximum_number_of_iterations_without_improvement = Some(iterations);
        self
    }

    /// Set the capacity of the solution pool.
    pub fn with_maximum_size_of_the_solution_pool(mut self, size: usize) -> Self {
        self.maximum_size_of_the_solution_pool = size;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the population parameters.
    pub fn with_population(mut self, population: PopulationParameters) -> Self {
        self.population = population;
        self
    }

    /// Reject budgets a run cannot start with.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.time_limit.is_zero() {
            return Err(SolverError::invalid_config("time limit must be positive"));
        }
        if self.minimum_number_of_perturbations == 0 {
            return Err(SolverError::invalid_config(
                "minimum number of perturbations must be at least 1",
            ));
        }
        if self.maximum_size_of_the_solution_pool == 0 {
            return Err(SolverError::invalid_config(
                "maximum size of the solution pool must be at least 1",
            ));
        }
        if self.maximum_number_of_iterations_without_improvement == Some(0) {
            return Err(SolverError::invalid_config(
                "iterations without improvement before a restart must be at least 1",
            ));
        }
        self.population.validate()
    }
}

/// Parameters of the population manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationParameters {
    /// Size the population is pruned back to
    pub minimum_size: usize,
    /// Size above which survivor selection is triggered
    pub maximum_size: usize,
    /// Number of nearest neighbors averaged into the diversity contribution
    pub number_of_closest_neighbors: usize,
    /// Number of elite solutions protected by the biased fitness
    pub number_of_elite_solutions: usize,
}

impl Default for PopulationParameters {
    fn default() -> Self {
        PopulationParameters {
            minimum_size: 25,
            maximum_size: 25 + 40,
            number_of_closest_neighbors: 3,
            number_of_elite_solutions: 8,
        }
    }
}

impl PopulationParameters {
    pub fn new() -> Self {
        PopulationParameters::default()
    }

    pub fn with_minimum_size(mut self, size: usize) -> Self {
        self.minimum_size = size;
        self
    }

    pub fn with_maximum_size(mut self, size: usize) -> Self {
        self.maximum_size = size;
        self
    }

    pub fn with_number_of_closest_neighbors(mut self, n: usize) -> Self {
        self.number_of_closest_neighbors = n;
        self
    }

    pub fn with_number_of_elite_solutions(mut self, n: usize) -> Self {
        self.number_of_elite_solutions = n;
        self
    }

    pub fn validate(&self) -> Result<(), SolverError> {
        if self.minimum_size == 0 {
            return Err(SolverError::invalid_config(
                "population minimum size must be at least 1",
            ));
        }
        if self.maximum_size < self.minimum_size {
            return Err(SolverError::invalid_config(format!(
                "population maximum size {} is below its minimum size {}",
                self.maximum_size, self.minimum_size
            )));
        }
        if self.number_of_closest_neighbors == 0 {
            return Err(SolverError::invalid_config(
                "number of closest neighbors must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Convert a command-line time limit in seconds.
pub fn time_limit(seconds: f64) -> Result<Duration, SolverError> {
    if seconds <= 0.0 {
        return Err(SolverError::invalid_config(format!(
            "time limit must be a positive number of seconds, got {}",
            seconds
        )));
    }
    Duration::try_from_secs_f64(seconds).map_err(|e| {
        SolverError::invalid_config(format!("invalid time limit {}: {}", seconds, e))
    })
}

/// Convert a command-line counter where `-1` means unbounded.
pub fn counter_limit(value: i64) -> Result<Option<u64>, SolverError> {
    match value {
        -1 => Ok(None),
        v if v < 0 => Err(SolverError::invalid_config(format!(
            "counter must be -1 (unbounded) or non-negative, got {}",
            v
        ))),
        v => Ok(Some(v as u64)),
    }
}
