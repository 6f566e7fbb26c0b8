//! # ILS Solver
//!
//! A generic metaheuristic engine that minimizes the cost of a pluggable
//! problem definition (a [`Scheme`]).
//!
//! The engine offers two search strategies built on the same scheme types:
//!
//! - [`IteratedLocalSearch`] follows a single trajectory: perturb the current
//!   local optimum, repair it with local search, keep the best solutions in
//!   a bounded [`SolutionPool`], and restart when the trajectory stagnates.
//! - [`Population`] holds many solutions and prunes them with a biased
//!   fitness balancing cost against diversity, in the manner of hybrid
//!   genetic search. It serves parents by binary tournament for
//!   recombination steps implemented outside the engine.
//!
//! The [`mis`] module is an example plug-in for the Maximum Independent Set
//! problem.

pub mod config;
pub mod error;
pub mod iterated_local_search;
pub mod mis;
pub mod observer;
pub mod population;
pub mod ranking;
pub mod scheme;
pub mod solution_pool;
pub mod utils;

pub use crate::config::{Config, PopulationParameters};
pub use crate::error::SolverError;
pub use crate::iterated_local_search::{IteratedLocalSearch, IteratedLocalSearchOutput};
pub use crate::observer::{BestCostTimer, LogObserver, SearchObserver};
pub use crate::population::{Distance, Population, PopulationSolution};
pub use crate::scheme::{PerturbationSelection, Scheme};
pub use crate::solution_pool::{PoolEntry, SolutionPool};
