//! Maximum Independent Set plug-in.
//!
//! Finds a large set of pairwise non-adjacent vertices by minimizing minus
//! the set size. It works with the iterated local search driver through
//! [`MisScheme`] and with the population through [`penalized_cost`] and
//! [`symmetric_difference`].

pub mod graph;
pub mod scheme;
pub mod solution;

pub use self::graph::Graph;
pub use self::scheme::{penalized_cost, symmetric_difference, MisPerturbation, MisScheme};
pub use self::solution::MisSolution;
