//! Randomized tie-breaking for rank computations.
//!
//! Ranking is "shuffle uniformly, then stable sort": entries with equal keys
//! end up in a uniformly random relative order instead of their positional
//! one.

use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// Order `indices` by `compare`, breaking ties uniformly at random.
pub fn randomized_order<R, F>(rng: &mut R, mut indices: Vec<usize>, mut compare: F) -> Vec<usize>
where
    R: Rng + ?Sized,
    F: FnMut(usize, usize) -> Ordering,
{
    indices.shuffle(rng);
    // slice::sort_by is stable
    indices.sort_by(|&a, &b| compare(a, b));
    indices
}

/// Dense ranks of `0..n` by `compare`; `ranks[i]` is the position of `i`.
pub fn randomized_ranks<R, F>(rng: &mut R, n: usize, compare: F) -> Vec<usize>
where
    R: Rng + ?Sized,
    F: FnMut(usize, usize) -> Ordering,
{
    let order = randomized_order(rng, (0..n).collect(), compare);
    let mut ranks = vec![0; n];
    for (rank, &index) in order.iter().enumerate() {
        ranks[index] = rank;
    }
    ranks
}
