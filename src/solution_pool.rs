//! Bounded pool of the best solutions found during a search.

use crate::error::SolverError;

/// A solution together with its cost.
#[derive(Debug, Clone)]
pub struct PoolEntry<S, C> {
    pub solution: S,
    pub cost: C,
}

/// Keeps at most `maximum_size` solutions in non-decreasing cost order.
///
/// Entries with equal cost stay in insertion order, so when the pool is full
/// a newcomer never displaces an older entry of the same cost.
#[derive(Debug, Clone)]
pub struct SolutionPool<S, C> {
    entries: Vec<PoolEntry<S, C>>,
    maximum_size: usize,
}

impl<S, C: Ord> SolutionPool<S, C> {
    /// Create an empty pool holding at most `maximum_size` entries.
    pub fn new(maximum_size: usize) -> Self {
        SolutionPool {
            entries: Vec::with_capacity(maximum_size),
            maximum_size,
        }
    }

    /// Position a solution of `cost` would take; equal costs go last.
    fn insertion_point(&self, cost: &C) -> usize {
        self.entries.partition_point(|entry| entry.cost <= *cost)
    }

    /// Whether a solution of `cost` would be kept by [`SolutionPool::insert`].
    pub fn would_accept(&self, cost: &C) -> bool {
        self.insertion_point(cost) < self.maximum_size
    }

    /// Insert a solution, evicting the worst entries above capacity.
    ///
    /// Returns whether the solution was kept.
    pub fn insert(&mut self, solution: S, cost: C) -> bool {
        let position = self.insertion_point(&cost);
        if position >= self.maximum_size {
            return false;
        }
        self.entries.insert(position, PoolEntry { solution, cost });
        self.entries.truncate(self.maximum_size);
        true
    }

    /// The minimum-cost entry.
    pub fn best(&self) -> Result<&PoolEntry<S, C>, SolverError> {
        self.entries.first().ok_or(SolverError::EmptyPool)
    }

    /// The maximum-cost entry.
    pub fn worst(&self) -> Option<&PoolEntry<S, C>> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn maximum_size(&self) -> usize {
        self.maximum_size
    }

    /// Entries from best to worst.
    pub fn iter(&self) -> impl Iterator<Item = &PoolEntry<S, C>> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<PoolEntry<S, C>> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_on_empty_pool() {
        let pool: SolutionPool<&str, i32> = SolutionPool::new(3);
        assert_eq!(pool.best().unwrap_err(), SolverError::EmptyPool);
        assert!(pool.worst().is_none());
    }

    #[test]
    fn test_keeps_cost_order() {
        let mut pool = SolutionPool::new(5);
        pool.insert("c", 30);
        pool.insert("a", 10);
        pool.insert("b", 20);

        let costs: Vec<i32> = pool.iter().map(|e| e.cost).collect();
        assert_eq!(costs, vec![10, 20, 30]);
        assert_eq!(pool.best().unwrap().solution, "a");
    }

    #[test]
    fn test_evicts_worst_above_capacity() {
        let mut pool = SolutionPool::new(2);
        assert!(pool.insert("c", 30));
        assert!(pool.insert("b", 20));
        assert!(pool.insert("a", 10));
        assert!(!pool.insert("d", 40));

        assert_eq!(pool.len(), 2);
        let names: Vec<&str> = pool.iter().map(|e| e.solution).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_would_accept_matches_insert() {
        let mut pool = SolutionPool::new(2);
        assert!(pool.would_accept(&50));
        pool.insert("b", 20);
        pool.insert("c", 30);

        assert!(pool.would_accept(&10));
        assert!(pool.would_accept(&25));
        assert!(!pool.would_accept(&30));
        assert!(!pool.would_accept(&40));
        assert!(!pool.insert("d", 30));
        assert!(pool.insert("a", 25));
    }

    #[test]
    fn test_equal_costs_keep_insertion_order() {
        let mut pool = SolutionPool::new(2);
        pool.insert("first", 5);
        pool.insert("second", 5);
        // Full pool: a third entry of equal cost lands last and is evicted.
        assert!(!pool.insert("third", 5));

        let names: Vec<&str> = pool.iter().map(|e| e.solution).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
