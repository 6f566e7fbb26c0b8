//! Property tests for the solution pool.

use ils_solver::SolutionPool;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_pool_is_bounded_and_sorted(
        costs in prop::collection::vec(-50i64..50, 0..60),
        maximum_size in 1usize..8,
    ) {
        let mut pool = SolutionPool::new(maximum_size);
        for (index, cost) in costs.iter().enumerate() {
            pool.insert(index, *cost);
            prop_assert!(pool.len() <= maximum_size);
        }

        let kept: Vec<i64> = pool.iter().map(|e| e.cost).collect();
        prop_assert!(kept.windows(2).all(|w| w[0] <= w[1]));

        let mut expected = costs.clone();
        expected.sort();
        expected.truncate(maximum_size);
        prop_assert_eq!(&kept, &expected);

        match pool.best() {
            Ok(best) => prop_assert!(pool.iter().all(|e| best.cost <= e.cost)),
            Err(_) => prop_assert!(costs.is_empty()),
        }
    }

    #[test]
    fn prop_equal_costs_keep_first_inserted(
        count in 1usize..20,
        maximum_size in 1usize..8,
    ) {
        let mut pool = SolutionPool::new(maximum_size);
        for index in 0..count {
            pool.insert(index, 0);
        }
        let kept: Vec<usize> = pool.iter().map(|e| e.solution).collect();
        prop_assert_eq!(kept, (0..count.min(maximum_size)).collect::<Vec<_>>());
    }
}
