//! Benchmarks for the iterated local search and the population.

#[cfg(feature = "bench")]
extern crate criterion;

#[cfg(feature = "bench")]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ils_solver::config::{Config, PopulationParameters};
use ils_solver::mis::{penalized_cost, symmetric_difference, Graph, MisScheme};
use ils_solver::{IteratedLocalSearch, Population, Scheme};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Create a random graph with the given number of vertices and edge density.
fn create_benchmark_graph(size: usize, density: f64) -> Graph {
    use rand::Rng;
    let mut rng = ChaCha8Rng::seed_from_u64(size as u64);
    let mut edges = Vec::new();
    for u in 0..size {
        for v in (u + 1)..size {
            if rng.gen::<f64>() < density {
                edges.push((u, v));
            }
        }
    }
    Graph::from_edges(size, edges)
}

#[cfg(feature = "bench")]
fn benchmark_iterated_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterated_local_search");

    for size in [50, 100, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let graph = create_benchmark_graph(size, 0.1);
            let config = Config::new()
                .with_time_limit(Duration::from_secs(60))
                .with_maximum_number_of_iterations(500)
                .with_maximum_number_of_iterations_without_improvement(50);

            b.iter(|| {
                let mut algorithm =
                    IteratedLocalSearch::new(MisScheme::new(&graph), config.clone()).unwrap();
                algorithm.run()
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_survivor_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("survivor_selection");

    for size in [25, 65].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let graph = create_benchmark_graph(200, 0.05);
            let mut scheme = MisScheme::new(&graph);
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            let solutions: Vec<_> = (0..size)
                .map(|i| scheme.initial_solution(i, &mut rng))
                .collect();
            let parameters = PopulationParameters::new()
                .with_minimum_size(size / 2)
                .with_maximum_size(size);

            b.iter(|| {
                let mut population =
                    Population::new(penalized_cost, symmetric_difference, parameters).unwrap();
                for solution in solutions.iter().cloned() {
                    population.add(solution, &mut rng);
                }
                population.survivor_selection(&mut rng);
                population.len()
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
criterion_group!(
    benches,
    benchmark_iterated_local_search,
    benchmark_survivor_selection
);

#[cfg(feature = "bench")]
criterion_main!(benches);
