//! Tests for the Maximum Independent Set plug-in.

use ils_solver::config::{Config, PopulationParameters};
use ils_solver::mis::{penalized_cost, symmetric_difference, Graph, MisScheme};
use ils_solver::{Population, Scheme};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;

#[test]
fn test_graph_from_file() {
    let path = std::env::temp_dir().join(format!("ils_solver_graph_{}.graph", std::process::id()));
    fs::write(&path, "5\n0 1\n1 2\n2 3\n3 4\n9 0\n").unwrap();

    let graph = Graph::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(graph.number_of_vertices(), 5);
    assert_eq!(graph.number_of_edges(), 4);
    assert!(graph.are_adjacent(3, 4));
    assert!(!graph.are_adjacent(0, 4));
}

#[test]
fn test_graph_from_missing_file() {
    assert!(Graph::from_file("/nonexistent/ils_solver.graph").is_err());
}

#[test]
fn test_empty_graph_has_nothing_to_perturb() {
    let graph = Graph::from_edges(0, Vec::new());
    let mut scheme = MisScheme::new(&graph);
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let solution = scheme.initial_solution(0, &mut rng);
    assert_eq!(solution.size, 0);
    assert!(scheme.perturbations(&solution, &mut rng).is_empty());
    assert_eq!(scheme.format_cost(&scheme.global_cost(&solution)), "0");
}

#[test]
fn test_population_of_independent_sets() {
    let graph = Graph::from_edges(12, (0..12).map(|v| (v, (v + 1) % 12)));
    let mut scheme = MisScheme::new(&graph);
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    let mut population = Population::new(
        penalized_cost,
        symmetric_difference,
        PopulationParameters::new()
            .with_minimum_size(4)
            .with_maximum_size(8)
            .with_number_of_closest_neighbors(2)
            .with_number_of_elite_solutions(2),
    )
    .unwrap();

    for seed_index in 0..20 {
        let mut solution = scheme.initial_solution(seed_index, &mut rng);
        scheme.local_search(&mut solution, &mut rng);
        population.add(solution, &mut rng);
        assert!(population.len() <= 8);
    }

    let (first, second) = population.binary_tournament(&mut rng).unwrap();
    assert!(first.is_independent(&graph));
    assert!(second.is_independent(&graph));
}

#[test]
fn test_population_sized_by_config() {
    let graph = Graph::from_edges(10, (0..10).map(|v| (v, (v + 1) % 10)));
    let mut scheme = MisScheme::new(&graph);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let config = Config::new().with_population(
        PopulationParameters::new()
            .with_minimum_size(3)
            .with_maximum_size(6)
            .with_number_of_closest_neighbors(1),
    );
    let mut population = Population::from_config(penalized_cost, symmetric_difference, &config).unwrap();
    assert_eq!(*population.parameters(), config.population);

    for seed_index in 0..7 {
        let mut solution = scheme.initial_solution(seed_index, &mut rng);
        scheme.local_search(&mut solution, &mut rng);
        population.add(solution, &mut rng);
    }
    assert_eq!(population.len(), 3);

    let invalid = Config::new().with_population(PopulationParameters::new().with_minimum_size(0));
    assert!(Population::from_config(penalized_cost, symmetric_difference, &invalid).is_err());
}
