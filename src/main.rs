//! Command-line solver for the Maximum Independent Set problem.

use anyhow::{Context, Result};
use clap::Parser;
use ils_solver::config::{counter_limit, time_limit, Config};
use ils_solver::mis::{Graph, MisScheme};
use ils_solver::utils::{format_duration, save_report, RunReport};
use ils_solver::{IteratedLocalSearch, LogObserver, Scheme};
use itertools::Itertools;
use std::path::PathBuf;

/// Iterated local search for the Maximum Independent Set problem.
#[derive(Parser, Debug)]
#[command(name = "mis_ils", version, about)]
struct Args {
    /// Graph file: vertex count followed by one "u v" pair per edge
    #[arg(short, long)]
    input: PathBuf,

    /// Time limit in seconds
    #[arg(short, long)]
    time: f64,

    /// Maximum number of iterations (-1 for no limit)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    iter: i64,

    /// Number of perturbations applied per cycle
    #[arg(long, default_value_t = 1)]
    pert: usize,

    /// Maximum number of restarts (-1 for no limit)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    restarts: i64,

    /// Cycles without improvement before restarting (-1 to restart only
    /// when no perturbation is available)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    stagnation: i64,

    /// Capacity of the solution pool
    #[arg(long, default_value_t = 1)]
    pool: usize,

    /// Random seed
    #[arg(long, default_value_t = 123456789)]
    seed: u64,

    /// Write a JSON report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log every new best solution
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = Config::new()
        .with_time_limit(time_limit(args.time)?)
        .with_minimum_number_of_perturbations(args.pert)
        .with_maximum_size_of_the_solution_pool(args.pool)
        .with_seed(args.seed);
    config.maximum_number_of_iterations = counter_limit(args.iter)?;
    config.maximum_number_of_restarts = counter_limit(args.restarts)?;
    config.maximum_number_of_iterations_without_improvement = counter_limit(args.stagnation)?;

    println!("Loading instance: {}", args.input.display());
    let graph = Graph::from_file(&args.input)
        .with_context(|| format!("failed to load graph from {}", args.input.display()))?;
    println!("Number of vertices: {}", graph.number_of_vertices());

    let mut algorithm = IteratedLocalSearch::new(MisScheme::new(&graph), config)?;

    println!("\n=== Iterated Local Search ===");
    let output = algorithm.run_with_observer(&mut LogObserver);

    println!("\n=== Results ===");
    let best = match output.solution_pool.best() {
        Ok(best) => best,
        Err(_) => {
            println!("No solution found.");
            return Ok(());
        }
    };
    let vertices = best.solution.vertices();
    let best_cost = algorithm.scheme.format_cost(&best.cost);

    println!("Best independent set size: {}", best_cost);
    println!("Iterations: {}", output.number_of_iterations);
    println!("Restarts: {}", output.number_of_restarts);
    println!("Total runtime: {}", format_duration(output.elapsed));
    println!("\nVertices in the best solution:");
    println!("{}", vertices.iter().join(" "));

    if let Some(path) = &args.output {
        let report = RunReport {
            instance: args.input.display().to_string(),
            best_cost,
            solution: vertices,
            iterations: output.number_of_iterations,
            restarts: output.number_of_restarts,
            runtime_seconds: output.elapsed.as_secs_f64(),
            time_to_best_seconds: output.time_to_best.map(|d| d.as_secs_f64()),
        };
        save_report(&report, path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
