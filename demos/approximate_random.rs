//! Approximates a Haar-random two-qubit unitary with H/T/CNOT sequences.
//!
//! Run with `RUST_LOG=tqga=debug` to watch each improvement.

use tqga::{random_unitary, GateError, SearchConfig, Searcher};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GateError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    println!("--- tqga Example: Approximating a random unitary ---");

    let mut rng = StdRng::seed_from_u64(2718);
    let target = random_unitary(&mut rng);
    println!("\nTarget unitary:\n{}", target);

    let config = SearchConfig::new()
        .with_max_length(60)?
        .with_samples_per_length(50)
        .with_seed(31415);
    let searcher = Searcher::new(config);

    let result = searcher.search_seeded(&target)?;
    println!("{}", result);
    println!("Best circuit:\n{}", result.circuit());
    println!("Its unitary:\n{}", result.unitary());

    // Sparse progress report over the schedule
    let history = result.history();
    let step = (history.len() / 10).max(1);
    println!("Best fidelity along the run:");
    for (i, f) in history.iter().enumerate().step_by(step) {
        println!("  after {:>4} candidates: {:.6}", i + 1, f);
    }

    Ok(())
}
