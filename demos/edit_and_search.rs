//! Edits a compiled circuit's unitary entry by entry, then searches for a
//! gate sequence close to the edited matrix.

use tqga::validation::unitarity_error;
use tqga::{CircuitBuilder, EditRequest, GateError, Qubit, SearchConfig, Searcher, fidelity};

use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GateError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    println!("--- tqga Example: Edit a unitary, then approximate it ---");

    let circuit = CircuitBuilder::new()
        .h(Qubit::One)
        .cnot(Qubit::One)
        .t(Qubit::Two)
        .h(Qubit::Two)
        .build();
    println!("\nStarting circuit:\n{}", circuit);

    let original = circuit.unitary();
    let mut target = original;
    let edits = [
        EditRequest::Phase { row: 0, col: 0, phi: 0.6 },
        EditRequest::Magnitude { row: 1, col: 2, delta: 0.3 },
        EditRequest::Magnitude { row: 3, col: 3, delta: -0.2 },
    ];
    for edit in edits {
        target = edit.apply(&target);
        println!(
            "{:?}\n  fidelity to start: {:.6}, unitarity error: {:.2e}",
            edit,
            fidelity(&original, &target),
            unitarity_error(&target)
        );
    }
    println!("\nEdited target:\n{}", target);

    let searcher = Searcher::new(
        SearchConfig::new()
            .with_max_length(30)?
            .with_samples_per_length(100)
            .with_seed(1),
    );
    let result = searcher.search_seeded(&target)?;
    println!("{}", result);
    println!("Best circuit:\n{}", result.circuit());

    Ok(())
}
