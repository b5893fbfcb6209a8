//! Demonstration of the reasoning resource limits.
//!
//! Every classification run ends in a status: `Complete` when the fixpoint
//! was reached, or an incomplete status naming the limit that stopped it.
//! The facts derived before the cut stay queryable either way.
//!
//! Run with: cargo run -p oxreason --example reasoning_limits

use oxreason::{Axiom, Class, Ontology, Reasoner, ReasonerConfig, RlReasoner};
use std::time::Duration;

/// C0 subClassOf C1 subClassOf ... deep enough that saturation takes many
/// sweeps.
fn deep_hierarchy(levels: usize) -> Ontology {
    let classes: Vec<Class> = (0..levels)
        .map(|i| Class::new_from_iri(format!("http://example.org/Level{i}")).unwrap())
        .collect();
    let mut ontology = Ontology::new(None);
    for window in classes.windows(2) {
        ontology.add_axiom(Axiom::sub_class_of(window[0].clone(), window[1].clone()));
    }
    ontology
}

fn run(label: &str, ontology: &Ontology, config: ReasonerConfig) {
    let mut reasoner = RlReasoner::with_config(ontology, config);
    match reasoner.classify() {
        Ok(result) => {
            println!("{label}");
            println!("  status:   {}", result.status());
            println!("  inferred: {} axioms", result.inferred_axiom_count());
            println!(
                "  effort:   {} rounds, {} passes, {:?}",
                result.rounds(),
                result.passes(),
                result.elapsed()
            );
        }
        Err(e) => println!("{label}\n  validation failed: {e}"),
    }
    println!();
}

fn main() {
    println!("=== Reasoning limits demonstration ===\n");

    let ontology = deep_hierarchy(500);

    run(
        "1. Default budget (saturates)",
        &ontology,
        ReasonerConfig::default(),
    );

    run(
        "2. Ten shared passes (iteration limit hits first)",
        &ontology,
        ReasonerConfig::new().with_max_iterations(10),
    );

    run(
        "3. Expired deadline (stops before the first inference)",
        &ontology,
        ReasonerConfig::new().with_timeout(Duration::ZERO),
    );

    run(
        "4. Ceiling of 1000 inferred axioms (keeps the crossing fact)",
        &ontology,
        ReasonerConfig::new().with_max_inferred_axioms(1000),
    );

    println!("A limit is a reported status, never an error: every run above");
    println!("returned a result, and the partial closures remain sound.");
}
