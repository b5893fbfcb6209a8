//! OWL 2 RL reasoning over a small family ontology.
//!
//! This example shows:
//! - Class hierarchy and type inference
//! - Domain, range, inverse and transitive property reasoning
//! - Explaining a derived fact
//! - Consistency checking
//!
//! Run with: cargo run -p oxreason --example reasoning

use oxreason::{
    Axiom, Class, Individual, ObjectProperty, Ontology, Reasoner, ReasonerConfig, RlReasoner,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== OWL 2 RL Reasoning Example ===\n");

    let mut ontology = Ontology::with_iri("http://example.org/family")?;

    // Classes
    let person = Class::new_from_iri("http://example.org/Person")?;
    let parent = Class::new_from_iri("http://example.org/Parent")?;
    let grandparent = Class::new_from_iri("http://example.org/Grandparent")?;

    // Parent ⊑ Person, Grandparent ⊑ Parent
    ontology.add_axiom(Axiom::sub_class_of(parent.clone(), person.clone()));
    ontology.add_axiom(Axiom::sub_class_of(grandparent.clone(), parent.clone()));

    // Properties
    let has_child = ObjectProperty::new_from_iri("http://example.org/hasChild")?;
    let has_parent = ObjectProperty::new_from_iri("http://example.org/hasParent")?;
    let has_ancestor = ObjectProperty::new_from_iri("http://example.org/hasAncestor")?;

    ontology.add_axiom(Axiom::object_property_domain(has_child.clone(), parent.clone()));
    ontology.add_axiom(Axiom::object_property_range(has_child.clone(), person.clone()));
    ontology.add_axiom(Axiom::InverseObjectProperties(
        has_child.clone(),
        has_parent.clone(),
    ));
    ontology.add_axiom(Axiom::sub_object_property_of(
        has_parent.clone(),
        has_ancestor.clone(),
    ));
    ontology.add_axiom(Axiom::TransitiveObjectProperty(has_ancestor.clone()));

    // Individuals
    let john = Individual::new_from_iri("http://example.org/John")?;
    let robert = Individual::new_from_iri("http://example.org/Robert")?;
    let alice = Individual::new_from_iri("http://example.org/Alice")?;

    ontology.add_axiom(Axiom::object_property_assertion(
        has_child.clone(),
        john.clone(),
        robert.clone(),
    ));
    ontology.add_axiom(Axiom::object_property_assertion(
        has_child.clone(),
        robert.clone(),
        alice.clone(),
    ));

    println!("Ontology created with:");
    println!("  - {} classes", ontology.classes().count());
    println!("  - {} object properties", ontology.object_properties().count());
    println!("  - {} individuals", ontology.individuals().count());
    println!("  - {} axioms", ontology.axiom_count());

    // Classify with consistency checking and explanations enabled
    println!("\n--- Running the reasoner ---");
    let config = ReasonerConfig::new()
        .with_consistency_check()
        .with_explanations();
    let mut reasoner = RlReasoner::with_config(&ontology, config);
    let result = reasoner.classify()?;

    println!("Status: {}", result.status());
    println!(
        "Inferred {} axioms in {} rounds ({} passes, {:?})",
        result.inferred_axiom_count(),
        result.rounds(),
        result.passes(),
        result.elapsed()
    );

    // Types derived for John: hasChild's domain makes him a Parent, the
    // hierarchy lifts that to Person.
    println!("\nJohn's inferred types:");
    for t in reasoner.types_of(&john) {
        println!("  - {t}");
    }

    // Alice's ancestors: hasParent edges come from the inverse, hasAncestor
    // from the subproperty, the chain from transitivity.
    println!("\nAlice's ancestors:");
    for ancestor in reasoner.property_values_of(&alice, &has_ancestor) {
        println!("  - {ancestor}");
    }

    // Why is John a Person?
    println!("\nWhy is John a Person?");
    if let Some(justification) = result.explain(&john, &person) {
        println!("  {justification}");
    }

    println!("\nSample of the materialized inferences:");
    for inference in result.inferences().iter().take(8) {
        println!("  - {inference}");
    }

    println!("\nConsistency: {}", result.consistency());

    Ok(())
}
