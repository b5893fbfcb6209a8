//! Consistency checking over the materialized closure.
//!
//! The checker runs after classification, so contradictions that only
//! surface through derived facts are found too. Every verdict carries the
//! facts that clash, nothing more.

use oxreason::{
    Axiom, Class, ConsistencyStatus, InconsistencyKind, Individual, ObjectProperty, Ontology,
    Reasoner, ReasonerConfig, ReasoningStatus, RlReasoner,
};

fn class(name: &str) -> Class {
    Class::new_from_iri(format!("http://example.org/{name}")).unwrap()
}

fn property(name: &str) -> ObjectProperty {
    ObjectProperty::new_from_iri(format!("http://example.org/{name}")).unwrap()
}

fn individual(name: &str) -> Individual {
    Individual::new_from_iri(format!("http://example.org/{name}")).unwrap()
}

fn checked(ontology: &Ontology) -> oxreason::ReasoningResult {
    let config = ReasonerConfig::new().with_consistency_check();
    let mut reasoner = RlReasoner::with_config(ontology, config);
    reasoner.classify().unwrap()
}

#[test]
fn test_consistency_is_not_checked_by_default() {
    let mut ontology = Ontology::new(None);
    ontology.add_axiom(Axiom::same_individual(individual("x"), individual("y")));
    ontology.add_axiom(Axiom::different_individuals(
        individual("x"),
        individual("y"),
    ));

    let mut reasoner = RlReasoner::new(&ontology);
    let result = reasoner.classify().unwrap();
    assert_eq!(*result.consistency(), ConsistencyStatus::NotChecked);
}

#[test]
fn test_same_and_different_minimal_justification() {
    let mut ontology = Ontology::new(None);
    ontology.add_axiom(Axiom::same_individual(individual("x"), individual("y")));
    ontology.add_axiom(Axiom::different_individuals(
        individual("x"),
        individual("y"),
    ));

    let result = checked(&ontology);

    // An inconsistency is a verdict, not an abort: classification still
    // ran to the fixpoint.
    assert_eq!(result.status(), ReasoningStatus::Complete);
    let inconsistency = result.consistency().inconsistency().unwrap();
    assert_eq!(inconsistency.kind(), InconsistencyKind::SameAndDifferent);

    // Exactly the two clashing facts, in either orientation.
    let facts = inconsistency.facts();
    assert_eq!(facts.len(), 2);
    assert!(
        facts.contains(&Axiom::same_individual(individual("x"), individual("y")))
            || facts.contains(&Axiom::same_individual(individual("y"), individual("x")))
    );
    assert!(
        facts.contains(&Axiom::different_individuals(individual("x"), individual("y")))
            || facts.contains(&Axiom::different_individuals(individual("y"), individual("x")))
    );
}

#[test]
fn test_disjoint_membership() {
    let mut ontology = Ontology::new(None);
    ontology.add_axiom(Axiom::disjoint_classes(vec![
        class("Cat").into(),
        class("Dog").into(),
    ]));
    ontology.add_axiom(Axiom::class_assertion(class("Cat"), individual("tom")));
    ontology.add_axiom(Axiom::class_assertion(class("Dog"), individual("tom")));

    let result = checked(&ontology);
    let inconsistency = result.consistency().inconsistency().unwrap();
    assert_eq!(inconsistency.kind(), InconsistencyKind::DisjointMembership);
    assert_eq!(inconsistency.facts().len(), 3);
}

#[test]
fn test_disjoint_membership_through_subclass() {
    let mut ontology = Ontology::new(None);
    ontology.add_axiom(Axiom::disjoint_classes(vec![
        class("Plant").into(),
        class("Animal").into(),
    ]));
    ontology.add_axiom(Axiom::sub_class_of(class("Dog"), class("Animal")));
    ontology.add_axiom(Axiom::class_assertion(class("Dog"), individual("fido")));
    ontology.add_axiom(Axiom::class_assertion(class("Plant"), individual("fido")));

    // fido : Animal only exists after materialization.
    let result = checked(&ontology);
    let inconsistency = result.consistency().inconsistency().unwrap();
    assert_eq!(inconsistency.kind(), InconsistencyKind::DisjointMembership);
}

#[test]
fn test_functional_conflict() {
    let mut ontology = Ontology::new(None);
    ontology.add_axiom(Axiom::FunctionalObjectProperty(property("hasBirthMother")));
    ontology.add_axiom(Axiom::object_property_assertion(
        property("hasBirthMother"),
        individual("kid"),
        individual("ann"),
    ));
    ontology.add_axiom(Axiom::object_property_assertion(
        property("hasBirthMother"),
        individual("kid"),
        individual("beth"),
    ));

    let result = checked(&ontology);
    let inconsistency = result.consistency().inconsistency().unwrap();
    assert_eq!(inconsistency.kind(), InconsistencyKind::FunctionalConflict);
    assert_eq!(inconsistency.facts().len(), 3);
}

#[test]
fn test_functional_conflict_excused_by_same_as() {
    let mut ontology = Ontology::new(None);
    ontology.add_axiom(Axiom::FunctionalObjectProperty(property("hasBirthMother")));
    ontology.add_axiom(Axiom::object_property_assertion(
        property("hasBirthMother"),
        individual("kid"),
        individual("ann"),
    ));
    ontology.add_axiom(Axiom::object_property_assertion(
        property("hasBirthMother"),
        individual("kid"),
        individual("annie"),
    ));
    ontology.add_axiom(Axiom::same_individual(individual("ann"), individual("annie")));

    let result = checked(&ontology);
    assert_eq!(*result.consistency(), ConsistencyStatus::Consistent);
}

#[test]
fn test_inverse_functional_conflict() {
    let mut ontology = Ontology::new(None);
    ontology.add_axiom(Axiom::InverseFunctionalObjectProperty(property("hasSsn")));
    ontology.add_axiom(Axiom::object_property_assertion(
        property("hasSsn"),
        individual("alice"),
        individual("ssn1"),
    ));
    ontology.add_axiom(Axiom::object_property_assertion(
        property("hasSsn"),
        individual("bob"),
        individual("ssn1"),
    ));

    let result = checked(&ontology);
    let inconsistency = result.consistency().inconsistency().unwrap();
    assert_eq!(
        inconsistency.kind(),
        InconsistencyKind::InverseFunctionalConflict
    );
}

#[test]
fn test_asymmetric_violation_via_derived_edge() {
    let mut ontology = Ontology::new(None);
    ontology.add_axiom(Axiom::SymmetricObjectProperty(property("beats")));
    ontology.add_axiom(Axiom::AsymmetricObjectProperty(property("beats")));
    ontology.add_axiom(Axiom::object_property_assertion(
        property("beats"),
        individual("rock"),
        individual("scissors"),
    ));

    // The reverse edge is derived by the symmetry rule, then caught.
    let result = checked(&ontology);
    let inconsistency = result.consistency().inconsistency().unwrap();
    assert_eq!(inconsistency.kind(), InconsistencyKind::AsymmetricViolation);
}

#[test]
fn test_irreflexive_violation() {
    let mut ontology = Ontology::new(None);
    ontology.add_axiom(Axiom::IrreflexiveObjectProperty(property("properPartOf")));
    ontology.add_axiom(Axiom::object_property_assertion(
        property("properPartOf"),
        individual("whole"),
        individual("whole"),
    ));

    let result = checked(&ontology);
    let inconsistency = result.consistency().inconsistency().unwrap();
    assert_eq!(inconsistency.kind(), InconsistencyKind::IrreflexiveViolation);
    assert_eq!(inconsistency.facts().len(), 2);
}

#[test]
fn test_consistent_ontology() {
    let mut ontology = Ontology::new(None);
    ontology.add_axiom(Axiom::sub_class_of(class("Dog"), class("Animal")));
    ontology.add_axiom(Axiom::class_assertion(class("Dog"), individual("fido")));

    let result = checked(&ontology);
    assert_eq!(*result.consistency(), ConsistencyStatus::Consistent);
    assert!(!result.consistency().is_inconsistent());
}

#[test]
fn test_is_consistent_updates_cached_result() {
    let mut ontology = Ontology::new(None);
    ontology.add_axiom(Axiom::same_individual(individual("x"), individual("y")));
    ontology.add_axiom(Axiom::different_individuals(
        individual("x"),
        individual("y"),
    ));

    let mut reasoner = RlReasoner::new(&ontology);
    assert!(!reasoner.is_consistent().unwrap());

    // The on-demand verdict sticks to the cached outcome.
    let result = reasoner.classify().unwrap();
    assert!(result.consistency().is_inconsistent());
}

#[test]
fn test_inconsistency_kind_display() {
    let mut ontology = Ontology::new(None);
    ontology.add_axiom(Axiom::same_individual(individual("x"), individual("y")));
    ontology.add_axiom(Axiom::different_individuals(
        individual("x"),
        individual("y"),
    ));

    let result = checked(&ontology);
    let inconsistency = result.consistency().inconsistency().unwrap();
    let rendered = inconsistency.to_string();
    assert!(rendered.contains("same"));
}
