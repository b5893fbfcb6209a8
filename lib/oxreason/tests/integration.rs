//! Integration tests for the oxreason crate.

use oxreason::{Axiom, Class, ClassExpression, Individual, ObjectProperty, Ontology};
use oxrdf::NamedNode;

#[test]
fn test_create_empty_ontology() {
    let ontology = Ontology::new(None);
    assert!(ontology.iri().is_none());
    assert_eq!(ontology.axiom_count(), 0);
}

#[test]
fn test_create_ontology_with_iri() {
    let iri = NamedNode::new("http://example.org/animals").unwrap();
    let ontology = Ontology::new(Some(iri.clone()));
    assert_eq!(ontology.iri(), Some(&iri));
}

#[test]
fn test_subclass_axiom_registers_entities() {
    let mut ontology = Ontology::new(None);

    let animal = Class::new_from_iri("http://example.org/Animal").unwrap();
    let dog = Class::new_from_iri("http://example.org/Dog").unwrap();

    ontology.add_axiom(Axiom::sub_class_of(dog.clone(), animal.clone()));

    assert_eq!(ontology.axiom_count(), 1);
    assert!(ontology.contains_class(&dog));
    assert!(ontology.contains_class(&animal));
}

#[test]
fn test_class_assertion_registers_individual() {
    let mut ontology = Ontology::new(None);

    let dog = Class::new_from_iri("http://example.org/Dog").unwrap();
    let fido = Individual::new_from_iri("http://example.org/fido").unwrap();

    ontology.add_axiom(Axiom::class_assertion(dog, fido.clone()));

    assert!(ontology.contains_individual(&fido));
}

#[test]
fn test_class_expression_builders() {
    let cat = Class::new_from_iri("http://example.org/Cat").unwrap();
    let dog = Class::new_from_iri("http://example.org/Dog").unwrap();
    let has_pet = ObjectProperty::new_from_iri("http://example.org/hasPet").unwrap();

    let union = ClassExpression::union(vec![
        ClassExpression::class(cat.clone()),
        ClassExpression::class(dog.clone()),
    ]);
    assert!(!union.is_named());

    let restriction =
        ClassExpression::some_values_from(has_pet, ClassExpression::class(cat.clone()));
    assert!(!restriction.is_named());

    assert!(ClassExpression::class(cat).is_named());
}

#[test]
fn test_ontology_display() {
    let ontology = Ontology::with_iri("http://example.org/animals").unwrap();
    let display = format!("{ontology}");
    assert!(display.contains("Ontology"));
    assert!(display.contains("0 axioms"));
}

// Reasoner tests (when the feature is enabled)
#[cfg(feature = "owl2-rl")]
mod reasoner_tests {
    use super::*;
    use oxreason::{Reasoner, ReasonerConfig, ReasoningStatus, RlReasoner, RuleFamily};

    fn class(name: &str) -> Class {
        Class::new_from_iri(format!("http://example.org/{name}")).unwrap()
    }

    fn property(name: &str) -> ObjectProperty {
        ObjectProperty::new_from_iri(format!("http://example.org/{name}")).unwrap()
    }

    fn individual(name: &str) -> Individual {
        Individual::new_from_iri(format!("http://example.org/{name}")).unwrap()
    }

    #[test]
    fn test_transitive_subclass_inference() {
        let mut ontology = Ontology::new(None);

        // Poodle subClassOf Dog subClassOf Animal
        ontology.add_axiom(Axiom::sub_class_of(class("Poodle"), class("Dog")));
        ontology.add_axiom(Axiom::sub_class_of(class("Dog"), class("Animal")));

        let mut reasoner = RlReasoner::new(&ontology);
        let result = reasoner.classify().unwrap();

        assert_eq!(result.status(), ReasoningStatus::Complete);
        let super_classes = reasoner.super_classes_of(&class("Poodle"), false);
        assert!(super_classes.contains(&&class("Animal")));
    }

    #[test]
    fn test_type_inference_through_hierarchy() {
        let mut ontology = Ontology::new(None);

        ontology.add_axiom(Axiom::sub_class_of(class("Dog"), class("Animal")));
        ontology.add_axiom(Axiom::class_assertion(class("Dog"), individual("fido")));

        let mut reasoner = RlReasoner::new(&ontology);
        reasoner.classify().unwrap();

        let types = reasoner.types_of(&individual("fido"));
        assert!(types.contains(&&class("Animal")));
        let animals = reasoner.instances_of(&class("Animal"), false);
        assert!(animals.contains(&&individual("fido")));
    }

    #[test]
    fn test_three_level_chain_inference_count() {
        let mut ontology = Ontology::new(None);

        // A subClassOf B subClassOf C with one member of A; the fixpoint
        // adds A subClassOf C, x : B and x : C.
        ontology.add_axiom(Axiom::sub_class_of(class("A"), class("B")));
        ontology.add_axiom(Axiom::sub_class_of(class("B"), class("C")));
        ontology.add_axiom(Axiom::class_assertion(class("A"), individual("x")));

        let mut reasoner = RlReasoner::new(&ontology);
        let result = reasoner.classify().unwrap();

        assert_eq!(result.status(), ReasoningStatus::Complete);
        assert_eq!(result.inferred_axiom_count(), 3);
        assert!(reasoner.types_of(&individual("x")).contains(&&class("C")));
        assert!(
            reasoner
                .super_classes_of(&class("A"), false)
                .contains(&&class("C"))
        );
    }

    #[test]
    fn test_domain_and_range_typing() {
        let mut ontology = Ontology::new(None);

        ontology.add_axiom(Axiom::object_property_domain(
            property("hasPet"),
            class("PetOwner"),
        ));
        ontology.add_axiom(Axiom::object_property_range(
            property("hasPet"),
            class("Animal"),
        ));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("hasPet"),
            individual("alice"),
            individual("fido"),
        ));

        let mut reasoner = RlReasoner::new(&ontology);
        reasoner.classify().unwrap();

        assert!(
            reasoner
                .types_of(&individual("alice"))
                .contains(&&class("PetOwner"))
        );
        assert!(
            reasoner
                .types_of(&individual("fido"))
                .contains(&&class("Animal"))
        );
    }

    #[test]
    fn test_property_hierarchy_propagates_values() {
        let mut ontology = Ontology::new(None);

        ontology.add_axiom(Axiom::sub_object_property_of(
            property("hasPet"),
            property("likes"),
        ));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("hasPet"),
            individual("alice"),
            individual("fido"),
        ));

        let mut reasoner = RlReasoner::new(&ontology);
        reasoner.classify().unwrap();

        let liked = reasoner.property_values_of(&individual("alice"), &property("likes"));
        assert!(liked.contains(&&individual("fido")));
    }

    #[test]
    fn test_symmetric_and_inverse_properties() {
        let mut ontology = Ontology::new(None);

        ontology.add_axiom(Axiom::SymmetricObjectProperty(property("marriedTo")));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("marriedTo"),
            individual("alice"),
            individual("bob"),
        ));
        ontology.add_axiom(Axiom::InverseObjectProperties(
            property("hasPet"),
            property("isPetOf"),
        ));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("hasPet"),
            individual("alice"),
            individual("fido"),
        ));

        let mut reasoner = RlReasoner::new(&ontology);
        reasoner.classify().unwrap();

        assert!(
            reasoner
                .property_values_of(&individual("bob"), &property("marriedTo"))
                .contains(&&individual("alice"))
        );
        assert!(
            reasoner
                .property_values_of(&individual("fido"), &property("isPetOf"))
                .contains(&&individual("alice"))
        );
    }

    #[test]
    fn test_transitive_property_values() {
        let mut ontology = Ontology::new(None);

        ontology.add_axiom(Axiom::TransitiveObjectProperty(property("ancestorOf")));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("ancestorOf"),
            individual("granny"),
            individual("mum"),
        ));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("ancestorOf"),
            individual("mum"),
            individual("kid"),
        ));

        let mut reasoner = RlReasoner::new(&ontology);
        reasoner.classify().unwrap();

        assert!(
            reasoner
                .property_values_of(&individual("granny"), &property("ancestorOf"))
                .contains(&&individual("kid"))
        );
    }

    #[test]
    fn test_equivalent_classes_share_instances() {
        let mut ontology = Ontology::new(None);

        ontology.add_axiom(Axiom::equivalent_classes(vec![
            class("Cat").into(),
            class("Feline").into(),
        ]));
        ontology.add_axiom(Axiom::class_assertion(class("Cat"), individual("tom")));

        let mut reasoner = RlReasoner::new(&ontology);
        reasoner.classify().unwrap();

        assert!(
            reasoner
                .equivalent_classes_of(&class("Cat"))
                .contains(&&class("Feline"))
        );
        assert!(
            reasoner
                .types_of(&individual("tom"))
                .contains(&&class("Feline"))
        );
    }

    #[test]
    fn test_explain_inferred_type() {
        let mut ontology = Ontology::new(None);

        ontology.add_axiom(Axiom::sub_class_of(class("A"), class("B")));
        ontology.add_axiom(Axiom::sub_class_of(class("B"), class("C")));
        ontology.add_axiom(Axiom::class_assertion(class("A"), individual("x")));

        let config = ReasonerConfig::new().with_explanations();
        let mut reasoner = RlReasoner::with_config(&ontology, config);
        let result = reasoner.classify().unwrap();

        let justification = result.explain(&individual("x"), &class("C")).unwrap();
        assert_eq!(justification.rule(), RuleFamily::TypePropagation);
        assert_eq!(justification.premises().len(), 2);
        assert!(
            justification
                .premises()
                .contains(&Axiom::class_assertion(class("A"), individual("x")))
        );
        assert!(
            justification
                .premises()
                .contains(&Axiom::sub_class_of(class("A"), class("C")))
        );

        // Asserted memberships have no derivation to explain.
        assert!(result.explain(&individual("x"), &class("A")).is_none());
    }

    #[test]
    fn test_result_reports_materialized_inferences() {
        let mut ontology = Ontology::new(None);

        ontology.add_axiom(Axiom::sub_class_of(class("Dog"), class("Animal")));
        ontology.add_axiom(Axiom::class_assertion(class("Dog"), individual("fido")));

        let mut reasoner = RlReasoner::new(&ontology);
        let result = reasoner.classify().unwrap();

        assert_eq!(result.inferences().len(), result.inferred_axiom_count());
        assert!(
            result
                .inferred_axioms()
                .any(|axiom| *axiom == Axiom::class_assertion(class("Animal"), individual("fido")))
        );
        assert!(result.rounds() >= 1);
        assert!(result.passes() >= result.rounds());
    }

    #[test]
    fn test_materialization_can_be_disabled() {
        let mut ontology = Ontology::new(None);

        ontology.add_axiom(Axiom::sub_class_of(class("Dog"), class("Animal")));
        ontology.add_axiom(Axiom::class_assertion(class("Dog"), individual("fido")));

        let config = ReasonerConfig::new().without_materialization();
        let mut reasoner = RlReasoner::with_config(&ontology, config);
        let result = reasoner.classify().unwrap();

        // The log is skipped but the closure and the count are not.
        assert!(result.inferences().is_empty());
        assert_eq!(result.inferred_axiom_count(), 1);
        assert!(
            reasoner
                .types_of(&individual("fido"))
                .contains(&&class("Animal"))
        );
    }

    #[test]
    fn test_empty_ontology_classifies_completely() {
        let ontology = Ontology::new(None);
        let mut reasoner = RlReasoner::new(&ontology);
        let result = reasoner.classify().unwrap();

        assert_eq!(result.status(), ReasoningStatus::Complete);
        assert_eq!(result.inferred_axiom_count(), 0);
        assert!(reasoner.is_consistent().unwrap());
    }

    #[test]
    fn test_reasoner_display() {
        let ontology = Ontology::new(None);
        let reasoner = RlReasoner::new(&ontology);
        let display = format!("{reasoner}");
        assert!(display.contains("RlReasoner"));
    }
}
