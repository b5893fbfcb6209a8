//! Ontology container: the axiom snapshot handed to a reasoning session.

use crate::axiom::Axiom;
use crate::entity::{Class, Individual, ObjectProperty};
use crate::expression::ClassExpression;
use oxrdf::NamedNode;
use rustc_hash::FxHashSet;
use std::fmt;

/// A collection of axioms describing classes, properties and individuals.
///
/// Entities mentioned by an added axiom are indexed automatically, so an
/// explicit declaration axiom is never required for lookups to work.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    /// The ontology IRI (optional).
    iri: Option<NamedNode>,
    /// All axioms, in insertion order.
    axioms: Vec<Axiom>,
    /// Classes mentioned anywhere in the axioms.
    classes: FxHashSet<Class>,
    /// Object properties mentioned anywhere in the axioms.
    object_properties: FxHashSet<ObjectProperty>,
    /// Individuals mentioned anywhere in the axioms.
    individuals: FxHashSet<Individual>,
}

impl Ontology {
    /// Creates a new empty ontology.
    pub fn new(iri: Option<NamedNode>) -> Self {
        Self {
            iri,
            axioms: Vec::new(),
            classes: FxHashSet::default(),
            object_properties: FxHashSet::default(),
            individuals: FxHashSet::default(),
        }
    }

    /// Creates a new ontology with the given IRI string.
    pub fn with_iri(iri: impl AsRef<str>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self::new(Some(NamedNode::new(iri.as_ref())?)))
    }

    /// Returns the ontology IRI.
    pub fn iri(&self) -> Option<&NamedNode> {
        self.iri.as_ref()
    }

    /// Adds an axiom, indexing every entity it mentions.
    pub fn add_axiom(&mut self, axiom: Axiom) {
        self.register(&axiom);
        self.axioms.push(axiom);
    }

    fn register(&mut self, axiom: &Axiom) {
        match axiom {
            Axiom::SubClassOf {
                sub_class,
                super_class,
            } => {
                self.register_expression(sub_class);
                self.register_expression(super_class);
            }
            Axiom::EquivalentClasses(classes) | Axiom::DisjointClasses(classes) => {
                for class in classes {
                    self.register_expression(class);
                }
            }
            Axiom::SubObjectPropertyOf {
                sub_property,
                super_property,
            } => {
                self.object_properties.insert(sub_property.clone());
                self.object_properties.insert(super_property.clone());
            }
            Axiom::EquivalentObjectProperties(properties) => {
                for property in properties {
                    self.object_properties.insert(property.clone());
                }
            }
            Axiom::InverseObjectProperties(a, b) => {
                self.object_properties.insert(a.clone());
                self.object_properties.insert(b.clone());
            }
            Axiom::ObjectPropertyDomain { property, domain } => {
                self.object_properties.insert(property.clone());
                self.register_expression(domain);
            }
            Axiom::ObjectPropertyRange { property, range } => {
                self.object_properties.insert(property.clone());
                self.register_expression(range);
            }
            Axiom::FunctionalObjectProperty(property)
            | Axiom::InverseFunctionalObjectProperty(property)
            | Axiom::SymmetricObjectProperty(property)
            | Axiom::AsymmetricObjectProperty(property)
            | Axiom::TransitiveObjectProperty(property)
            | Axiom::IrreflexiveObjectProperty(property) => {
                self.object_properties.insert(property.clone());
            }
            Axiom::ClassAssertion { class, individual } => {
                self.register_expression(class);
                self.individuals.insert(individual.clone());
            }
            Axiom::ObjectPropertyAssertion {
                property,
                source,
                target,
            } => {
                self.object_properties.insert(property.clone());
                self.individuals.insert(source.clone());
                self.individuals.insert(target.clone());
            }
            Axiom::SameIndividual(individuals) | Axiom::DifferentIndividuals(individuals) => {
                for individual in individuals {
                    self.individuals.insert(individual.clone());
                }
            }
            Axiom::DeclareClass(class) => {
                self.classes.insert(class.clone());
            }
            Axiom::DeclareObjectProperty(property) => {
                self.object_properties.insert(property.clone());
            }
            Axiom::DeclareIndividual(individual) => {
                self.individuals.insert(individual.clone());
            }
        }
    }

    fn register_expression(&mut self, expression: &ClassExpression) {
        match expression {
            ClassExpression::Class(class) => {
                self.classes.insert(class.clone());
            }
            ClassExpression::IntersectionOf(operands) | ClassExpression::UnionOf(operands) => {
                for operand in operands {
                    self.register_expression(operand);
                }
            }
            ClassExpression::ComplementOf(operand) => self.register_expression(operand),
            ClassExpression::OneOf(individuals) => {
                for individual in individuals {
                    self.individuals.insert(individual.clone());
                }
            }
            ClassExpression::SomeValuesFrom { property, filler }
            | ClassExpression::AllValuesFrom { property, filler } => {
                self.object_properties.insert(property.clone());
                self.register_expression(filler);
            }
            ClassExpression::HasValue { property, value } => {
                self.object_properties.insert(property.clone());
                self.individuals.insert(value.clone());
            }
            ClassExpression::MinCardinality {
                property, filler, ..
            }
            | ClassExpression::MaxCardinality {
                property, filler, ..
            }
            | ClassExpression::ExactCardinality {
                property, filler, ..
            } => {
                self.object_properties.insert(property.clone());
                if let Some(filler) = filler {
                    self.register_expression(filler);
                }
            }
        }
    }

    /// Returns all axioms in insertion order.
    pub fn axioms(&self) -> &[Axiom] {
        &self.axioms
    }

    /// Returns the number of axioms.
    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }

    /// Returns `true` if the ontology holds no axioms.
    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }

    /// Returns all classes mentioned in the ontology.
    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.iter()
    }

    /// Returns all object properties mentioned in the ontology.
    pub fn object_properties(&self) -> impl Iterator<Item = &ObjectProperty> {
        self.object_properties.iter()
    }

    /// Returns all individuals mentioned in the ontology.
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Checks whether a class is mentioned in this ontology.
    pub fn contains_class(&self, class: &Class) -> bool {
        self.classes.contains(class)
    }

    /// Checks whether an object property is mentioned in this ontology.
    pub fn contains_object_property(&self, property: &ObjectProperty) -> bool {
        self.object_properties.contains(property)
    }

    /// Checks whether an individual is mentioned in this ontology.
    pub fn contains_individual(&self, individual: &Individual) -> bool {
        self.individuals.contains(individual)
    }

    /// Removes all axioms and indexed entities.
    pub fn clear(&mut self) {
        self.axioms.clear();
        self.classes.clear();
        self.object_properties.clear();
        self.individuals.clear();
    }

    /// Merges another ontology into this one.
    pub fn merge(&mut self, other: Ontology) {
        for axiom in other.axioms {
            self.add_axiom(axiom);
        }
    }
}

impl fmt::Display for Ontology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(iri) = &self.iri {
            write!(f, "Ontology({iri})")?;
        } else {
            f.write_str("Ontology(anonymous)")?;
        }
        write!(f, " [{} axioms]", self.axioms.len())
    }
}
