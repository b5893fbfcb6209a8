//! OWL axioms: the typed facts the reasoner consumes and derives.

use crate::entity::{Class, Individual, ObjectProperty};
use crate::expression::ClassExpression;
use std::fmt;

/// An OWL axiom.
///
/// Derived facts only ever use the named-class forms; the expression-valued
/// positions exist for input and are vetted by the profile validator before
/// classification starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Axiom {
    /// `SubClassOf(sub super)`.
    SubClassOf {
        /// The more specific class.
        sub_class: ClassExpression,
        /// The more general class.
        super_class: ClassExpression,
    },
    /// All listed class expressions are equivalent.
    EquivalentClasses(Vec<ClassExpression>),
    /// All listed class expressions are pairwise disjoint.
    DisjointClasses(Vec<ClassExpression>),
    /// `SubObjectPropertyOf(sub super)`.
    SubObjectPropertyOf {
        /// The more specific property.
        sub_property: ObjectProperty,
        /// The more general property.
        super_property: ObjectProperty,
    },
    /// All listed properties are equivalent.
    EquivalentObjectProperties(Vec<ObjectProperty>),
    /// The two properties are inverses of each other.
    InverseObjectProperties(ObjectProperty, ObjectProperty),
    /// Subjects of the property belong to the domain class.
    ObjectPropertyDomain {
        /// The constrained property.
        property: ObjectProperty,
        /// The domain class.
        domain: ClassExpression,
    },
    /// Objects of the property belong to the range class.
    ObjectPropertyRange {
        /// The constrained property.
        property: ObjectProperty,
        /// The range class.
        range: ClassExpression,
    },
    /// Each individual has at most one filler for the property.
    FunctionalObjectProperty(ObjectProperty),
    /// Each filler identifies at most one subject.
    InverseFunctionalObjectProperty(ObjectProperty),
    /// The property is symmetric.
    SymmetricObjectProperty(ObjectProperty),
    /// The property is asymmetric.
    AsymmetricObjectProperty(ObjectProperty),
    /// The property is transitive.
    TransitiveObjectProperty(ObjectProperty),
    /// No individual relates to itself through the property.
    IrreflexiveObjectProperty(ObjectProperty),
    /// The individual is an instance of the class.
    ClassAssertion {
        /// The asserted class.
        class: ClassExpression,
        /// The typed individual.
        individual: Individual,
    },
    /// The source individual relates to the target through the property.
    ObjectPropertyAssertion {
        /// The relating property.
        property: ObjectProperty,
        /// The subject individual.
        source: Individual,
        /// The object individual.
        target: Individual,
    },
    /// All listed individuals denote the same thing.
    SameIndividual(Vec<Individual>),
    /// All listed individuals are pairwise distinct.
    DifferentIndividuals(Vec<Individual>),
    /// Declares a class.
    DeclareClass(Class),
    /// Declares an object property.
    DeclareObjectProperty(ObjectProperty),
    /// Declares a named individual.
    DeclareIndividual(Individual),
}

impl Axiom {
    /// Creates a subclass axiom.
    pub fn sub_class_of(
        sub_class: impl Into<ClassExpression>,
        super_class: impl Into<ClassExpression>,
    ) -> Self {
        Self::SubClassOf {
            sub_class: sub_class.into(),
            super_class: super_class.into(),
        }
    }

    /// Creates an equivalent-classes axiom.
    pub fn equivalent_classes(classes: Vec<ClassExpression>) -> Self {
        Self::EquivalentClasses(classes)
    }

    /// Creates a disjoint-classes axiom.
    pub fn disjoint_classes(classes: Vec<ClassExpression>) -> Self {
        Self::DisjointClasses(classes)
    }

    /// Creates a subproperty axiom.
    pub fn sub_object_property_of(
        sub_property: ObjectProperty,
        super_property: ObjectProperty,
    ) -> Self {
        Self::SubObjectPropertyOf {
            sub_property,
            super_property,
        }
    }

    /// Creates a domain axiom.
    pub fn object_property_domain(
        property: ObjectProperty,
        domain: impl Into<ClassExpression>,
    ) -> Self {
        Self::ObjectPropertyDomain {
            property,
            domain: domain.into(),
        }
    }

    /// Creates a range axiom.
    pub fn object_property_range(
        property: ObjectProperty,
        range: impl Into<ClassExpression>,
    ) -> Self {
        Self::ObjectPropertyRange {
            property,
            range: range.into(),
        }
    }

    /// Creates a class assertion.
    pub fn class_assertion(class: impl Into<ClassExpression>, individual: Individual) -> Self {
        Self::ClassAssertion {
            class: class.into(),
            individual,
        }
    }

    /// Creates a property assertion.
    pub fn object_property_assertion(
        property: ObjectProperty,
        source: Individual,
        target: Individual,
    ) -> Self {
        Self::ObjectPropertyAssertion {
            property,
            source,
            target,
        }
    }

    /// Creates a pairwise sameAs axiom.
    pub fn same_individual(a: Individual, b: Individual) -> Self {
        Self::SameIndividual(vec![a, b])
    }

    /// Creates a pairwise differentFrom axiom.
    pub fn different_individuals(a: Individual, b: Individual) -> Self {
        Self::DifferentIndividuals(vec![a, b])
    }
}

fn fmt_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubClassOf {
                sub_class,
                super_class,
            } => write!(f, "SubClassOf({sub_class} {super_class})"),
            Self::EquivalentClasses(classes) => {
                f.write_str("EquivalentClasses(")?;
                fmt_list(f, classes)?;
                f.write_str(")")
            }
            Self::DisjointClasses(classes) => {
                f.write_str("DisjointClasses(")?;
                fmt_list(f, classes)?;
                f.write_str(")")
            }
            Self::SubObjectPropertyOf {
                sub_property,
                super_property,
            } => write!(f, "SubObjectPropertyOf({sub_property} {super_property})"),
            Self::EquivalentObjectProperties(properties) => {
                f.write_str("EquivalentObjectProperties(")?;
                fmt_list(f, properties)?;
                f.write_str(")")
            }
            Self::InverseObjectProperties(a, b) => {
                write!(f, "InverseObjectProperties({a} {b})")
            }
            Self::ObjectPropertyDomain { property, domain } => {
                write!(f, "ObjectPropertyDomain({property} {domain})")
            }
            Self::ObjectPropertyRange { property, range } => {
                write!(f, "ObjectPropertyRange({property} {range})")
            }
            Self::FunctionalObjectProperty(property) => {
                write!(f, "FunctionalObjectProperty({property})")
            }
            Self::InverseFunctionalObjectProperty(property) => {
                write!(f, "InverseFunctionalObjectProperty({property})")
            }
            Self::SymmetricObjectProperty(property) => {
                write!(f, "SymmetricObjectProperty({property})")
            }
            Self::AsymmetricObjectProperty(property) => {
                write!(f, "AsymmetricObjectProperty({property})")
            }
            Self::TransitiveObjectProperty(property) => {
                write!(f, "TransitiveObjectProperty({property})")
            }
            Self::IrreflexiveObjectProperty(property) => {
                write!(f, "IrreflexiveObjectProperty({property})")
            }
            Self::ClassAssertion { class, individual } => {
                write!(f, "ClassAssertion({class} {individual})")
            }
            Self::ObjectPropertyAssertion {
                property,
                source,
                target,
            } => write!(f, "ObjectPropertyAssertion({property} {source} {target})"),
            Self::SameIndividual(individuals) => {
                f.write_str("SameIndividual(")?;
                fmt_list(f, individuals)?;
                f.write_str(")")
            }
            Self::DifferentIndividuals(individuals) => {
                f.write_str("DifferentIndividuals(")?;
                fmt_list(f, individuals)?;
                f.write_str(")")
            }
            Self::DeclareClass(class) => write!(f, "Declaration(Class({class}))"),
            Self::DeclareObjectProperty(property) => {
                write!(f, "Declaration(ObjectProperty({property}))")
            }
            Self::DeclareIndividual(individual) => {
                write!(f, "Declaration(NamedIndividual({individual}))")
            }
        }
    }
}
