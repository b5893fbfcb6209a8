//! Validation of ontologies against the supported OWL 2 RL subset.
//!
//! The rule families materialize facts over named classes only, so class
//! expressions are restricted by the position they appear in. Checks look
//! at the top-level connective of each position; operands of an allowed
//! connective are simply inert for derivation and never unsound.

use crate::axiom::Axiom;
use crate::error::{
    MalformedOntologyError, ProfileError, ProfileViolation, ProfileViolationKind, ReasonerError,
};
use crate::expression::ClassExpression;
use crate::ontology::Ontology;

/// Checks that the ontology is well-formed and inside the supported subset.
///
/// Structural defects are reported first; profile violations are collected
/// over the whole ontology and reported together, never one at a time.
pub(crate) fn validate(ontology: &Ontology) -> Result<(), ReasonerError> {
    check_well_formed(ontology)?;
    check_profile(ontology)?;
    Ok(())
}

fn check_well_formed(ontology: &Ontology) -> Result<(), ReasonerError> {
    let mut issues = Vec::new();
    for axiom in ontology.axioms() {
        match axiom {
            Axiom::EquivalentClasses(members) | Axiom::DisjointClasses(members)
                if members.len() < 2 =>
            {
                issues.push(format!("{axiom} needs at least two members"));
            }
            Axiom::EquivalentObjectProperties(members) if members.len() < 2 => {
                issues.push(format!("{axiom} needs at least two properties"));
            }
            Axiom::SameIndividual(members) | Axiom::DifferentIndividuals(members)
                if members.len() < 2 =>
            {
                issues.push(format!("{axiom} needs at least two individuals"));
            }
            _ => {}
        }
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(MalformedOntologyError::new(issues).into())
    }
}

fn check_profile(ontology: &Ontology) -> Result<(), ReasonerError> {
    let mut violations = Vec::new();
    for axiom in ontology.axioms() {
        match axiom {
            Axiom::SubClassOf {
                sub_class,
                super_class,
            } => {
                check_subclass_position(sub_class, axiom, &mut violations);
                check_superclass_position(super_class, axiom, &mut violations);
            }
            Axiom::EquivalentClasses(members) | Axiom::DisjointClasses(members) => {
                for member in members {
                    check_named_position(member, axiom, &mut violations);
                }
            }
            Axiom::ObjectPropertyDomain { domain, .. } => {
                check_named_position(domain, axiom, &mut violations);
            }
            Axiom::ObjectPropertyRange { range, .. } => {
                check_named_position(range, axiom, &mut violations);
            }
            Axiom::ClassAssertion { class, .. } => {
                check_named_position(class, axiom, &mut violations);
            }
            _ => {}
        }
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ProfileError::new(violations).into())
    }
}

/// Left-hand side of `SubClassOf`: named classes, intersections, unions,
/// existentials and value restrictions are allowed.
fn check_subclass_position(
    expr: &ClassExpression,
    axiom: &Axiom,
    violations: &mut Vec<ProfileViolation>,
) {
    let kind = match expr {
        ClassExpression::AllValuesFrom { .. } => {
            Some(ProfileViolationKind::UniversalInSubClassPosition)
        }
        ClassExpression::ComplementOf(_) => {
            Some(ProfileViolationKind::ComplementInSubClassPosition)
        }
        ClassExpression::OneOf(_) => Some(ProfileViolationKind::NominalInSubClassPosition),
        expr if expr.is_qualified_cardinality() => Some(ProfileViolationKind::QualifiedCardinality),
        ClassExpression::MinCardinality { .. }
        | ClassExpression::MaxCardinality { .. }
        | ClassExpression::ExactCardinality { .. } => {
            Some(ProfileViolationKind::UnsupportedExpression)
        }
        _ => None,
    };
    if let Some(kind) = kind {
        violations.push(ProfileViolation::new(kind, axiom));
    }
}

/// Right-hand side of `SubClassOf`: named classes, intersections,
/// complements, universals, value restrictions and unqualified maximum
/// cardinalities are allowed.
fn check_superclass_position(
    expr: &ClassExpression,
    axiom: &Axiom,
    violations: &mut Vec<ProfileViolation>,
) {
    let kind = match expr {
        ClassExpression::SomeValuesFrom { .. } => {
            Some(ProfileViolationKind::ExistentialInSuperClassPosition)
        }
        expr if expr.is_qualified_cardinality() => Some(ProfileViolationKind::QualifiedCardinality),
        ClassExpression::MinCardinality { .. } => {
            Some(ProfileViolationKind::MinCardinalityInSuperClassPosition)
        }
        ClassExpression::UnionOf(_)
        | ClassExpression::OneOf(_)
        | ClassExpression::ExactCardinality { .. } => {
            Some(ProfileViolationKind::UnsupportedExpression)
        }
        _ => None,
    };
    if let Some(kind) = kind {
        violations.push(ProfileViolation::new(kind, axiom));
    }
}

/// Positions the rule families consume directly: only named classes.
fn check_named_position(
    expr: &ClassExpression,
    axiom: &Axiom,
    violations: &mut Vec<ProfileViolation>,
) {
    let kind = match expr {
        ClassExpression::Class(_) => None,
        expr if expr.is_qualified_cardinality() => Some(ProfileViolationKind::QualifiedCardinality),
        _ => Some(ProfileViolationKind::UnsupportedExpression),
    };
    if let Some(kind) = kind {
        violations.push(ProfileViolation::new(kind, axiom));
    }
}
