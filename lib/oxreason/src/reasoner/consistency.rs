//! Consistency checking over the computed closure.
//!
//! Every check only reads facts already in the closure, so a reported
//! contradiction is real even when classification stopped early. The
//! converse does not hold: an incomplete closure may simply not contain
//! the facts a contradiction needs yet.

use crate::axiom::Axiom;
use crate::entity::{Individual, ObjectProperty};
use crate::reasoner::closure::Closure;
use crate::reasoner::report::{Inconsistency, InconsistencyKind};
use rustc_hash::FxHashMap;

/// Scans the closure for contradictions.
///
/// Checks run in a fixed order and the first hit is returned, carrying the
/// minimal set of facts that jointly produce it.
pub(crate) fn check(closure: &Closure) -> Option<Inconsistency> {
    check_same_and_different(closure)
        .or_else(|| check_disjoint_membership(closure))
        .or_else(|| check_functional(closure))
        .or_else(|| check_inverse_functional(closure))
        .or_else(|| check_asymmetric(closure))
        .or_else(|| check_irreflexive(closure))
}

fn check_same_and_different(closure: &Closure) -> Option<Inconsistency> {
    for (a, b) in closure.different_from() {
        if closure.is_same_as(a, b) {
            return Some(Inconsistency::new(
                InconsistencyKind::SameAndDifferent,
                vec![
                    Axiom::same_individual(a.clone(), b.clone()),
                    Axiom::different_individuals(a.clone(), b.clone()),
                ],
            ));
        }
    }
    None
}

fn check_disjoint_membership(closure: &Closure) -> Option<Inconsistency> {
    for (first, second) in closure.disjoint_class_pairs() {
        for (individual, types) in closure.individual_types() {
            if types.contains(first) && types.contains(second) {
                return Some(Inconsistency::new(
                    InconsistencyKind::DisjointMembership,
                    vec![
                        Axiom::class_assertion(first.clone(), individual.clone()),
                        Axiom::class_assertion(second.clone(), individual.clone()),
                        Axiom::disjoint_classes(vec![
                            first.clone().into(),
                            second.clone().into(),
                        ]),
                    ],
                ));
            }
        }
    }
    None
}

/// Distinct values under a functional property are only a contradiction
/// when the closure does not identify them via `sameAs`.
fn check_functional(closure: &Closure) -> Option<Inconsistency> {
    for ((source, property), targets) in closure.property_values() {
        if !closure.functional_properties().contains(property) || targets.len() < 2 {
            continue;
        }
        let targets: Vec<_> = targets.iter().collect();
        for (i, first) in targets.iter().enumerate() {
            for second in &targets[i + 1..] {
                if !closure.is_same_as(first, second) && !closure.is_same_as(second, first) {
                    return Some(Inconsistency::new(
                        InconsistencyKind::FunctionalConflict,
                        vec![
                            Axiom::object_property_assertion(
                                property.clone(),
                                source.clone(),
                                (*first).clone(),
                            ),
                            Axiom::object_property_assertion(
                                property.clone(),
                                source.clone(),
                                (*second).clone(),
                            ),
                            Axiom::FunctionalObjectProperty(property.clone()),
                        ],
                    ));
                }
            }
        }
    }
    None
}

fn check_inverse_functional(closure: &Closure) -> Option<Inconsistency> {
    let mut sources_by_target: FxHashMap<(&ObjectProperty, &Individual), Vec<&Individual>> =
        FxHashMap::default();
    for ((source, property), targets) in closure.property_values() {
        if closure.inverse_functional_properties().contains(property) {
            for target in targets {
                sources_by_target
                    .entry((property, target))
                    .or_default()
                    .push(source);
            }
        }
    }
    for ((property, target), sources) in &sources_by_target {
        for (i, first) in sources.iter().enumerate() {
            for second in &sources[i + 1..] {
                if !closure.is_same_as(first, second) && !closure.is_same_as(second, first) {
                    return Some(Inconsistency::new(
                        InconsistencyKind::InverseFunctionalConflict,
                        vec![
                            Axiom::object_property_assertion(
                                (*property).clone(),
                                (*first).clone(),
                                (*target).clone(),
                            ),
                            Axiom::object_property_assertion(
                                (*property).clone(),
                                (*second).clone(),
                                (*target).clone(),
                            ),
                            Axiom::InverseFunctionalObjectProperty((*property).clone()),
                        ],
                    ));
                }
            }
        }
    }
    None
}

fn check_asymmetric(closure: &Closure) -> Option<Inconsistency> {
    for ((source, property), targets) in closure.property_values() {
        if !closure.asymmetric_properties().contains(property) {
            continue;
        }
        for target in targets {
            let reverse = closure
                .property_values()
                .get(&(target.clone(), property.clone()));
            if reverse.is_some_and(|set| set.contains(source)) {
                return Some(Inconsistency::new(
                    InconsistencyKind::AsymmetricViolation,
                    vec![
                        Axiom::object_property_assertion(
                            property.clone(),
                            source.clone(),
                            target.clone(),
                        ),
                        Axiom::object_property_assertion(
                            property.clone(),
                            target.clone(),
                            source.clone(),
                        ),
                        Axiom::AsymmetricObjectProperty(property.clone()),
                    ],
                ));
            }
        }
    }
    None
}

fn check_irreflexive(closure: &Closure) -> Option<Inconsistency> {
    for ((source, property), targets) in closure.property_values() {
        if closure.irreflexive_properties().contains(property) && targets.contains(source) {
            return Some(Inconsistency::new(
                InconsistencyKind::IrreflexiveViolation,
                vec![
                    Axiom::object_property_assertion(
                        property.clone(),
                        source.clone(),
                        source.clone(),
                    ),
                    Axiom::IrreflexiveObjectProperty(property.clone()),
                ],
            ));
        }
    }
    None
}
