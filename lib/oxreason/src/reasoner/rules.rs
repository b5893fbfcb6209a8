//! The forward-chaining rule families.
//!
//! Each family implements one scan pass: read the current closure, collect
//! candidate derivations, then apply them one by one. A pass is charged to
//! the shared budget when it starts; the deadline is polled before every
//! application and every accepted fact is charged against the axiom
//! ceiling. Rules only add facts, so families may run in any order without
//! changing the fixpoint.

use crate::axiom::Axiom;
use crate::reasoner::budget::{BudgetExceeded, ResourceBudget};
use crate::reasoner::closure::Closure;
use std::fmt;

/// The rule families the controller sweeps on every round.
///
/// The names group the OWL 2 RL/RDF rules each family implements; the W3C
/// rule identifiers are noted per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleFamily {
    /// Transitive closure of `SubClassOf` (composition behind cax-sco).
    ClassHierarchy,
    /// Transitive closure of `SubObjectPropertyOf` and propagation of
    /// property assertions to superproperties (prp-spo1).
    PropertyHierarchy,
    /// Domain and range typing of property assertions (prp-dom, prp-rng).
    DomainRange,
    /// Membership propagation along the class hierarchy (cax-sco).
    TypePropagation,
    /// Symmetric, transitive and inverse property rules plus the `sameAs`
    /// closure (prp-symp, prp-trp, prp-inv1, prp-inv2, eq-sym, eq-trans).
    PropertyCharacteristic,
}

impl RuleFamily {
    /// All families, in the order the controller sweeps them.
    pub fn all() -> &'static [Self] {
        &[
            Self::ClassHierarchy,
            Self::PropertyHierarchy,
            Self::DomainRange,
            Self::TypePropagation,
            Self::PropertyCharacteristic,
        ]
    }

    /// Stable identifier used in output.
    pub fn name(self) -> &'static str {
        match self {
            Self::ClassHierarchy => "class-hierarchy",
            Self::PropertyHierarchy => "property-hierarchy",
            Self::DomainRange => "domain-range",
            Self::TypePropagation => "type-propagation",
            Self::PropertyCharacteristic => "property-characteristics",
        }
    }
}

impl fmt::Display for RuleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs one scan pass of `family`, drawing the pass from the shared budget.
///
/// Returns whether the closure grew. A budget signal aborts the pass
/// mid-flight; everything inserted up to that point stays in the closure.
pub(crate) fn apply_family(
    family: RuleFamily,
    closure: &mut Closure,
    budget: &mut ResourceBudget,
) -> Result<bool, BudgetExceeded> {
    budget.begin_pass()?;
    match family {
        RuleFamily::ClassHierarchy => class_hierarchy_pass(closure, budget),
        RuleFamily::PropertyHierarchy => property_hierarchy_pass(closure, budget),
        RuleFamily::DomainRange => domain_range_pass(closure, budget),
        RuleFamily::TypePropagation => type_propagation_pass(closure, budget),
        RuleFamily::PropertyCharacteristic => property_characteristics_pass(closure, budget),
    }
}

/// `A ⊑ B` and `B ⊑ C` yield `A ⊑ C`.
fn class_hierarchy_pass(
    closure: &mut Closure,
    budget: &mut ResourceBudget,
) -> Result<bool, BudgetExceeded> {
    let mut candidates = Vec::new();
    let hierarchy = closure.class_hierarchy();
    for (sub, directs) in hierarchy {
        for mid in directs {
            if let Some(indirects) = hierarchy.get(mid) {
                for sup in indirects {
                    if sup != sub && !directs.contains(sup) {
                        candidates.push((sub.clone(), mid.clone(), sup.clone()));
                    }
                }
            }
        }
    }

    let mut changed = false;
    for (sub, mid, sup) in candidates {
        budget.check_interrupt()?;
        if closure.insert_sub_class(sub.clone(), sup.clone()) {
            changed = true;
            closure.log_inference(
                RuleFamily::ClassHierarchy,
                || Axiom::sub_class_of(sub.clone(), sup.clone()),
                || {
                    vec![
                        Axiom::sub_class_of(sub.clone(), mid.clone()),
                        Axiom::sub_class_of(mid.clone(), sup.clone()),
                    ]
                },
            );
            budget.record_inference()?;
        }
    }
    Ok(changed)
}

/// `p ⊑ q` and `q ⊑ r` yield `p ⊑ r`; `x p y` and `p ⊑ q` yield `x q y`.
fn property_hierarchy_pass(
    closure: &mut Closure,
    budget: &mut ResourceBudget,
) -> Result<bool, BudgetExceeded> {
    let mut changed = false;

    let mut compositions = Vec::new();
    let hierarchy = closure.property_hierarchy();
    for (sub, directs) in hierarchy {
        for mid in directs {
            if let Some(indirects) = hierarchy.get(mid) {
                for sup in indirects {
                    if sup != sub && !directs.contains(sup) {
                        compositions.push((sub.clone(), mid.clone(), sup.clone()));
                    }
                }
            }
        }
    }
    for (sub, mid, sup) in compositions {
        budget.check_interrupt()?;
        if closure.insert_sub_property(sub.clone(), sup.clone()) {
            changed = true;
            closure.log_inference(
                RuleFamily::PropertyHierarchy,
                || Axiom::sub_object_property_of(sub.clone(), sup.clone()),
                || {
                    vec![
                        Axiom::sub_object_property_of(sub.clone(), mid.clone()),
                        Axiom::sub_object_property_of(mid.clone(), sup.clone()),
                    ]
                },
            );
            budget.record_inference()?;
        }
    }

    let mut propagations = Vec::new();
    let hierarchy = closure.property_hierarchy();
    for ((source, property), targets) in closure.property_values() {
        if let Some(sups) = hierarchy.get(property) {
            for sup in sups {
                for target in targets {
                    propagations.push((
                        source.clone(),
                        property.clone(),
                        sup.clone(),
                        target.clone(),
                    ));
                }
            }
        }
    }
    for (source, property, sup, target) in propagations {
        budget.check_interrupt()?;
        if closure.insert_property_value(source.clone(), sup.clone(), target.clone()) {
            changed = true;
            closure.log_inference(
                RuleFamily::PropertyHierarchy,
                || Axiom::object_property_assertion(sup.clone(), source.clone(), target.clone()),
                || {
                    vec![
                        Axiom::object_property_assertion(
                            property.clone(),
                            source.clone(),
                            target.clone(),
                        ),
                        Axiom::sub_object_property_of(property.clone(), sup.clone()),
                    ]
                },
            );
            budget.record_inference()?;
        }
    }

    Ok(changed)
}

/// `p domain C` and `x p y` yield `x : C`; `p range C` and `x p y` yield
/// `y : C`.
fn domain_range_pass(
    closure: &mut Closure,
    budget: &mut ResourceBudget,
) -> Result<bool, BudgetExceeded> {
    let mut domain_candidates = Vec::new();
    let mut range_candidates = Vec::new();
    for ((source, property), targets) in closure.property_values() {
        if let Some(domains) = closure.property_domains().get(property) {
            // Any one target witnesses the assertion in the premises.
            if let Some(witness) = targets.iter().next() {
                for class in domains {
                    domain_candidates.push((
                        source.clone(),
                        class.clone(),
                        property.clone(),
                        witness.clone(),
                    ));
                }
            }
        }
        if let Some(ranges) = closure.property_ranges().get(property) {
            for target in targets {
                for class in ranges {
                    range_candidates.push((
                        target.clone(),
                        class.clone(),
                        property.clone(),
                        source.clone(),
                    ));
                }
            }
        }
    }

    let mut changed = false;
    for (individual, class, property, witness) in domain_candidates {
        budget.check_interrupt()?;
        if closure.insert_type(individual.clone(), class.clone()) {
            changed = true;
            closure.log_inference(
                RuleFamily::DomainRange,
                || Axiom::class_assertion(class.clone(), individual.clone()),
                || {
                    vec![
                        Axiom::object_property_assertion(
                            property.clone(),
                            individual.clone(),
                            witness.clone(),
                        ),
                        Axiom::object_property_domain(property.clone(), class.clone()),
                    ]
                },
            );
            budget.record_inference()?;
        }
    }
    for (individual, class, property, source) in range_candidates {
        budget.check_interrupt()?;
        if closure.insert_type(individual.clone(), class.clone()) {
            changed = true;
            closure.log_inference(
                RuleFamily::DomainRange,
                || Axiom::class_assertion(class.clone(), individual.clone()),
                || {
                    vec![
                        Axiom::object_property_assertion(
                            property.clone(),
                            source.clone(),
                            individual.clone(),
                        ),
                        Axiom::object_property_range(property.clone(), class.clone()),
                    ]
                },
            );
            budget.record_inference()?;
        }
    }
    Ok(changed)
}

/// `x : A` and `A ⊑ B` yield `x : B`.
fn type_propagation_pass(
    closure: &mut Closure,
    budget: &mut ResourceBudget,
) -> Result<bool, BudgetExceeded> {
    let mut candidates = Vec::new();
    for (individual, types) in closure.individual_types() {
        for class in types {
            if let Some(sups) = closure.class_hierarchy().get(class) {
                for sup in sups {
                    if !types.contains(sup) {
                        candidates.push((individual.clone(), class.clone(), sup.clone()));
                    }
                }
            }
        }
    }

    let mut changed = false;
    for (individual, class, sup) in candidates {
        budget.check_interrupt()?;
        if closure.insert_type(individual.clone(), sup.clone()) {
            changed = true;
            closure.log_inference(
                RuleFamily::TypePropagation,
                || Axiom::class_assertion(sup.clone(), individual.clone()),
                || {
                    vec![
                        Axiom::class_assertion(class.clone(), individual.clone()),
                        Axiom::sub_class_of(class.clone(), sup.clone()),
                    ]
                },
            );
            budget.record_inference()?;
        }
    }
    Ok(changed)
}

/// Symmetric, transitive and inverse property rules plus the `sameAs`
/// closure.
fn property_characteristics_pass(
    closure: &mut Closure,
    budget: &mut ResourceBudget,
) -> Result<bool, BudgetExceeded> {
    let mut changed = false;

    // prp-symp: x p y yields y p x for symmetric p.
    let mut mirrored = Vec::new();
    for ((source, property), targets) in closure.property_values() {
        if closure.symmetric_properties().contains(property) {
            for target in targets {
                mirrored.push((target.clone(), property.clone(), source.clone()));
            }
        }
    }
    for (source, property, target) in mirrored {
        budget.check_interrupt()?;
        if closure.insert_property_value(source.clone(), property.clone(), target.clone()) {
            changed = true;
            closure.log_inference(
                RuleFamily::PropertyCharacteristic,
                || Axiom::object_property_assertion(property.clone(), source.clone(), target.clone()),
                || {
                    vec![
                        Axiom::object_property_assertion(
                            property.clone(),
                            target.clone(),
                            source.clone(),
                        ),
                        Axiom::SymmetricObjectProperty(property.clone()),
                    ]
                },
            );
            budget.record_inference()?;
        }
    }

    // prp-trp: x p y and y p z yield x p z for transitive p.
    let mut chained = Vec::new();
    for ((source, property), mids) in closure.property_values() {
        if closure.transitive_properties().contains(property) {
            for mid in mids {
                if let Some(ends) = closure
                    .property_values()
                    .get(&(mid.clone(), property.clone()))
                {
                    for end in ends {
                        if !mids.contains(end) {
                            chained.push((
                                source.clone(),
                                property.clone(),
                                mid.clone(),
                                end.clone(),
                            ));
                        }
                    }
                }
            }
        }
    }
    for (source, property, mid, end) in chained {
        budget.check_interrupt()?;
        if closure.insert_property_value(source.clone(), property.clone(), end.clone()) {
            changed = true;
            closure.log_inference(
                RuleFamily::PropertyCharacteristic,
                || Axiom::object_property_assertion(property.clone(), source.clone(), end.clone()),
                || {
                    vec![
                        Axiom::object_property_assertion(
                            property.clone(),
                            source.clone(),
                            mid.clone(),
                        ),
                        Axiom::object_property_assertion(
                            property.clone(),
                            mid.clone(),
                            end.clone(),
                        ),
                        Axiom::TransitiveObjectProperty(property.clone()),
                    ]
                },
            );
            budget.record_inference()?;
        }
    }

    // prp-inv1/prp-inv2: x p y yields y q x for each declared inverse q.
    let mut inverted = Vec::new();
    for ((source, property), targets) in closure.property_values() {
        if let Some(inverses) = closure.inverse_properties().get(property) {
            for inverse in inverses {
                for target in targets {
                    inverted.push((
                        target.clone(),
                        inverse.clone(),
                        source.clone(),
                        property.clone(),
                    ));
                }
            }
        }
    }
    for (source, property, target, original) in inverted {
        budget.check_interrupt()?;
        if closure.insert_property_value(source.clone(), property.clone(), target.clone()) {
            changed = true;
            closure.log_inference(
                RuleFamily::PropertyCharacteristic,
                || Axiom::object_property_assertion(property.clone(), source.clone(), target.clone()),
                || {
                    vec![
                        Axiom::object_property_assertion(
                            original.clone(),
                            target.clone(),
                            source.clone(),
                        ),
                        Axiom::InverseObjectProperties(original.clone(), property.clone()),
                    ]
                },
            );
            budget.record_inference()?;
        }
    }

    // eq-sym: sameAs(x, y) yields sameAs(y, x).
    let mut symmetries = Vec::new();
    for (a, others) in closure.same_as() {
        for b in others {
            if !closure.is_same_as(b, a) {
                symmetries.push((b.clone(), a.clone()));
            }
        }
    }
    for (a, b) in symmetries {
        budget.check_interrupt()?;
        if closure.insert_same_as(a.clone(), b.clone()) {
            changed = true;
            closure.log_inference(
                RuleFamily::PropertyCharacteristic,
                || Axiom::same_individual(a.clone(), b.clone()),
                || vec![Axiom::same_individual(b.clone(), a.clone())],
            );
            budget.record_inference()?;
        }
    }

    // eq-trans: sameAs(x, y) and sameAs(y, z) yield sameAs(x, z).
    let mut transits = Vec::new();
    for (a, bs) in closure.same_as() {
        for b in bs {
            if let Some(cs) = closure.same_as().get(b) {
                for c in cs {
                    if c != a && !bs.contains(c) {
                        transits.push((a.clone(), b.clone(), c.clone()));
                    }
                }
            }
        }
    }
    for (a, b, c) in transits {
        budget.check_interrupt()?;
        if closure.insert_same_as(a.clone(), c.clone()) {
            changed = true;
            closure.log_inference(
                RuleFamily::PropertyCharacteristic,
                || Axiom::same_individual(a.clone(), c.clone()),
                || {
                    vec![
                        Axiom::same_individual(a.clone(), b.clone()),
                        Axiom::same_individual(b.clone(), c.clone()),
                    ]
                },
            );
            budget.record_inference()?;
        }
    }

    Ok(changed)
}
