//! The shared fact store the rule families read from and write into.
//!
//! Every map is inflationary: facts are only ever added, never removed, so
//! the closure grows monotonically toward the fixpoint and any prefix of a
//! session is sound.

use crate::axiom::Axiom;
use crate::entity::{Class, Individual, ObjectProperty};
use crate::expression::ClassExpression;
use crate::ontology::Ontology;
use crate::reasoner::budget::ReasonerConfig;
use crate::reasoner::report::{Inference, Justification};
use crate::reasoner::rules::RuleFamily;
use rustc_hash::{FxHashMap, FxHashSet};

/// Materialized facts of one reasoning session.
#[derive(Debug, Default)]
pub(crate) struct Closure {
    /// subclass -> set of superclasses
    class_hierarchy: FxHashMap<Class, FxHashSet<Class>>,
    /// subproperty -> set of superproperties
    property_hierarchy: FxHashMap<ObjectProperty, FxHashSet<ObjectProperty>>,
    /// property -> set of domain classes
    property_domains: FxHashMap<ObjectProperty, FxHashSet<Class>>,
    /// property -> set of range classes
    property_ranges: FxHashMap<ObjectProperty, FxHashSet<Class>>,
    /// individual -> set of classes
    individual_types: FxHashMap<Individual, FxHashSet<Class>>,
    /// (subject, property) -> set of objects
    property_values: FxHashMap<(Individual, ObjectProperty), FxHashSet<Individual>>,
    /// sameAs facts, stored directed; the symmetry rule derives mirrors
    same_as: FxHashMap<Individual, FxHashSet<Individual>>,
    /// differentFrom pairs, stored in both orders
    different_from: FxHashSet<(Individual, Individual)>,
    /// disjoint class pairs, one entry per unordered pair
    disjoint_classes: FxHashSet<(Class, Class)>,
    /// property -> set of declared inverses
    inverse_properties: FxHashMap<ObjectProperty, FxHashSet<ObjectProperty>>,
    symmetric_properties: FxHashSet<ObjectProperty>,
    transitive_properties: FxHashSet<ObjectProperty>,
    functional_properties: FxHashSet<ObjectProperty>,
    inverse_functional_properties: FxHashSet<ObjectProperty>,
    asymmetric_properties: FxHashSet<ObjectProperty>,
    irreflexive_properties: FxHashSet<ObjectProperty>,
    /// derivation log, filled only when materialization is on
    inferred: Vec<Inference>,
    /// individual -> class -> provenance, filled only when tracking is on
    type_provenance: FxHashMap<Individual, FxHashMap<Class, Justification>>,
    materialize: bool,
    track_explanations: bool,
}

impl Closure {
    pub(crate) fn new(config: &ReasonerConfig) -> Self {
        Self {
            materialize: config.materialize,
            track_explanations: config.track_explanations,
            ..Self::default()
        }
    }

    /// Loads the asserted facts of the ontology.
    ///
    /// Seeded facts are not charged to any budget and produce no log
    /// entries; only what the rule families add on top counts as inferred.
    pub(crate) fn seed(&mut self, ontology: &Ontology) {
        for axiom in ontology.axioms() {
            match axiom {
                Axiom::SubClassOf {
                    sub_class,
                    super_class,
                } => {
                    if let (ClassExpression::Class(sub), ClassExpression::Class(sup)) =
                        (sub_class, super_class)
                    {
                        self.insert_sub_class(sub.clone(), sup.clone());
                    }
                }
                Axiom::EquivalentClasses(classes) => {
                    // Equivalent classes are mutual subclasses.
                    let named: Vec<_> = classes.iter().filter_map(ClassExpression::as_class).collect();
                    for a in &named {
                        for b in &named {
                            self.insert_sub_class((*a).clone(), (*b).clone());
                        }
                    }
                }
                Axiom::DisjointClasses(classes) => {
                    let named: Vec<_> = classes.iter().filter_map(ClassExpression::as_class).collect();
                    for (i, a) in named.iter().enumerate() {
                        for b in &named[i + 1..] {
                            self.disjoint_classes
                                .insert(((*a).clone(), (*b).clone()));
                        }
                    }
                }
                Axiom::SubObjectPropertyOf {
                    sub_property,
                    super_property,
                } => {
                    self.insert_sub_property(sub_property.clone(), super_property.clone());
                }
                Axiom::EquivalentObjectProperties(properties) => {
                    // Equivalent properties are mutual subproperties.
                    for a in properties {
                        for b in properties {
                            self.insert_sub_property(a.clone(), b.clone());
                        }
                    }
                }
                Axiom::InverseObjectProperties(first, second) => {
                    self.inverse_properties
                        .entry(first.clone())
                        .or_default()
                        .insert(second.clone());
                    self.inverse_properties
                        .entry(second.clone())
                        .or_default()
                        .insert(first.clone());
                }
                Axiom::ObjectPropertyDomain {
                    property,
                    domain: ClassExpression::Class(class),
                } => {
                    self.property_domains
                        .entry(property.clone())
                        .or_default()
                        .insert(class.clone());
                }
                Axiom::ObjectPropertyRange {
                    property,
                    range: ClassExpression::Class(class),
                } => {
                    self.property_ranges
                        .entry(property.clone())
                        .or_default()
                        .insert(class.clone());
                }
                Axiom::FunctionalObjectProperty(property) => {
                    self.functional_properties.insert(property.clone());
                }
                Axiom::InverseFunctionalObjectProperty(property) => {
                    self.inverse_functional_properties.insert(property.clone());
                }
                Axiom::SymmetricObjectProperty(property) => {
                    self.symmetric_properties.insert(property.clone());
                }
                Axiom::AsymmetricObjectProperty(property) => {
                    self.asymmetric_properties.insert(property.clone());
                }
                Axiom::TransitiveObjectProperty(property) => {
                    self.transitive_properties.insert(property.clone());
                }
                Axiom::IrreflexiveObjectProperty(property) => {
                    self.irreflexive_properties.insert(property.clone());
                }
                Axiom::ClassAssertion {
                    class: ClassExpression::Class(class),
                    individual,
                } => {
                    self.insert_type(individual.clone(), class.clone());
                }
                Axiom::ObjectPropertyAssertion {
                    property,
                    source,
                    target,
                } => {
                    self.insert_property_value(source.clone(), property.clone(), target.clone());
                }
                Axiom::SameIndividual(individuals) => {
                    for a in individuals {
                        for b in individuals {
                            self.insert_same_as(a.clone(), b.clone());
                        }
                    }
                }
                Axiom::DifferentIndividuals(individuals) => {
                    for (i, a) in individuals.iter().enumerate() {
                        for b in &individuals[i + 1..] {
                            self.insert_different_from(a.clone(), b.clone());
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Adds `sub ⊑ sup`. Self-subsumptions are tautological and skipped.
    pub(crate) fn insert_sub_class(&mut self, sub: Class, sup: Class) -> bool {
        if sub == sup {
            return false;
        }
        self.class_hierarchy.entry(sub).or_default().insert(sup)
    }

    pub(crate) fn insert_sub_property(
        &mut self,
        sub: ObjectProperty,
        sup: ObjectProperty,
    ) -> bool {
        if sub == sup {
            return false;
        }
        self.property_hierarchy.entry(sub).or_default().insert(sup)
    }

    pub(crate) fn insert_type(&mut self, individual: Individual, class: Class) -> bool {
        self.individual_types
            .entry(individual)
            .or_default()
            .insert(class)
    }

    pub(crate) fn insert_property_value(
        &mut self,
        source: Individual,
        property: ObjectProperty,
        target: Individual,
    ) -> bool {
        self.property_values
            .entry((source, property))
            .or_default()
            .insert(target)
    }

    /// Adds a directed `sameAs(a, b)` fact. Reflexive pairs are skipped.
    pub(crate) fn insert_same_as(&mut self, a: Individual, b: Individual) -> bool {
        if a == b {
            return false;
        }
        self.same_as.entry(a).or_default().insert(b)
    }

    pub(crate) fn insert_different_from(&mut self, a: Individual, b: Individual) -> bool {
        if a == b {
            return false;
        }
        let new = self.different_from.insert((a.clone(), b.clone()));
        self.different_from.insert((b, a));
        new
    }

    /// Records one derived fact in the log and, for type facts, in the
    /// provenance index. Both builders run lazily so disabled features cost
    /// nothing.
    pub(crate) fn log_inference(
        &mut self,
        rule: RuleFamily,
        axiom: impl FnOnce() -> Axiom,
        premises: impl FnOnce() -> Vec<Axiom>,
    ) {
        if !self.materialize && !self.track_explanations {
            return;
        }
        let axiom = axiom();
        let premises = if self.track_explanations {
            premises()
        } else {
            Vec::new()
        };
        if self.track_explanations {
            if let Axiom::ClassAssertion {
                class: ClassExpression::Class(class),
                individual,
            } = &axiom
            {
                self.type_provenance
                    .entry(individual.clone())
                    .or_default()
                    .insert(class.clone(), Justification::new(rule, premises.clone()));
            }
        }
        if self.materialize {
            self.inferred.push(Inference::new(rule, axiom, premises));
        }
    }

    pub(crate) fn take_inferences(&mut self) -> Vec<Inference> {
        std::mem::take(&mut self.inferred)
    }

    pub(crate) fn take_explanations(
        &mut self,
    ) -> FxHashMap<Individual, FxHashMap<Class, Justification>> {
        std::mem::take(&mut self.type_provenance)
    }

    pub(crate) fn class_hierarchy(&self) -> &FxHashMap<Class, FxHashSet<Class>> {
        &self.class_hierarchy
    }

    pub(crate) fn property_hierarchy(
        &self,
    ) -> &FxHashMap<ObjectProperty, FxHashSet<ObjectProperty>> {
        &self.property_hierarchy
    }

    pub(crate) fn property_domains(&self) -> &FxHashMap<ObjectProperty, FxHashSet<Class>> {
        &self.property_domains
    }

    pub(crate) fn property_ranges(&self) -> &FxHashMap<ObjectProperty, FxHashSet<Class>> {
        &self.property_ranges
    }

    pub(crate) fn individual_types(&self) -> &FxHashMap<Individual, FxHashSet<Class>> {
        &self.individual_types
    }

    pub(crate) fn property_values(
        &self,
    ) -> &FxHashMap<(Individual, ObjectProperty), FxHashSet<Individual>> {
        &self.property_values
    }

    pub(crate) fn same_as(&self) -> &FxHashMap<Individual, FxHashSet<Individual>> {
        &self.same_as
    }

    /// Whether `sameAs(a, b)` is in the closure.
    pub(crate) fn is_same_as(&self, a: &Individual, b: &Individual) -> bool {
        self.same_as.get(a).is_some_and(|set| set.contains(b))
    }

    pub(crate) fn different_from(&self) -> &FxHashSet<(Individual, Individual)> {
        &self.different_from
    }

    pub(crate) fn disjoint_class_pairs(&self) -> &FxHashSet<(Class, Class)> {
        &self.disjoint_classes
    }

    pub(crate) fn inverse_properties(
        &self,
    ) -> &FxHashMap<ObjectProperty, FxHashSet<ObjectProperty>> {
        &self.inverse_properties
    }

    pub(crate) fn symmetric_properties(&self) -> &FxHashSet<ObjectProperty> {
        &self.symmetric_properties
    }

    pub(crate) fn transitive_properties(&self) -> &FxHashSet<ObjectProperty> {
        &self.transitive_properties
    }

    pub(crate) fn functional_properties(&self) -> &FxHashSet<ObjectProperty> {
        &self.functional_properties
    }

    pub(crate) fn inverse_functional_properties(&self) -> &FxHashSet<ObjectProperty> {
        &self.inverse_functional_properties
    }

    pub(crate) fn asymmetric_properties(&self) -> &FxHashSet<ObjectProperty> {
        &self.asymmetric_properties
    }

    pub(crate) fn irreflexive_properties(&self) -> &FxHashSet<ObjectProperty> {
        &self.irreflexive_properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axiom::Axiom;

    fn class(name: &str) -> Class {
        Class::new_from_iri(format!("http://example.com/{name}")).unwrap()
    }

    fn property(name: &str) -> ObjectProperty {
        ObjectProperty::new_from_iri(format!("http://example.com/{name}")).unwrap()
    }

    fn individual(name: &str) -> Individual {
        Individual::new_from_iri(format!("http://example.com/{name}")).unwrap()
    }

    #[test]
    fn test_seed_basic_ontology() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(Axiom::sub_class_of(class("A"), class("B")));
        ontology.add_axiom(Axiom::class_assertion(class("A"), individual("x")));
        ontology.add_axiom(Axiom::object_property_assertion(
            property("p"),
            individual("x"),
            individual("y"),
        ));
        ontology.add_axiom(Axiom::TransitiveObjectProperty(property("p")));

        let mut closure = Closure::new(&ReasonerConfig::default());
        closure.seed(&ontology);

        assert!(closure.class_hierarchy()[&class("A")].contains(&class("B")));
        assert!(closure.individual_types()[&individual("x")].contains(&class("A")));
        assert!(
            closure.property_values()[&(individual("x"), property("p"))]
                .contains(&individual("y"))
        );
        assert!(closure.transitive_properties().contains(&property("p")));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut closure = Closure::new(&ReasonerConfig::default());
        assert!(closure.insert_sub_class(class("A"), class("B")));
        assert!(!closure.insert_sub_class(class("A"), class("B")));
        assert!(closure.insert_type(individual("x"), class("A")));
        assert!(!closure.insert_type(individual("x"), class("A")));
    }

    #[test]
    fn test_self_subsumption_is_skipped() {
        let mut closure = Closure::new(&ReasonerConfig::default());
        assert!(!closure.insert_sub_class(class("A"), class("A")));
        assert!(!closure.insert_sub_property(property("p"), property("p")));
        assert!(!closure.insert_same_as(individual("x"), individual("x")));
        assert!(closure.class_hierarchy().is_empty());
    }

    #[test]
    fn test_different_from_is_symmetric() {
        let mut closure = Closure::new(&ReasonerConfig::default());
        assert!(closure.insert_different_from(individual("x"), individual("y")));
        assert!(
            closure
                .different_from()
                .contains(&(individual("y"), individual("x")))
        );
    }

    #[test]
    fn test_same_as_is_directed() {
        let mut closure = Closure::new(&ReasonerConfig::default());
        closure.insert_same_as(individual("x"), individual("y"));
        assert!(closure.is_same_as(&individual("x"), &individual("y")));
        assert!(!closure.is_same_as(&individual("y"), &individual("x")));
    }

    #[test]
    fn test_equivalence_seeds_mutual_subsumption() {
        let mut ontology = Ontology::new(None);
        ontology.add_axiom(Axiom::equivalent_classes(vec![
            class("A").into(),
            class("B").into(),
        ]));
        let mut closure = Closure::new(&ReasonerConfig::default());
        closure.seed(&ontology);
        assert!(closure.class_hierarchy()[&class("A")].contains(&class("B")));
        assert!(closure.class_hierarchy()[&class("B")].contains(&class("A")));
    }

    #[test]
    fn test_log_obeys_materialization_flag() {
        let config = ReasonerConfig::default().without_materialization();
        let mut closure = Closure::new(&config);
        closure.insert_sub_class(class("A"), class("B"));
        closure.log_inference(
            RuleFamily::ClassHierarchy,
            || Axiom::sub_class_of(class("A"), class("B")),
            Vec::new,
        );
        assert!(closure.take_inferences().is_empty());
    }

    #[test]
    fn test_provenance_recorded_for_type_facts() {
        let config = ReasonerConfig::default().with_explanations();
        let mut closure = Closure::new(&config);
        closure.insert_type(individual("x"), class("B"));
        closure.log_inference(
            RuleFamily::TypePropagation,
            || Axiom::class_assertion(class("B"), individual("x")),
            || {
                vec![
                    Axiom::class_assertion(class("A"), individual("x")),
                    Axiom::sub_class_of(class("A"), class("B")),
                ]
            },
        );
        let explanations = closure.take_explanations();
        let justification = &explanations[&individual("x")][&class("B")];
        assert_eq!(justification.rule(), RuleFamily::TypePropagation);
        assert_eq!(justification.premises().len(), 2);
    }
}
