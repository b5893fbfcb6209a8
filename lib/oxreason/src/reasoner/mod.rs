//! OWL 2 RL reasoning engine.
//!
//! Forward chaining over the supported OWL 2 RL subset: a controller sweeps
//! the rule families round-robin until no family adds a fact, all of them
//! drawing on one shared [`ResourceBudget`]. Hitting a limit is a reported
//! status, never an error, and the closure built so far stays queryable.

mod budget;
mod closure;
mod consistency;
mod profile;
mod report;
mod rules;

pub use budget::{DEFAULT_MAX_ITERATIONS, ReasonerConfig};
pub use report::{
    ConsistencyStatus, Inconsistency, InconsistencyKind, Inference, Justification,
    ReasoningResult, ReasoningStatus,
};
pub use rules::RuleFamily;

use crate::entity::{Class, Individual, ObjectProperty};
use crate::error::ReasonerError;
use crate::ontology::Ontology;
use budget::{BudgetExceeded, ResourceBudget};
use closure::Closure;
use std::fmt;

/// Trait for OWL reasoners.
pub trait Reasoner {
    /// Runs classification to the fixpoint, or until a limit stops it.
    ///
    /// Idempotent: the first call computes, later calls return the cached
    /// outcome.
    fn classify(&mut self) -> Result<ReasoningResult, ReasonerError>;

    /// Whether the ontology is consistent, classifying first if needed.
    fn is_consistent(&mut self) -> Result<bool, ReasonerError>;

    /// All classes the individual is known to belong to.
    fn types_of(&self, individual: &Individual) -> Vec<&Class>;

    /// All instances of a class (including via subclass reasoning).
    fn instances_of(&self, class: &Class, direct: bool) -> Vec<&Individual>;

    /// All superclasses of a class (including indirect).
    fn super_classes_of(&self, class: &Class, direct: bool) -> Vec<&Class>;

    /// All subclasses of a class (including indirect).
    fn sub_classes_of(&self, class: &Class, direct: bool) -> Vec<&Class>;

    /// All classes mutually subsumed with the given class.
    fn equivalent_classes_of(&self, class: &Class) -> Vec<&Class>;

    /// All objects related to the individual through the property.
    fn property_values_of(
        &self,
        individual: &Individual,
        property: &ObjectProperty,
    ) -> Vec<&Individual>;

    /// The derived facts of the last classification.
    fn inferences(&self) -> &[Inference];
}

/// Controller states of a reasoning session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Idle,
    Validating,
    Classifying,
    Finished(ReasoningStatus),
}

/// OWL 2 RL forward-chaining reasoner.
#[derive(Debug)]
pub struct RlReasoner<'a> {
    /// Reference to the source ontology
    ontology: &'a Ontology,
    /// Configured limits
    config: ReasonerConfig,
    /// Fact store shared by all rule families
    closure: Closure,
    /// Controller state
    state: SessionState,
    /// Cached outcome of the first classification
    outcome: Option<ReasoningResult>,
}

impl<'a> RlReasoner<'a> {
    /// Creates a reasoner with default limits.
    pub fn new(ontology: &'a Ontology) -> Self {
        Self::with_config(ontology, ReasonerConfig::default())
    }

    /// Creates a reasoner with custom limits.
    pub fn with_config(ontology: &'a Ontology, config: ReasonerConfig) -> Self {
        Self {
            ontology,
            config,
            closure: Closure::default(),
            state: SessionState::Idle,
            outcome: None,
        }
    }

    /// The configured limits.
    pub fn config(&self) -> &ReasonerConfig {
        &self.config
    }

    fn run_session(&mut self) -> Result<ReasoningResult, ReasonerError> {
        self.state = SessionState::Validating;
        if let Err(e) = profile::validate(self.ontology) {
            self.state = SessionState::Idle;
            return Err(e);
        }

        self.state = SessionState::Classifying;
        self.closure = Closure::new(&self.config);
        self.closure.seed(self.ontology);

        let mut resource_budget = ResourceBudget::new(&self.config);
        let mut rounds = 0_usize;
        let mut status = ReasoningStatus::Complete;
        'sweep: loop {
            let mut any_changed = false;
            for family in RuleFamily::all() {
                match rules::apply_family(*family, &mut self.closure, &mut resource_budget) {
                    Ok(changed) => any_changed |= changed,
                    Err(exceeded) => {
                        status = status_of(exceeded);
                        break 'sweep;
                    }
                }
            }
            rounds += 1;
            if !any_changed {
                break;
            }
        }

        // The verdict is computed even over a truncated closure: everything
        // in it is sound, so a contradiction found there is real.
        let consistency = if self.config.check_consistency {
            consistency_of(&self.closure)
        } else {
            ConsistencyStatus::NotChecked
        };

        let result = ReasoningResult::new(
            status,
            resource_budget.axioms_so_far(),
            consistency,
            self.closure.take_inferences(),
            self.closure.take_explanations(),
            rounds,
            resource_budget.iterations_used(),
            resource_budget.elapsed(),
        );
        self.state = SessionState::Finished(status);
        Ok(result)
    }
}

fn status_of(exceeded: BudgetExceeded) -> ReasoningStatus {
    match exceeded {
        BudgetExceeded::Iterations => ReasoningStatus::IncompleteIterationLimit,
        BudgetExceeded::Deadline | BudgetExceeded::Cancelled => ReasoningStatus::IncompleteTimeout,
        BudgetExceeded::Axioms => ReasoningStatus::IncompleteAxiomLimit,
    }
}

fn consistency_of(closure: &Closure) -> ConsistencyStatus {
    match consistency::check(closure) {
        Some(inconsistency) => ConsistencyStatus::Inconsistent(inconsistency),
        None => ConsistencyStatus::Consistent,
    }
}

impl Reasoner for RlReasoner<'_> {
    fn classify(&mut self) -> Result<ReasoningResult, ReasonerError> {
        if let Some(outcome) = &self.outcome {
            return Ok(outcome.clone());
        }
        let outcome = self.run_session()?;
        self.outcome = Some(outcome.clone());
        Ok(outcome)
    }

    fn is_consistent(&mut self) -> Result<bool, ReasonerError> {
        let result = self.classify()?;
        if !matches!(result.consistency(), ConsistencyStatus::NotChecked) {
            return Ok(!result.consistency().is_inconsistent());
        }
        // The session ran with the check disabled; run it on demand and
        // patch the cached outcome so later calls agree.
        let verdict = consistency_of(&self.closure);
        let consistent = !verdict.is_inconsistent();
        if let Some(outcome) = self.outcome.as_mut() {
            outcome.set_consistency(verdict);
        }
        Ok(consistent)
    }

    fn types_of(&self, individual: &Individual) -> Vec<&Class> {
        self.closure
            .individual_types()
            .get(individual)
            .map(|types| types.iter().collect())
            .unwrap_or_default()
    }

    fn instances_of(&self, class: &Class, direct: bool) -> Vec<&Individual> {
        let mut result = Vec::new();
        for (individual, types) in self.closure.individual_types() {
            if types.contains(class) {
                if direct {
                    let has_more_specific = types.iter().any(|t| {
                        t != class
                            && self
                                .closure
                                .class_hierarchy()
                                .get(t)
                                .is_some_and(|sups| sups.contains(class))
                    });
                    if !has_more_specific {
                        result.push(individual);
                    }
                } else {
                    result.push(individual);
                }
            }
        }
        result
    }

    fn super_classes_of(&self, class: &Class, direct: bool) -> Vec<&Class> {
        let hierarchy = self.closure.class_hierarchy();
        if direct {
            hierarchy
                .get(class)
                .map(|supers| {
                    supers
                        .iter()
                        .filter(|&sup| {
                            !supers.iter().any(|mid| {
                                mid != sup
                                    && hierarchy.get(mid).is_some_and(|mids| mids.contains(sup))
                            })
                        })
                        .collect()
                })
                .unwrap_or_default()
        } else {
            hierarchy
                .get(class)
                .map(|supers| supers.iter().collect())
                .unwrap_or_default()
        }
    }

    fn sub_classes_of(&self, class: &Class, direct: bool) -> Vec<&Class> {
        let hierarchy = self.closure.class_hierarchy();
        let mut result = Vec::new();
        for (sub, supers) in hierarchy {
            if supers.contains(class) {
                if direct {
                    let has_intermediate = supers.iter().any(|mid| {
                        mid != class
                            && hierarchy.get(mid).is_some_and(|mids| mids.contains(class))
                    });
                    if !has_intermediate {
                        result.push(sub);
                    }
                } else {
                    result.push(sub);
                }
            }
        }
        result
    }

    fn equivalent_classes_of(&self, class: &Class) -> Vec<&Class> {
        let hierarchy = self.closure.class_hierarchy();
        let mut result = Vec::new();
        if let Some(supers) = hierarchy.get(class) {
            for sup in supers {
                if hierarchy.get(sup).is_some_and(|theirs| theirs.contains(class)) {
                    result.push(sup);
                }
            }
        }
        result
    }

    fn property_values_of(
        &self,
        individual: &Individual,
        property: &ObjectProperty,
    ) -> Vec<&Individual> {
        self.closure
            .property_values()
            .get(&(individual.clone(), property.clone()))
            .map(|targets| targets.iter().collect())
            .unwrap_or_default()
    }

    fn inferences(&self) -> &[Inference] {
        self.outcome
            .as_ref()
            .map(ReasoningResult::inferences)
            .unwrap_or_default()
    }
}

impl fmt::Display for RlReasoner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            SessionState::Idle => "idle",
            SessionState::Validating => "validating",
            SessionState::Classifying => "classifying",
            SessionState::Finished(_) => "finished",
        };
        write!(
            f,
            "RlReasoner(state={state}, classes={}, individuals={}, inferred={})",
            self.closure.class_hierarchy().len(),
            self.closure.individual_types().len(),
            self.outcome
                .as_ref()
                .map_or(0, ReasoningResult::inferred_axiom_count)
        )
    }
}
