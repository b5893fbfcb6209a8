//! Session outcomes: statuses, consistency verdicts and provenance.

use crate::axiom::Axiom;
use crate::entity::{Class, Individual};
use crate::reasoner::rules::RuleFamily;
use rustc_hash::FxHashMap;
use std::fmt;
use std::time::Duration;

/// Terminal status of a classification session.
///
/// Running out of budget is an expected outcome, not an error: the closure
/// built so far is sound and is returned alongside the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasoningStatus {
    /// The closure reached its fixpoint within every limit.
    Complete,
    /// The shared pass counter ran out before the fixpoint.
    IncompleteIterationLimit,
    /// The wall-clock deadline passed, or the caller cancelled the session.
    IncompleteTimeout,
    /// The inferred-axiom ceiling was crossed.
    IncompleteAxiomLimit,
}

impl ReasoningStatus {
    /// Returns `true` if the closure is the full fixpoint.
    #[inline]
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for ReasoningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Complete => "complete",
            Self::IncompleteIterationLimit => "incomplete (iteration limit)",
            Self::IncompleteTimeout => "incomplete (timed out)",
            Self::IncompleteAxiomLimit => "incomplete (axiom limit)",
        })
    }
}

/// The kind of contradiction the consistency checker found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InconsistencyKind {
    /// Two individuals are asserted both same and different.
    SameAndDifferent,
    /// An individual belongs to two disjoint classes.
    DisjointMembership,
    /// A functional property maps an individual to distinct values.
    FunctionalConflict,
    /// An inverse-functional property maps distinct individuals to one value.
    InverseFunctionalConflict,
    /// An asymmetric property holds in both directions.
    AsymmetricViolation,
    /// An irreflexive property relates an individual to itself.
    IrreflexiveViolation,
}

impl fmt::Display for InconsistencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SameAndDifferent => "individuals are both same and different",
            Self::DisjointMembership => "individual belongs to two disjoint classes",
            Self::FunctionalConflict => "functional property has distinct values",
            Self::InverseFunctionalConflict => {
                "inverse-functional property has distinct subjects"
            }
            Self::AsymmetricViolation => "asymmetric property holds in both directions",
            Self::IrreflexiveViolation => "irreflexive property relates an individual to itself",
        })
    }
}

/// A contradiction together with the minimal set of facts supporting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inconsistency {
    kind: InconsistencyKind,
    facts: Vec<Axiom>,
}

impl Inconsistency {
    pub(crate) fn new(kind: InconsistencyKind, facts: Vec<Axiom>) -> Self {
        Self { kind, facts }
    }

    #[inline]
    pub fn kind(&self) -> InconsistencyKind {
        self.kind
    }

    /// The facts that jointly produce the contradiction; removing any one of
    /// them removes it.
    #[inline]
    pub fn facts(&self) -> &[Axiom] {
        &self.facts
    }
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.kind)?;
        for fact in &self.facts {
            write!(f, " {fact}")?;
        }
        Ok(())
    }
}

/// Consistency verdict of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyStatus {
    /// No contradiction was found in the computed closure.
    Consistent,
    /// A contradiction was found.
    Inconsistent(Inconsistency),
    /// The check was not requested.
    NotChecked,
}

impl ConsistencyStatus {
    #[inline]
    pub fn is_inconsistent(&self) -> bool {
        matches!(self, Self::Inconsistent(_))
    }

    #[inline]
    pub fn inconsistency(&self) -> Option<&Inconsistency> {
        if let Self::Inconsistent(inconsistency) = self {
            Some(inconsistency)
        } else {
            None
        }
    }
}

impl fmt::Display for ConsistencyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consistent => f.write_str("consistent"),
            Self::Inconsistent(inconsistency) => write!(f, "inconsistent: {inconsistency}"),
            Self::NotChecked => f.write_str("not checked"),
        }
    }
}

/// One-step provenance of a derived fact: the rule family that produced it
/// and the closure facts it was produced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Justification {
    rule: RuleFamily,
    premises: Vec<Axiom>,
}

impl Justification {
    pub(crate) fn new(rule: RuleFamily, premises: Vec<Axiom>) -> Self {
        Self { rule, premises }
    }

    #[inline]
    pub fn rule(&self) -> RuleFamily {
        self.rule
    }

    #[inline]
    pub fn premises(&self) -> &[Axiom] {
        &self.premises
    }
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "by {} from", self.rule)?;
        for premise in &self.premises {
            write!(f, " {premise}")?;
        }
        Ok(())
    }
}

/// A derived fact recorded during classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inference {
    rule: RuleFamily,
    axiom: Axiom,
    premises: Vec<Axiom>,
}

impl Inference {
    pub(crate) fn new(rule: RuleFamily, axiom: Axiom, premises: Vec<Axiom>) -> Self {
        Self {
            rule,
            axiom,
            premises,
        }
    }

    #[inline]
    pub fn rule(&self) -> RuleFamily {
        self.rule
    }

    #[inline]
    pub fn axiom(&self) -> &Axiom {
        &self.axiom
    }

    /// Premises are recorded only when explanation tracking is enabled;
    /// otherwise this is empty.
    #[inline]
    pub fn premises(&self) -> &[Axiom] {
        &self.premises
    }
}

impl fmt::Display for Inference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.axiom, self.rule)
    }
}

/// Outcome of one classification session.
///
/// Always carries whatever was derived, even when a limit stopped the
/// session early.
#[derive(Debug, Clone)]
pub struct ReasoningResult {
    status: ReasoningStatus,
    inferred_axiom_count: usize,
    consistency: ConsistencyStatus,
    inferences: Vec<Inference>,
    explanations: FxHashMap<Individual, FxHashMap<Class, Justification>>,
    rounds: usize,
    passes: usize,
    elapsed: Duration,
}

impl ReasoningResult {
    #[expect(clippy::too_many_arguments)]
    pub(crate) fn new(
        status: ReasoningStatus,
        inferred_axiom_count: usize,
        consistency: ConsistencyStatus,
        inferences: Vec<Inference>,
        explanations: FxHashMap<Individual, FxHashMap<Class, Justification>>,
        rounds: usize,
        passes: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            status,
            inferred_axiom_count,
            consistency,
            inferences,
            explanations,
            rounds,
            passes,
            elapsed,
        }
    }

    #[inline]
    pub fn status(&self) -> ReasoningStatus {
        self.status
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    /// Number of facts added to the closure beyond the asserted ones.
    ///
    /// Counted by the shared budget, so it is exact even when the
    /// materialized listing is disabled.
    #[inline]
    pub fn inferred_axiom_count(&self) -> usize {
        self.inferred_axiom_count
    }

    #[inline]
    pub fn consistency(&self) -> &ConsistencyStatus {
        &self.consistency
    }

    pub(crate) fn set_consistency(&mut self, consistency: ConsistencyStatus) {
        self.consistency = consistency;
    }

    /// The derived facts, in derivation order. Empty when materialization
    /// was disabled.
    #[inline]
    pub fn inferences(&self) -> &[Inference] {
        &self.inferences
    }

    /// The derived facts as plain axioms.
    pub fn inferred_axioms(&self) -> impl Iterator<Item = &Axiom> {
        self.inferences.iter().map(Inference::axiom)
    }

    /// Explains why `individual` was classified under `class`.
    ///
    /// Returns `None` when the fact was asserted rather than derived, when
    /// it was never derived at all, or when explanation tracking was off.
    pub fn explain(&self, individual: &Individual, class: &Class) -> Option<&Justification> {
        self.explanations.get(individual)?.get(class)
    }

    /// Number of completed round-robin sweeps over all rule families.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Number of scan passes drawn from the shared budget.
    #[inline]
    pub fn passes(&self) -> usize {
        self.passes
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl fmt::Display for ReasoningResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReasoningResult(status={}, inferred={}, rounds={}, consistency={})",
            self.status, self.inferred_axiom_count, self.rounds, self.consistency
        )
    }
}
