//! Error types for ontology validation.
//!
//! Only the pre-flight validation stage can fail with an error. Once
//! classification has started, resource limits surface as statuses on the
//! reasoning result, never as errors.

use crate::axiom::Axiom;
use std::fmt;

/// Main error type for reasoning operations.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum ReasonerError {
    /// The ontology uses constructs outside the supported profile.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// The ontology is structurally broken.
    #[error(transparent)]
    Malformed(#[from] MalformedOntologyError),
}

/// The ontology falls outside the profile the rule engine supports.
///
/// Carries every violation found, not just the first, so callers can fix the
/// whole input in one pass.
#[derive(Debug, Clone, thiserror::Error)]
#[error("ontology is outside the supported OWL 2 RL subset: {}", fmt_lines(.violations))]
pub struct ProfileError {
    violations: Vec<ProfileViolation>,
}

impl ProfileError {
    /// Wraps a non-empty list of violations.
    pub fn new(violations: Vec<ProfileViolation>) -> Self {
        Self { violations }
    }

    /// Returns all violations found.
    pub fn violations(&self) -> &[ProfileViolation] {
        &self.violations
    }

    /// Consumes the error and returns the violations.
    pub fn into_violations(self) -> Vec<ProfileViolation> {
        self.violations
    }
}

/// A single out-of-profile construct, tied to the axiom using it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileViolation {
    kind: ProfileViolationKind,
    axiom: Axiom,
}

impl ProfileViolation {
    /// Creates a violation record for the given axiom.
    pub fn new(kind: ProfileViolationKind, axiom: &Axiom) -> Self {
        Self {
            kind,
            axiom: axiom.clone(),
        }
    }

    /// Returns the violation kind.
    pub fn kind(&self) -> ProfileViolationKind {
        self.kind
    }

    /// Returns the offending axiom.
    pub fn axiom(&self) -> &Axiom {
        &self.axiom
    }
}

impl fmt::Display for ProfileViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.kind, self.axiom)
    }
}

/// The construct classes the validator rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ProfileViolationKind {
    /// A universal restriction used on the subclass side.
    UniversalInSubClassPosition,
    /// A complement expression used on the subclass side.
    ComplementInSubClassPosition,
    /// An individual enumeration used on the subclass side.
    NominalInSubClassPosition,
    /// A cardinality restriction with a qualifying filler.
    QualifiedCardinality,
    /// An existential restriction used on the superclass side.
    ExistentialInSuperClassPosition,
    /// A minimum cardinality restriction used on the superclass side.
    MinCardinalityInSuperClassPosition,
    /// Any other complex expression where the rule engine needs a named
    /// class.
    UnsupportedExpression,
}

impl fmt::Display for ProfileViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UniversalInSubClassPosition => "universal restriction in subclass position",
            Self::ComplementInSubClassPosition => "complement in subclass position",
            Self::NominalInSubClassPosition => "nominal in subclass position",
            Self::QualifiedCardinality => "qualified cardinality restriction",
            Self::ExistentialInSuperClassPosition => {
                "existential restriction in superclass position"
            }
            Self::MinCardinalityInSuperClassPosition => {
                "minimum cardinality in superclass position"
            }
            Self::UnsupportedExpression => "unsupported class expression",
        })
    }
}

/// The input facts are structurally broken (for example an equivalence axiom
/// with a single member), independently of any profile restriction.
#[derive(Debug, Clone, thiserror::Error)]
#[error("malformed ontology: {}", fmt_lines(.issues))]
pub struct MalformedOntologyError {
    issues: Vec<String>,
}

impl MalformedOntologyError {
    /// Wraps a non-empty list of structural issues.
    pub fn new(issues: Vec<String>) -> Self {
        Self { issues }
    }

    /// Returns all structural issues found.
    pub fn issues(&self) -> &[String] {
        &self.issues
    }
}

fn fmt_lines<T: fmt::Display>(items: &[T]) -> String {
    let mut out = format!("{} issue(s)", items.len());
    for item in items {
        out.push_str("\n  - ");
        out.push_str(&item.to_string());
    }
    out
}
