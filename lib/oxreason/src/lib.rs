//! OWL 2 RL ontology reasoning.
//!
//! This crate provides a bounded forward-chaining reasoner over an OWL 2 RL
//! ontology subset:
//! - Ontology data model (classes, object properties, individuals, axioms)
//! - Profile validation with complete violation reports
//! - Rule-based materialization with guaranteed termination
//! - Consistency checking with minimal justifications
//!
//! Classification always terminates: every run ends in a status, and when a
//! configured limit (iterations, wall-clock time, inferred-axiom count) stops
//! the run early, the facts derived so far remain available and sound.
//!
//! # Example
//! ```
//! use oxreason::{Axiom, Class, Individual, Ontology, Reasoner, RlReasoner};
//!
//! let mut ontology = Ontology::new(None);
//! let agent = Class::new_from_iri("http://example.com/Agent").unwrap();
//! let person = Class::new_from_iri("http://example.com/Person").unwrap();
//! let alice = Individual::new_from_iri("http://example.com/alice").unwrap();
//! ontology.add_axiom(Axiom::sub_class_of(person.clone(), agent.clone()));
//! ontology.add_axiom(Axiom::class_assertion(person, alice.clone()));
//!
//! let mut reasoner = RlReasoner::new(&ontology);
//! let result = reasoner.classify().unwrap();
//! assert!(result.is_complete());
//! assert!(reasoner.types_of(&alice).contains(&&agent));
//! ```

mod axiom;
mod entity;
mod error;
mod expression;
mod ontology;

pub use axiom::Axiom;
pub use entity::{Class, Individual, ObjectProperty};
pub use error::{
    MalformedOntologyError, ProfileError, ProfileViolation, ProfileViolationKind, ReasonerError,
};
pub use expression::ClassExpression;
pub use ontology::Ontology;

#[cfg(feature = "owl2-rl")]
mod reasoner;

#[cfg(feature = "owl2-rl")]
pub use reasoner::{
    ConsistencyStatus, DEFAULT_MAX_ITERATIONS, Inconsistency, InconsistencyKind, Inference,
    Justification, Reasoner, ReasonerConfig, ReasoningResult, ReasoningStatus, RlReasoner,
    RuleFamily,
};
