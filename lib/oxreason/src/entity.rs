//! Entities the rule engine reasons over: classes, object properties and
//! individuals.
//!
//! All three are opaque identifiers for the whole lifetime of a reasoning
//! session. The engine never looks inside the IRI.

use oxrdf::{BlankNode, NamedNode, Term};
use std::fmt;

/// A named OWL class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Class(NamedNode);

impl Class {
    /// Creates a new class from a named node.
    #[inline]
    pub fn new(iri: NamedNode) -> Self {
        Self(iri)
    }

    /// Creates a new class from an IRI string.
    #[inline]
    pub fn new_from_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self(NamedNode::new(iri)?))
    }

    /// Returns the IRI of this class.
    #[inline]
    pub fn iri(&self) -> &NamedNode {
        &self.0
    }

    /// Converts this class into its underlying named node.
    #[inline]
    pub fn into_inner(self) -> NamedNode {
        self.0
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NamedNode> for Class {
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

impl From<Class> for NamedNode {
    fn from(class: Class) -> Self {
        class.0
    }
}

impl From<Class> for Term {
    fn from(class: Class) -> Self {
        class.0.into()
    }
}

impl AsRef<NamedNode> for Class {
    fn as_ref(&self) -> &NamedNode {
        &self.0
    }
}

/// A named OWL object property, relating individuals to individuals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectProperty(NamedNode);

impl ObjectProperty {
    /// Creates a new object property from a named node.
    #[inline]
    pub fn new(iri: NamedNode) -> Self {
        Self(iri)
    }

    /// Creates a new object property from an IRI string.
    #[inline]
    pub fn new_from_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self(NamedNode::new(iri)?))
    }

    /// Returns the IRI of this property.
    #[inline]
    pub fn iri(&self) -> &NamedNode {
        &self.0
    }

    /// Converts this property into its underlying named node.
    #[inline]
    pub fn into_inner(self) -> NamedNode {
        self.0
    }
}

impl fmt::Display for ObjectProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NamedNode> for ObjectProperty {
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

impl From<ObjectProperty> for NamedNode {
    fn from(property: ObjectProperty) -> Self {
        property.0
    }
}

impl From<ObjectProperty> for Term {
    fn from(property: ObjectProperty) -> Self {
        property.0.into()
    }
}

impl AsRef<NamedNode> for ObjectProperty {
    fn as_ref(&self) -> &NamedNode {
        &self.0
    }
}

/// An OWL individual, either named (an IRI) or anonymous (a blank node).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Individual {
    /// A named individual.
    Named(NamedNode),
    /// An anonymous individual.
    Anonymous(BlankNode),
}

impl Individual {
    /// Creates a new named individual from an IRI string.
    #[inline]
    pub fn new_from_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self::Named(NamedNode::new(iri)?))
    }

    /// Returns `true` if this is a named individual.
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    /// Returns `true` if this is an anonymous individual.
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous(_))
    }

    /// Returns the named node if this is a named individual.
    #[inline]
    pub fn as_named(&self) -> Option<&NamedNode> {
        match self {
            Self::Named(n) => Some(n),
            Self::Anonymous(_) => None,
        }
    }

    /// Returns the blank node if this is an anonymous individual.
    #[inline]
    pub fn as_anonymous(&self) -> Option<&BlankNode> {
        match self {
            Self::Named(_) => None,
            Self::Anonymous(b) => Some(b),
        }
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{n}"),
            Self::Anonymous(b) => write!(f, "{b}"),
        }
    }
}

impl From<NamedNode> for Individual {
    fn from(node: NamedNode) -> Self {
        Self::Named(node)
    }
}

impl From<BlankNode> for Individual {
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

impl From<Individual> for Term {
    fn from(individual: Individual) -> Self {
        match individual {
            Individual::Named(n) => n.into(),
            Individual::Anonymous(b) => b.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class() {
        let iri = NamedNode::new_unchecked("http://example.org/Person");
        let class = Class::new(iri.clone());
        assert_eq!(class.iri(), &iri);
        assert_eq!(class.to_string(), iri.to_string());
        assert_eq!(class.clone().into_inner(), iri);
    }

    #[test]
    fn test_class_from_iri_string() {
        let class = Class::new_from_iri("http://example.org/Person").unwrap();
        assert_eq!(class.iri().as_str(), "http://example.org/Person");
        assert!(Class::new_from_iri("not an iri").is_err());
    }

    #[test]
    fn test_object_property() {
        let iri = NamedNode::new_unchecked("http://example.org/knows");
        let property = ObjectProperty::new(iri.clone());
        assert_eq!(property.iri(), &iri);
    }

    #[test]
    fn test_individual_named() {
        let iri = NamedNode::new_unchecked("http://example.org/alice");
        let individual = Individual::Named(iri.clone());
        assert!(individual.is_named());
        assert!(!individual.is_anonymous());
        assert_eq!(individual.as_named(), Some(&iri));
        assert_eq!(individual.as_anonymous(), None);
    }

    #[test]
    fn test_individual_anonymous() {
        let blank = BlankNode::default();
        let individual = Individual::Anonymous(blank.clone());
        assert!(!individual.is_named());
        assert!(individual.is_anonymous());
        assert_eq!(individual.as_anonymous(), Some(&blank));
    }

    #[test]
    fn test_conversions() {
        let iri = NamedNode::new_unchecked("http://example.org/Test");

        let class: Class = iri.clone().into();
        let node: NamedNode = class.into();
        assert_eq!(node, iri);

        let property: ObjectProperty = iri.clone().into();
        let term: Term = property.into();
        assert_eq!(term, Term::NamedNode(iri));
    }
}
