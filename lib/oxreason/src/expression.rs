//! Class expressions.
//!
//! The rule engine itself only ever consumes named classes; the richer
//! variants exist so that out-of-profile input can be represented and then
//! rejected by the profile validator with a precise violation, instead of
//! being silently ignored.

use crate::entity::{Class, Individual, ObjectProperty};
use std::fmt;

/// An OWL class expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassExpression {
    /// A named class.
    Class(Class),
    /// Intersection of class expressions (owl:intersectionOf).
    IntersectionOf(Vec<ClassExpression>),
    /// Union of class expressions (owl:unionOf).
    UnionOf(Vec<ClassExpression>),
    /// Complement of a class expression (owl:complementOf).
    ComplementOf(Box<ClassExpression>),
    /// Enumeration of individuals (owl:oneOf).
    OneOf(Vec<Individual>),
    /// Existential restriction (owl:someValuesFrom).
    SomeValuesFrom {
        /// The restricted property.
        property: ObjectProperty,
        /// The filler expression.
        filler: Box<ClassExpression>,
    },
    /// Universal restriction (owl:allValuesFrom).
    AllValuesFrom {
        /// The restricted property.
        property: ObjectProperty,
        /// The filler expression.
        filler: Box<ClassExpression>,
    },
    /// Value restriction (owl:hasValue).
    HasValue {
        /// The restricted property.
        property: ObjectProperty,
        /// The required value.
        value: Individual,
    },
    /// Minimum cardinality restriction; qualified when a filler is present.
    MinCardinality {
        /// The cardinality bound.
        cardinality: u32,
        /// The restricted property.
        property: ObjectProperty,
        /// The qualifying filler, if any.
        filler: Option<Box<ClassExpression>>,
    },
    /// Maximum cardinality restriction; qualified when a filler is present.
    MaxCardinality {
        /// The cardinality bound.
        cardinality: u32,
        /// The restricted property.
        property: ObjectProperty,
        /// The qualifying filler, if any.
        filler: Option<Box<ClassExpression>>,
    },
    /// Exact cardinality restriction; qualified when a filler is present.
    ExactCardinality {
        /// The cardinality bound.
        cardinality: u32,
        /// The restricted property.
        property: ObjectProperty,
        /// The qualifying filler, if any.
        filler: Option<Box<ClassExpression>>,
    },
}

impl ClassExpression {
    /// Creates a named class expression.
    #[inline]
    pub fn class(class: impl Into<Class>) -> Self {
        Self::Class(class.into())
    }

    /// Creates an intersection expression.
    #[inline]
    pub fn intersection(operands: Vec<ClassExpression>) -> Self {
        Self::IntersectionOf(operands)
    }

    /// Creates a union expression.
    #[inline]
    pub fn union(operands: Vec<ClassExpression>) -> Self {
        Self::UnionOf(operands)
    }

    /// Creates a complement expression.
    #[inline]
    pub fn complement(operand: ClassExpression) -> Self {
        Self::ComplementOf(Box::new(operand))
    }

    /// Creates an enumeration of individuals.
    #[inline]
    pub fn one_of(individuals: Vec<Individual>) -> Self {
        Self::OneOf(individuals)
    }

    /// Creates an existential restriction.
    #[inline]
    pub fn some_values_from(property: ObjectProperty, filler: ClassExpression) -> Self {
        Self::SomeValuesFrom {
            property,
            filler: Box::new(filler),
        }
    }

    /// Creates a universal restriction.
    #[inline]
    pub fn all_values_from(property: ObjectProperty, filler: ClassExpression) -> Self {
        Self::AllValuesFrom {
            property,
            filler: Box::new(filler),
        }
    }

    /// Creates a value restriction.
    #[inline]
    pub fn has_value(property: ObjectProperty, value: Individual) -> Self {
        Self::HasValue { property, value }
    }

    /// Creates an unqualified minimum cardinality restriction.
    #[inline]
    pub fn min_cardinality(cardinality: u32, property: ObjectProperty) -> Self {
        Self::MinCardinality {
            cardinality,
            property,
            filler: None,
        }
    }

    /// Creates a qualified minimum cardinality restriction.
    #[inline]
    pub fn min_cardinality_qualified(
        cardinality: u32,
        property: ObjectProperty,
        filler: ClassExpression,
    ) -> Self {
        Self::MinCardinality {
            cardinality,
            property,
            filler: Some(Box::new(filler)),
        }
    }

    /// Creates an unqualified maximum cardinality restriction.
    #[inline]
    pub fn max_cardinality(cardinality: u32, property: ObjectProperty) -> Self {
        Self::MaxCardinality {
            cardinality,
            property,
            filler: None,
        }
    }

    /// Creates a qualified maximum cardinality restriction.
    #[inline]
    pub fn max_cardinality_qualified(
        cardinality: u32,
        property: ObjectProperty,
        filler: ClassExpression,
    ) -> Self {
        Self::MaxCardinality {
            cardinality,
            property,
            filler: Some(Box::new(filler)),
        }
    }

    /// Creates an unqualified exact cardinality restriction.
    #[inline]
    pub fn exact_cardinality(cardinality: u32, property: ObjectProperty) -> Self {
        Self::ExactCardinality {
            cardinality,
            property,
            filler: None,
        }
    }

    /// Returns `true` if this expression is a named class.
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// Returns the named class if this expression is one.
    #[inline]
    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Returns `true` if this is a cardinality restriction with a qualifying
    /// filler.
    pub fn is_qualified_cardinality(&self) -> bool {
        matches!(
            self,
            Self::MinCardinality { filler: Some(_), .. }
                | Self::MaxCardinality { filler: Some(_), .. }
                | Self::ExactCardinality { filler: Some(_), .. }
        )
    }
}

impl From<Class> for ClassExpression {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

fn fmt_operands(f: &mut fmt::Formatter<'_>, operands: &[ClassExpression]) -> fmt::Result {
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{operand}")?;
    }
    Ok(())
}

impl fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => write!(f, "{class}"),
            Self::IntersectionOf(operands) => {
                f.write_str("ObjectIntersectionOf(")?;
                fmt_operands(f, operands)?;
                f.write_str(")")
            }
            Self::UnionOf(operands) => {
                f.write_str("ObjectUnionOf(")?;
                fmt_operands(f, operands)?;
                f.write_str(")")
            }
            Self::ComplementOf(operand) => write!(f, "ObjectComplementOf({operand})"),
            Self::OneOf(individuals) => {
                f.write_str("ObjectOneOf(")?;
                for (i, individual) in individuals.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{individual}")?;
                }
                f.write_str(")")
            }
            Self::SomeValuesFrom { property, filler } => {
                write!(f, "ObjectSomeValuesFrom({property} {filler})")
            }
            Self::AllValuesFrom { property, filler } => {
                write!(f, "ObjectAllValuesFrom({property} {filler})")
            }
            Self::HasValue { property, value } => {
                write!(f, "ObjectHasValue({property} {value})")
            }
            Self::MinCardinality {
                cardinality,
                property,
                filler,
            } => match filler {
                Some(filler) => {
                    write!(f, "ObjectMinCardinality({cardinality} {property} {filler})")
                }
                None => write!(f, "ObjectMinCardinality({cardinality} {property})"),
            },
            Self::MaxCardinality {
                cardinality,
                property,
                filler,
            } => match filler {
                Some(filler) => {
                    write!(f, "ObjectMaxCardinality({cardinality} {property} {filler})")
                }
                None => write!(f, "ObjectMaxCardinality({cardinality} {property})"),
            },
            Self::ExactCardinality {
                cardinality,
                property,
                filler,
            } => match filler {
                Some(filler) => {
                    write!(f, "ObjectExactCardinality({cardinality} {property} {filler})")
                }
                None => write!(f, "ObjectExactCardinality({cardinality} {property})"),
            },
        }
    }
}
