//! Structured validation errors and the crate's contract errors
//!
//! A failed rule produces a [`ValidationError`]: where it happened
//! ([`Scope`]), what the user typed ([`RejectedValue`]) and why
//! ([`Message`]). Reasons are symbolic codes with positional arguments so
//! that turning them into text stays a pure downstream mapping (see
//! [`message`](crate::message)).
//!
//! Invalid input is never an `Err`. The `thiserror` types at the bottom of
//! this module are for programming mistakes only: an unknown profile name or
//! an inconsistent rule configuration.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::{Field, ItemId};
use crate::Semigroup;

/// Where a validation error applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Scope {
    /// A single field failed its own constraint.
    Field(Field),
    /// A relationship between fields failed.
    Global,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Field(field) => fmt::Display::fmt(field, f),
            Scope::Global => f.write_str("global"),
        }
    }
}

/// The original input that was rejected, kept for redisplay.
///
/// Serialized as `{"kind": ..., "value": ...}` so ids and integers stay apart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", content = "value", rename_all = "camelCase")
)]
pub enum RejectedValue {
    /// The field was not supplied.
    Missing,
    /// Text input.
    Text(String),
    /// Numeric input, or a computed value such as a total price.
    Integer(i64),
    /// An identifier.
    Id(ItemId),
}

impl fmt::Display for RejectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectedValue::Missing => f.write_str("<missing>"),
            RejectedValue::Text(text) => write!(f, "{text:?}"),
            RejectedValue::Integer(n) => write!(f, "{n}"),
            RejectedValue::Id(id) => write!(f, "{id}"),
        }
    }
}

/// Symbolic reason for a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Reason {
    /// Missing or blank.
    Required,
    /// Outside an inclusive range; args are `[min, max]`.
    Range,
    /// Above a ceiling; args are `[max]`.
    Max,
    /// `price * quantity` below the minimum; args are `[min, actual]`.
    TotalPriceMin,
    /// Supplied where it must be absent.
    Forbidden,
}

impl Reason {
    /// Message code for this reason.
    pub const fn code(self) -> &'static str {
        match self {
            Reason::Required => "required",
            Reason::Range => "range",
            Reason::Max => "max",
            Reason::TotalPriceMin => "totalPriceMin",
            Reason::Forbidden => "forbidden",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How a rejection should be explained to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Message {
    /// A symbolic reason with ordered arguments for localisation.
    Code {
        /// The reason code.
        reason: Reason,
        /// Positional arguments, `{0}`, `{1}`, ... in message templates.
        args: Vec<i64>,
    },
    /// A literal message for rejections without a reason code.
    Literal(String),
}

/// A single reported failure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ValidationError {
    /// Field or global scope.
    pub scope: Scope,
    /// Input as submitted.
    pub rejected_value: RejectedValue,
    /// Reason code or literal text.
    pub message: Message,
}

impl ValidationError {
    /// A field-level error with a reason code.
    pub fn field(field: Field, rejected_value: RejectedValue, reason: Reason, args: Vec<i64>) -> Self {
        Self {
            scope: Scope::Field(field),
            rejected_value,
            message: Message::Code { reason, args },
        }
    }

    /// An object-level error with a reason code.
    pub fn global(rejected_value: RejectedValue, reason: Reason, args: Vec<i64>) -> Self {
        Self {
            scope: Scope::Global,
            rejected_value,
            message: Message::Code { reason, args },
        }
    }

    /// An error carrying literal text instead of a reason code.
    pub fn literal(scope: Scope, rejected_value: RejectedValue, text: impl Into<String>) -> Self {
        Self {
            scope,
            rejected_value,
            message: Message::Literal(text.into()),
        }
    }

    /// The field, unless the error is global.
    pub fn field_name(&self) -> Option<Field> {
        match self.scope {
            Scope::Field(field) => Some(field),
            Scope::Global => None,
        }
    }

    /// Whether this is an object-level error.
    pub fn is_global(&self) -> bool {
        self.scope == Scope::Global
    }

    /// The reason code, if the error has one.
    pub fn reason(&self) -> Option<Reason> {
        match &self.message {
            Message::Code { reason, .. } => Some(*reason),
            Message::Literal(_) => None,
        }
    }

    /// Message arguments; empty for literal messages.
    pub fn args(&self) -> &[i64] {
        match &self.message {
            Message::Code { args, .. } => args,
            Message::Literal(_) => &[],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Message::Code { reason, args } if args.is_empty() => {
                write!(f, "{}: {} (rejected {})", self.scope, reason, self.rejected_value)
            }
            Message::Code { reason, args } => write!(
                f,
                "{}: {} {:?} (rejected {})",
                self.scope, reason, args, self.rejected_value
            ),
            Message::Literal(text) => write!(f, "{}: {}", self.scope, text),
        }
    }
}

/// Ordered collection of validation errors, in the order the rules ran.
///
/// ```
/// use itemguard::{validate, Field, Item, Profile};
///
/// let errors = validate(&Item::new("", 500, 20_000), Profile::Create);
/// let fields: Vec<_> = errors.iter().filter_map(|e| e.field_name()).collect();
/// assert_eq!(fields, [Field::ItemName, Field::Price, Field::Quantity]);
/// assert!(!errors.has_global_error());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// An empty collection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an error.
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the candidate is acceptable.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when at least one error was reported.
    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    /// Iterate in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Errors reported against `field`.
    pub fn field_errors(&self, field: Field) -> impl Iterator<Item = &ValidationError> + '_ {
        self.0.iter().filter(move |e| e.scope == Scope::Field(field))
    }

    /// Object-level errors.
    pub fn global_errors(&self) -> impl Iterator<Item = &ValidationError> + '_ {
        self.0.iter().filter(|e| e.is_global())
    }

    /// Whether `field` has at least one error.
    pub fn has_field_error(&self, field: Field) -> bool {
        self.field_errors(field).next().is_some()
    }

    /// Whether any object-level error was reported.
    pub fn has_global_error(&self) -> bool {
        self.global_errors().next().is_some()
    }

    /// Consume into the underlying vector.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl Semigroup for ValidationErrors {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("no errors");
        }
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            fmt::Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A profile name that does not exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// The name matched neither `create` nor `update`.
    #[error("unknown validation profile `{0}` (expected `create` or `update`)")]
    Unknown(String),
}

/// An [`ItemRules`](crate::ItemRules) configuration that cannot be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// `price_min` is above `price_max`.
    #[error("price range is inverted: min {min} > max {max}")]
    InvertedPriceRange {
        /// Configured minimum.
        min: i32,
        /// Configured maximum.
        max: i32,
    },
    /// `quantity_max` is negative, so no quantity could pass.
    #[error("quantity ceiling {0} is negative")]
    NegativeQuantityCeiling(i32),
}
