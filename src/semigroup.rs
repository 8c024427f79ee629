//! Semigroup trait for accumulating validation errors
//!
//! A Semigroup is a type with an associative binary operation. Item validation
//! uses it as the accumulation law: every rule runs, and the errors of the
//! failing rules are combined in the order the rules ran.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use itemguard::Semigroup;
//!
//! let first = vec!["itemName"];
//! let second = vec!["price", "quantity"];
//! assert_eq!(first.combine(second), vec!["itemName", "price", "quantity"]);
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value; clone first if the original must be kept.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
