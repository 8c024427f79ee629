//! Number predicates

use super::combinators::Predicate;

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// Create a predicate that checks `value >= threshold`.
///
/// ```rust
/// use itemguard::predicate::*;
///
/// assert!(ge(10_000_i64).check(&10_000));
/// assert!(!ge(10_000_i64).check(&9_999));
/// ```
pub fn ge<T: PartialOrd + Send + Sync>(threshold: T) -> Ge<T> {
    Ge(threshold)
}

/// Predicate for less than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Le<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value <= self.0
    }
}

/// Create a predicate that checks `value <= ceiling`.
pub fn le<T: PartialOrd + Send + Sync>(ceiling: T) -> Le<T> {
    Le(ceiling)
}

/// Predicate for a value in an inclusive range.
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks `min <= value <= max`.
///
/// ```rust
/// use itemguard::predicate::*;
///
/// let price = between(1000, 1_000_000);
/// assert!(price.check(&1000));
/// assert!(price.check(&1_000_000));
/// assert!(!price.check(&999));
/// assert!(!price.check(&1_000_001));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}
