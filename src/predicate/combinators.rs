//! Core predicate trait and logical combinators

/// A composable predicate over values of type T.
///
/// ```rust
/// use itemguard::predicate::*;
///
/// let orderable = ge(1).and(le(9999));
/// assert!(orderable.check(&10));
/// assert!(!orderable.check(&10_000));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for chaining predicates with logical operators.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates are true.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate is true.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Inverts the predicate.
    ///
    /// ```rust
    /// use itemguard::predicate::*;
    ///
    /// let out_of_range = between(1000, 1_000_000).not();
    /// assert!(out_of_range.check(&999));
    /// assert!(!out_of_range.check(&1000));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{ge, le};

    #[test]
    fn test_closure_is_predicate() {
        let even = |n: &i32| n % 2 == 0;
        assert!(even.check(&10));
        assert!(!even.check(&7));
    }

    #[test]
    fn test_and_or_not() {
        let in_stock_range = ge(0).and(le(9999));
        assert!(in_stock_range.check(&0));
        assert!(!in_stock_range.check(&10_000));

        let extreme = le(0).or(ge(10_000));
        assert!(extreme.check(&-1));
        assert!(extreme.check(&10_000));
        assert!(!extreme.check(&50));

        assert!(in_stock_range.not().check(&-5));
    }
}
