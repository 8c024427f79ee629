//! Validation type for accumulating errors
//!
//! `Validation` is shaped like `Result`, but combining two validations keeps the
//! errors of both instead of stopping at the first. Every item rule returns a
//! `Validation`, and the orchestrator joins them so the caller sees every problem
//! in one round trip.
//!
//! # Examples
//!
//! ```
//! use itemguard::Validation;
//!
//! let name = Validation::<_, Vec<&str>>::success("Book");
//! let price = Validation::<i32, _>::failure(vec!["price out of range"]);
//! let quantity = Validation::<i32, _>::failure(vec!["quantity too large"]);
//!
//! let combined = name.and(price).and(quantity);
//! assert_eq!(
//!     combined,
//!     Validation::Failure(vec!["price out of range", "quantity too large"])
//! );
//! ```
//!
//! Tuples of independent checks combine through [`ValidateAll`]:
//!
//! ```
//! use itemguard::{Validation, validation::ValidateAll};
//!
//! let result = (
//!     Validation::<_, Vec<&str>>::success("Book"),
//!     Validation::<_, Vec<&str>>::success(2000),
//!     Validation::<_, Vec<&str>>::success(10),
//! )
//!     .validate_all();
//!
//! assert_eq!(result, Validation::Success(("Book", 2000, 10)));
//! ```

use crate::predicate::Predicate;
use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` to accumulate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// ```
    /// use itemguard::Validation;
    ///
    /// let v = Validation::from_result(Ok::<_, String>(42));
    /// assert_eq!(v, Validation::Success(42));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Borrow the accumulated errors, if any
    #[inline]
    pub fn errors(&self) -> Option<&E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// ```
    /// use itemguard::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["itemName", "price"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(2));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Gate a successful value on a predicate
    ///
    /// A success whose value fails `predicate` becomes a failure built by
    /// `error_fn`; failures pass through untouched.
    ///
    /// ```
    /// use itemguard::{Validation, predicate::not_blank};
    ///
    /// let v = Validation::<_, Vec<String>>::success(String::from("   "))
    ///     .ensure(not_blank(), |name| vec![format!("{name:?} is blank")]);
    /// assert!(v.is_failure());
    /// ```
    pub fn ensure<P, F>(self, predicate: P, error_fn: F) -> Self
    where
        P: Predicate<T>,
        F: FnOnce(&T) -> E,
    {
        match self {
            Validation::Success(value) if !predicate.check(&value) => {
                let error = error_fn(&value);
                Validation::Failure(error)
            }
            other => other,
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors with `Semigroup::combine`
    ///
    /// Errors of `self` come first, so the order of calls is the order of the
    /// reported errors.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) | (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a dependent validation; `f` only runs on success
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Combine every validation in a Vec, keeping input order for both values and errors
    ///
    /// ```
    /// use itemguard::Validation;
    ///
    /// let checks = vec![
    ///     Validation::<i32, _>::failure(vec!["price"]),
    ///     Validation::success(10),
    ///     Validation::failure(vec!["quantity"]),
    /// ];
    /// assert_eq!(
    ///     Validation::all_vec(checks),
    ///     Validation::Failure(vec!["price", "quantity"])
    /// );
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut values = Vec::with_capacity(validations.len());
        let mut errors: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => values.push(value),
                Validation::Failure(error) => {
                    errors = Some(match errors.take() {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match errors {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(values),
        }
    }
}

/// Trait for combining a tuple of independent validations
///
/// Implemented for tuples of one to six `Validation`s sharing an error type.
pub trait ValidateAll<E: Semigroup> {
    /// The output type when all validations succeed
    type Output;

    /// Combine all validations, accumulating errors left to right
    fn validate_all(self) -> Validation<Self::Output, E>;
}

macro_rules! impl_validate_all {
    ($($T:ident),+) => {
        impl<E: Semigroup, $($T),+> ValidateAll<E> for ($(Validation<$T, E>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Validation<Self::Output, E> {
                let ($($T,)+) = self;
                let mut errors: Option<E> = None;
                $(
                    let $T = match $T {
                        Validation::Success(value) => Some(value),
                        Validation::Failure(error) => {
                            errors = Some(match errors.take() {
                                Some(acc) => acc.combine(error),
                                None => error,
                            });
                            None
                        }
                    };
                )+
                if let Some(errors) = errors {
                    return Validation::Failure(errors);
                }
                match ($($T,)+) {
                    ($(Some($T),)+) => Validation::Success(($($T,)+)),
                    _ => unreachable!("a missing value always records an error"),
                }
            }
        }
    };
}

impl_validate_all!(T1);
impl_validate_all!(T1, T2);
impl_validate_all!(T1, T2, T3);
impl_validate_all!(T1, T2, T3, T4);
impl_validate_all!(T1, T2, T3, T4, T5);
impl_validate_all!(T1, T2, T3, T4, T5, T6);
