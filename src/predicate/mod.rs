//! Predicate combinators the item rules are written with
//!
//! Predicates are small reusable checks (`not_blank`, `between`, `le`, `ge`)
//! combined with `and`, `or` and `not`. They answer yes/no only; turning a "no"
//! into a [`ValidationError`](crate::ValidationError) is the job of
//! [`validate_with`] or [`Validation::ensure`](crate::Validation::ensure).
//!
//! ```rust
//! use itemguard::{Validation, predicate::*};
//!
//! let result = validate_with(500, between(1000, 1_000_000), |p| vec![*p]);
//! assert_eq!(result, Validation::failure(vec![500]));
//! ```

mod combinators;
mod number;
mod string;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};
pub use number::{between, ge, le, Between, Ge, Le};
pub use string::{not_blank, not_empty, NotBlank, NotEmpty};

use crate::Validation;

/// Validate a value, building the error from the rejected value on failure.
pub fn validate_with<T, E, P, F>(value: T, predicate: P, error_fn: F) -> Validation<T, E>
where
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error_fn(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_with_success() {
        let result: Validation<i32, String> =
            validate_with(2000, between(1000, 1_000_000), |p| format!("{p}"));
        assert_eq!(result, Validation::success(2000));
    }

    #[test]
    fn test_validate_with_sees_rejected_value() {
        let result: Validation<i32, String> =
            validate_with(20_000, le(9999), |q| format!("{q} is above 9999"));
        assert_eq!(result, Validation::failure("20000 is above 9999".to_string()));
    }
}
