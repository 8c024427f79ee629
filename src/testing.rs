//! Testing utilities for item validation
//!
//! Assertion macros for [`Validation`](crate::Validation) results and
//! [`ValidationErrors`](crate::ValidationErrors), plus `proptest` strategies
//! for candidate items behind the `proptest` feature.
//!
//! ```rust
//! use itemguard::{assert_failure, assert_rejects, assert_success};
//! use itemguard::{check, validate, Field, Item, Profile, Reason};
//!
//! assert_success!(check(&Item::new("Book", 2000, 10), Profile::Create));
//! assert_failure!(check(&Item::new("Book", 2000, 10), Profile::Update));
//!
//! let errors = validate(&Item::new("Book", 1000, 5), Profile::Create);
//! assert_rejects!(errors, global, Reason::TotalPriceMin);
//!
//! let errors = validate(&Item::new("Book", 500, 20), Profile::Create);
//! assert_rejects!(errors, Field::Price, Reason::Range);
//! ```

/// Assert that a validation succeeds.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with exactly the expected errors.
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert that a `ValidationErrors` holds an error with the given scope and reason.
///
/// Use `global` as the scope for object-level errors, or a `Field` expression.
#[macro_export]
macro_rules! assert_rejects {
    ($errors:expr, global, $reason:expr) => {{
        let errors: &$crate::ValidationErrors = &$errors;
        let reason: $crate::Reason = $reason;
        assert!(
            errors.global_errors().any(|e| e.reason() == Some(reason)),
            "Expected global `{}` error, got: {}",
            reason,
            errors
        );
    }};
    ($errors:expr, $field:expr, $reason:expr) => {{
        let errors: &$crate::ValidationErrors = &$errors;
        let field: $crate::Field = $field;
        let reason: $crate::Reason = $reason;
        assert!(
            errors.field_errors(field).any(|e| e.reason() == Some(reason)),
            "Expected `{}` error on `{}`, got: {}",
            reason,
            field,
            errors
        );
    }};
}

/// Strategies that generate candidate items, valid and invalid alike.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;

    use crate::item::{Item, ItemId};

    /// Missing, blank, or ordinary names.
    pub fn item_name() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            1 => Just(None),
            2 => "[ \t\n]{0,4}".prop_map(Some),
            5 => "[ ]{0,2}[A-Za-z0-9][A-Za-z0-9 ]{0,15}".prop_map(Some),
        ]
    }

    /// Missing prices, prices around the range bounds, and arbitrary values.
    pub fn price() -> impl Strategy<Value = Option<i32>> {
        proptest::option::weighted(
            0.9,
            prop_oneof![
                900..=1100,
                999_900..=1_000_100,
                1000..=1_000_000,
                any::<i32>(),
            ],
        )
    }

    /// Missing quantities, quantities around the ceiling, and arbitrary values.
    pub fn quantity() -> impl Strategy<Value = Option<i32>> {
        proptest::option::weighted(
            0.9,
            prop_oneof![-10..=20, 9_990..=10_010, 0..=9999, any::<i32>()],
        )
    }

    /// Any candidate item.
    pub fn candidate() -> impl Strategy<Value = Item> {
        (
            proptest::option::of((1u64..1_000).prop_map(ItemId::new)),
            item_name(),
            price(),
            quantity(),
        )
            .prop_map(|(id, item_name, price, quantity)| Item {
                id,
                item_name,
                price,
                quantity,
            })
    }

    impl Arbitrary for Item {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            candidate().boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Reason, RejectedValue, ValidationError, ValidationErrors};
    use crate::item::Field;
    use crate::Validation;

    fn name_required() -> ValidationErrors {
        ValidationError::field(Field::ItemName, RejectedValue::Missing, Reason::Required, vec![])
            .into()
    }

    #[test]
    fn assert_success_macro() {
        let val = Validation::<_, ValidationErrors>::success(42);
        assert_success!(val);
    }

    #[test]
    fn assert_validation_errors_macro() {
        let val = Validation::<i32, _>::failure(name_required());
        assert_validation_errors!(val, name_required());
    }

    #[test]
    fn assert_rejects_macro_field() {
        assert_rejects!(name_required(), Field::ItemName, Reason::Required);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let val = Validation::<i32, _>::failure(name_required());
        assert_success!(val);
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        let val = Validation::<_, ValidationErrors>::success(42);
        assert_failure!(val);
    }

    #[test]
    #[should_panic(expected = "Expected global `totalPriceMin` error")]
    fn assert_rejects_panics_when_missing() {
        assert_rejects!(name_required(), global, Reason::TotalPriceMin);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::strategies::candidate;
        use crate::{validate, Profile};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn generated_candidates_validate_without_panicking(item in candidate()) {
                let _ = validate(&item, Profile::Create);
                let _ = validate(&item, Profile::Update);
            }

            #[test]
            fn arbitrary_item_is_available(item in any::<crate::Item>()) {
                prop_assert!(item.id.map_or(true, |id| id.get() >= 1));
            }
        }
    }
}
