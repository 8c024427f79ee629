//! Field and cross-field rules for items
//!
//! Every rule returns a [`Validation`] carrying at most one error, so the
//! orchestrator can join them without short-circuiting. The numeric bounds
//! live in [`ItemRules`]; its `Default` is the canonical rule set:
//!
//! | field      | passes when                            |
//! |------------|----------------------------------------|
//! | `itemName` | present and not blank                  |
//! | `price`    | present and `1000 <= price <= 1000000` |
//! | `quantity` | present and `quantity <= 9999`         |
//! | global     | `price * quantity >= 10000`, checked only when both are present |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Reason, RejectedValue, RulesError, ValidationError, ValidationErrors};
use crate::item::{Field, ItemId};
use crate::predicate::{between, ge, le, not_blank, validate_with};
use crate::profile::Profile;
use crate::Validation;

/// Result of a single rule.
pub type RuleResult<T> = Validation<T, ValidationErrors>;

/// Numeric bounds applied by the item rules.
///
/// Loadable from configuration with the `serde` feature; missing keys fall
/// back to the canonical values.
///
/// ```
/// use itemguard::ItemRules;
///
/// let rules = ItemRules::default();
/// assert_eq!((rules.price_min, rules.price_max), (1000, 1_000_000));
/// assert_eq!(rules.quantity_max, 9999);
/// assert_eq!(rules.total_price_min, 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ItemRules {
    /// Lowest accepted unit price, inclusive.
    pub price_min: i32,
    /// Highest accepted unit price, inclusive.
    pub price_max: i32,
    /// Highest accepted quantity, inclusive.
    pub quantity_max: i32,
    /// Lowest accepted `price * quantity`, inclusive.
    pub total_price_min: i64,
}

impl ItemRules {
    /// The canonical bounds.
    pub const CANONICAL: ItemRules = ItemRules {
        price_min: 1000,
        price_max: 1_000_000,
        quantity_max: 9999,
        total_price_min: 10_000,
    };

    /// Check that the bounds can be satisfied at all.
    pub fn validated(self) -> Result<Self, RulesError> {
        if self.price_min > self.price_max {
            return Err(RulesError::InvertedPriceRange {
                min: self.price_min,
                max: self.price_max,
            });
        }
        if self.quantity_max < 0 {
            return Err(RulesError::NegativeQuantityCeiling(self.quantity_max));
        }
        Ok(self)
    }

    /// `id`: forbidden on create, required on update.
    pub fn id(&self, id: Option<ItemId>, profile: Profile) -> RuleResult<Option<ItemId>> {
        match id {
            Some(id) if profile.forbids_id() => Validation::failure(
                ValidationError::field(Field::Id, RejectedValue::Id(id), Reason::Forbidden, vec![])
                    .into(),
            ),
            None if profile.requires_id() => Validation::failure(
                ValidationError::field(Field::Id, RejectedValue::Missing, Reason::Required, vec![])
                    .into(),
            ),
            id => Validation::success(id),
        }
    }

    /// `itemName`: present and not blank.
    pub fn item_name(&self, item_name: Option<&str>) -> RuleResult<String> {
        let reject = |rejected| -> ValidationErrors {
            ValidationError::field(Field::ItemName, rejected, Reason::Required, vec![]).into()
        };
        match item_name {
            None => Validation::failure(reject(RejectedValue::Missing)),
            Some(text) => Validation::success(text.to_owned())
                .ensure(not_blank(), |text| reject(RejectedValue::Text(text.clone()))),
        }
    }

    /// `price`: present and inside `[price_min, price_max]`.
    ///
    /// A missing price is reported with the range reason, so the rendered
    /// message tells the user which values are accepted.
    pub fn price(&self, price: Option<i32>) -> RuleResult<i32> {
        let reject = |rejected| -> ValidationErrors {
            ValidationError::field(
                Field::Price,
                rejected,
                Reason::Range,
                vec![self.price_min.into(), self.price_max.into()],
            )
            .into()
        };
        match price {
            None => Validation::failure(reject(RejectedValue::Missing)),
            Some(price) => validate_with(price, between(self.price_min, self.price_max), |p| {
                reject(RejectedValue::Integer((*p).into()))
            }),
        }
    }

    /// `quantity`: present and at most `quantity_max`. No lower bound.
    pub fn quantity(&self, quantity: Option<i32>) -> RuleResult<i32> {
        let reject = |rejected| -> ValidationErrors {
            ValidationError::field(
                Field::Quantity,
                rejected,
                Reason::Max,
                vec![self.quantity_max.into()],
            )
            .into()
        };
        match quantity {
            None => Validation::failure(reject(RejectedValue::Missing)),
            Some(quantity) => validate_with(quantity, le(self.quantity_max), |q| {
                reject(RejectedValue::Integer((*q).into()))
            }),
        }
    }

    /// Global rule: `price * quantity >= total_price_min`.
    ///
    /// Skipped (success with `None`) unless both operands are present; the
    /// field rules already report a missing one. Runs even when a present
    /// operand failed its own field rule.
    pub fn total_price(&self, price: Option<i32>, quantity: Option<i32>) -> RuleResult<Option<i64>> {
        let (Some(price), Some(quantity)) = (price, quantity) else {
            return Validation::success(None);
        };
        let total = i64::from(price) * i64::from(quantity);
        validate_with(total, ge(self.total_price_min), |total| -> ValidationErrors {
            ValidationError::global(
                RejectedValue::Integer(*total),
                Reason::TotalPriceMin,
                vec![self.total_price_min, *total],
            )
            .into()
        })
        .map(Some)
    }
}

impl Default for ItemRules {
    fn default() -> Self {
        Self::CANONICAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_error(result: RuleResult<impl std::fmt::Debug>) -> ValidationError {
        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1, "rule reported more than one error");
                errors.into_vec().remove(0)
            }
            Validation::Success(v) => panic!("expected a rejection, got {v:?}"),
        }
    }

    #[test]
    fn test_item_name_blank_variants() {
        let rules = ItemRules::default();
        for input in [None, Some(""), Some("   "), Some("\t\n")] {
            let error = only_error(rules.item_name(input));
            assert_eq!(error.field_name(), Some(Field::ItemName));
            assert_eq!(error.reason(), Some(Reason::Required));
        }
        assert_eq!(rules.item_name(Some(" Book ")), Validation::success(" Book ".to_string()));
    }

    #[test]
    fn test_item_name_keeps_rejected_text() {
        let error = only_error(ItemRules::default().item_name(Some("  ")));
        assert_eq!(error.rejected_value, RejectedValue::Text("  ".into()));
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let rules = ItemRules::default();
        assert!(rules.price(Some(1000)).is_success());
        assert!(rules.price(Some(1_000_000)).is_success());
        assert!(rules.price(Some(999)).is_failure());
        assert!(rules.price(Some(1_000_001)).is_failure());
    }

    #[test]
    fn test_missing_price_reports_range() {
        let error = only_error(ItemRules::default().price(None));
        assert_eq!(error.rejected_value, RejectedValue::Missing);
        assert_eq!(error.reason(), Some(Reason::Range));
        assert_eq!(error.args(), &[1000, 1_000_000]);
    }

    #[test]
    fn test_quantity_ceiling_without_floor() {
        let rules = ItemRules::default();
        assert!(rules.quantity(Some(9999)).is_success());
        assert!(rules.quantity(Some(-50)).is_success());
        let error = only_error(rules.quantity(Some(10_000)));
        assert_eq!(error.reason(), Some(Reason::Max));
        assert_eq!(error.args(), &[9999]);
        assert_eq!(error.rejected_value, RejectedValue::Integer(10_000));
    }

    #[test]
    fn test_total_price_skipped_when_operand_missing() {
        let rules = ItemRules::default();
        assert_eq!(rules.total_price(None, Some(1)), Validation::success(None));
        assert_eq!(rules.total_price(Some(1), None), Validation::success(None));
    }

    #[test]
    fn test_total_price_threshold() {
        let rules = ItemRules::default();
        assert_eq!(
            rules.total_price(Some(1000), Some(10)),
            Validation::success(Some(10_000))
        );
        let error = only_error(rules.total_price(Some(1000), Some(5)));
        assert!(error.is_global());
        assert_eq!(error.reason(), Some(Reason::TotalPriceMin));
        assert_eq!(error.args(), &[10_000, 5000]);
    }

    #[test]
    fn test_total_price_extreme_operands() {
        let rules = ItemRules::default();
        assert!(rules.total_price(Some(i32::MAX), Some(i32::MAX)).is_success());
        assert!(rules.total_price(Some(i32::MIN), Some(i32::MAX)).is_failure());
    }

    #[test]
    fn test_id_by_profile() {
        let rules = ItemRules::default();
        let id = ItemId::new(1);
        assert_eq!(rules.id(None, Profile::Create), Validation::success(None));
        assert_eq!(rules.id(Some(id), Profile::Update), Validation::success(Some(id)));

        let forbidden = only_error(rules.id(Some(id), Profile::Create));
        assert_eq!(forbidden.reason(), Some(Reason::Forbidden));
        assert_eq!(forbidden.rejected_value, RejectedValue::Id(id));

        let required = only_error(rules.id(None, Profile::Update));
        assert_eq!(required.reason(), Some(Reason::Required));
    }

    #[test]
    fn test_validated_rejects_inconsistent_bounds() {
        let inverted = ItemRules {
            price_min: 5000,
            price_max: 10,
            ..ItemRules::default()
        };
        assert_eq!(
            inverted.validated(),
            Err(RulesError::InvertedPriceRange { min: 5000, max: 10 })
        );

        let negative = ItemRules {
            quantity_max: -1,
            ..ItemRules::default()
        };
        assert_eq!(negative.validated(), Err(RulesError::NegativeQuantityCeiling(-1)));
        assert_eq!(ItemRules::default().validated(), Ok(ItemRules::CANONICAL));
    }
}
