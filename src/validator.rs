//! Validator orchestrator
//!
//! Runs every item rule and joins the results, so a single call reports all
//! problems with a candidate. Rules run in a fixed order and their errors keep
//! that order: `id`, `itemName`, `price`, `quantity`, then the global
//! total-price rule.
//!
//! # Example
//!
//! ```
//! use itemguard::{validate, Item, Profile, Reason};
//!
//! let errors = validate(&Item::new("Book", 1000, 5), Profile::Create);
//! assert_eq!(errors.len(), 1);
//!
//! let global = errors.global_errors().next().unwrap();
//! assert_eq!(global.reason(), Some(Reason::TotalPriceMin));
//! assert_eq!(global.args(), &[10_000, 5000]);
//! ```

use crate::error::{RulesError, ValidationErrors};
use crate::item::{Item, ValidItem};
use crate::profile::Profile;
use crate::rules::ItemRules;
use crate::validation::ValidateAll;
use crate::Validation;

/// Stateless item validator holding the bounds it applies.
///
/// `Copy`, `Send` and `Sync`: share it freely between request handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemValidator {
    rules: ItemRules,
}

impl ItemValidator {
    /// A validator applying `rules`.
    ///
    /// `rules` are applied as given; use [`ItemValidator::try_new`] for bounds
    /// that come from configuration.
    pub const fn new(rules: ItemRules) -> Self {
        Self { rules }
    }

    /// A validator applying `rules` once [`ItemRules::validated`] accepts them.
    pub fn try_new(rules: ItemRules) -> Result<Self, RulesError> {
        rules.validated().map(Self::new)
    }

    /// The bounds this validator applies.
    pub fn rules(&self) -> &ItemRules {
        &self.rules
    }

    /// Validate `candidate`, returning the refined item or every error found.
    pub fn check(&self, candidate: &Item, profile: Profile) -> Validation<ValidItem, ValidationErrors> {
        let rules = &self.rules;
        let outcome = (
            rules.id(candidate.id, profile),
            rules.item_name(candidate.item_name.as_deref()),
            rules.price(candidate.price),
            rules.quantity(candidate.quantity),
            rules.total_price(candidate.price, candidate.quantity),
        )
            .validate_all()
            .map(|(id, item_name, price, quantity, _total)| ValidItem {
                id,
                item_name,
                price,
                quantity,
            });

        #[cfg(feature = "tracing")]
        log_outcome(&outcome, profile);

        outcome
    }

    /// Validate `candidate`; an empty result means it is acceptable.
    pub fn validate(&self, candidate: &Item, profile: Profile) -> ValidationErrors {
        match self.check(candidate, profile) {
            Validation::Success(_) => ValidationErrors::new(),
            Validation::Failure(errors) => errors,
        }
    }
}

/// Validate `candidate` against the canonical rules.
pub fn validate(candidate: &Item, profile: Profile) -> ValidationErrors {
    ItemValidator::default().validate(candidate, profile)
}

/// Validate `candidate` against the canonical rules, keeping the refined item on success.
pub fn check(candidate: &Item, profile: Profile) -> Validation<ValidItem, ValidationErrors> {
    ItemValidator::default().check(candidate, profile)
}

#[cfg(feature = "tracing")]
fn log_outcome(outcome: &Validation<ValidItem, ValidationErrors>, profile: Profile) {
    match outcome {
        Validation::Success(item) => {
            tracing::trace!(%profile, item_name = %item.item_name, "item accepted");
        }
        Validation::Failure(errors) => {
            tracing::debug!(%profile, error_count = errors.len(), %errors, "item rejected");
        }
    }
}
