//! # Itemguard
//!
//! Validation rules and a structured error model for item submissions.
//!
//! A submitted item is checked field by field (name required, price in range,
//! quantity under a ceiling) and as a whole (price × quantity above a
//! minimum). Every failing rule is reported, in a fixed order, as data the
//! caller can redisplay next to the original input. Nothing here panics or
//! returns `Err` for bad input.
//!
//! ## Quick Example
//!
//! ```rust
//! use itemguard::{validate, Field, Item, Profile};
//!
//! // Blank name, price too low, quantity too high: three errors at once.
//! let errors = validate(&Item::new("", 500, 20_000), Profile::Create);
//! assert_eq!(errors.len(), 3);
//! assert!(errors.has_field_error(Field::ItemName));
//! assert!(errors.has_field_error(Field::Price));
//! assert!(errors.has_field_error(Field::Quantity));
//!
//! // Update requires the id of the record being edited.
//! let errors = validate(&Item::new("Book", 2000, 10), Profile::Update);
//! assert!(errors.has_field_error(Field::Id));
//!
//! // All good.
//! assert!(validate(&Item::new("Book", 2000, 10), Profile::Create).is_empty());
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the data model and [`ItemRules`].
//! - `tracing`: debug events for rejected candidates and info events for
//!   submissions.
//! - `proptest`: strategies for candidate items in [`testing::strategies`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod item;
pub mod message;
pub mod predicate;
pub mod profile;
pub mod rules;
pub mod semigroup;
pub mod submit;
pub mod testing;
pub mod validation;
pub mod validator;

// Re-exports
pub use error::{
    Message, ProfileError, Reason, RejectedValue, RulesError, Scope, ValidationError,
    ValidationErrors,
};
pub use item::{Field, Item, ItemId, ValidItem};
pub use profile::Profile;
pub use rules::ItemRules;
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use validator::{check, validate, ItemValidator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Reason, Scope, ValidationError, ValidationErrors};
    pub use crate::item::{Field, Item, ItemId, ValidItem};
    pub use crate::message::{MessageCatalog, MessageSource};
    pub use crate::profile::Profile;
    pub use crate::rules::ItemRules;
    pub use crate::semigroup::Semigroup;
    pub use crate::submit::{submit_create, submit_update, ItemStore, Submission};
    pub use crate::validation::{ValidateAll, Validation};
    pub use crate::validator::{check, validate, ItemValidator};
}
