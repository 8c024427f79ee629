//! Create and update validation profiles

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Which flow a candidate is being validated for.
///
/// Both profiles share the name, price, quantity and total-price rules. They
/// differ only in the `id` field: it must be absent on create (the store
/// assigns it) and present on update (it names the record being edited).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Profile {
    /// New item; `id` must be absent.
    Create,
    /// Existing item; `id` is required.
    Update,
}

impl Profile {
    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Profile::Create => "create",
            Profile::Update => "update",
        }
    }

    /// Whether a missing `id` is an error.
    pub const fn requires_id(self) -> bool {
        matches!(self, Profile::Update)
    }

    /// Whether a present `id` is an error.
    pub const fn forbids_id(self) -> bool {
        matches!(self, Profile::Create)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses `create`/`save` and `update`/`edit`, ignoring ASCII case.
///
/// ```
/// use itemguard::Profile;
///
/// assert_eq!("Edit".parse::<Profile>(), Ok(Profile::Update));
/// assert!("delete".parse::<Profile>().is_err());
/// ```
impl FromStr for Profile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "create" | "save" => Ok(Profile::Create),
            "update" | "edit" => Ok(Profile::Update),
            _ => Err(ProfileError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        for name in ["create", "SAVE", " Create "] {
            assert_eq!(name.parse::<Profile>(), Ok(Profile::Create));
        }
        for name in ["update", "Edit"] {
            assert_eq!(name.parse::<Profile>(), Ok(Profile::Update));
        }
    }

    #[test]
    fn test_parse_unknown_is_contract_error() {
        assert_eq!(
            "patch".parse::<Profile>(),
            Err(ProfileError::Unknown("patch".to_string()))
        );
    }

    #[test]
    fn test_id_requirements_are_exclusive() {
        assert!(Profile::Update.requires_id() && !Profile::Update.forbids_id());
        assert!(Profile::Create.forbids_id() && !Profile::Create.requires_id());
    }

    #[test]
    fn test_display_round_trips() {
        for profile in [Profile::Create, Profile::Update] {
            assert_eq!(profile.to_string().parse::<Profile>(), Ok(profile));
        }
    }
}
