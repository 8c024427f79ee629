//! Item candidate, validated item and field names
//!
//! [`Item`] is what a caller builds from untrusted input: every field is
//! optional because a form may omit any of them. [`ValidItem`] is what a
//! passed validation hands back, with the optionality resolved.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier assigned to an item by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ItemId(u64);

impl ItemId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A candidate item, possibly partially populated.
///
/// ```
/// use itemguard::{Item, ItemId};
///
/// let candidate = Item::new("Book", 2000, 10).with_id(ItemId::new(7));
/// assert_eq!(candidate.item_name.as_deref(), Some("Book"));
/// assert_eq!(candidate.id, Some(ItemId::new(7)));
///
/// let blank = Item::default();
/// assert!(blank.price.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Item {
    /// Store-assigned identifier; absent before creation.
    pub id: Option<ItemId>,
    /// Display name.
    pub item_name: Option<String>,
    /// Unit price.
    pub price: Option<i32>,
    /// Count on hand.
    pub quantity: Option<i32>,
}

impl Item {
    /// A fully populated candidate without an id.
    pub fn new(item_name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            id: None,
            item_name: Some(item_name.into()),
            price: Some(price),
            quantity: Some(quantity),
        }
    }

    /// Set the identifier.
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }
}

/// An item that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ValidItem {
    /// `None` under the create profile, `Some` under update.
    pub id: Option<ItemId>,
    /// Non-blank display name.
    pub item_name: String,
    /// Unit price within the configured range.
    pub price: i32,
    /// Count within the configured ceiling.
    pub quantity: i32,
}

impl ValidItem {
    /// `price * quantity`, widened so it cannot overflow.
    pub fn total_price(&self) -> i64 {
        i64::from(self.price) * i64::from(self.quantity)
    }
}

impl From<ValidItem> for Item {
    fn from(item: ValidItem) -> Self {
        Self {
            id: item.id,
            item_name: Some(item.item_name),
            price: Some(item.price),
            quantity: Some(item.quantity),
        }
    }
}

/// Fields of an item that a validation error can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Field {
    /// `id`
    Id,
    /// `itemName`
    ItemName,
    /// `price`
    Price,
    /// `quantity`
    Quantity,
}

impl Field {
    /// All fields in rule order.
    pub const ALL: [Field; 4] = [Field::Id, Field::ItemName, Field::Price, Field::Quantity];

    /// Name of the field as it appears in forms and message codes.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::ItemName => "itemName",
            Field::Price => "price",
            Field::Quantity => "quantity",
        }
    }

    /// Type name used by the type-level message code.
    pub const fn type_name(self) -> &'static str {
        match self {
            Field::Id => "u64",
            Field::ItemName => "String",
            Field::Price | Field::Quantity => "i32",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
