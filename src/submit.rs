//! Validate-then-store submission flow
//!
//! A request handler receives raw input, validates it, and either sends the
//! input back for redisplay with every error, or hands the validated item to
//! storage and redirects to the stored record. [`submit_create`] and
//! [`submit_update`] implement that branch over any [`ItemStore`].
//!
//! ```
//! use itemguard::submit::{submit_create, InMemoryItemStore, ItemStore, Submission};
//! use itemguard::{Item, ItemValidator};
//!
//! let store = InMemoryItemStore::new();
//! let validator = ItemValidator::default();
//!
//! let rejected = submit_create(&store, &validator, Item::new("", 2000, 10)).unwrap();
//! assert!(matches!(rejected, Submission::Rejected { .. }));
//!
//! let accepted = submit_create(&store, &validator, Item::new("Book", 2000, 10)).unwrap();
//! let id = accepted.accepted_id().unwrap();
//! assert_eq!(store.find_by_id(id).unwrap().unwrap().item_name, "Book");
//! ```

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::error::ValidationErrors;
use crate::item::{Item, ItemId, ValidItem};
use crate::profile::Profile;
use crate::validator::ItemValidator;
use crate::Validation;

/// Storage failures. Validation failures are never reported here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No item has this id.
    #[error("item {0} not found")]
    NotFound(ItemId),
    /// A writer panicked while holding the store lock.
    #[error("item store lock poisoned")]
    Poisoned,
}

/// An item as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredItem {
    /// Store-assigned id.
    pub id: ItemId,
    /// Display name.
    pub item_name: String,
    /// Unit price.
    pub price: i32,
    /// Count on hand.
    pub quantity: i32,
}

impl StoredItem {
    fn from_valid(id: ItemId, item: ValidItem) -> Self {
        Self {
            id,
            item_name: item.item_name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

impl From<StoredItem> for Item {
    fn from(item: StoredItem) -> Self {
        Item::new(item.item_name, item.price, item.quantity).with_id(item.id)
    }
}

/// Storage collaborator keyed by [`ItemId`].
pub trait ItemStore: Send + Sync {
    /// Store a new item and return its assigned id.
    fn save(&self, item: ValidItem) -> Result<ItemId, StoreError>;
    /// Look up one item.
    fn find_by_id(&self, id: ItemId) -> Result<Option<StoredItem>, StoreError>;
    /// Every item, ordered by id.
    fn find_all(&self) -> Result<Vec<StoredItem>, StoreError>;
    /// Replace the fields of an existing item.
    fn update(&self, id: ItemId, item: ValidItem) -> Result<(), StoreError>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn save(&self, item: ValidItem) -> Result<ItemId, StoreError> {
        (**self).save(item)
    }

    fn find_by_id(&self, id: ItemId) -> Result<Option<StoredItem>, StoreError> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Result<Vec<StoredItem>, StoreError> {
        (**self).find_all()
    }

    fn update(&self, id: ItemId, item: ValidItem) -> Result<(), StoreError> {
        (**self).update(id, item)
    }
}

/// In-memory store for tests and demos. Ids start at 1.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<BTreeMap<ItemId, StoredItem>>,
    sequence: AtomicU64,
}

impl InMemoryItemStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every item. The id sequence keeps counting.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.items.write().map_err(|_| StoreError::Poisoned)?.clear();
        Ok(())
    }
}

impl ItemStore for InMemoryItemStore {
    fn save(&self, item: ValidItem) -> Result<ItemId, StoreError> {
        let mut items = self.items.write().map_err(|_| StoreError::Poisoned)?;
        let id = ItemId::new(self.sequence.fetch_add(1, Ordering::Relaxed) + 1);
        items.insert(id, StoredItem::from_valid(id, item));
        Ok(id)
    }

    fn find_by_id(&self, id: ItemId) -> Result<Option<StoredItem>, StoreError> {
        let items = self.items.read().map_err(|_| StoreError::Poisoned)?;
        Ok(items.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<StoredItem>, StoreError> {
        let items = self.items.read().map_err(|_| StoreError::Poisoned)?;
        Ok(items.values().cloned().collect())
    }

    fn update(&self, id: ItemId, item: ValidItem) -> Result<(), StoreError> {
        let mut items = self.items.write().map_err(|_| StoreError::Poisoned)?;
        let stored = items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *stored = StoredItem::from_valid(id, item);
        Ok(())
    }
}

/// Outcome of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Stored; redirect to this id.
    Accepted {
        /// Id of the stored item.
        id: ItemId,
    },
    /// Not stored; redisplay `candidate` with `errors`.
    Rejected {
        /// The submitted input, with the path id applied on update.
        candidate: Item,
        /// Every error found.
        errors: ValidationErrors,
    },
}

impl Submission {
    /// Whether the item was stored.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }

    /// The stored id, if accepted.
    pub fn accepted_id(&self) -> Option<ItemId> {
        match self {
            Submission::Accepted { id } => Some(*id),
            Submission::Rejected { .. } => None,
        }
    }

    /// The errors, if rejected.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Submission::Accepted { .. } => None,
            Submission::Rejected { errors, .. } => Some(errors),
        }
    }
}

/// Validate `candidate` under the create profile and store it if it passes.
pub fn submit_create<S>(
    store: &S,
    validator: &ItemValidator,
    candidate: Item,
) -> Result<Submission, StoreError>
where
    S: ItemStore + ?Sized,
{
    match validator.check(&candidate, Profile::Create) {
        Validation::Failure(errors) => {
            #[cfg(feature = "tracing")]
            tracing::info!(error_count = errors.len(), "create rejected");
            Ok(Submission::Rejected { candidate, errors })
        }
        Validation::Success(item) => {
            let id = store.save(item)?;
            #[cfg(feature = "tracing")]
            tracing::info!(%id, "item created");
            Ok(Submission::Accepted { id })
        }
    }
}

/// Validate `candidate` as an edit of item `id` and update the store if it passes.
///
/// `id` comes from the request path and overrides whatever id the form carried.
/// Returns [`StoreError::NotFound`] when a valid edit targets a missing item.
pub fn submit_update<S>(
    store: &S,
    validator: &ItemValidator,
    id: ItemId,
    mut candidate: Item,
) -> Result<Submission, StoreError>
where
    S: ItemStore + ?Sized,
{
    candidate.id = Some(id);
    match validator.check(&candidate, Profile::Update) {
        Validation::Failure(errors) => {
            #[cfg(feature = "tracing")]
            tracing::info!(%id, error_count = errors.len(), "update rejected");
            Ok(Submission::Rejected { candidate, errors })
        }
        Validation::Success(item) => {
            store.update(id, item)?;
            #[cfg(feature = "tracing")]
            tracing::info!(%id, "item updated");
            Ok(Submission::Accepted { id })
        }
    }
}
