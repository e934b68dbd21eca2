//! In-memory entity stores and derived counters.
//!
//! Each resource type (categories, products, orders) gets one [`Store`]: a
//! shared in-memory collection that is replaced wholesale after a full fetch
//! and patched locally after a confirmed mutation, so screens avoid a
//! re-fetch on every write. Stores are explicit injected objects, not
//! ambient globals; views subscribe to a revision counter and re-render when
//! it moves.
//!
//! Counters are pure projections over a store's current contents and are
//! consistent with it at the instant of read.

use std::sync::Arc;

use tokio::sync::{RwLock, watch};

use crate::models::{Category, Order, Product};

/// An entity that can live in a [`Store`].
pub trait Entity {
    /// The identity type, compared with `==` on removal and replacement.
    type Id: PartialEq;

    /// The server-assigned identity.
    fn id(&self) -> &Self::Id;
}

struct StoreInner<T> {
    items: RwLock<Vec<T>>,
    revision: watch::Sender<u64>,
}

/// A shared in-memory collection of one entity type.
///
/// Cloning is cheap and clones observe the same contents. Mutations bump the
/// revision channel so subscribed views know to re-render.
pub struct Store<T> {
    inner: Arc<StoreInner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Store<T> {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(StoreInner {
                items: RwLock::new(Vec::new()),
                revision,
            }),
        }
    }

    /// Subscribe to the revision counter; it moves on every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }

    /// Number of items currently held.
    pub async fn len(&self) -> usize {
        self.inner.items.read().await.len()
    }

    /// Whether the store holds nothing.
    pub async fn is_empty(&self) -> bool {
        self.inner.items.read().await.is_empty()
    }

    fn bump(&self) {
        self.inner.revision.send_modify(|revision| *revision += 1);
    }
}

impl<T: Entity + Clone> Store<T> {
    /// Replace the entire contents after a full fetch.
    pub async fn replace_all(&self, items: Vec<T>) {
        *self.inner.items.write().await = items;
        self.bump();
    }

    /// Append the server-returned entity after a confirmed create.
    pub async fn append(&self, item: T) {
        self.inner.items.write().await.push(item);
        self.bump();
    }

    /// Remove by identity after a confirmed delete.
    ///
    /// Removing an absent identity is a no-op; returns whether anything was
    /// removed.
    pub async fn remove(&self, id: &T::Id) -> bool {
        let mut items = self.inner.items.write().await;
        let before = items.len();
        items.retain(|item| item.id() != id);
        let removed = items.len() != before;
        drop(items);
        if removed {
            self.bump();
        }
        removed
    }

    /// Replace the matching entity with the server-returned copy after a
    /// confirmed update. Returns whether a match was found.
    pub async fn replace_one(&self, id: &T::Id, replacement: T) -> bool {
        let mut items = self.inner.items.write().await;
        let slot = items.iter_mut().find(|item| item.id() == id);
        let replaced = match slot {
            Some(item) => {
                *item = replacement;
                true
            }
            None => false,
        };
        drop(items);
        if replaced {
            self.bump();
        }
        replaced
    }

    /// Apply an in-place patch to the matching entity (e.g. a confirmed
    /// status change that leaves every other field untouched). Returns
    /// whether a match was found.
    pub async fn patch<F>(&self, id: &T::Id, patch: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let mut items = self.inner.items.write().await;
        let patched = match items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                patch(item);
                true
            }
            None => false,
        };
        drop(items);
        if patched {
            self.bump();
        }
        patched
    }

    /// A clone of the current contents, for derived views.
    pub async fn snapshot(&self) -> Vec<T> {
        self.inner.items.read().await.clone()
    }

    /// Find one entity by identity.
    pub async fn get(&self, id: &T::Id) -> Option<T> {
        self.inner
            .items
            .read()
            .await
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }
}

/// Derived count of a store's contents.
///
/// Pure and side-effect free: always equals the store's element count at the
/// instant of read.
pub async fn count<T>(store: &Store<T>) -> usize {
    store.len().await
}

/// Aggregate counts for the dashboard tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardCounts {
    pub products: usize,
    pub categories: usize,
    pub orders: usize,
}

impl DashboardCounts {
    /// Read all three counters.
    pub async fn collect(
        categories: &Store<Category>,
        products: &Store<Product>,
        orders: &Store<Order>,
    ) -> Self {
        Self {
            products: count(products).await,
            categories: count(categories).await,
            orders: count(orders).await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        label: &'static str,
    }

    impl Entity for Item {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn item(id: u32, label: &'static str) -> Item {
        Item { id, label }
    }

    #[tokio::test]
    async fn test_count_tracks_replace_all() {
        let store = Store::new();
        store
            .replace_all(vec![item(1, "a"), item(2, "b"), item(3, "c")])
            .await;
        assert_eq!(count(&store).await, 3);

        store.replace_all(vec![item(9, "z")]).await;
        assert_eq!(count(&store).await, 1);
    }

    #[tokio::test]
    async fn test_append_grows_by_one() {
        let store = Store::new();
        store.append(item(1, "a")).await;
        store.append(item(2, "b")).await;
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = Store::new();
        store.replace_all(vec![item(1, "a"), item(2, "b")]).await;

        assert!(store.remove(&1).await);
        assert_eq!(store.len().await, 1);

        // Removing an absent identity leaves the store unchanged.
        assert!(!store.remove(&1).await);
        assert_eq!(store.snapshot().await, vec![item(2, "b")]);
    }

    #[tokio::test]
    async fn test_replace_one_swaps_matching_identity() {
        let store = Store::new();
        store.replace_all(vec![item(1, "a"), item(2, "b")]).await;

        assert!(store.replace_one(&2, item(2, "updated")).await);
        assert_eq!(store.get(&2).await, Some(item(2, "updated")));

        // No match: nothing changes.
        assert!(!store.replace_one(&7, item(7, "ghost")).await);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_patch_touches_only_named_field() {
        let store = Store::new();
        store.replace_all(vec![item(1, "a")]).await;

        assert!(store.patch(&1, |i| i.label = "patched").await);
        assert_eq!(store.get(&1).await, Some(item(1, "patched")));
    }

    #[tokio::test]
    async fn test_mutations_bump_revision() {
        let store = Store::new();
        let mut revision = store.subscribe();
        let initial = *revision.borrow_and_update();

        store.replace_all(vec![item(1, "a")]).await;
        store.append(item(2, "b")).await;
        store.remove(&1).await;
        assert_eq!(*revision.borrow_and_update(), initial + 3);

        // A no-op removal does not wake subscribers.
        store.remove(&1).await;
        assert_eq!(*revision.borrow_and_update(), initial + 3);
    }
}
