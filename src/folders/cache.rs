//! Folder listing memoization
//!
//! Listings are cached under a key combining the hierarchy signature (ordered
//! category ids) and the path signature (ordered category-id + tag-value
//! pairs). Navigation therefore never needs to invalidate anything, since a
//! new position is a new key; hierarchy mutations and document-set changes
//! clear the cache wholesale.
//!
//! The backing store is a bounded `moka` cache. Eviction is safe here because
//! the hierarchy signature participates in every key: a stale hierarchy can
//! never satisfy a lookup, and an evicted entry merely costs one recompute.

use crate::hierarchy::Hierarchy;
use crate::schema::{
    FolderEntry, PathEntry, SIGNATURE_ENTRY_SEPARATOR, SIGNATURE_FIELD_SEPARATOR,
};
use moka::sync::Cache;
use std::sync::Arc;
use tracing::trace;

/// Cache key: signatures of the hierarchy and path a listing was computed for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingKey {
    hierarchy: String,
    path: String,
}

impl ListingKey {
    /// Build the key for the current navigation state
    #[must_use]
    pub fn for_state(hierarchy: &Hierarchy, path: &[PathEntry]) -> Self {
        let mut path_signature = String::new();
        for (position, entry) in path.iter().enumerate() {
            if position > 0 {
                path_signature.push(SIGNATURE_ENTRY_SEPARATOR);
            }
            path_signature.push_str(&entry.category_id);
            path_signature.push(SIGNATURE_FIELD_SEPARATOR);
            path_signature.push_str(&entry.tag_name);
        }

        Self {
            hierarchy: hierarchy.signature(),
            path: path_signature,
        }
    }
}

/// Memoized folder listings with bounded capacity
pub struct FolderCache {
    listings: Cache<ListingKey, Arc<Vec<FolderEntry>>>,
}

impl FolderCache {
    /// Default number of cached listings
    pub const DEFAULT_CAPACITY: u64 = 256;

    /// Create a cache with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache bounded to `max_capacity` listings
    #[must_use]
    pub fn with_capacity(max_capacity: u64) -> Self {
        Self {
            listings: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    /// Look up the listing for a key
    #[must_use]
    pub fn get(&self, key: &ListingKey) -> Option<Arc<Vec<FolderEntry>>> {
        let listing = self.listings.get(key);
        trace!(hit = listing.is_some(), "folder cache lookup");
        listing
    }

    /// Store a listing under a key
    pub fn insert(&self, key: ListingKey, listing: Arc<Vec<FolderEntry>>) {
        self.listings.insert(key, listing);
    }

    /// Drop every cached listing
    pub fn clear(&self) {
        self.listings.invalidate_all();
    }

    /// Approximate number of cached listings
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.listings.run_pending_tasks();
        self.listings.entry_count()
    }
}

impl Default for FolderCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Category;
    use crate::testing::hierarchy_abc;

    fn listing(tag_name: &str, file_count: usize) -> Arc<Vec<FolderEntry>> {
        Arc::new(vec![FolderEntry {
            category_id: "a".to_string(),
            tag_name: tag_name.to_string(),
            file_count,
        }])
    }

    #[test]
    fn test_insert_then_get() {
        let cache = FolderCache::new();
        let key = ListingKey::for_state(&hierarchy_abc(), &[]);

        assert!(cache.get(&key).is_none());
        cache.insert(key.clone(), listing("Invoice", 2));

        let cached = cache.get(&key).unwrap();
        assert_eq!(cached[0].tag_name, "Invoice");
    }

    #[test]
    fn test_clear_drops_everything() {
        let cache = FolderCache::new();
        let key = ListingKey::for_state(&hierarchy_abc(), &[]);
        cache.insert(key.clone(), listing("Invoice", 2));

        cache.clear();

        assert!(cache.get(&key).is_none());
        assert_eq!(cache.entry_count(), 0);
    }

    #[test]
    fn test_keys_distinguish_paths() {
        let hierarchy = hierarchy_abc();
        let root = ListingKey::for_state(&hierarchy, &[]);
        let deep = ListingKey::for_state(
            &hierarchy,
            &[PathEntry::new("a", "A", "Invoice")],
        );

        assert_ne!(root, deep);
    }

    #[test]
    fn test_keys_distinguish_hierarchies() {
        let path = [PathEntry::new("a", "A", "Invoice")];

        let first = ListingKey::for_state(&hierarchy_abc(), &path);

        let mut reordered = Hierarchy::new();
        reordered.replace(vec![
            Category::new("c", "C"),
            Category::new("b", "B"),
            Category::new("a", "A"),
        ]);
        let second = ListingKey::for_state(&reordered, &path);

        assert_ne!(first, second);
    }

    #[test]
    fn test_key_separators_prevent_collisions() {
        let hierarchy = hierarchy_abc();

        // "ab" + "c" vs "a" + "bc" must not produce the same signature
        let first = ListingKey::for_state(
            &hierarchy,
            &[PathEntry::new("ab", "AB", "c"), PathEntry::new("d", "D", "e")],
        );
        let second = ListingKey::for_state(
            &hierarchy,
            &[PathEntry::new("a", "A", "bc"), PathEntry::new("d", "D", "e")],
        );

        assert_ne!(first, second);
    }
}
