//! Engine facade and builder
//!
//! `FolderEngine` is the single object a presentation layer holds: it owns
//! the hierarchy, the navigation state, and the listing cache, and couples
//! them so the path and cache can never drift out of step with the hierarchy.
//! It holds no document data; callers pass the current snapshot into every
//! query.
//!
//! The engine is a plain, inspectable state object: hosts that need
//! reactivity wrap it in their own store and re-render after mutations.
//!
//! ```
//! use foldr::FolderEngine;
//! use foldr::schema::Category;
//! use serde_json::json;
//!
//! let mut engine = FolderEngine::new();
//! engine.set_hierarchy(vec![
//!     Category::new("doc-type", "Document Type"),
//!     Category::new("client", "Client"),
//! ]);
//!
//! let documents = vec![
//!     json!({"id": "d1", "tags": {"doc-type": [{"tagName": "Invoice"}]}}),
//! ];
//!
//! let folders = engine.generate_folders(&documents);
//! assert_eq!(folders[0].tag_name, "Invoice");
//!
//! engine.navigate_to_folder("doc-type", "Invoice");
//! assert_eq!(engine.filter_by_path(&documents).len(), 1);
//! ```

use crate::evidence::AsTagMap;
use crate::filter;
use crate::folders::{FolderCache, ListingKey, generator};
use crate::hierarchy::Hierarchy;
use crate::nav::NavigationState;
use crate::schema::{Breadcrumb, Category, FolderEntry, PathEntry, ViewMode};
use std::sync::Arc;
use tracing::debug;

/// The virtual folder engine
///
/// All mutations run to completion synchronously and never raise on invalid
/// input; queries borrow the caller's document snapshot. When the snapshot
/// itself changes, call [`clear_cache`](Self::clear_cache): the cache key
/// only observes the hierarchy and path.
pub struct FolderEngine {
    hierarchy: Hierarchy,
    nav: NavigationState,
    cache: FolderCache,
}

impl FolderEngine {
    /// Create an engine with default cache capacity
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for configuring the engine
    #[must_use]
    pub const fn builder() -> FolderEngineBuilder {
        FolderEngineBuilder::new()
    }

    // --- view mode ---

    /// Switch the view mode
    ///
    /// Accepts `ViewMode`, `&str`, or `Option<&str>`; unknown values
    /// normalize to flat, and entering flat mode forces the path to root.
    pub fn set_view_mode(&mut self, mode: impl Into<ViewMode>) {
        self.nav.set_view_mode(mode.into());
    }

    /// Current view mode
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.nav.view_mode()
    }

    // --- hierarchy ---

    /// Replace the hierarchy with a defensive copy
    ///
    /// The path is truncated to the longest prefix still valid against the
    /// new hierarchy, and the listing cache is cleared.
    pub fn set_hierarchy(&mut self, categories: Vec<Category>) {
        self.hierarchy.replace(categories);
        self.after_hierarchy_change();
    }

    /// Insert a category at `position` (default: append)
    ///
    /// A duplicate id is a no-op. On change, the path is re-validated and the
    /// cache cleared.
    pub fn add_category(&mut self, category: Category, position: Option<usize>) {
        if self.hierarchy.insert(category, position) {
            self.after_hierarchy_change();
        }
    }

    /// Remove a category by id
    ///
    /// If the category appeared in the current path, the path is truncated at
    /// its depth. An unknown id is a no-op.
    pub fn remove_category(&mut self, category_id: &str) {
        if self.hierarchy.remove(category_id).is_some() {
            self.after_hierarchy_change();
        }
    }

    /// The current category order
    #[must_use]
    pub fn hierarchy(&self) -> &[Category] {
        self.hierarchy.categories()
    }

    // --- navigation ---

    /// Enter the folder for `tag_name` at the level of `category_id`
    ///
    /// Truncates the path to that category's depth and re-roots there, so
    /// jumping to an ancestor level with a different tag value discards the
    /// deeper entries. Unknown ids are a no-op.
    pub fn navigate_to_folder(&mut self, category_id: &str, tag_name: impl Into<String>) {
        self.nav
            .navigate_to_folder(&self.hierarchy, category_id, tag_name);
    }

    /// Step one level up; no-op at root
    pub fn navigate_back(&mut self) {
        self.nav.navigate_back();
    }

    /// Truncate the path to `depth`; no-op beyond the current depth
    pub fn navigate_to_depth(&mut self, depth: usize) {
        self.nav.navigate_to_depth(depth);
    }

    /// Return to root
    pub fn navigate_to_root(&mut self) {
        self.nav.navigate_to_root();
    }

    /// The current navigation path
    #[must_use]
    pub fn path(&self) -> &[PathEntry] {
        self.nav.path()
    }

    /// Display breadcrumbs for the current path
    #[must_use]
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.nav.breadcrumbs()
    }

    /// Current depth
    #[must_use]
    pub fn depth(&self) -> usize {
        self.nav.depth()
    }

    /// Whether the engine is at root
    #[must_use]
    pub fn is_at_root(&self) -> bool {
        self.nav.is_at_root()
    }

    /// The category one level below the current position, if any
    #[must_use]
    pub fn next_category(&self) -> Option<&Category> {
        self.hierarchy.get(self.nav.depth())
    }

    // --- queries ---

    /// Documents matching every entry of the current path
    ///
    /// At root, all input elements are returned.
    #[must_use]
    pub fn filter_by_path<'a, D: AsTagMap>(&self, documents: &'a [D]) -> Vec<&'a D> {
        filter::by_path(documents, self.nav.path())
    }

    /// The subfolders visible at the current position
    ///
    /// Cached per (hierarchy, path) signature; pass the same snapshot between
    /// calls or [`clear_cache`](Self::clear_cache) when it changes.
    #[must_use]
    pub fn generate_folders<D: AsTagMap>(&self, documents: &[D]) -> Vec<FolderEntry> {
        let key = ListingKey::for_state(&self.hierarchy, self.nav.path());

        if let Some(listing) = self.cache.get(&key) {
            return listing.as_ref().clone();
        }

        let listing = generator::generate(documents, &self.hierarchy, self.nav.path());
        self.cache.insert(key, Arc::new(listing.clone()));
        listing
    }

    /// Drop every cached listing
    ///
    /// Required whenever the document snapshot changes; hierarchy mutations
    /// do this automatically.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Approximate number of cached listings
    #[must_use]
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Restore the initial state: empty hierarchy, root path, flat mode,
    /// empty cache
    pub fn reset(&mut self) {
        debug!("engine reset");
        self.hierarchy.clear();
        self.nav.reset();
        self.cache.clear();
    }

    fn after_hierarchy_change(&mut self) {
        self.nav.truncate_to_valid_prefix(&self.hierarchy);
        self.cache.clear();
    }
}

impl Default for FolderEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`FolderEngine`]
///
/// ```
/// # use foldr::FolderEngine;
/// let engine = FolderEngine::builder()
///     .cache_capacity(64)
///     .build();
/// # let _ = engine;
/// ```
pub struct FolderEngineBuilder {
    cache_capacity: u64,
}

impl FolderEngineBuilder {
    /// Create a builder with default settings
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cache_capacity: FolderCache::DEFAULT_CAPACITY,
        }
    }

    /// Bound the listing cache to `capacity` entries
    #[must_use]
    pub const fn cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Build the engine
    #[must_use]
    pub fn build(self) -> FolderEngine {
        FolderEngine {
            hierarchy: Hierarchy::new(),
            nav: NavigationState::new(),
            cache: FolderCache::with_capacity(self.cache_capacity),
        }
    }
}

impl Default for FolderEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
