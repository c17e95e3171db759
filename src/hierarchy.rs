//! Hierarchy model: the ordered category list defining folder depth order
//!
//! The hierarchy is owned by the caller conceptually; the engine stores a
//! defensive copy and treats position as meaning. Position 0 is the first
//! folder level, position 1 the second, and so on; its length is the maximum
//! navigable depth.
//!
//! All mutations follow the engine's degraded-data posture: duplicate ids on
//! insert and removals of unknown ids are silent no-ops, never errors.

use crate::schema::{Category, SIGNATURE_FIELD_SEPARATOR};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered sequence of categories, unique by `category_id`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hierarchy {
    categories: Vec<Category>,
}

impl Hierarchy {
    /// Create an empty hierarchy
    #[must_use]
    pub const fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Replace the hierarchy wholesale with a defensive copy
    ///
    /// Duplicate `category_id`s in the input are deduplicated keeping the
    /// first occurrence, mirroring the no-op rule for duplicate inserts.
    pub fn replace(&mut self, categories: Vec<Category>) {
        self.categories.clear();
        for category in categories {
            if !self.contains(&category.category_id) {
                self.categories.push(category);
            }
        }
        debug!(levels = self.categories.len(), "hierarchy replaced");
    }

    /// Insert a category at `position` (default: append)
    ///
    /// Positions past the end are clamped to append. A duplicate
    /// `category_id` is a no-op.
    ///
    /// Returns whether the hierarchy changed.
    pub fn insert(&mut self, category: Category, position: Option<usize>) -> bool {
        if self.contains(&category.category_id) {
            return false;
        }

        let position = position
            .unwrap_or(self.categories.len())
            .min(self.categories.len());
        debug!(category_id = %category.category_id, position, "category inserted");
        self.categories.insert(position, category);
        true
    }

    /// Remove a category by id
    ///
    /// Returns the position it occupied, or `None` (no-op) for an unknown id.
    pub fn remove(&mut self, category_id: &str) -> Option<usize> {
        let position = self.position_of(category_id)?;
        self.categories.remove(position);
        debug!(category_id, position, "category removed");
        Some(position)
    }

    /// Position of a category within the hierarchy
    #[must_use]
    pub fn position_of(&self, category_id: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|category| category.category_id == category_id)
    }

    /// Whether a category id is present
    #[must_use]
    pub fn contains(&self, category_id: &str) -> bool {
        self.position_of(category_id).is_some()
    }

    /// Category at a given depth
    #[must_use]
    pub fn get(&self, depth: usize) -> Option<&Category> {
        self.categories.get(depth)
    }

    /// The ordered category list
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of levels (maximum navigable depth)
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the hierarchy has no levels
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Remove all categories
    pub fn clear(&mut self) {
        self.categories.clear();
    }

    /// Ordered category-id signature used as a cache-key component
    ///
    /// Ids are joined with a reserved separator so distinct orderings can
    /// never collide.
    #[must_use]
    pub fn signature(&self) -> String {
        let mut signature = String::new();
        for (position, category) in self.categories.iter().enumerate() {
            if position > 0 {
                signature.push(SIGNATURE_FIELD_SEPARATOR);
            }
            signature.push_str(&category.category_id);
        }
        signature
    }
}
