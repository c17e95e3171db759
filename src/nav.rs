//! Navigation state machine over the category hierarchy
//!
//! Two states exist: **root** (`path` empty) and **navigated** (`path`
//! non-empty), with maximum depth equal to the hierarchy length. There is no
//! terminal state; the machine stays live for the session.
//!
//! Transitions preserve one invariant at all times: the entry at depth *i*
//! references the category at position *i* of the hierarchy. Navigating to a
//! category that already appears shallower in the path truncates there and
//! re-roots with the new tag value, which is how jumping to an ancestor level
//! is expressed.
//!
//! Invalid transitions (unknown category id, out-of-range depth) are silent
//! no-ops per the engine's degraded-data posture.

use crate::hierarchy::Hierarchy;
use crate::schema::{Breadcrumb, PathEntry, ViewMode};
use tracing::debug;

/// Current browsing position plus view mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    path: Vec<PathEntry>,
    view_mode: ViewMode,
}

impl NavigationState {
    /// Create a state at root, in flat mode
    #[must_use]
    pub const fn new() -> Self {
        Self {
            path: Vec::new(),
            view_mode: ViewMode::Flat,
        }
    }

    /// Enter the folder for `tag_name` at the level of `category_id`
    ///
    /// Locates the category's position in the hierarchy, truncates the path
    /// to that depth, and appends the new entry, discarding any deeper
    /// entries that previously existed. An unknown category id is a no-op,
    /// as is a category deeper than the current position plus one: levels
    /// cannot be skipped, or entries would stop lining up with the
    /// hierarchy positions.
    ///
    /// Returns whether the path changed.
    pub fn navigate_to_folder(
        &mut self,
        hierarchy: &Hierarchy,
        category_id: &str,
        tag_name: impl Into<String>,
    ) -> bool {
        let Some(position) = hierarchy.position_of(category_id) else {
            debug!(category_id, "navigation target not in hierarchy, ignoring");
            return false;
        };
        if position > self.path.len() {
            debug!(category_id, position, "navigation would skip levels, ignoring");
            return false;
        }

        let category = &hierarchy.categories()[position];
        self.path.truncate(position);
        self.path.push(PathEntry::new(
            &category.category_id,
            &category.category_name,
            tag_name,
        ));
        debug!(category_id, depth = self.path.len(), "navigated to folder");
        true
    }

    /// Step one level up; no-op at root
    pub fn navigate_back(&mut self) -> bool {
        self.path.pop().is_some()
    }

    /// Truncate the path to `depth`
    ///
    /// Depths beyond the current path length leave the path unchanged.
    /// Returns whether the path changed.
    pub fn navigate_to_depth(&mut self, depth: usize) -> bool {
        if depth >= self.path.len() {
            return false;
        }
        self.path.truncate(depth);
        true
    }

    /// Return to root
    pub fn navigate_to_root(&mut self) {
        self.path.clear();
    }

    /// Switch the view mode; entering flat mode forces the path to root
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        if mode == ViewMode::Flat {
            self.navigate_to_root();
        }
    }

    /// Current view mode
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The current path
    #[must_use]
    pub fn path(&self) -> &[PathEntry] {
        &self.path
    }

    /// Current depth (`path` length)
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Whether the machine is in the root state
    #[must_use]
    pub fn is_at_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Derive the display breadcrumbs for the current path
    #[must_use]
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let last = self.path.len().saturating_sub(1);
        self.path
            .iter()
            .enumerate()
            .map(|(depth, entry)| Breadcrumb {
                category_name: entry.category_name.clone(),
                tag_name: entry.tag_name.clone(),
                depth,
                is_last: depth == last,
            })
            .collect()
    }

    /// Truncate the path to its longest prefix still positionally consistent
    /// with `hierarchy`
    ///
    /// Called after every hierarchy mutation: if the category referenced at
    /// depth *k* no longer sits at position *k*, the path is cut at *k*.
    /// Returns whether the path changed.
    pub fn truncate_to_valid_prefix(&mut self, hierarchy: &Hierarchy) -> bool {
        let valid = self
            .path
            .iter()
            .zip(hierarchy.categories())
            .take_while(|(entry, category)| entry.category_id == category.category_id)
            .count();

        if valid == self.path.len() {
            return false;
        }
        debug!(from = self.path.len(), to = valid, "path truncated after hierarchy change");
        self.path.truncate(valid);
        true
    }

    /// Restore the initial state: root path, flat mode
    pub fn reset(&mut self) {
        self.path.clear();
        self.view_mode = ViewMode::Flat;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{categories_abc, hierarchy_abc};

    fn navigated_abc() -> (Hierarchy, NavigationState) {
        let hierarchy = hierarchy_abc();
        let mut nav = NavigationState::new();
        nav.navigate_to_folder(&hierarchy, "a", "x");
        nav.navigate_to_folder(&hierarchy, "b", "y");
        nav.navigate_to_folder(&hierarchy, "c", "z");
        (hierarchy, nav)
    }

    #[test]
    fn test_navigate_descends_in_order() {
        let (_, nav) = navigated_abc();

        assert_eq!(nav.depth(), 3);
        assert_eq!(nav.path()[0].tag_name, "x");
        assert_eq!(nav.path()[2].category_id, "c");
        assert!(!nav.is_at_root());
    }

    #[test]
    fn test_navigate_unknown_category_is_noop() {
        let hierarchy = hierarchy_abc();
        let mut nav = NavigationState::new();

        assert!(!nav.navigate_to_folder(&hierarchy, "nope", "x"));
        assert!(nav.is_at_root());
    }

    #[test]
    fn test_navigate_cannot_skip_levels() {
        let hierarchy = hierarchy_abc();
        let mut nav = NavigationState::new();

        // "b" sits at position 1; from root only position 0 is reachable
        assert!(!nav.navigate_to_folder(&hierarchy, "b", "y"));
        assert!(nav.is_at_root());
    }

    #[test]
    fn test_renavigation_truncates_and_reroots() {
        let (hierarchy, mut nav) = navigated_abc();

        // Jump back to level B with a different tag: C entry is dropped
        assert!(nav.navigate_to_folder(&hierarchy, "b", "w"));

        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.path()[0].tag_name, "x");
        assert_eq!(nav.path()[1].tag_name, "w");
    }

    #[test]
    fn test_navigate_back_pops_one_level() {
        let (_, mut nav) = navigated_abc();

        assert!(nav.navigate_back());
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_navigate_back_at_root_is_noop() {
        let mut nav = NavigationState::new();
        assert!(!nav.navigate_back());
        assert!(nav.is_at_root());
    }

    #[test]
    fn test_navigate_to_depth() {
        let (_, mut nav) = navigated_abc();

        assert!(nav.navigate_to_depth(1));
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.path()[0].category_id, "a");
    }

    #[test]
    fn test_navigate_to_depth_out_of_range_is_noop() {
        let (_, mut nav) = navigated_abc();

        assert!(!nav.navigate_to_depth(7));
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_navigate_to_root_is_idempotent() {
        let (_, mut nav) = navigated_abc();

        nav.navigate_to_root();
        let after_first = nav.clone();
        nav.navigate_to_root();

        assert!(nav.is_at_root());
        assert_eq!(nav, after_first);
    }

    #[test]
    fn test_flat_mode_forces_root() {
        let (_, mut nav) = navigated_abc();

        nav.set_view_mode(ViewMode::Flat);

        assert_eq!(nav.view_mode(), ViewMode::Flat);
        assert!(nav.is_at_root());
    }

    #[test]
    fn test_folders_mode_keeps_path() {
        let (_, mut nav) = navigated_abc();

        nav.set_view_mode(ViewMode::Folders);

        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_breadcrumbs_projection() {
        let (_, mut nav) = navigated_abc();
        nav.navigate_back();

        let crumbs = nav.breadcrumbs();
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].category_name, "A");
        assert_eq!(crumbs[0].depth, 0);
        assert!(!crumbs[0].is_last);
        assert_eq!(crumbs[1].tag_name, "y");
        assert!(crumbs[1].is_last);
    }

    #[test]
    fn test_breadcrumbs_empty_at_root() {
        assert!(NavigationState::new().breadcrumbs().is_empty());
    }

    #[test]
    fn test_truncate_after_category_removal() {
        let (mut hierarchy, mut nav) = navigated_abc();

        // Removing the root level invalidates the whole path
        hierarchy.remove("a");
        assert!(nav.truncate_to_valid_prefix(&hierarchy));
        assert!(nav.is_at_root());
    }

    #[test]
    fn test_truncate_keeps_valid_prefix() {
        let (mut hierarchy, mut nav) = navigated_abc();

        hierarchy.remove("b");
        assert!(nav.truncate_to_valid_prefix(&hierarchy));

        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.path()[0].category_id, "a");
    }

    #[test]
    fn test_truncate_noop_when_consistent() {
        let (hierarchy, mut nav) = navigated_abc();
        assert!(!nav.truncate_to_valid_prefix(&hierarchy));
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_truncate_after_insert_above_path() {
        let (mut hierarchy, mut nav) = navigated_abc();

        hierarchy.insert(crate::schema::Category::new("x", "X"), Some(1));
        assert!(nav.truncate_to_valid_prefix(&hierarchy));

        // Only the A entry still lines up positionally
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_reset() {
        let (_, mut nav) = navigated_abc();
        nav.set_view_mode(ViewMode::Folders);

        nav.reset();

        assert!(nav.is_at_root());
        assert_eq!(nav.view_mode(), ViewMode::Flat);
    }

    #[test]
    fn test_path_positions_match_hierarchy() {
        let (hierarchy, nav) = navigated_abc();
        let categories = categories_abc();

        for (depth, entry) in nav.path().iter().enumerate() {
            assert_eq!(entry.category_id, categories[depth].category_id);
        }
        assert!(nav.depth() <= hierarchy.len());
    }
}
