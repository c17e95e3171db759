//! Path-scoped document filtering
//!
//! Pure, stateless functions that reduce a document collection to the subset
//! matching every entry of a navigation path. A document qualifies when, for
//! each path entry, at least one of its tag assignments under that category
//! carries the required tag value; documents with missing or malformed tag
//! data are excluded, never rejected with an error.
//!
//! The module exports both plain functions and a [`PathFilterExt`] extension
//! trait so call sites can chain filtering fluently:
//!
//! ```
//! use foldr::filter::PathFilterExt;
//! use foldr::schema::PathEntry;
//! use serde_json::json;
//!
//! let documents = vec![
//!     json!({"id": "d1", "tags": {"client": [{"tagName": "ABC Corp"}]}}),
//!     json!({"id": "d2", "tags": {"client": [{"tagName": "XYZ Ltd"}]}}),
//! ];
//! let path = vec![PathEntry::new("client", "Client", "ABC Corp")];
//!
//! let matching: Vec<_> = documents.filter_path(&path).collect();
//! assert_eq!(matching.len(), 1);
//! ```

use crate::evidence::AsTagMap;
use crate::schema::PathEntry;

/// Whether a single document matches every entry of the path
///
/// An empty path matches everything.
#[must_use]
pub fn matches_path<D: AsTagMap>(document: &D, path: &[PathEntry]) -> bool {
    path.iter()
        .all(|entry| document.has_tag(&entry.category_id, &entry.tag_name))
}

/// Filter a collection down to the documents matching every path entry
///
/// At root (empty path) all input elements are returned. Documents are
/// borrowed, not cloned; identity stays with the caller.
#[must_use]
pub fn by_path<'a, D: AsTagMap>(documents: &'a [D], path: &[PathEntry]) -> Vec<&'a D> {
    documents
        .iter()
        .filter(|document| matches_path(*document, path))
        .collect()
}

/// Extension trait adding fluent path filtering to document slices
pub trait PathFilterExt<D: AsTagMap> {
    /// Iterate the documents matching every entry of `path`
    fn filter_path<'a>(&'a self, path: &'a [PathEntry]) -> impl Iterator<Item = &'a D> + 'a
    where
        D: 'a;
}

impl<D: AsTagMap> PathFilterExt<D> for [D] {
    fn filter_path<'a>(&'a self, path: &'a [PathEntry]) -> impl Iterator<Item = &'a D> + 'a
    where
        D: 'a,
    {
        self.iter()
            .filter(move |document| matches_path(*document, path))
    }
}
