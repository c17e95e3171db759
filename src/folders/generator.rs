//! Folder listing computation
//!
//! The generator is a pure function of (documents, hierarchy, path); the
//! caching wrapper lives in the engine facade. A document contributes to one
//! folder bucket per tag value it carries under the next category, so a
//! document tagged twice at that level appears in two folders: the virtual
//! tree is really a lattice view over tags.

use crate::evidence::AsTagMap;
use crate::filter;
use crate::hierarchy::Hierarchy;
use crate::schema::{FolderEntry, PathEntry};
use std::collections::HashMap;
use tracing::debug;

/// Compute the subfolders visible at the current position
///
/// Steps:
/// 1. The next category is `hierarchy[path.len()]`; at maximum depth there is
///    nothing deeper to show and the result is empty.
/// 2. Documents are scoped to the current path.
/// 3. Every tag value a scoped document carries under the next category
///    increments that value's bucket; malformed documents contribute nothing.
/// 4. Entries are sorted by count descending, ties broken by tag name
///    ascending (case-sensitive).
#[must_use]
pub fn generate<D: AsTagMap>(
    documents: &[D],
    hierarchy: &Hierarchy,
    path: &[PathEntry],
) -> Vec<FolderEntry> {
    let Some(next) = hierarchy.get(path.len()) else {
        return Vec::new();
    };

    let scoped = filter::by_path(documents, path);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for document in &scoped {
        for tag_name in document.tag_values(&next.category_id) {
            *counts.entry(tag_name).or_default() += 1;
        }
    }

    let mut entries: Vec<FolderEntry> = counts
        .into_iter()
        .map(|(tag_name, file_count)| FolderEntry {
            category_id: next.category_id.clone(),
            tag_name: tag_name.to_string(),
            file_count,
        })
        .collect();
    sort_entries(&mut entries);

    debug!(
        category_id = %next.category_id,
        scoped = scoped.len(),
        folders = entries.len(),
        "generated folder listing"
    );
    entries
}

/// Sort folder entries: count descending, then tag name ascending
pub fn sort_entries(entries: &mut [FolderEntry]) {
    entries.sort_by(|left, right| {
        right
            .file_count
            .cmp(&left.file_count)
            .then_with(|| left.tag_name.cmp(&right.tag_name))
    });
}
