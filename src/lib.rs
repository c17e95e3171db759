//! Foldr - a virtual folder engine for tag-organized document collections
//!
//! Documents in the surrounding application are tagged, not filed: each
//! carries values along independent, user-defined categories ("Document
//! Type", "Client", ...). This library derives a familiar hierarchical
//! browsing experience from that flat collection on demand, without ever
//! storing or mutating the documents themselves: folder listings with
//! counts, breadcrumb navigation, and path-scoped filtering.
//!
//! The entry point is [`FolderEngine`]: set a category hierarchy, navigate,
//! and hand the current document snapshot to `generate_folders` /
//! `filter_by_path`. Listings are memoized per (hierarchy, path) signature
//! and invalidated automatically when the hierarchy changes.

pub mod engine;
pub mod evidence;
pub mod filter;
pub mod folders;
pub mod hierarchy;
pub mod nav;
pub mod schema;

#[cfg(test)]
pub mod testing;

pub use engine::{FolderEngine, FolderEngineBuilder};
pub use evidence::{AsTagMap, Evidence, EvidenceError, TagAssignment};
pub use hierarchy::Hierarchy;
pub use nav::NavigationState;
pub use schema::{Breadcrumb, Category, FolderEntry, PathEntry, ViewMode};
