//! Folder structure generation and memoization
//!
//! Given a document snapshot, the current path, and the hierarchy, this
//! module computes the subfolders visible at the current position: one entry
//! per distinct tag value of the next-deeper category, counted over the
//! path-scoped documents. Results are memoized in a [`FolderCache`] keyed by
//! the hierarchy and path signatures, so pure navigation needs no explicit
//! invalidation: it changes the key.

pub mod cache;
pub mod generator;

pub use cache::{FolderCache, ListingKey};
pub use generator::generate;
