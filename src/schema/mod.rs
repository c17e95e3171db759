//! Shared vocabulary of the virtual folder engine
//!
//! This module defines the types every other layer speaks in:
//! - **`Category`**: one user-defined classification axis (a folder level)
//! - **`PathEntry`**: one level of the current navigation position
//! - **`Breadcrumb`**: display projection of a path entry
//! - **`FolderEntry`**: one computed subfolder (tag value + document count)
//! - **`ViewMode`**: flat list vs. virtual folder rendering
//!
//! All types serialize with camelCase wire names so a JSON-speaking host can
//! pass them through unchanged.

pub mod types;

pub use types::{
    Breadcrumb, Category, FolderEntry, PathEntry, SIGNATURE_ENTRY_SEPARATOR,
    SIGNATURE_FIELD_SEPARATOR, ViewMode,
};
