//! Document (evidence) access layer
//!
//! The engine never owns documents; a host supplies a read-only snapshot on
//! every query. This module is the seam between that snapshot and the
//! filter/generator logic:
//!
//! - [`AsTagMap`]: a borrowed view of a document's tag map, so the same
//!   filtering logic runs over raw JSON snapshots and over typed records
//! - lenient accessors over `serde_json::Value` that treat every malformed
//!   shape (null, non-object, non-array tag values, missing tag names) as
//!   "no tags" rather than an error
//! - [`Evidence`]: a strictly typed record for hosts that parse up front,
//!   with [`EvidenceError`] surfacing conversion failures at that boundary
//!   only
//!
//! # Wire shape
//!
//! ```json
//! {
//!   "id": "doc-17",
//!   "tags": {
//!     "doc-type": [{ "tagName": "Invoice" }],
//!     "client": [{ "tagName": "ABC Corp" }, { "tagName": "XYZ Ltd" }]
//!   }
//! }
//! ```
//!
//! A category may carry zero, one, or many tag assignments; multi-valued
//! categories are a first-class case, not an error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

/// Wire field holding a document's identifier
pub const ID_FIELD: &str = "id";

/// Wire field holding a document's tag map
pub const TAG_MAP_FIELD: &str = "tags";

/// Wire field holding a tag assignment's value
pub const TAG_NAME_FIELD: &str = "tagName";

/// Errors from strict evidence ingestion
///
/// The engine's query paths never produce these; they only arise when a host
/// opts into typed parsing via [`Evidence::from_value`] or
/// [`Evidence::from_json`].
#[derive(Debug, Error)]
pub enum EvidenceError {
    /// Record does not match the expected wire shape
    #[error("Malformed evidence record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, EvidenceError>;

/// Borrowed view of a document's tag map
///
/// Types implement this trait to expose their tag assignments per category
/// without allocating new documents. Every engine query is generic over it,
/// so JSON snapshots and typed records filter identically.
pub trait AsTagMap {
    /// Tag values assigned under a category
    ///
    /// Returns an empty vector for a missing category, a malformed tag map,
    /// or a malformed document; never panics.
    fn tag_values(&self, category_id: &str) -> Vec<&str>;

    /// Whether at least one assignment under `category_id` carries `tag_name`
    fn has_tag(&self, category_id: &str, tag_name: &str) -> bool {
        self.tag_values(category_id)
            .iter()
            .any(|value| *value == tag_name)
    }
}

/// The document's tag map, if the document is an object with an object-shaped
/// `tags` field
#[must_use]
pub fn tag_map(document: &Value) -> Option<&Map<String, Value>> {
    document.as_object()?.get(TAG_MAP_FIELD)?.as_object()
}

/// The document's identifier, if present as a string
#[must_use]
pub fn document_id(document: &Value) -> Option<&str> {
    document.get(ID_FIELD)?.as_str()
}

/// Iterate the tag values a document carries under one category
///
/// Every deviation from the wire shape yields an empty iterator: a non-object
/// document, a missing or non-object tag map, a non-array category value, or
/// assignments without a string `tagName`.
pub fn tag_values<'a>(
    document: &'a Value,
    category_id: &str,
) -> impl Iterator<Item = &'a str> + 'a {
    tag_map(document)
        .and_then(|tags| tags.get(category_id))
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|assignment| assignment.get(TAG_NAME_FIELD).and_then(Value::as_str))
}

/// View a host-supplied collection value as a document slice
///
/// Hosts hand the snapshot over as whatever their data layer produced; a
/// null, missing, or otherwise non-array value degrades to an empty slice
/// instead of an error.
#[must_use]
pub fn collection(documents: &Value) -> &[Value] {
    documents.as_array().map_or(&[], Vec::as_slice)
}

impl AsTagMap for Value {
    fn tag_values(&self, category_id: &str) -> Vec<&str> {
        tag_values(self, category_id).collect()
    }

    fn has_tag(&self, category_id: &str, tag_name: &str) -> bool {
        tag_values(self, category_id).any(|value| value == tag_name)
    }
}

/// One tag assigned to a document within a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagAssignment {
    pub tag_name: String,
}

impl TagAssignment {
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
        }
    }
}

/// A strictly typed document record
///
/// The lenient [`Value`] path is what the engine runs on in practice; this
/// type exists for hosts that validate documents once at the ingestion
/// boundary and want the malformed cases rejected there.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evidence {
    pub id: String,

    /// Tag assignments per category id; absent categories are simply not
    /// present as keys
    #[serde(default)]
    pub tags: HashMap<String, Vec<TagAssignment>>,
}

impl Evidence {
    /// Create an untagged record
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tags: HashMap::new(),
        }
    }

    /// Append one tag assignment, builder-style
    ///
    /// # Examples
    /// ```
    /// # use foldr::evidence::{AsTagMap, Evidence};
    /// let doc = Evidence::new("doc-1")
    ///     .tag("doc-type", "Invoice")
    ///     .tag("client", "ABC Corp")
    ///     .tag("client", "XYZ Ltd");
    /// assert_eq!(doc.tag_values("client").len(), 2);
    /// ```
    #[must_use]
    pub fn tag(mut self, category_id: impl Into<String>, tag_name: impl Into<String>) -> Self {
        self.tags
            .entry(category_id.into())
            .or_default()
            .push(TagAssignment::new(tag_name));
        self
    }

    /// Parse a record from a JSON value
    ///
    /// # Errors
    /// Returns [`EvidenceError::Malformed`] if the value does not match the
    /// wire shape.
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Parse a record from raw JSON text
    ///
    /// # Errors
    /// Returns [`EvidenceError::Malformed`] if the text does not parse as the
    /// wire shape.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Render this record back into the wire shape
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl AsTagMap for Evidence {
    fn tag_values(&self, category_id: &str) -> Vec<&str> {
        self.tags.get(category_id).map_or_else(Vec::new, |values| {
            values
                .iter()
                .map(|assignment| assignment.tag_name.as_str())
                .collect()
        })
    }
}
