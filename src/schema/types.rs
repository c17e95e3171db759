use serde::{Deserialize, Serialize};

/// Reserved separator between id fields inside a cache signature
pub const SIGNATURE_FIELD_SEPARATOR: char = '\u{1f}';

/// Reserved separator between path entries inside a cache signature
pub const SIGNATURE_ENTRY_SEPARATOR: char = '\u{1e}';

/// A user-defined classification axis (e.g. "Client") used as one level of
/// virtual folder depth
///
/// Identity is `category_id`; `category_name` is display-only and may be
/// duplicated across categories without consequence to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: String,
    pub category_name: String,
}

impl Category {
    /// Create a new category
    ///
    /// # Examples
    /// ```
    /// # use foldr::schema::Category;
    /// let client = Category::new("client", "Client");
    /// assert_eq!(client.category_id, "client");
    /// ```
    #[must_use]
    pub fn new(category_id: impl Into<String>, category_name: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            category_name: category_name.into(),
        }
    }
}

/// One level of the current navigation position
///
/// A path is an ordered sequence of these, where the entry at depth *i* must
/// reference the category at position *i* of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathEntry {
    pub category_id: String,
    pub category_name: String,
    pub tag_name: String,
}

impl PathEntry {
    #[must_use]
    pub fn new(
        category_id: impl Into<String>,
        category_name: impl Into<String>,
        tag_name: impl Into<String>,
    ) -> Self {
        Self {
            category_id: category_id.into(),
            category_name: category_name.into(),
            tag_name: tag_name.into(),
        }
    }
}

/// Read-only projection of one path entry for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    pub category_name: String,
    pub tag_name: String,
    pub depth: usize,
    pub is_last: bool,
}

/// One computed subfolder at the current depth: a distinct tag value of the
/// next-deeper category, with the number of path-scoped documents carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderEntry {
    pub category_id: String,
    pub tag_name: String,
    pub file_count: usize,
}

/// How the presentation layer renders the collection
///
/// Unknown, empty, or absent mode values normalize to `Flat`; entering flat
/// mode forces the navigation path back to root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Flat list of all documents, no navigation
    #[default]
    Flat,
    /// Virtual folder hierarchy derived from the category order
    Folders,
}

impl ViewMode {
    /// String form matching the wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Folders => "folders",
        }
    }
}

impl From<&str> for ViewMode {
    fn from(raw: &str) -> Self {
        match raw {
            "folders" => Self::Folders,
            _ => Self::Flat,
        }
    }
}

impl From<Option<&str>> for ViewMode {
    fn from(raw: Option<&str>) -> Self {
        raw.map_or(Self::Flat, Self::from)
    }
}
