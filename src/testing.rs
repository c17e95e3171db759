//! Testing utilities for foldr
//!
//! Fixture builders shared by the unit tests: canned category sets and a
//! compact way to write tagged documents in the wire shape.
//!
//! Only available when compiled with `cfg(test)`.

use crate::hierarchy::Hierarchy;
use crate::schema::Category;
use serde_json::{Value, json};

/// Three categories "a", "b", "c" in order
#[must_use]
pub fn categories_abc() -> Vec<Category> {
    vec![
        Category::new("a", "A"),
        Category::new("b", "B"),
        Category::new("c", "C"),
    ]
}

/// A hierarchy holding [`categories_abc`]
#[must_use]
pub fn hierarchy_abc() -> Hierarchy {
    let mut hierarchy = Hierarchy::new();
    hierarchy.replace(categories_abc());
    hierarchy
}

/// Build a document value in the wire shape
///
/// Each `(category_id, tag_names)` pair becomes one tag-map entry with one
/// assignment per name.
///
/// # Examples
/// ```ignore
/// let doc = document("d1", &[("doc-type", &["Invoice"]), ("client", &["ABC Corp", "XYZ Ltd"])]);
/// ```
#[must_use]
pub fn document(id: &str, tags: &[(&str, &[&str])]) -> Value {
    let mut tag_map = serde_json::Map::new();
    for (category_id, tag_names) in tags {
        let assignments: Vec<Value> = tag_names
            .iter()
            .map(|tag_name| json!({"tagName": tag_name}))
            .collect();
        tag_map.insert((*category_id).to_string(), Value::Array(assignments));
    }

    json!({"id": id, "tags": tag_map})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence;

    #[test]
    fn test_document_builder_wire_shape() {
        let doc = document("d1", &[("a", &["Invoice", "Receipt"])]);

        assert_eq!(evidence::document_id(&doc), Some("d1"));
        let values: Vec<&str> = evidence::tag_values(&doc, "a").collect();
        assert_eq!(values, vec!["Invoice", "Receipt"]);
    }

    #[test]
    fn test_document_builder_untagged() {
        let doc = document("d1", &[]);
        assert_eq!(evidence::tag_values(&doc, "a").count(), 0);
    }

    #[test]
    fn test_hierarchy_abc() {
        let hierarchy = hierarchy_abc();
        assert_eq!(hierarchy.len(), 3);
        assert_eq!(hierarchy.get(1).unwrap().category_id, "b");
    }
}
