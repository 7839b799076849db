use serde::{Deserialize, Serialize};

/// A key/value pair attached to an entry
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named record with its tags, as stored by the entry service.
///
/// The same shape is used for both directions of the wire: the GET payload is
/// a JSON array of these and the POST body is a single one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Entry {
    pub fn new(name: impl Into<String>, tags: Vec<Tag>) -> Self {
        Entry {
            name: name.into(),
            tags,
        }
    }

    /// Build an entry carrying exactly one tag
    pub fn with_tag(
        name: impl Into<String>,
        tag_name: impl Into<String>,
        tag_value: impl Into<String>,
    ) -> Self {
        Entry::new(name, vec![Tag::new(tag_name, tag_value)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_wire_shape() {
        let entry = Entry::with_tag("milk", "category", "dairy");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "milk",
                "tags": [{"name": "category", "value": "dairy"}]
            })
        );
    }

    #[test]
    fn test_entry_without_tags_field() {
        let entry: Entry = serde_json::from_str(r#"{"name": "bread"}"#).unwrap();
        assert_eq!(entry.name, "bread");
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn test_entry_ignores_server_fields() {
        let entry: Entry =
            serde_json::from_str(r#"{"id": 7, "name": "eggs", "tags": []}"#).unwrap();
        assert_eq!(entry, Entry::new("eggs", vec![]));
    }
}
