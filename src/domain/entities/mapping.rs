//! Mapping entity representing a shortened URL.

/// A persisted short id to long URL mapping.
///
/// Mappings are immutable once created: the core contract defines no update
/// or delete operation, and `short_id` is globally unique across all rows.
/// The same long URL may appear in any number of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub url: String,
    pub short_id: String,
}

impl UrlMapping {
    /// Creates a new mapping instance.
    pub fn new(id: i64, url: String, short_id: String) -> Self {
        Self { id, url, short_id }
    }
}

/// Input data for creating a new mapping.
///
/// The `id` is assigned by the storage layer on insert.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub url: String,
    pub short_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let mapping = UrlMapping::new(1, "https://example.com".to_string(), "Ab3xYz09".to_string());

        assert_eq!(mapping.id, 1);
        assert_eq!(mapping.url, "https://example.com");
        assert_eq!(mapping.short_id, "Ab3xYz09");
    }

    #[test]
    fn test_new_mapping_creation() {
        let new_mapping = NewMapping {
            url: "https://rust-lang.org".to_string(),
            short_id: "xYz78900".to_string(),
        };

        assert_eq!(new_mapping.url, "https://rust-lang.org");
        assert_eq!(new_mapping.short_id, "xYz78900");
    }
}
