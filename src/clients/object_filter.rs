//! Object filter value type.
//!
//! SoftLayer object filters are small JSON predicates keyed by dotted field
//! path. A filter on `type.keyName` with operation `BARE_METAL_CPU`
//! serializes to `{"type":{"keyName":{"operation":"BARE_METAL_CPU"}}}` and
//! travels as the `objectFilter` query parameter.

use serde_json::{Map, Value};

/// A JSON predicate restricting which records a collection endpoint returns.
///
/// Each entry pairs a dotted field path with an `operation` value; paths are
/// expanded into nested objects and merged, so filters on sibling fields
/// combine into one predicate document.
///
/// # Example
///
/// ```rust
/// use softlayer_api::ObjectFilter;
///
/// let filter = ObjectFilter::new().with_operation("type.keyName", "BARE_METAL_CPU");
/// assert_eq!(
///     filter.to_query(),
///     r#"{"type":{"keyName":{"operation":"BARE_METAL_CPU"}}}"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectFilter {
    predicates: Vec<(String, String)>,
}

impl ObjectFilter {
    /// Creates an empty filter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Adds an `operation` predicate for the given dotted field path.
    #[must_use]
    pub fn with_operation(mut self, path: impl Into<String>, operation: impl Into<String>) -> Self {
        self.predicates.push((path.into(), operation.into()));
        self
    }

    /// Returns true if the filter contains no predicates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Builds the nested JSON predicate document.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut root = Map::new();
        for (path, operation) in &self.predicates {
            let leaf = {
                let mut leaf = Map::new();
                leaf.insert("operation".to_string(), Value::String(operation.clone()));
                Value::Object(leaf)
            };

            let mut nested = leaf;
            for segment in path.rsplit('.') {
                let mut wrapper = Map::new();
                wrapper.insert(segment.to_string(), nested);
                nested = Value::Object(wrapper);
            }

            merge(&mut root, nested);
        }
        Value::Object(root)
    }

    /// Renders the filter as the `objectFilter` query parameter value
    /// (compact JSON).
    #[must_use]
    pub fn to_query(&self) -> String {
        self.to_value().to_string()
    }
}

/// Deep-merges a nested predicate object into the accumulator.
///
/// Later predicates win on leaf conflicts, matching last-write semantics.
fn merge(target: &mut Map<String, Value>, source: Value) {
    let Value::Object(source) = source else {
        return;
    };
    for (key, value) in source {
        match (target.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge(existing, Value::Object(incoming));
            }
            (_, value) => {
                target.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_filter_renders_empty_object() {
        let filter = ObjectFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.to_query(), "{}");
    }

    #[test]
    fn test_single_path_expands_to_nested_object() {
        let filter = ObjectFilter::new().with_operation("type.keyName", "BARE_METAL_CPU");
        assert_eq!(
            filter.to_value(),
            json!({"type": {"keyName": {"operation": "BARE_METAL_CPU"}}})
        );
    }

    #[test]
    fn test_top_level_path_has_no_nesting() {
        let filter = ObjectFilter::new().with_operation("name", "dal05");
        assert_eq!(filter.to_value(), json!({"name": {"operation": "dal05"}}));
    }

    #[test]
    fn test_sibling_paths_merge_under_shared_prefix() {
        let filter = ObjectFilter::new()
            .with_operation("item.keyName", "RAM")
            .with_operation("item.units", "GB");

        assert_eq!(
            filter.to_value(),
            json!({
                "item": {
                    "keyName": {"operation": "RAM"},
                    "units": {"operation": "GB"}
                }
            })
        );
    }

    #[test]
    fn test_later_predicate_wins_on_same_path() {
        let filter = ObjectFilter::new()
            .with_operation("name", "dal05")
            .with_operation("name", "dal09");

        assert_eq!(filter.to_value(), json!({"name": {"operation": "dal09"}}));
    }

    #[test]
    fn test_query_form_is_compact_json() {
        let filter = ObjectFilter::new().with_operation("type.keyName", "VIRTUAL_SERVER_INSTANCE");
        let query = filter.to_query();
        assert!(!query.contains(' '));
        assert_eq!(
            query,
            r#"{"type":{"keyName":{"operation":"VIRTUAL_SERVER_INSTANCE"}}}"#
        );
    }
}
