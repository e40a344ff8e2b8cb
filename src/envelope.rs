//! Response Envelopes
//!
//! The API wraps collections inconsistently (`data`, `branches`, `banks`,
//! `data.data`, or a bare array) and entities as `{ data: T }` or a bare `T`.
//! Everything is normalised here, at the client boundary, into [`Items`] and
//! plain entities so pages only ever see one shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Wrapper keys searched for a collection, in priority order
pub const COLLECTION_KEYS: &[&str] = &["items", "data", "branches", "banks"];

/// Nesting depth allowed for `data.data` style wrappers
const MAX_DEPTH: usize = 2;

/// The single collection contract every list endpoint is normalised to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

impl<T> Items<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Items<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// Extract the item collection from a response body, whatever the wrapper key
///
/// A body without any known wrapper key (or with a `null` one) yields an
/// empty collection. A wrapper that is present but not a list of `T` is a
/// parse error.
pub fn normalize_items<T: DeserializeOwned>(body: Value) -> ClientResult<Items<T>> {
    match find_collection(body, 0)? {
        Some(list) => {
            let items = serde_json::from_value::<Vec<T>>(Value::Array(list))?;
            Ok(Items { items })
        }
        None => Ok(Items::default()),
    }
}

fn find_collection(body: Value, depth: usize) -> ClientResult<Option<Vec<Value>>> {
    match body {
        Value::Array(list) => Ok(Some(list)),
        Value::Object(mut map) if depth <= MAX_DEPTH => {
            for key in COLLECTION_KEYS {
                match map.remove(*key) {
                    None | Some(Value::Null) => continue,
                    Some(inner @ (Value::Array(_) | Value::Object(_))) => {
                        return Ok(Some(find_collection(inner, depth + 1)?.unwrap_or_default()));
                    }
                    Some(other) => {
                        return Err(ClientError::Parse(format!(
                            "expected a list under `{}`, got {}",
                            key, other
                        )));
                    }
                }
            }
            Ok(None)
        }
        _ => Ok(None),
    }
}

/// Extract a single entity from `{ data: T }` or a bare `T`
///
/// `resource` names the entity in the not-found message.
pub fn normalize_entity<T: DeserializeOwned>(body: Value, resource: &str) -> ClientResult<T> {
    let inner = match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    if is_absent(&inner) {
        return Err(ClientError::NotFound {
            resource: resource.to_string(),
        });
    }

    Ok(serde_json::from_value(inner)?)
}

fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Parse a raw body as JSON, treating an empty body as `null`
pub fn parse_body(body: &str) -> ClientResult<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bank, Branch, BranchId};
    use serde_json::json;

    fn branch_names(items: &Items<Branch>) -> Vec<String> {
        items.items.iter().map(|b| b.display_name()).collect()
    }

    #[test]
    fn test_every_wrapper_key_normalizes() {
        let list = json!([{"id": 1, "name": "Downtown"}, {"id": 2, "name": "Harbor"}]);
        let bodies = vec![
            list.clone(),
            json!({ "items": list.clone() }),
            json!({ "data": list.clone() }),
            json!({ "branches": list.clone() }),
            json!({ "data": { "data": list.clone() } }),
            json!({ "success": true, "data": { "branches": list.clone() } }),
        ];

        for body in bodies {
            let items: Items<Branch> = normalize_items(body.clone()).unwrap();
            assert_eq!(branch_names(&items), vec!["Downtown", "Harbor"], "body: {}", body);
        }
    }

    #[test]
    fn test_banks_wrapper() {
        let body = json!({"banks": [{"code": "BCA", "name": "Bank Central Asia", "swift_code": "CENAIDJA"}]});
        let items: Items<Bank> = normalize_items(body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items.items[0].swift_code.as_deref(), Some("CENAIDJA"));
    }

    #[test]
    fn test_missing_or_null_wrapper_is_empty() {
        for body in [json!({}), json!({"data": null}), json!({"status": "ok"}), Value::Null] {
            let items: Items<Branch> = normalize_items(body).unwrap();
            assert!(items.is_empty());
        }
    }

    #[test]
    fn test_wrapper_with_wrong_shape_is_parse_error() {
        let body = json!({"data": [{"name": "no id"}]});
        let err = normalize_items::<Branch>(body).unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[test]
    fn test_scalar_under_wrapper_is_parse_error() {
        for body in [
            json!({"data": "Internal failure"}),
            json!({"items": 3}),
            json!({"data": {"branches": false}}),
        ] {
            let err = normalize_items::<Branch>(body.clone()).unwrap_err();
            assert!(matches!(err, ClientError::Parse(_)), "body: {}", body);
        }
    }

    #[test]
    fn test_entity_wrapped_or_bare() {
        let wrapped: Branch =
            normalize_entity(json!({"data": {"id": "42", "name": "Downtown"}}), "Branch").unwrap();
        let bare: Branch = normalize_entity(json!({"id": 42, "name": "Downtown"}), "Branch").unwrap();

        assert_eq!(wrapped, bare);
        assert_eq!(wrapped.id, BranchId::new("42"));
    }

    #[test]
    fn test_absent_entity_is_not_found() {
        for body in [Value::Null, json!({"data": null}), json!({})] {
            let err = normalize_entity::<Branch>(body, "Branch").unwrap_err();
            assert_eq!(err.to_string(), "Branch not found");
        }
    }

    #[test]
    fn test_parse_body_empty() {
        assert_eq!(parse_body("  ").unwrap(), Value::Null);
        assert!(parse_body("<html>").is_err());
    }
}
