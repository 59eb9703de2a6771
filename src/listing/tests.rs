//! Tests for listing decoding

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

/// Test item recognizing only the "widget" kind
#[derive(Debug, PartialEq)]
struct Widget {
    id: String,
}

impl FromChild for Widget {
    fn from_child(kind: &str, data: &Value) -> crate::Result<Option<Self>> {
        if kind != "widget" {
            return Ok(None);
        }
        let id = data
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::malformed("widget without id"))?
            .to_string();
        Ok(Some(Widget { id }))
    }
}

fn envelope(children: Value, before: Value, after: Value) -> Value {
    json!({"data": {"children": children, "before": before, "after": after}})
}

#[test]
fn test_decode_basic_page() {
    let body = envelope(
        json!([
            {"kind": "widget", "data": {"id": "w1"}},
            {"kind": "widget", "data": {"id": "w2"}},
        ]),
        Value::Null,
        json!("c_next"),
    );

    let page = ListingDecoder::<Widget>::new().decode(&body).unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.items[0].id, "w1");
    assert_eq!(page.items[1].id, "w2");
    assert_eq!(page.after.as_deref(), Some("c_next"));
    assert!(page.before.is_none());
    assert_eq!(page.skipped, 0);
}

#[test]
fn test_decode_preserves_server_order() {
    let body = envelope(
        json!([
            {"kind": "widget", "data": {"id": "z"}},
            {"kind": "widget", "data": {"id": "a"}},
            {"kind": "widget", "data": {"id": "m"}},
        ]),
        Value::Null,
        Value::Null,
    );

    let page = ListingDecoder::<Widget>::new().decode(&body).unwrap();
    let ids: Vec<&str> = page.items.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["z", "a", "m"]);
}

#[test]
fn test_unknown_kind_skipped_and_counted() {
    let body = envelope(
        json!([
            {"kind": "widget", "data": {"id": "w1"}},
            {"kind": "gizmo", "data": {"id": "g1"}},
            {"kind": "widget", "data": {"id": "w2"}},
        ]),
        Value::Null,
        Value::Null,
    );

    let page = ListingDecoder::<Widget>::new().decode(&body).unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.skipped, 1);
}

#[test]
fn test_total_hint() {
    let body = json!({"data": {"children": [], "before": null, "after": null, "total": 412}});
    let page = ListingDecoder::<Widget>::new().decode(&body).unwrap();
    assert_eq!(page.total_hint, Some(412));
}

#[test]
fn test_missing_data_is_malformed() {
    let body = json!({"children": []});
    let err = ListingDecoder::<Widget>::new().decode(&body).unwrap_err();
    assert!(matches!(err, Error::MalformedListing { .. }));
}

#[test]
fn test_missing_children_is_malformed() {
    let body = json!({"data": {"before": null, "after": null}});
    let err = ListingDecoder::<Widget>::new().decode(&body).unwrap_err();
    assert!(matches!(err, Error::MalformedListing { .. }));
}

#[test]
fn test_non_string_cursor_is_malformed() {
    let body = envelope(json!([]), Value::Null, json!(42));
    let err = ListingDecoder::<Widget>::new().decode(&body).unwrap_err();
    assert!(matches!(err, Error::MalformedListing { .. }));
}

#[test]
fn test_child_without_kind_is_malformed() {
    let body = envelope(json!([{"data": {"id": "w1"}}]), Value::Null, Value::Null);
    let err = ListingDecoder::<Widget>::new().decode(&body).unwrap_err();
    assert!(matches!(err, Error::MalformedListing { .. }));
}

#[test]
fn test_bad_item_payload_fails_page() {
    // A recognized kind with a broken payload is a real error, not a skip
    let body = envelope(
        json!([{"kind": "widget", "data": {"name": "no id"}}]),
        Value::Null,
        Value::Null,
    );
    let err = ListingDecoder::<Widget>::new().decode(&body).unwrap_err();
    assert!(matches!(err, Error::MalformedListing { .. }));
}

#[test]
fn test_absent_cursor_fields_are_none() {
    let body = json!({"data": {"children": []}});
    let page = ListingDecoder::<Widget>::new().decode(&body).unwrap();
    assert!(page.before.is_none());
    assert!(page.after.is_none());
    assert!(page.is_last_forward());
    assert!(page.is_last_backward());
}

#[test]
fn test_page_into_iterator() {
    let body = envelope(
        json!([
            {"kind": "widget", "data": {"id": "w1"}},
            {"kind": "widget", "data": {"id": "w2"}},
        ]),
        Value::Null,
        Value::Null,
    );
    let page = ListingDecoder::<Widget>::new().decode(&body).unwrap();
    let ids: Vec<String> = page.into_iter().map(|w| w.id).collect();
    assert_eq!(ids, vec!["w1".to_string(), "w2".to_string()]);
}
