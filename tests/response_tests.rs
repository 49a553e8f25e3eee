use delivery_client::error::AppError;
use delivery_client::model::response::ApiResponse;
use serde::Deserialize;
use serde_json::json;

fn sample() -> ApiResponse {
    ApiResponse::new(json!({
        "merchants": [
            {"id": 42, "summary": {"name": "Example Merchant", "cuisines": ["pizza"]}},
            {"id": 43, "summary": {"name": "Other Merchant", "cuisines": []}}
        ],
        "count": 2
    }))
}

#[test]
fn key_and_accessor_styles_are_equivalent() {
    let resp = sample();
    assert_eq!(resp.get("count"), Some(&json!(2)));
    assert_eq!(resp["count"], json!(2));
    assert_eq!(resp.get("count").unwrap(), &resp["count"]);
}

#[test]
fn missing_keys_index_to_null() {
    let resp = sample();
    assert_eq!(resp["no_such_key"], json!(null));
    assert_eq!(resp.get("no_such_key"), None);
}

#[test]
fn nested_access_via_pointer_and_index() {
    let resp = sample();
    assert_eq!(
        resp.pointer("/merchants/0/summary/name"),
        Some(&json!("Example Merchant"))
    );
    assert_eq!(resp["merchants"][1]["summary"]["name"], json!("Other Merchant"));
}

#[test]
fn array_payloads_support_positional_access() {
    let resp = ApiResponse::new(json!([{"id": 1}, {"id": 2}]));
    assert_eq!(resp.at(0), Some(&json!({"id": 1})));
    assert_eq!(resp[1]["id"], json!(2));
    assert_eq!(resp.at(5), None);
}

#[test]
fn field_extracts_typed_values() {
    let resp = sample();
    let count: u32 = resp.field("count").expect("field should deserialize");
    assert_eq!(count, 2);
}

#[test]
fn field_reports_missing_keys() {
    let resp = sample();
    let err = resp.field::<String>("no_such_key").err().expect("should be Err");
    match err {
        AppError::MissingField(field) => assert_eq!(field, "no_such_key"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn field_reports_type_mismatches_as_json_errors() {
    let resp = sample();
    let err = resp.field::<String>("count").err().expect("should be Err");
    match err {
        AppError::Json(_) => (),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn deserialize_converts_the_whole_payload() {
    #[derive(Deserialize)]
    struct Summary {
        name: String,
    }
    #[derive(Deserialize)]
    struct Merchant {
        id: u64,
        summary: Summary,
    }
    #[derive(Deserialize)]
    struct SearchResult {
        merchants: Vec<Merchant>,
        count: u32,
    }

    let result: SearchResult = sample().deserialize().expect("should deserialize");
    assert_eq!(result.count, 2);
    assert_eq!(result.merchants[0].id, 42);
    assert_eq!(result.merchants[0].summary.name, "Example Merchant");
}

#[test]
fn display_renders_compact_json() {
    let resp = ApiResponse::new(json!({"ok": true}));
    assert_eq!(resp.to_string(), r#"{"ok":true}"#);
}

#[test]
fn into_inner_round_trips_the_value() {
    let value = json!({"a": [1, 2, 3]});
    let resp = ApiResponse::from(value.clone());
    assert_eq!(resp.value(), &value);
    assert_eq!(resp.into_inner(), value);
}
