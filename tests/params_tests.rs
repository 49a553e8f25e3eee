use delivery_client::model::params::{Params, merge_params};
use serde_json::{Value, json};

fn params(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

#[test]
fn empty_merge_contains_only_client_id() {
    let body = merge_params("cid", Params::new(), None);
    assert_eq!(Value::Object(body), json!({"client_id": "cid"}));
}

#[test]
fn required_fields_are_included() {
    let required = params(json!({"address": "123 Main St"}));
    let body = merge_params("cid", required, None);
    assert_eq!(
        Value::Object(body),
        json!({"client_id": "cid", "address": "123 Main St"})
    );
}

#[test]
fn options_override_required_fields_on_collision() {
    let required = params(json!({"address": "123 Main St", "order_type": "delivery"}));
    let options = params(json!({"address": "456 Oak Ave"}));
    let body = merge_params("cid", required, Some(options));
    assert_eq!(
        Value::Object(body),
        json!({
            "client_id": "cid",
            "address": "456 Oak Ave",
            "order_type": "delivery"
        })
    );
}

#[test]
fn configured_client_id_wins_over_options() {
    let options = params(json!({"client_id": "spoofed", "extra": 1}));
    let body = merge_params("cid", Params::new(), Some(options));
    assert_eq!(
        Value::Object(body),
        json!({"client_id": "cid", "extra": 1})
    );
}

#[test]
fn null_values_survive_the_merge() {
    let required = params(json!({"cart_index": null}));
    let body = merge_params("cid", required, None);
    assert_eq!(
        Value::Object(body),
        json!({"client_id": "cid", "cart_index": null})
    );
}
