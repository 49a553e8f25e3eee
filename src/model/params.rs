use serde_json::{Map, Value};

/// Request parameters: a mapping from string keys to JSON values
///
/// Assembled per call from method-specific required fields plus an optional
/// caller-supplied options mapping.
pub type Params = Map<String, Value>;

/// Merges request parameters into the body sent to the API.
///
/// The merge is ordered: the configured `client_id` forms the base, the
/// method's required fields go on top, then the caller's options. Options
/// override required fields on key collision. The configured `client_id` is
/// re-applied last so callers cannot override the account identity.
///
/// # Arguments
///
/// * `client_id` - The configured account identifier
/// * `required` - Method-specific required fields
/// * `options` - Caller-supplied options mapping, if any
///
/// # Returns
///
/// The merged body mapping
pub fn merge_params(client_id: &str, required: Params, options: Option<Params>) -> Params {
    let mut body = Params::new();
    body.insert("client_id".to_string(), Value::String(client_id.to_string()));
    body.extend(required);
    if let Some(options) = options {
        body.extend(options);
    }
    // the configured identity always wins
    body.insert("client_id".to_string(), Value::String(client_id.to_string()));
    body
}
