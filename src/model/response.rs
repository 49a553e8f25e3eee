use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::ops::Index;

/// Dynamic view over a decoded JSON response
///
/// The remote API attaches no schema guarantees to its payloads, so responses
/// are exposed as-is: key-style access through `Index` (`resp["name"]`,
/// `resp[0]`), accessor-style through [`get`](ApiResponse::get) /
/// [`at`](ApiResponse::at) / [`pointer`](ApiResponse::pointer), and typed
/// extraction through [`field`](ApiResponse::field) and
/// [`deserialize`](ApiResponse::deserialize). Both access styles resolve to
/// the same underlying value.
///
/// ```ignore
/// let merchant = client.info(42, None).await?;
/// assert_eq!(merchant["name"], merchant.get("name").unwrap().clone());
/// let name: String = merchant.field("name")?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    value: Value,
}

impl ApiResponse {
    /// Wraps a decoded JSON value
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Looks up a key of a JSON object, `None` if absent or not an object
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }

    /// Looks up an element of a JSON array, `None` if out of bounds or not an array
    pub fn at(&self, index: usize) -> Option<&Value> {
        self.value.get(index)
    }

    /// Resolves a JSON pointer (`"/merchants/0/summary/name"`) against the payload
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.value.pointer(pointer)
    }

    /// Extracts a top-level field as a concrete type
    ///
    /// # Arguments
    /// * `key` - Field name in the response object
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized field value
    /// * `Err(AppError::MissingField)` - If the field is absent
    /// * `Err(AppError::Json)` - If the field does not match `T`
    pub fn field<T: DeserializeOwned>(&self, key: &str) -> Result<T, AppError> {
        let value = self
            .value
            .get(key)
            .ok_or_else(|| AppError::MissingField(key.to_string()))?;
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Deserializes the whole payload into a concrete type
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, AppError> {
        Ok(serde_json::from_value(self.value)?)
    }

    /// Borrows the underlying JSON value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the view, returning the underlying JSON value
    pub fn into_inner(self) -> Value {
        self.value
    }
}

impl From<Value> for ApiResponse {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl Index<&str> for ApiResponse {
    type Output = Value;

    /// Returns `Value::Null` for missing keys, like indexing a `serde_json::Value`
    fn index(&self, key: &str) -> &Value {
        &self.value[key]
    }
}

impl Index<usize> for ApiResponse {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.value[index]
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
