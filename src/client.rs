//! Client for the delivery.com API
//!
//! This module provides the [`Client`], which holds the connection
//! configuration and exposes one method per remote endpoint. Every endpoint
//! method is a thin parameter-assembly wrapper around a shared dispatch
//! routine that:
//! - builds the full URL from the base URI and the endpoint path,
//! - sets the `Authorization`, `Content-Type` and `Accept` headers,
//! - JSON-encodes the merged parameter mapping as the request body
//!   (for every verb, GET and DELETE included — the remote API reads
//!   query-like parameters from the JSON body),
//! - decodes the JSON response into an [`ApiResponse`].
//!
//! # Example
//! ```ignore
//! use delivery_client::client::Client;
//!
//! let client = Client::new("my_client_id", "my_token")?;
//! let merchants = client.search("123 Main St, New York, NY", None).await?;
//! ```

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::params::{Params, merge_params};
use crate::model::response::ApiResponse;
use reqwest::{Client as HttpClient, Method};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

/// Construction options for [`Client::with_options`]
///
/// Mirrors the optional trailing options mapping of the upstream API binding:
/// one recognized endpoint option (`base_uri`) plus the status-checking
/// opt-in.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Overrides the default base URI (`https://api.delivery.com`)
    pub base_uri: Option<String>,
    /// When true, non-2xx responses return [`AppError::Unexpected`] instead of
    /// the decoded payload. Defaults to false, matching the upstream contract
    /// of handing error payloads back as ordinary responses.
    pub check_status: bool,
}

/// Client for the delivery.com API
///
/// Holds three pieces of configuration — client identifier, authentication
/// token, base URI — and exposes one method per API endpoint. The client has
/// no mutable state: connection pooling lives inside the transport, so a
/// single instance can be shared freely across tasks.
pub struct Client {
    config: Arc<Config>,
    http_client: HttpClient,
}

impl Client {
    /// Creates a client with the default production base URI
    ///
    /// Credentials are not validated; invalid values only surface as an
    /// authorization failure from the remote API at call time.
    ///
    /// # Arguments
    /// * `client_id` - Merchant/customer account identifier
    /// * `authentication_token` - Opaque credential sent raw in the `Authorization` header
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP transport cannot be constructed
    pub fn new(
        client_id: impl Into<String>,
        authentication_token: impl Into<String>,
    ) -> Result<Self, AppError> {
        Self::from_config(Config::with_credentials(client_id, authentication_token))
    }

    /// Creates a client with explicit options
    ///
    /// # Arguments
    /// * `client_id` - Merchant/customer account identifier
    /// * `authentication_token` - Opaque credential sent raw in the `Authorization` header
    /// * `options` - Base URI override and status-checking opt-in
    pub fn with_options(
        client_id: impl Into<String>,
        authentication_token: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, AppError> {
        let mut config = Config::with_credentials(client_id, authentication_token);
        if let Some(base_uri) = options.base_uri {
            config.base_uri = base_uri;
        }
        config.check_status = options.check_status;
        Self::from_config(config)
    }

    /// Creates a client from a full [`Config`]
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let http_client = HttpClient::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            config: Arc::new(config),
            http_client,
        })
    }

    /// Gets the active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Searches merchants that deliver to an address
    ///
    /// # Arguments
    /// * `address` - Street address to search around
    /// * `options` - Extra search parameters merged into the request body
    ///
    /// # Example
    /// ```ignore
    /// let merchants = client.search("123 Main St, New York, NY", None).await?;
    /// ```
    pub async fn search(
        &self,
        address: &str,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        let mut required = Params::new();
        required.insert("address".to_string(), Value::String(address.to_string()));
        self.get("/merchant/search/delivery", required, options).await
    }

    /// Alias for [`Client::search`]
    pub async fn merchant_search(
        &self,
        address: &str,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.search(address, options).await
    }

    /// Gets a merchant's details
    ///
    /// # Arguments
    /// * `id` - Merchant identifier (numeric or string)
    /// * `options` - Extra parameters merged into the request body
    pub async fn info(
        &self,
        id: impl fmt::Display,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        let path = format!("/merchant/{id}");
        self.get(&path, Params::new(), options).await
    }

    /// Alias for [`Client::info`]
    pub async fn merchant_info(
        &self,
        id: impl fmt::Display,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.info(id, options).await
    }

    /// Gets a merchant's menu
    pub async fn menu(
        &self,
        id: impl fmt::Display,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        let path = format!("/merchant/{id}/menu");
        self.get(&path, Params::new(), options).await
    }

    /// Alias for [`Client::menu`]
    pub async fn merchant_menu(
        &self,
        id: impl fmt::Display,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.menu(id, options).await
    }

    /// Gets a merchant's opening hours
    pub async fn hours(
        &self,
        id: impl fmt::Display,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        let path = format!("/merchant/{id}/hours");
        self.get(&path, Params::new(), options).await
    }

    /// Alias for [`Client::hours`]
    pub async fn merchant_hours(
        &self,
        id: impl fmt::Display,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.hours(id, options).await
    }

    /// Adds items to the customer's cart at a merchant
    ///
    /// # Arguments
    /// * `id` - Merchant identifier
    /// * `order_type` - Fulfillment type, e.g. `"delivery"` or `"pickup"`
    /// * `items` - JSON array of item objects as expected by the remote API
    /// * `options` - Extra parameters merged into the request body
    pub async fn add_to_cart(
        &self,
        id: impl fmt::Display,
        order_type: impl Into<Value>,
        items: Value,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        let path = format!("/customer/cart/{id}");
        let mut required = Params::new();
        required.insert("order_type".to_string(), order_type.into());
        required.insert("items".to_string(), items);
        self.post(&path, required, options).await
    }

    /// Gets the customer's cart at a merchant
    pub async fn cart(
        &self,
        id: impl fmt::Display,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        let path = format!("/customer/cart/{id}");
        self.get(&path, Params::new(), options).await
    }

    /// Clears the customer's cart at a merchant
    ///
    /// # Arguments
    /// * `id` - Merchant identifier
    /// * `cart_index` - Index of the cart entry to remove; `None` clears the
    ///   whole cart and is transmitted as a JSON `null`, matching the wire
    ///   behavior the remote API expects
    /// * `options` - Extra parameters merged into the request body
    pub async fn clear_cart(
        &self,
        id: impl fmt::Display,
        cart_index: Option<i64>,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        let path = format!("/customer/cart/{id}");
        let mut required = Params::new();
        required.insert(
            "cart_index".to_string(),
            cart_index.map_or(Value::Null, Value::from),
        );
        self.delete(&path, required, options).await
    }

    /// Gets the checkout summary for the customer's cart at a merchant
    pub async fn get_checkout(
        &self,
        id: impl fmt::Display,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        let path = format!("/customer/cart/{id}/checkout");
        self.get(&path, Params::new(), options).await
    }

    /// Places the order for the customer's cart at a merchant
    ///
    /// # Arguments
    /// * `id` - Merchant identifier
    /// * `location_id` - Saved customer location to deliver to
    /// * `payments` - JSON array of payment entries as expected by the remote API
    /// * `options` - Extra parameters merged into the request body
    pub async fn checkout(
        &self,
        id: impl fmt::Display,
        location_id: impl Into<Value>,
        payments: Value,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        let path = format!("/customer/cart/{id}/checkout");
        let mut required = Params::new();
        required.insert("location_id".to_string(), location_id.into());
        required.insert("payments".to_string(), payments);
        self.post(&path, required, options).await
    }

    /// Lists the customer's stored payment methods
    pub async fn payments(&self, options: Option<Params>) -> Result<ApiResponse, AppError> {
        self.get("/customer/cc", Params::new(), options).await
    }

    /// Adds a saved location for the customer
    ///
    /// # Arguments
    /// * `location` - All fields of the location (street, city, zip, ...),
    ///   merged directly into the request body
    /// * `options` - Extra parameters merged on top of the location fields
    pub async fn add_location(
        &self,
        location: Params,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.post("/customer/location", location, options).await
    }

    /// Lists the customer's saved locations
    pub async fn locations(&self, options: Option<Params>) -> Result<ApiResponse, AppError> {
        self.get("/customer/location", Params::new(), options).await
    }

    /// Makes a GET request
    async fn get(
        &self,
        path: &str,
        required: Params,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.request(Method::GET, path, required, options).await
    }

    /// Makes a POST request
    async fn post(
        &self,
        path: &str,
        required: Params,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.request(Method::POST, path, required, options).await
    }

    /// Makes a DELETE request
    async fn delete(
        &self,
        path: &str,
        required: Params,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        self.request(Method::DELETE, path, required, options).await
    }

    /// Dispatches a request to the API
    ///
    /// This is the single routine every endpoint method funnels through. It
    /// is public so unlisted endpoints can be reached without waiting for a
    /// dedicated method.
    ///
    /// Transport failures and undecodable bodies propagate unmodified. HTTP
    /// status codes are not inspected unless `check_status` is set: an error
    /// payload on a 4xx/5xx response decodes and returns like any other.
    ///
    /// # Arguments
    /// * `method` - HTTP verb
    /// * `path` - Endpoint path, appended to the configured base URI
    /// * `required` - Method-specific required body fields
    /// * `options` - Caller options merged on top (caller keys win, except
    ///   `client_id`, which is always the configured value)
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - Decoded JSON response
    /// * `Err(AppError)` - Transport, decode, or (opt-in) status failure
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        required: Params,
        options: Option<Params>,
    ) -> Result<ApiResponse, AppError> {
        let url = format!("{}{}", self.config.base_uri, path);
        let body = merge_params(&self.config.client_id, required, options);

        debug!("{} {}", method, url);

        let response = self
            .http_client
            .request(method, &url)
            .header("Authorization", &self.config.authentication_token)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if self.config.check_status && !status.is_success() {
            error!("Request failed with status {}", status);
            return Err(AppError::Unexpected(status));
        }

        let value: Value = response.json().await?;
        Ok(ApiResponse::new(value))
    }
}
