//! # Delivery Client
//!
//! Async Rust client for the delivery.com API. It covers merchant discovery
//! (search, info, menu, hours), cart management, checkout, and the customer's
//! payment methods and saved locations.
//!
//! Every endpoint method funnels through one dispatcher that builds the URL,
//! attaches the `Authorization`, `Content-Type` and `Accept` headers, encodes
//! the merged parameters as a JSON body, and decodes the JSON response into an
//! [`ApiResponse`](crate::model::response::ApiResponse).
//!
//! ## Usage
//!
//! ```ignore
//! use delivery_client::prelude::*;
//!
//! let client = Client::new("my_client_id", "my_token")?;
//! let merchants = client.search("123 Main St, New York, NY", None).await?;
//! let merchant = client.info(4123, None).await?;
//! println!("{}", merchant["name"]);
//! ```
//!
//! ## Error reporting
//!
//! The remote API reports application-level failures inside the JSON payload,
//! usually with a non-2xx status code. By default the client does not inspect
//! status codes at all and hands the decoded error payload back to the caller
//! unchanged, matching the upstream API contract. Enable
//! [`ClientOptions::check_status`](crate::client::ClientOptions) to turn
//! non-2xx responses into [`AppError::Unexpected`](crate::error::AppError)
//! instead.

/// HTTP client and endpoint methods
pub mod client;
/// Client configuration
pub mod config;
/// Default endpoint values and environment variable names
pub mod constants;
/// Error types for the library
pub mod error;
/// Request parameter and response model types
pub mod model;
/// Convenience re-exports of the most commonly used items
pub mod prelude;
/// Shared utilities (environment parsing, logging)
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string
pub fn version() -> &'static str {
    VERSION
}
