//! # Delivery Client Prelude
//!
//! Convenient single import for the types needed in most interactions with
//! the delivery.com API.
//!
//! ## Usage
//!
//! ```ignore
//! use delivery_client::prelude::*;
//!
//! let client = Client::new("my_client_id", "my_token")?;
//! let merchants = client.search("123 Main St, New York, NY", None).await?;
//! ```

/// Client and its construction options
pub use crate::client::{Client, ClientOptions};

/// Configuration for the delivery.com API client
pub use crate::config::Config;

/// Main error type for the library
pub use crate::error::AppError;

/// Request parameter mapping
pub use crate::model::params::Params;

/// Dynamic view over decoded JSON responses
pub use crate::model::response::ApiResponse;

/// Logger initialization
pub use crate::utils::logger::setup_logger;

/// Library version information
pub use crate::{VERSION, version};
