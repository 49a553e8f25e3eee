use crate::constants::{
    DEFAULT_BASE_URI, ENV_AUTH_TOKEN, ENV_BASE_URI, ENV_CHECK_STATUS, ENV_CLIENT_ID,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the delivery.com API client
///
/// Immutable after construction as far as the [`Client`](crate::client::Client)
/// is concerned. Credential values are not validated here; a bad `client_id`
/// or token only surfaces as an authorization failure from the remote API at
/// call time.
pub struct Config {
    /// Merchant/customer account identifier, sent as `client_id` in every request body
    pub client_id: String,
    /// Opaque bearer credential, sent raw in the `Authorization` header
    pub authentication_token: String,
    /// Base URI of the delivery.com API
    pub base_uri: String,
    /// When true, non-2xx responses become errors instead of decoded payloads.
    /// Off by default to match the upstream API contract.
    pub check_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads `.env` if present, then reads `DELIVERY_CLIENT_ID`,
    /// `DELIVERY_AUTH_TOKEN`, `DELIVERY_BASE_URI` and `DELIVERY_CHECK_STATUS`.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = get_env_or_default(ENV_CLIENT_ID, String::from("default_client_id"));
        let authentication_token =
            get_env_or_default(ENV_AUTH_TOKEN, String::from("default_auth_token"));

        // Check if we are using default values
        if client_id == "default_client_id" {
            error!("{} not found in environment variables or .env file", ENV_CLIENT_ID);
        }
        if authentication_token == "default_auth_token" {
            error!("{} not found in environment variables or .env file", ENV_AUTH_TOKEN);
        }

        Config {
            client_id,
            authentication_token,
            base_uri: get_env_or_default(ENV_BASE_URI, String::from(DEFAULT_BASE_URI)),
            check_status: get_env_or_default(ENV_CHECK_STATUS, false),
        }
    }

    /// Creates a configuration with explicit credentials and default endpoint settings
    ///
    /// # Arguments
    ///
    /// * `client_id` - Merchant/customer account identifier
    /// * `authentication_token` - Opaque credential for the `Authorization` header
    pub fn with_credentials(
        client_id: impl Into<String>,
        authentication_token: impl Into<String>,
    ) -> Self {
        Config {
            client_id: client_id.into(),
            authentication_token: authentication_token.into(),
            base_uri: String::from(DEFAULT_BASE_URI),
            check_status: false,
        }
    }
}
