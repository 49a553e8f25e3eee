/// Production base URI for the delivery.com API
pub const DEFAULT_BASE_URI: &str = "https://api.delivery.com";
/// User agent string used in HTTP requests to identify this client to the delivery.com API
pub const USER_AGENT: &str = concat!("delivery-client/", env!("CARGO_PKG_VERSION"));
/// Environment variable holding the merchant/customer account identifier
pub const ENV_CLIENT_ID: &str = "DELIVERY_CLIENT_ID";
/// Environment variable holding the opaque authentication token
pub const ENV_AUTH_TOKEN: &str = "DELIVERY_AUTH_TOKEN";
/// Environment variable overriding the API base URI
pub const ENV_BASE_URI: &str = "DELIVERY_BASE_URI";
/// Environment variable enabling HTTP status-code checking
pub const ENV_CHECK_STATUS: &str = "DELIVERY_CHECK_STATUS";
