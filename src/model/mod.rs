/// Request parameter mapping and merge rules
pub mod params;
/// Dynamic view over decoded JSON responses
pub mod response;

pub use params::*;
pub use response::*;
