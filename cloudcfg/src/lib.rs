pub mod access_log;
pub mod cfg;
pub mod error;
pub mod summary;

pub use cfg::{Configuration, Deployment};
pub use error::{Error, Result};
pub use summary::Summary;

/// Access log written next to wherever the tool is run from, unless overridden
pub const DEFAULT_ACCESS_LOG: &str = "config_access.log";

/// Top-level keys every deployment configuration must carry, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 3] = ["app_name", "environment", "resources"];
