use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a configuration from being read, checked, or recorded.
/// None of these are recoverable within a single invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of command line arguments
    #[error("{0}")]
    UsageError(String),

    #[error("configuration file '{}' not found", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON format in '{}'", path.display())]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no configuration data loaded")]
    EmptyConfig,

    #[error("required field '{0}' missing in configuration")]
    MissingField(&'static str),

    #[error("'resources' must be an object")]
    InvalidResourcesShape,

    #[error("cannot write access log '{}'", path.display())]
    AccessLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
