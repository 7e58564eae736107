//! Deployment configuration: loading a JSON document and checking it has the
//! shape every deployment needs.

use crate::{Error, Result, REQUIRED_FIELDS};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// A parsed configuration file, exactly as it appeared on disk.
///
/// ## Loading
///
/// Any well-formed JSON is accepted here; nothing about its structure is
/// assumed. Object keys keep the order they were written in, so resource
/// types come back in file order.
///
/// ## Validating
///
/// The three required top-level keys are only guaranteed once [`validate`]
/// has returned a [`Deployment`]. Everything downstream (summaries, the
/// access log) takes a `Deployment`, never a bare `Configuration`.
///
/// [`validate`]: Configuration::validate
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    root: Value,
}

/// Borrowed view of a configuration that passed validation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Deployment<'a> {
    app_name:    &'a Value,
    environment: &'a Value,
    resources:   &'a Map<String, Value>,
}

impl Configuration {
    /// Read and parse the file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        let file = File::open(path).map_err(|source| Error::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Parse a configuration from any reader. `origin` is only used in error messages.
    pub fn from_reader<R: Read>(rdr: R, origin: &Path) -> Result<Self> {
        match serde_json::from_reader(rdr) {
            Ok(root) => Ok(Configuration { root }),
            // Read failures partway through the file are availability problems, not syntax
            Err(e) if e.is_io() => Err(Error::FileNotFound {
                path: origin.to_path_buf(),
                source: e.into(),
            }),
            Err(source) => Err(Error::InvalidFormat {
                path: origin.to_path_buf(),
                source,
            }),
        }
    }

    /// The document as parsed
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Check, in order and stopping at the first failure: that there is any
    /// configuration at all, that each required field is present, and that
    /// `resources` is an object.
    ///
    /// Field values are not otherwise inspected: `"environment": 3` is accepted.
    pub fn validate(&self) -> Result<Deployment<'_>> {
        if is_empty(&self.root) {
            return Err(Error::EmptyConfig);
        }
        for field in REQUIRED_FIELDS {
            // Non-objects have no keys, so they fail on the first field
            if self.root.get(field).is_none() {
                return Err(Error::MissingField(field));
            }
        }
        let resources = self.root["resources"]
            .as_object()
            .ok_or(Error::InvalidResourcesShape)?;
        debug!(resources = resources.len(), "configuration valid");

        Ok(Deployment {
            app_name:    &self.root["app_name"],
            environment: &self.root["environment"],
            resources,
        })
    }
}

impl FromStr for Configuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes(), Path::new("<inline>"))
    }
}

impl<'a> Deployment<'a> {
    pub fn app_name(&self) -> Cow<'a, str> {
        label(self.app_name)
    }

    pub fn environment(&self) -> Cow<'a, str> {
        label(self.environment)
    }

    pub fn resources(&self) -> &'a Map<String, Value> {
        self.resources
    }
}

/// Strings print as-is; any other value prints as compact JSON.
fn label(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// A document with no content: null, false, zero, or an empty string, array or object
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
