//! Package manifest access.
//!
//! The manifest is owned by the surrounding project and only ever read.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, ServiceVersionError};

/// A decoded JSON manifest such as `package.json`
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    document: Value,
}

impl Manifest {
    /// Read and decode the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| ServiceVersionError::file_access(path, e))?;
        Self::parse(&content)
    }

    /// Decode manifest text.
    pub fn parse(content: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(content)?;
        Ok(Manifest { document })
    }

    /// Look up a top-level string field, e.g. `"version"`.
    ///
    /// Fails with a schema error when the root is not an object, or when
    /// the field is missing or not a string.
    pub fn string_field(&self, field: &str) -> Result<&str> {
        let object = self.document.as_object().ok_or_else(|| {
            ServiceVersionError::schema("manifest root is not a JSON object")
        })?;

        match object.get(field) {
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(other) => Err(ServiceVersionError::schema(format!(
                "field '{}' must be a string, found {}",
                field,
                json_kind(other)
            ))),
            None => Err(ServiceVersionError::schema(format!(
                "missing '{}' field",
                field
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
