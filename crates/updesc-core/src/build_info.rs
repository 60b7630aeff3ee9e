//! Build metadata as returned by the Artifactory build API.
//!
//! Only one value matters here: the project version recorded as a build
//! property. The body is kept as raw JSON so that an unexpected shape degrades
//! to [`NOT_FOUND`] instead of a parse failure.

use serde_json::Value;
use updesc_util::errors::{UpdescError, UpdescResult};

/// Version used when the build does not record one.
pub const NOT_FOUND: &str = "NOT_FOUND";

/// Build property holding the project version.
pub const PROJECT_VERSION_PROPERTY: &str = "buildInfo.env.PROJECT_VERSION";

/// Parsed build API response: `{"buildInfo": {"properties": {...}, ...}, ...}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildInfo(Value);

impl BuildInfo {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parse a response body. Any valid JSON is accepted.
    pub fn from_slice(body: &[u8]) -> UpdescResult<Self> {
        serde_json::from_slice(body).map(Self).map_err(|e| {
            UpdescError::BuildInfo {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// `buildInfo.name`, if present.
    pub fn name(&self) -> Option<&str> {
        self.0.get("buildInfo")?.get("name")?.as_str()
    }

    /// `buildInfo.number`, if present.
    pub fn number(&self) -> Option<&str> {
        self.0.get("buildInfo")?.get("number")?.as_str()
    }

    /// The project version, or [`NOT_FOUND`].
    pub fn version(&self, key: &str) -> String {
        extract_version_with(&self.0, key)
    }
}

/// Read `buildInfo.properties["buildInfo.env.PROJECT_VERSION"]`, falling back
/// to [`NOT_FOUND`] when any step of the path is missing.
pub fn extract_version(json: &Value) -> String {
    extract_version_with(json, PROJECT_VERSION_PROPERTY)
}

/// [`extract_version`] with a custom property key.
pub fn extract_version_with(json: &Value, key: &str) -> String {
    match property(json, key) {
        Some(version) => version,
        None => {
            tracing::debug!(property = key, "No version property, using {NOT_FOUND}");
            NOT_FOUND.to_string()
        }
    }
}

fn property(json: &Value, key: &str) -> Option<String> {
    let value = json.get("buildInfo")?.get("properties")?.get(key)?;
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
