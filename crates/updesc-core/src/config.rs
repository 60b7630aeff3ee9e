//! Publisher configuration.
//!
//! Connection values (base URL, build number, credentials) come from the
//! environment or command-line flags. The naming constants that decide where
//! things live in Artifactory come from [`PublishSettings`], which defaults to
//! the SonarLint for IntelliJ layout and can be overridden from a TOML file:
//!
//! ```toml
//! build-name = "my-plugin"
//! plugin-id = "com.example.plugin"
//! group = "com.example"
//! artifact = "my-plugin"
//! timeout-secs = 60
//! ```

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use updesc_util::errors::{UpdescError, UpdescResult};

use crate::build_info::PROJECT_VERSION_PROPERTY;
use crate::coordinate::Coordinate;

pub const ENV_BUILD_NUMBER: &str = "BUILD_NUMBER";
pub const ENV_ARTIFACTORY_URL: &str = "ARTIFACTORY_URL";
pub const ENV_API_USER: &str = "ARTIFACTORY_API_USER";
pub const ENV_API_KEY: &str = "ARTIFACTORY_API_KEY";

/// Naming constants for the build, the plugin and the repositories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PublishSettings {
    /// Build name in the Artifactory build API.
    pub build_name: String,
    /// `id` attribute of the `<plugin>` element.
    pub plugin_id: String,
    pub group: String,
    pub artifact: String,
    /// Repository the plugin zip is downloaded from.
    pub download_repo: String,
    /// Repository the descriptor is uploaded to.
    pub publish_repo: String,
    pub descriptor_file: String,
    /// Build property holding the project version.
    pub version_property: String,
    /// Request timeout; unset means requests never time out.
    pub timeout_secs: Option<u64>,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            build_name: "sonarlint-intellij".to_string(),
            plugin_id: "org.sonarlint.idea".to_string(),
            group: "org.sonarsource.sonarlint.intellij".to_string(),
            artifact: "sonarlint-intellij".to_string(),
            download_repo: "sonarsource".to_string(),
            publish_repo: "sonarsource-public-builds".to_string(),
            descriptor_file: "updatePlugins.xml".to_string(),
            version_property: PROJECT_VERSION_PROPERTY.to_string(),
            timeout_secs: None,
        }
    }
}

impl PublishSettings {
    /// Load settings from a TOML file. Missing keys keep their defaults.
    pub fn from_path(path: &Path) -> UpdescResult<Self> {
        let content = std::fs::read_to_string(path).map_err(UpdescError::Io)?;
        let settings: Self = toml::from_str(&content).map_err(|e| UpdescError::Config {
            message: format!("Invalid settings in {}: {e}", path.display()),
        })?;
        tracing::debug!(path = %path.display(), ?settings, "Loaded publish settings");
        Ok(settings)
    }

    /// Parse settings from a TOML string.
    pub fn parse(content: &str) -> UpdescResult<Self> {
        toml::from_str(content).map_err(|e| {
            UpdescError::Config {
                message: format!("Invalid settings: {e}"),
            }
            .into()
        })
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> UpdescResult<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => Ok(Self::default()),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group, &self.artifact)
    }
}

/// Basic-auth credentials for Artifactory.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("api_key", &"********")
            .finish()
    }
}

/// Connection values as read from flags or the environment, before
/// validation.
#[derive(Clone, Default)]
pub struct RawConnection {
    pub artifactory_url: Option<String>,
    pub build_number: Option<String>,
    pub api_user: Option<String>,
    pub api_key: Option<String>,
}

/// Everything the publisher needs to fetch build info and upload.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Base URL without a trailing slash.
    pub artifactory_url: String,
    pub build_number: String,
    pub credentials: Credentials,
    pub settings: PublishSettings,
}

impl PublisherConfig {
    /// Validate the raw connection values. Every value is required and must
    /// be non-empty.
    pub fn new(raw: RawConnection, settings: PublishSettings) -> UpdescResult<Self> {
        let artifactory_url =
            normalize_base_url(require(ENV_ARTIFACTORY_URL, raw.artifactory_url)?)?;
        let build_number = require(ENV_BUILD_NUMBER, raw.build_number)?;
        let user = require(ENV_API_USER, raw.api_user)?;
        let api_key = require(ENV_API_KEY, raw.api_key)?;

        Ok(Self {
            artifactory_url,
            build_number,
            credentials: Credentials { user, api_key },
            settings,
        })
    }
}

/// Check that a required value is present and non-blank. The value is
/// returned exactly as given; credentials must reach the server unchanged.
pub fn require(name: &str, value: Option<String>) -> UpdescResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(UpdescError::MissingVar {
            name: name.to_string(),
        }
        .into()),
    }
}

/// Validate the base URL scheme and strip trailing slashes.
pub fn normalize_base_url(url: String) -> UpdescResult<String> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(UpdescError::Config {
            message: format!(
                "{ENV_ARTIFACTORY_URL} must start with http:// or https://, got '{url}'"
            ),
        }
        .into());
    }
    Ok(url.trim_end_matches('/').to_string())
}
