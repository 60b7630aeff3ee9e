//! Maven-layout coordinates for the published plugin.

/// A `group:artifact` pair laid out Maven-style inside a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
}

impl Coordinate {
    pub fn new(group: &str, artifact: &str) -> Self {
        Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
        }
    }

    /// `org.sonarsource.sonarlint.intellij:sonarlint-intellij` becomes
    /// `org/sonarsource/sonarlint/intellij/sonarlint-intellij`
    pub fn artifact_path(&self) -> String {
        format!("{}/{}", self.group.replace('.', "/"), self.artifact)
    }

    /// Artifact path plus the version directory.
    pub fn version_path(&self, version: &str) -> String {
        format!("{}/{}", self.artifact_path(), version)
    }

    /// `{artifact}-{version}.{extension}`
    pub fn file_name(&self, version: &str, extension: &str) -> String {
        format!("{}-{}.{}", self.artifact, version, extension)
    }
}
