//! Artifactory server abstraction: URL layout for the build API and the
//! published descriptor.

use updesc_core::config::{Credentials, PublishSettings, PublisherConfig};
use updesc_core::descriptor::UpdateDescriptor;

/// An Artifactory instance plus the layout settings and credentials used to
/// talk to it.
#[derive(Debug, Clone)]
pub struct Artifactory {
    pub url: String,
    pub credentials: Option<Credentials>,
    pub settings: PublishSettings,
}

impl Artifactory {
    pub fn new(url: &str, credentials: Option<Credentials>, settings: PublishSettings) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            credentials,
            settings,
        }
    }

    pub fn from_config(config: &PublisherConfig) -> Self {
        Self::new(
            &config.artifactory_url,
            Some(config.credentials.clone()),
            config.settings.clone(),
        )
    }

    /// `{url}/api/build/{build-name}/{build-number}`
    pub fn build_info_url(&self, build_number: &str) -> String {
        format!(
            "{}/api/build/{}/{}",
            self.url, self.settings.build_name, build_number
        )
    }

    /// Where the update descriptor is uploaded to (and read back from).
    pub fn descriptor_url(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.url,
            self.settings.publish_repo,
            self.settings.coordinate().artifact_path(),
            self.settings.descriptor_file
        )
    }

    /// Descriptor entry for `version`, pointing at the download repository.
    pub fn descriptor_for(&self, version: &str) -> UpdateDescriptor {
        UpdateDescriptor::for_version(&self.settings, &self.url, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://repox.jfrog.io/artifactory";

    #[test]
    fn build_info_url_format() {
        let server = Artifactory::new(BASE, None, PublishSettings::default());
        assert_eq!(
            server.build_info_url("1234"),
            "https://repox.jfrog.io/artifactory/api/build/sonarlint-intellij/1234"
        );
    }

    #[test]
    fn descriptor_url_format() {
        let server = Artifactory::new(BASE, None, PublishSettings::default());
        assert_eq!(
            server.descriptor_url(),
            "https://repox.jfrog.io/artifactory/sonarsource-public-builds/org/sonarsource/sonarlint/intellij/sonarlint-intellij/updatePlugins.xml"
        );
    }

    #[test]
    fn new_trims_trailing_slash() {
        let server = Artifactory::new("http://localhost:8081/", None, PublishSettings::default());
        assert_eq!(server.url, "http://localhost:8081");
    }

    #[test]
    fn descriptor_for_uses_download_repo() {
        let server = Artifactory::new(BASE, None, PublishSettings::default());
        let d = server.descriptor_for("4.2.0");
        assert_eq!(
            d.url,
            "https://repox.jfrog.io/artifactory/sonarsource/org/sonarsource/sonarlint/intellij/sonarlint-intellij/4.2.0/sonarlint-intellij-4.2.0.zip"
        );
    }
}
