use std::fs;

use tempfile::TempDir;
use updesc_core::config::{normalize_base_url, PublishSettings, PublisherConfig, RawConnection};

fn raw() -> RawConnection {
    RawConnection {
        artifactory_url: Some("https://repox.jfrog.io/artifactory/".to_string()),
        build_number: Some("1234".to_string()),
        api_user: Some("ci".to_string()),
        api_key: Some("s3cret".to_string()),
    }
}

#[test]
fn test_default_settings_match_sonarlint_layout() {
    let s = PublishSettings::default();
    assert_eq!(s.build_name, "sonarlint-intellij");
    assert_eq!(s.plugin_id, "org.sonarlint.idea");
    assert_eq!(s.publish_repo, "sonarsource-public-builds");
    assert_eq!(s.descriptor_file, "updatePlugins.xml");
    assert_eq!(s.version_property, "buildInfo.env.PROJECT_VERSION");
    assert!(s.timeout_secs.is_none());
}

#[test]
fn test_settings_partial_toml_keeps_defaults() {
    let s = PublishSettings::parse("plugin-id = \"com.example\"\ntimeout-secs = 30\n").unwrap();
    assert_eq!(s.plugin_id, "com.example");
    assert_eq!(s.timeout_secs, Some(30));
    assert_eq!(s.build_name, "sonarlint-intellij");
}

#[test]
fn test_settings_empty_toml_is_default() {
    assert_eq!(PublishSettings::parse("").unwrap(), PublishSettings::default());
}

#[test]
fn test_settings_unknown_key_rejected() {
    let err = PublishSettings::parse("plugin_id = \"x\"").unwrap_err();
    assert!(err.to_string().contains("Invalid settings"), "got: {err}");
}

#[test]
fn test_settings_from_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("updesc.toml");
    fs::write(&path, "build-name = \"my-build\"\n").unwrap();

    let s = PublishSettings::load(Some(&path)).unwrap();
    assert_eq!(s.build_name, "my-build");
}

#[test]
fn test_settings_missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = PublishSettings::from_path(&tmp.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_publisher_config_valid() {
    let config = PublisherConfig::new(raw(), PublishSettings::default()).unwrap();
    assert_eq!(config.artifactory_url, "https://repox.jfrog.io/artifactory");
    assert_eq!(config.build_number, "1234");
    assert_eq!(config.credentials.user, "ci");
}

#[test]
fn test_publisher_config_missing_build_number() {
    let mut r = raw();
    r.build_number = None;
    let err = PublisherConfig::new(r, PublishSettings::default()).unwrap_err();
    assert!(err.to_string().contains("BUILD_NUMBER"), "got: {err}");
}

#[test]
fn test_publisher_config_blank_key_rejected() {
    let mut r = raw();
    r.api_key = Some("   ".to_string());
    let err = PublisherConfig::new(r, PublishSettings::default()).unwrap_err();
    assert!(err.to_string().contains("ARTIFACTORY_API_KEY"), "got: {err}");
}

#[test]
fn test_normalize_base_url_rejects_missing_scheme() {
    let err = normalize_base_url("repox.jfrog.io".to_string()).unwrap_err();
    assert!(err.to_string().contains("http://"), "got: {err}");
}

#[test]
fn test_credentials_debug_masks_key() {
    let config = PublisherConfig::new(raw(), PublishSettings::default()).unwrap();
    let debug = format!("{config:?}");
    assert!(!debug.contains("s3cret"));
    assert!(debug.contains("********"));
}

#[test]
fn test_credentials_keep_surrounding_whitespace() {
    let mut r = raw();
    r.api_user = Some(" ci".to_string());
    r.api_key = Some(" secret ".to_string());
    let config = PublisherConfig::new(r, PublishSettings::default()).unwrap();
    assert_eq!(config.credentials.user, " ci");
    assert_eq!(config.credentials.api_key, " secret ");
}

#[test]
fn test_missing_value_error_names_variable() {
    let mut r = raw();
    r.artifactory_url = None;
    let err = PublisherConfig::new(r, PublishSettings::default()).unwrap_err();
    assert_eq!(err.to_string(), "Configuration error: ARTIFACTORY_URL is not set");
}
