use mockito::Matcher;
use serde_json::json;
use updesc_artifactory::build_api::fetch_build_info;
use updesc_artifactory::client::build_client;
use updesc_artifactory::repository::Artifactory;
use updesc_core::build_info::{NOT_FOUND, PROJECT_VERSION_PROPERTY};
use updesc_core::config::{Credentials, PublishSettings};

fn server_for(url: &str) -> Artifactory {
    Artifactory::new(
        url,
        Some(Credentials {
            user: "ci".to_string(),
            api_key: "s3cret".to_string(),
        }),
        PublishSettings::default(),
    )
}

#[test]
fn test_fetch_build_info_sends_basic_auth() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/build/sonarlint-intellij/1234")
        .match_header("authorization", "Basic Y2k6czNjcmV0")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "uri": "https://repox/api/build/sonarlint-intellij/1234",
                "buildInfo": {
                    "name": "sonarlint-intellij",
                    "number": "1234",
                    "properties": { "buildInfo.env.PROJECT_VERSION": "4.2.0.1234" }
                }
            })
            .to_string(),
        )
        .create();

    let client = build_client(None).unwrap();
    let info = fetch_build_info(&client, &server_for(&server.url()), "1234").unwrap();

    mock.assert();
    assert_eq!(info.version(PROJECT_VERSION_PROPERTY), "4.2.0.1234");
    assert_eq!(info.number(), Some("1234"));
}

#[test]
fn test_fetch_build_info_without_version_property() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/build/sonarlint-intellij/7")
        .with_status(200)
        .with_body(r#"{"buildInfo":{"properties":{}}}"#)
        .create();

    let client = build_client(None).unwrap();
    let info = fetch_build_info(&client, &server_for(&server.url()), "7").unwrap();
    assert_eq!(info.version(PROJECT_VERSION_PROPERTY), NOT_FOUND);
}

#[test]
fn test_fetch_build_info_not_found_is_error() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/build/sonarlint-intellij/999")
        .with_status(404)
        .with_body("No build was found")
        .create();

    let client = build_client(None).unwrap();
    let err = fetch_build_info(&client, &server_for(&server.url()), "999").unwrap_err();
    assert!(err.to_string().contains("404"), "got: {err}");
}

#[test]
fn test_fetch_build_info_malformed_json_is_error() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/build/sonarlint-intellij/1")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create();

    let client = build_client(None).unwrap();
    let err = fetch_build_info(&client, &server_for(&server.url()), "1").unwrap_err();
    assert!(err.to_string().contains("Invalid build info"), "got: {err}");
}

#[test]
fn test_fetch_build_info_without_credentials_sends_no_auth() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/build/sonarlint-intellij/5")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("{}")
        .create();

    let anonymous = Artifactory::new(&server.url(), None, PublishSettings::default());
    let client = build_client(None).unwrap();
    fetch_build_info(&client, &anonymous, "5").unwrap();
    mock.assert();
}
