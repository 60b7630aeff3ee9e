//! Uploading the update descriptor with `PUT`, and reading it back.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use updesc_util::errors::{UpdescError, UpdescResult};

use crate::auth;
use crate::repository::Artifactory;

/// PUT `xml` to the descriptor URL and return the response status.
///
/// The status is not interpreted here; see [`check_result`].
pub fn publish_descriptor(
    client: &Client,
    server: &Artifactory,
    xml: String,
) -> UpdescResult<StatusCode> {
    let url = server.descriptor_url();
    tracing::info!("Uploading update descriptor to {}", url);

    let resp = auth::apply_auth(client.put(&url), server)
        .body(xml)
        .send()
        .map_err(|e| UpdescError::Network {
            message: format!("Failed to upload to {url}: {e}"),
        })?;

    let status = resp.status();
    tracing::debug!(%status, "Upload finished");
    Ok(status)
}

/// Anything other than `201 Created` is a failed upload.
pub fn check_result(status: StatusCode) -> UpdescResult<()> {
    if status == StatusCode::CREATED {
        Ok(())
    } else {
        Err(UpdescError::Upload {
            status: status.as_u16(),
        }
        .into())
    }
}

/// Upload and check in one step.
pub fn publish_and_check(client: &Client, server: &Artifactory, xml: String) -> UpdescResult<()> {
    let status = publish_descriptor(client, server, xml)?;
    check_result(status)
}

/// GET the currently published descriptor.
///
/// Returns `Ok(None)` for 404 (nothing published yet).
pub fn fetch_published(client: &Client, server: &Artifactory) -> UpdescResult<Option<String>> {
    let url = server.descriptor_url();
    tracing::info!("Fetching published descriptor from {}", url);

    let resp = auth::apply_auth(client.get(&url), server)
        .send()
        .map_err(|e| UpdescError::Network {
            message: format!("Failed to fetch {url}: {e}"),
        })?;

    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(UpdescError::Network {
            message: format!("HTTP {status} for {url}"),
        }
        .into());
    }

    resp.text().map(Some).map_err(|e| {
        UpdescError::Network {
            message: format!("Failed to read {url}: {e}"),
        }
        .into()
    })
}
