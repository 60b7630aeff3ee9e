//! Build metadata lookup through `GET /api/build/{name}/{number}`.

use reqwest::blocking::Client;
use updesc_core::build_info::BuildInfo;
use updesc_util::errors::{UpdescError, UpdescResult};

use crate::auth;
use crate::repository::Artifactory;

/// Fetch the build info for `build_number`.
///
/// Transport failures, non-2xx answers and non-JSON bodies are errors.
pub fn fetch_build_info(
    client: &Client,
    server: &Artifactory,
    build_number: &str,
) -> UpdescResult<BuildInfo> {
    let url = server.build_info_url(build_number);
    tracing::info!("Fetching build info from {}", url);

    let resp = auth::apply_auth(client.get(&url), server)
        .send()
        .map_err(|e| UpdescError::Network {
            message: format!("Failed to fetch {url}: {e}"),
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(UpdescError::Network {
            message: format!("HTTP {status} for {url}"),
        }
        .into());
    }

    let body = resp.bytes().map_err(|e| UpdescError::Network {
        message: format!("Failed to read build info from {url}: {e}"),
    })?;
    let info = BuildInfo::from_slice(&body)?;
    tracing::debug!(name = ?info.name(), number = ?info.number(), "Received build info");
    Ok(info)
}
