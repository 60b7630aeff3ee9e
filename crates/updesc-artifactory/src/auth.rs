//! Basic authentication with the Artifactory API user and key.

use reqwest::blocking::RequestBuilder;

use crate::repository::Artifactory;

/// Apply basic auth to a request if the server has credentials.
pub fn apply_auth(request: RequestBuilder, server: &Artifactory) -> RequestBuilder {
    match &server.credentials {
        Some(creds) => request.basic_auth(&creds.user, Some(&creds.api_key)),
        None => request,
    }
}
