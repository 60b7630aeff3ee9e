use std::time::Duration;

pub use reqwest::blocking::Client;
use updesc_util::errors::{UpdescError, UpdescResult};

const USER_AGENT: &str = concat!("updesc/", env!("CARGO_PKG_VERSION"));

/// Build the blocking HTTP client. Without `timeout` requests never time out.
pub fn build_client(timeout: Option<Duration>) -> UpdescResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| {
            UpdescError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}
