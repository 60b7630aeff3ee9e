use std::time::Duration;

use miette::Result;
use updesc_artifactory::client;
use updesc_artifactory::repository::Artifactory;
use updesc_core::config::{
    normalize_base_url, require, PublishSettings, PublisherConfig, RawConnection,
    ENV_ARTIFACTORY_URL,
};
use updesc_core::descriptor::render_descriptor;

use super::publish::fetch_version;

pub fn exec(
    connection: RawConnection,
    settings: PublishSettings,
    plugin_version: Option<String>,
) -> Result<()> {
    let xml = match plugin_version {
        // Offline: only the base URL is needed to build the download link.
        Some(version) => {
            let url = normalize_base_url(require(ENV_ARTIFACTORY_URL, connection.artifactory_url)?)?;
            render_descriptor(&settings, &url, &version)?
        }
        None => {
            let config = PublisherConfig::new(connection, settings)?;
            let server = Artifactory::from_config(&config);
            let client =
                client::build_client(config.settings.timeout_secs.map(Duration::from_secs))?;
            let version = fetch_version(&client, &server, &config.build_number)?;
            server.descriptor_for(&version).render()?
        }
    };

    println!("{xml}");
    Ok(())
}
