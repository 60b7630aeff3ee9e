use std::time::Duration;

use miette::Result;
use updesc_artifactory::repository::Artifactory;
use updesc_artifactory::{client, publish};
use updesc_core::config::{
    normalize_base_url, require, Credentials, PublishSettings, RawConnection, ENV_ARTIFACTORY_URL,
};
use updesc_core::descriptor::parse_descriptor;
use updesc_util::progress::{spinner, status_info, status_warn};

pub fn exec(connection: RawConnection, settings: PublishSettings) -> Result<()> {
    let url = normalize_base_url(require(ENV_ARTIFACTORY_URL, connection.artifactory_url)?)?;

    // The publish repository is usually public, so credentials are optional here.
    let credentials = match (connection.api_user, connection.api_key) {
        (Some(user), Some(api_key)) if !user.is_empty() && !api_key.is_empty() => {
            Some(Credentials { user, api_key })
        }
        _ => None,
    };

    let timeout = settings.timeout_secs.map(Duration::from_secs);
    let server = Artifactory::new(&url, credentials, settings);
    let client = client::build_client(timeout)?;

    let sp = spinner("Fetching published descriptor...");
    let body = publish::fetch_published(&client, &server);
    sp.finish_and_clear();

    let Some(xml) = body? else {
        status_warn("Missing", &format!("nothing published at {}", server.descriptor_url()));
        return Ok(());
    };

    let entries = parse_descriptor(&xml)?;
    status_info(
        "Published",
        &format!("{} plugin entries at {}", entries.len(), server.descriptor_url()),
    );
    for entry in &entries {
        println!("{} {}", entry.plugin_id, entry.version);
        println!("  {}", entry.url);
    }
    Ok(())
}
