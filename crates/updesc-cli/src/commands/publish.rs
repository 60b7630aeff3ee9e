use std::time::Duration;

use miette::Result;
use updesc_artifactory::client::{self, Client};
use updesc_artifactory::repository::Artifactory;
use updesc_artifactory::{build_api, publish};
use updesc_core::build_info::NOT_FOUND;
use updesc_core::config::{PublishSettings, PublisherConfig, RawConnection};
use updesc_util::progress::{spinner, status, status_info, status_warn};

pub fn exec(connection: RawConnection, settings: PublishSettings, dry_run: bool) -> Result<()> {
    let config = PublisherConfig::new(connection, settings)?;
    let server = Artifactory::from_config(&config);
    let client = client::build_client(config.settings.timeout_secs.map(Duration::from_secs))?;

    let version = fetch_version(&client, &server, &config.build_number)?;
    let xml = server.descriptor_for(&version).render()?;
    let target = server.descriptor_url();

    if dry_run {
        status_info("Dry run", &format!("would upload to {target}"));
        println!("{xml}");
        return Ok(());
    }

    let sp = spinner(&format!("Uploading {}...", config.settings.descriptor_file));
    let result = publish::publish_and_check(&client, &server, xml);
    sp.finish_and_clear();
    result?;

    status(
        "Published",
        &format!("{} {version} to {target}", config.settings.plugin_id),
    );
    Ok(())
}

/// Look up the project version of `build_number`, falling back to
/// [`NOT_FOUND`] with a warning.
pub(crate) fn fetch_version(
    client: &Client,
    server: &Artifactory,
    build_number: &str,
) -> Result<String> {
    let sp = spinner(&format!(
        "Fetching build info for {} #{build_number}...",
        server.settings.build_name
    ));
    let info = build_api::fetch_build_info(client, server, build_number);
    sp.finish_and_clear();

    let version = info?.version(&server.settings.version_property);
    if version == NOT_FOUND {
        status_warn(
            "Warning",
            &format!(
                "build #{build_number} has no '{}' property, publishing version {NOT_FOUND}",
                server.settings.version_property
            ),
        );
    } else {
        status_info("Version", &version);
    }
    Ok(version)
}
