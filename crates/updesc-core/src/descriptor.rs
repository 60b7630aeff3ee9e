//! `updatePlugins.xml` rendering and parsing.
//!
//! The IDE reads a custom plugin repository from a document shaped like:
//!
//! ```xml
//! <plugins>
//!   <plugin id="org.sonarlint.idea" url="https://.../sonarlint-intellij-4.2.0.zip" version="4.2.0"/>
//! </plugins>
//! ```

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use updesc_util::errors::{UpdescError, UpdescResult};

use crate::config::PublishSettings;

/// One `<plugin>` entry of an update descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDescriptor {
    pub plugin_id: String,
    pub url: String,
    pub version: String,
}

impl UpdateDescriptor {
    /// Descriptor for `version`, pointing at the plugin zip in the download
    /// repository. The same `version` string goes into the URL and the
    /// `version` attribute.
    pub fn for_version(settings: &PublishSettings, artifactory_url: &str, version: &str) -> Self {
        let coord = settings.coordinate();
        let url = format!(
            "{}/{}/{}/{}",
            artifactory_url.trim_end_matches('/'),
            settings.download_repo,
            coord.version_path(version),
            coord.file_name(version, "zip"),
        );
        Self {
            plugin_id: settings.plugin_id.clone(),
            url,
            version: version.to_string(),
        }
    }

    /// Render this entry as a complete descriptor document.
    pub fn render(&self) -> UpdescResult<String> {
        render_plugins(std::slice::from_ref(self))
    }
}

/// Build and render the descriptor for `version` in one step.
pub fn render_descriptor(
    settings: &PublishSettings,
    artifactory_url: &str,
    version: &str,
) -> UpdescResult<String> {
    UpdateDescriptor::for_version(settings, artifactory_url, version).render()
}

/// Render a `<plugins>` document with one `<plugin/>` per entry, indented by
/// two spaces and without a trailing newline.
pub fn render_plugins(entries: &[UpdateDescriptor]) -> UpdescResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Start(BytesStart::new("plugins")))
        .map_err(write_err)?;
    for entry in entries {
        let mut plugin = BytesStart::new("plugin");
        plugin.push_attribute(("id", entry.plugin_id.as_str()));
        plugin.push_attribute(("url", entry.url.as_str()));
        plugin.push_attribute(("version", entry.version.as_str()));
        writer.write_event(Event::Empty(plugin)).map_err(write_err)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new("plugins")))
        .map_err(write_err)?;

    String::from_utf8(writer.into_inner()).map_err(|e| {
        UpdescError::Descriptor {
            message: format!("Rendered descriptor is not UTF-8: {e}"),
        }
        .into()
    })
}

/// Parse every `<plugin>` element of a descriptor document.
///
/// Elements missing one of `id`, `url` or `version` are skipped.
pub fn parse_descriptor(xml: &str) -> UpdescResult<Vec<UpdateDescriptor>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) if e.name().as_ref() == b"plugin" => {
                let mut id = None;
                let mut url = None;
                let mut version = None;

                for attr in e.attributes() {
                    let attr = attr.map_err(|e| UpdescError::Descriptor {
                        message: format!("Bad attribute on <plugin>: {e}"),
                    })?;
                    let value = attr
                        .unescape_value()
                        .map_err(|e| UpdescError::Descriptor {
                            message: format!("Bad attribute value on <plugin>: {e}"),
                        })?
                        .to_string();
                    match attr.key.as_ref() {
                        b"id" => id = Some(value),
                        b"url" => url = Some(value),
                        b"version" => version = Some(value),
                        _ => {}
                    }
                }

                match (id, url, version) {
                    (Some(plugin_id), Some(url), Some(version)) => entries.push(UpdateDescriptor {
                        plugin_id,
                        url,
                        version,
                    }),
                    _ => tracing::debug!("Skipping incomplete <plugin> element"),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(UpdescError::Descriptor {
                    message: format!("Failed to parse update descriptor: {e}"),
                }
                .into())
            }
            _ => {}
        }
    }

    Ok(entries)
}

fn write_err(e: impl std::fmt::Display) -> UpdescError {
    UpdescError::Descriptor {
        message: format!("Failed to write update descriptor: {e}"),
    }
}
