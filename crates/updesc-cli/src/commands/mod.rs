//! Command dispatch and handler modules.

mod publish;
mod render;
mod show;

use miette::Result;
use updesc_core::config::PublishSettings;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let settings = PublishSettings::load(cli.config.as_deref())?;
    let connection = cli.connection.into_raw();
    tracing::debug!(?settings, "Loaded settings");

    match cli.command.unwrap_or(Command::Publish { dry_run: false }) {
        Command::Publish { dry_run } => publish::exec(connection, settings, dry_run),
        Command::Render { plugin_version } => render::exec(connection, settings, plugin_version),
        Command::Show => show::exec(connection, settings),
    }
}
