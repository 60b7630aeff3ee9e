//! CLI argument definitions for updesc.
//!
//! Connection values are read from the same environment variables the CI job
//! exports; a flag of the same meaning takes precedence.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use updesc_core::config::RawConnection;

#[derive(Parser)]
#[command(
    name = "updesc",
    version,
    about = "Publish a plugin update descriptor to Artifactory",
    long_about = "Looks up the project version of a CI build through the Artifactory build API \
                  and uploads an updatePlugins.xml pointing at that version's plugin zip. \
                  Running without a subcommand publishes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// TOML settings file overriding build name, plugin id and repository layout
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args)]
pub struct ConnectionArgs {
    /// Artifactory base URL
    #[arg(long, env = "ARTIFACTORY_URL", global = true)]
    pub artifactory_url: Option<String>,

    /// CI build number to look up
    #[arg(long, env = "BUILD_NUMBER", global = true)]
    pub build_number: Option<String>,

    /// Artifactory API user
    #[arg(long, env = "ARTIFACTORY_API_USER", global = true)]
    pub api_user: Option<String>,

    /// Artifactory API key
    #[arg(long, env = "ARTIFACTORY_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,
}

impl ConnectionArgs {
    pub fn into_raw(self) -> RawConnection {
        RawConnection {
            artifactory_url: self.artifactory_url,
            build_number: self.build_number,
            api_user: self.api_user,
            api_key: self.api_key,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the build version and upload the update descriptor (default)
    Publish {
        /// Print the descriptor and target URL instead of uploading
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the update descriptor to stdout
    Render {
        /// Use this version instead of asking the build API
        #[arg(long, value_name = "VERSION")]
        plugin_version: Option<String>,
    },

    /// List the plugin entries of the currently published descriptor
    Show,
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}
