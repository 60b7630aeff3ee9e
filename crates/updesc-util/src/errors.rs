use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all updesc operations.
#[derive(Debug, Error, Diagnostic)]
pub enum UpdescError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required connection value was neither exported nor passed as a flag.
    #[error("Configuration error: {name} is not set")]
    #[diagnostic(help("Export {name} or pass the matching command-line flag"))]
    MissingVar { name: String },

    /// Invalid configuration value or settings file.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Network request failed or returned an unexpected status.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The build API answered with something that is not JSON.
    #[error("Invalid build info: {message}")]
    BuildInfo { message: String },

    /// Writing or reading the update descriptor XML failed.
    #[error("Descriptor error: {message}")]
    Descriptor { message: String },

    /// The descriptor upload did not answer `201 Created`.
    #[error("[{status}] Server Error")]
    Upload { status: u16 },
}

/// Convenience alias for `miette::Result<T>`.
pub type UpdescResult<T> = miette::Result<T>;
