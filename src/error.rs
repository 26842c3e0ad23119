use std::path::PathBuf;

/// Errors raised by the few fallible operations in the crate.
///
/// Arithmetic and unit conversion are total and never produce these; only
/// geometric domain checks and settings loading do.
#[derive(Debug, thiserror::Error)]
pub enum QuantityError {
    #[error("{0} has zero magnitude")]
    ZeroMagnitude(&'static str),

    #[error("{0} has a non-finite component")]
    NonFinite(&'static str),

    #[error("Invalid format settings: {0}")]
    InvalidSettings(String),

    #[error("Settings parse error: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("Cannot read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
