//! Error types for Mono UI
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the gallery and its controls
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// An external value was supplied to a control that owns its own state
    #[snafu(display("Mode mismatch: {message}"))]
    ModeMismatch { message: String },

    /// Clipboard write failed
    #[snafu(display("Clipboard error: {message}"))]
    Clipboard { message: String },

    /// A caller-supplied submit action rejected
    #[snafu(display("Submit failed: {message}"))]
    Submit { message: String },

    /// Background runtime unavailable or task aborted
    #[snafu(display("Runtime error: {message}"))]
    Runtime { message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
