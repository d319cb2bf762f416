/*!
 * Error types for the autotranslate application.
 *
 * Discovery errors abort a run before any file is touched. Document and
 * process errors are scoped to a single file and never stop the batch.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while expanding input roots into document paths
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// A supplied root does not exist or cannot be stat'ed
    #[error("Input path not found: {}: {source}", .path.display())]
    InputNotFound {
        /// The root exactly as it was supplied
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur when decoding a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The front matter block is missing, unterminated, or not a YAML mapping
    #[error("Malformed front matter: {reason}")]
    MalformedFrontMatter {
        /// What was wrong with the block
        reason: String,
    },

    /// A required front matter key is absent
    #[error("Missing front matter field: {0}")]
    MissingField(&'static str),
}

impl DocumentError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedFrontMatter { reason: reason.into() }
    }
}

/// Errors that can occur while processing one file of the batch
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content could not be decoded
    #[error("{}: {source}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    /// The rewritten content could not be written back
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The worker processing the file did not finish
    #[error("Processing of {} aborted: {reason}", .path.display())]
    Aborted { path: PathBuf, reason: String },
}

impl ProcessError {
    /// Path of the file this error belongs to
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. }
            | Self::Document { path, .. }
            | Self::WriteFailure { path, .. }
            | Self::Aborted { path, .. } => path,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Input discovery failed
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// Configuration is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Unknown error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
