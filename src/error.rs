//! Error types for fontscout operations.
//!
//! This module defines [`FontScoutError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FontScoutError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `FontScoutError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fontscout operations.
#[derive(Debug, Error)]
pub enum FontScoutError {
    /// The font data file could not be fetched and no cached copy exists.
    #[error("Font data unavailable: {message}")]
    DataUnavailable { message: String },

    /// The font data file could not be parsed.
    #[error("Failed to parse font data from {source_name}: {message}")]
    DataParse {
        source_name: String,
        message: String,
    },

    /// No font family is known for the requested script.
    #[error("No known font family for script '{script}'")]
    NoFontForScript { script: String },

    /// The requested font family is not in the catalog.
    #[error("Unknown font family: {family}")]
    UnknownFamily { family: String },

    /// A font record has no local file to install.
    #[error("Font '{postscript_name}' has not been downloaded")]
    NotDownloaded { postscript_name: String },

    /// Downloading a font file failed.
    #[error("Download failed for {url}: {message}")]
    DownloadFailed { url: String, message: String },

    /// Font installation is not supported on this operating system.
    #[error("Font installation is not supported on {os}")]
    UnsupportedPlatform { os: String },

    /// Installing a font file onto the system failed.
    #[error("Failed to install {path}: {message}")]
    InstallFailed { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error wrapper.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for fontscout operations.
pub type Result<T> = std::result::Result<T, FontScoutError>;
