//! fontscout - Find and install fonts for the Unicode scripts used in a text.
//!
//! fontscout analyses a piece of text for the Unicode scripts it uses,
//! resolves each script to the best-fit installable font family (primarily
//! from the Google Noto collection, favoring families that are already
//! installed), and downloads and installs the chosen font files on the host
//! operating system.
//!
//! # Modules
//!
//! - [`analysis`] - Unicode script detection and text analysis
//! - [`catalog`] - the known-font table and its cached upstream data
//! - [`resolve`] - preference rules and family/member selection
//! - [`platform`] - installed-font discovery and per-OS installation
//! - [`download`] - HTTP download of font files
//! - [`cli`] - command-line interface
//! - [`ui`] - terminal output, prompts and progress
//! - [`error`] - error types and result alias
//!
//! # Example
//!
//! ```no_run
//! use fontscout::Scout;
//!
//! let scout = Scout::new();
//! let info = scout.analyze("मुझे फ़ॉन्ट चाहिए");
//! assert_eq!(info.main_script, "Devanagari");
//!
//! let family = scout.find_family(&info).unwrap();
//! println!("best family: {:?}", family);
//! ```

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod download;
pub mod error;
pub mod platform;
pub mod resolve;
pub mod scout;
pub mod ui;

pub use error::{FontScoutError, Result};
pub use scout::Scout;
