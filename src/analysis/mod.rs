//! Text analysis: Unicode script detection.
//!
//! This module provides:
//! - [`Analyzer`] - counts scripts and emoji in a piece of text
//! - [`TextInfo`] - the analysis result used to resolve fonts
//! - [`script_runs`] - segmentation of text into same-script runs

pub mod cjk;
pub mod detector;

pub use detector::{script_runs, Analyzer, ScriptRun, TextInfo, DEFAULT_MAX_ANALYZE_CHARS};
