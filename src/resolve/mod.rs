//! Font resolution: mapping analysed text to installable fonts.
//!
//! This module provides:
//! - [`filters`] - predicate factories over font records
//! - [`Preferences`] - ordered per-script preference rules
//! - [`select_family`] / [`candidate_families`] / [`family_fonts`] - the
//!   selection pipeline

pub mod filters;
pub mod prefs;
pub mod resolver;

pub use filters::FontFilter;
pub use prefs::{PrefKey, Preferences};
pub use resolver::{candidate_families, family_fonts, select_family};
