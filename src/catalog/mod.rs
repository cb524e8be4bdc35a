//! The known-font table.
//!
//! This module provides:
//! - [`FontInfo`] and its attribute enums
//! - [`Catalog`] - every font the tool knows how to obtain
//! - [`DataCache`] - TTL'd disk cache of the upstream data file

pub mod cache;
pub mod font_info;
pub mod noto;

pub use cache::{DataCache, DataCacheMetadata, RefreshOutcome};
pub use font_info::{
    FontBuild, FontForm, FontFormat, FontInfo, FontStyle, FontTag, FontWeight, FontWidth,
};

use crate::error::Result;

/// Every font known to the tool, sorted by script, variant and family.
///
/// Records are duplicated per (script, variant) pair a font serves, so a
/// single family can appear several times with different script fields.
#[derive(Debug, Clone)]
pub struct Catalog {
    fonts: Vec<FontInfo>,
}

impl Catalog {
    /// Build the catalog from the upstream JSON plus the synthesized CJK
    /// records.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut fonts = noto::parse_main_fonts(json)?;
        fonts.extend(noto::cjk_fonts());
        fonts.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        Ok(Self { fonts })
    }

    /// Build the catalog through a [`DataCache`].
    pub fn load(cache: &DataCache) -> Result<Self> {
        Self::from_json(&cache.load()?)
    }

    /// All known font records.
    pub fn fonts(&self) -> &[FontInfo] {
        &self.fonts
    }

    /// Records serving a (script, variant) pair.
    pub fn for_script(&self, main_script: &str, script_variant: &str) -> Vec<&FontInfo> {
        self.fonts
            .iter()
            .filter(|f| f.main_script == main_script && f.script_variant == script_variant)
            .collect()
    }

    /// Records belonging to any of the given families.
    pub fn for_families(&self, families: &[String]) -> Vec<&FontInfo> {
        self.fonts
            .iter()
            .filter(|f| families.iter().any(|name| *name == f.family_name))
            .collect()
    }

    /// Distinct family names, in catalog order.
    pub fn family_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for font in &self.fonts {
            if !names.contains(&font.family_name) {
                names.push(font.family_name.clone());
            }
        }
        names
    }

    /// Whether any record belongs to the given family.
    pub fn has_family(&self, family: &str) -> bool {
        self.fonts.iter().any(|f| f.family_name == family)
    }

    /// Sorted list of the distinct main scripts covered by the catalog.
    pub fn known_scripts(&self) -> Vec<String> {
        let mut scripts: Vec<String> = self
            .fonts
            .iter()
            .map(|f| f.main_script.clone())
            .collect();
        scripts.sort();
        scripts.dedup();
        scripts
    }

    /// Distinct (script, variant) pairs, in catalog order.
    pub fn known_script_variants(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for font in &self.fonts {
            let pair = (font.main_script.clone(), font.script_variant.clone());
            if !pairs.contains(&pair) {
                pairs.push(pair);
            }
        }
        pairs
    }
}
