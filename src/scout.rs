//! The top-level facade.
//!
//! [`Scout`] wires the analyzer, the font catalog, the preference rules and
//! the installed-font registry together behind one API. The catalog and the
//! registry are loaded lazily: analysing text never touches the network or
//! the system font database.
//!
//! # Example
//!
//! ```no_run
//! use fontscout::Scout;
//!
//! let scout = Scout::new();
//! let info = scout.analyze("الشمس هي النجم المركزي للمجموعة الشمسية");
//! let family = scout.find_family(&info).unwrap();
//! println!("{:?}", family);
//! ```

use std::cell::OnceCell;
use std::path::PathBuf;

use crate::analysis::{Analyzer, TextInfo};
use crate::catalog::{Catalog, DataCache, FontInfo};
use crate::error::Result;
use crate::platform::InstalledFonts;
use crate::resolve::{self, Preferences};

/// Facade over analysis, resolution and the installed-font registry.
pub struct Scout {
    analyzer: Analyzer,
    prefs: Preferences,
    cache: DataCache,
    catalog: OnceCell<Catalog>,
    installed: OnceCell<InstalledFonts>,
}

impl Scout {
    /// Scout with built-in preferences and the default data source.
    pub fn new() -> Self {
        Self {
            analyzer: Analyzer::new(),
            prefs: Preferences::builtin(),
            cache: DataCache::new(),
            catalog: OnceCell::new(),
            installed: OnceCell::new(),
        }
    }

    /// Override the analyzer (max chars, Hong Kong preference).
    pub fn with_analyzer(mut self, analyzer: Analyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Override the preference rules.
    pub fn with_preferences(mut self, prefs: Preferences) -> Self {
        self.prefs = prefs;
        self
    }

    /// Override the data cache location and/or source URL.
    pub fn with_data_cache(mut self, cache: DataCache) -> Self {
        self.cache = cache;
        self
    }

    /// Override the installed-font registry (test seam; normally loaded from
    /// the system font database on first use).
    pub fn with_installed_fonts(self, installed: InstalledFonts) -> Self {
        let _ = self.installed.set(installed);
        self
    }

    /// Build a data cache from optional directory and URL overrides.
    pub fn data_cache(dir: Option<PathBuf>, url: Option<String>) -> DataCache {
        let dir = dir.unwrap_or_else(DataCache::default_dir);
        let url = url.unwrap_or_else(|| crate::catalog::noto::NOTO_MAIN_JSON_URL.to_string());
        DataCache::with_options(dir, url)
    }

    /// The data cache in use.
    pub fn cache(&self) -> &DataCache {
        &self.cache
    }

    /// The preference rules in use.
    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Analyse text for the scripts it uses.
    pub fn analyze(&self, text: &str) -> TextInfo {
        self.analyzer.analyze(text)
    }

    /// The font catalog, loading it on first use.
    pub fn catalog(&self) -> Result<&Catalog> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }
        let catalog = Catalog::load(&self.cache)?;
        Ok(self.catalog.get_or_init(|| catalog))
    }

    /// The installed-font registry, loading it on first use.
    pub fn installed(&self) -> &InstalledFonts {
        self.installed.get_or_init(InstalledFonts::load)
    }

    /// All known font records.
    pub fn known_fonts(&self) -> Result<&[FontInfo]> {
        Ok(self.catalog()?.fonts())
    }

    /// Distinct main scripts the catalog covers, sorted.
    pub fn known_scripts(&self) -> Result<Vec<String>> {
        Ok(self.catalog()?.known_scripts())
    }

    /// Distinct (script, variant) pairs the catalog covers.
    pub fn known_script_variants(&self) -> Result<Vec<(String, String)>> {
        Ok(self.catalog()?.known_script_variants())
    }

    /// All family names suitable for the analysed text, unpreferred.
    pub fn find_families(&self, text_info: &TextInfo) -> Result<Vec<String>> {
        Ok(resolve::candidate_families(self.catalog()?, text_info))
    }

    /// The single most suitable family for the analysed text.
    pub fn find_family(&self, text_info: &TextInfo) -> Result<Option<String>> {
        Ok(resolve::select_family(
            self.catalog()?,
            &self.prefs,
            text_info,
        ))
    }

    /// Member records of a family worth installing.
    pub fn family_fonts(
        &self,
        family: &str,
        script: Option<&str>,
        variant: Option<&str>,
    ) -> Result<Vec<FontInfo>> {
        Ok(resolve::family_fonts(
            self.catalog()?,
            &self.prefs,
            family,
            script,
            variant,
        ))
    }

    /// Member records for every family in `families` that is not already
    /// installed.
    pub fn fonts_to_install(&self, families: &[String]) -> Result<Vec<FontInfo>> {
        let missing = self.installed().missing_subset(families);
        let mut fonts = Vec::new();
        for family in &missing {
            fonts.extend(self.family_fonts(family, None, None)?);
        }
        Ok(fonts)
    }

    /// The subset of `families` that is installed.
    pub fn installed_families(&self, families: &[String]) -> Vec<String> {
        self.installed().installed_subset(families)
    }

    /// The subset of `families` that is not installed.
    pub fn missing_families(&self, families: &[String]) -> Vec<String> {
        self.installed().missing_subset(families)
    }
}

impl Default for Scout {
    fn default() -> Self {
        Self::new()
    }
}
