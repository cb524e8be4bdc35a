//! Registry of font families already installed on the system.

use std::collections::BTreeSet;

/// Installed font families, loaded once from the system font database.
#[derive(Debug, Clone, Default)]
pub struct InstalledFonts {
    families: BTreeSet<String>,
}

impl InstalledFonts {
    /// Load the system font database (fontconfig, DirectWrite or Core Text
    /// sources, depending on the OS).
    pub fn load() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system font database");
        Self::from_database(&db)
    }

    /// Collect family names from a font database.
    pub fn from_database(db: &fontdb::Database) -> Self {
        let mut families = BTreeSet::new();
        for face in db.faces() {
            for (name, _) in &face.families {
                families.insert(name.clone());
            }
        }
        Self { families }
    }

    /// Registry with a fixed family list (test seam).
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            families: names.into_iter().map(Into::into).collect(),
        }
    }

    /// All installed family names, sorted.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(String::as_str)
    }

    /// Whether a family is installed.
    pub fn contains(&self, family: &str) -> bool {
        self.families.contains(family)
    }

    /// The subset of `names` that is installed, in input order.
    pub fn installed_subset(&self, names: &[String]) -> Vec<String> {
        names
            .iter()
            .filter(|name| self.contains(name))
            .cloned()
            .collect()
    }

    /// The subset of `names` that is not installed, in input order.
    pub fn missing_subset(&self, names: &[String]) -> Vec<String> {
        names
            .iter()
            .filter(|name| !self.contains(name))
            .cloned()
            .collect()
    }

    /// Number of installed families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Whether no families were found.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}
