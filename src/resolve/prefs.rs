//! Preference rules for choosing among candidate fonts.

use std::collections::HashMap;

use crate::catalog::{FontBuild, FontForm, FontFormat, FontWeight, FontWidth};

use super::filters::{
    build_in, family_contains, family_excludes, family_in, form_in, format_in, tag_free,
    weight_not, width_not, FontFilter,
};

/// Key a preference list applies under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrefKey {
    /// Applies to every script, after any script-specific preferences.
    AnyScript,
    /// Applies to one (script, variant) pair only.
    Script { script: String, variant: String },
}

impl PrefKey {
    /// Key for a concrete (script, variant) pair.
    pub fn script(script: &str, variant: &str) -> Self {
        PrefKey::Script {
            script: script.to_string(),
            variant: variant.to_string(),
        }
    }
}

/// Ordered preference filters for family and member selection.
///
/// Family preferences choose a single family for a script; member
/// preferences choose which files of a family to install. Both maps can be
/// edited to override the built-in rules.
#[derive(Default)]
pub struct Preferences {
    /// Filters narrowing the candidate families for a script.
    pub family: HashMap<PrefKey, Vec<FontFilter>>,
    /// Filters narrowing a family's records to the files worth installing.
    pub members: HashMap<PrefKey, Vec<FontFilter>>,
}

impl Preferences {
    /// No rules at all; every candidate survives.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in rules.
    ///
    /// Per-script family rules pick the traditional or better-suited form
    /// where the Noto collection offers several; the any-script rules prefer
    /// plain sans-serif text faces, and member selection avoids variable
    /// axes and picks the best build and format available.
    pub fn builtin() -> Self {
        let mut prefs = Self::default();

        // Joined rather than unjoined.
        prefs.family.insert(
            PrefKey::script("Adlam", ""),
            vec![family_in(&["Noto Sans Adlam"])],
        );
        // The more traditional Naskh form.
        prefs.family.insert(
            PrefKey::script("Arabic", ""),
            vec![family_in(&["Noto Naskh Arabic"])],
        );
        // The more traditional Serif form.
        prefs.family.insert(
            PrefKey::script("Hebrew", ""),
            vec![family_in(&["Noto Serif Hebrew"])],
        );
        prefs.family.insert(
            PrefKey::script("Khitan_Small_Script", ""),
            vec![family_in(&["Noto Serif Khitan Small Script"])],
        );
        // Looped fonts are the traditional form for Lao and Thai.
        prefs.family.insert(
            PrefKey::script("Lao", ""),
            vec![family_contains(&["Looped"])],
        );
        prefs.family.insert(
            PrefKey::script("Nko", ""),
            vec![family_in(&["Noto Sans NKo"])],
        );
        // Better at small sizes than the serif cut.
        prefs.family.insert(
            PrefKey::script("Nushu", ""),
            vec![family_in(&["Noto Sans Nushu"])],
        );
        prefs.family.insert(
            PrefKey::script("Tamil", ""),
            vec![family_excludes(&["Supplement"])],
        );
        prefs.family.insert(
            PrefKey::script("Thai", ""),
            vec![family_in(&["Noto Sans Thai Looped"])],
        );
        prefs.family.insert(
            PrefKey::AnyScript,
            vec![form_in(&[FontForm::SansSerif]), tag_free()],
        );

        prefs.members.insert(
            PrefKey::AnyScript,
            vec![
                width_not(&[FontWidth::Variable]),
                weight_not(&[FontWeight::Variable]),
                tag_free(),
                build_in(&[FontBuild::Full]),
                build_in(&[FontBuild::Hinted]),
                format_in(&[FontFormat::Otf]),
                format_in(&[FontFormat::Ttf]),
                format_in(&[FontFormat::Otc]),
            ],
        );

        prefs
    }

    /// Family filter lists for a script pair, script-specific first.
    pub fn family_filters(&self, script: &str, variant: &str) -> Vec<&[FontFilter]> {
        self.filters_for(&self.family, script, variant)
    }

    /// Member filter lists for a script pair, script-specific first.
    pub fn member_filters(&self, script: &str, variant: &str) -> Vec<&[FontFilter]> {
        self.filters_for(&self.members, script, variant)
    }

    fn filters_for<'a>(
        &self,
        map: &'a HashMap<PrefKey, Vec<FontFilter>>,
        script: &str,
        variant: &str,
    ) -> Vec<&'a [FontFilter]> {
        let mut lists = Vec::new();
        if let Some(filters) = map.get(&PrefKey::script(script, variant)) {
            lists.push(filters.as_slice());
        }
        if let Some(filters) = map.get(&PrefKey::AnyScript) {
            lists.push(filters.as_slice());
        }
        lists
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FontInfo;

    #[test]
    fn builtin_has_arabic_rule() {
        let prefs = Preferences::builtin();
        let lists = prefs.family_filters("Arabic", "");
        // Script-specific list plus the any-script list.
        assert_eq!(lists.len(), 2);

        let naskh = FontInfo::new("Arabic", "", "Noto Naskh Arabic");
        let kufi = FontInfo::new("Arabic", "", "Noto Kufi Arabic");
        assert!(lists[0][0](&naskh));
        assert!(!lists[0][0](&kufi));
    }

    #[test]
    fn unknown_script_gets_only_any_script_rules() {
        let prefs = Preferences::builtin();
        let lists = prefs.family_filters("Ogham", "");
        assert_eq!(lists.len(), 1);
    }

    #[test]
    fn empty_preferences_have_no_filters() {
        let prefs = Preferences::empty();
        assert!(prefs.family_filters("Arabic", "").is_empty());
        assert!(prefs.member_filters("Arabic", "").is_empty());
    }

    #[test]
    fn variant_distinguishes_keys() {
        let mut prefs = Preferences::empty();
        prefs.family.insert(
            PrefKey::script("Han", "zh-Hans"),
            vec![family_in(&["Noto Sans CJK SC"])],
        );
        assert_eq!(prefs.family_filters("Han", "zh-Hans").len(), 1);
        assert!(prefs.family_filters("Han", "zh-Hant").is_empty());
    }

    #[test]
    fn member_rules_apply_to_all_scripts() {
        let prefs = Preferences::builtin();
        assert_eq!(prefs.member_filters("Cherokee", "").len(), 1);
    }
}
