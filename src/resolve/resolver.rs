//! Candidate narrowing and family/member selection.

use crate::analysis::TextInfo;
use crate::catalog::{Catalog, FontInfo};

use super::filters::FontFilter;
use super::prefs::Preferences;

/// Apply one ordered filter list to a candidate set.
///
/// A filter that would leave no candidates is skipped; a filter that narrows
/// the set to exactly one candidate (as measured by `count`) stops the
/// cascade. `count` measures distinct families for family selection and
/// record count for member selection.
fn apply_filter_list<'a>(
    mut fonts: Vec<&'a FontInfo>,
    filters: &[FontFilter],
    count: impl Fn(&[&FontInfo]) -> usize,
) -> Vec<&'a FontInfo> {
    if count(&fonts) < 2 || filters.is_empty() {
        return fonts;
    }

    for filter in filters {
        let narrowed: Vec<&FontInfo> = fonts.iter().copied().filter(|f| filter(*f)).collect();
        match count(&narrowed) {
            0 => {
                // Too restrictive for this candidate set; ignore the filter.
            }
            1 => return narrowed,
            _ => fonts = narrowed,
        }
    }
    fonts
}

fn apply_filter_lists<'a>(
    mut fonts: Vec<&'a FontInfo>,
    lists: &[&[FontFilter]],
    count: impl Fn(&[&FontInfo]) -> usize,
) -> Vec<&'a FontInfo> {
    for filters in lists {
        fonts = apply_filter_list(fonts, filters, &count);
    }
    fonts
}

fn distinct_families(fonts: &[&FontInfo]) -> usize {
    let mut names: Vec<&str> = fonts.iter().map(|f| f.family_name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    names.len()
}

/// All family names suitable for the analysed text, in catalog order,
/// deduplicated. No preferences are applied.
pub fn candidate_families(catalog: &Catalog, text_info: &TextInfo) -> Vec<String> {
    let fonts = catalog.for_script(&text_info.main_script, &text_info.script_variant);
    let mut names = Vec::new();
    for font in fonts {
        if !names.contains(&font.family_name) {
            names.push(font.family_name.clone());
        }
    }
    names
}

/// The single most suitable family for the analysed text, after applying
/// family preferences. Ties resolve to the first surviving record.
pub fn select_family(
    catalog: &Catalog,
    prefs: &Preferences,
    text_info: &TextInfo,
) -> Option<String> {
    let fonts = catalog.for_script(&text_info.main_script, &text_info.script_variant);
    if fonts.is_empty() {
        return None;
    }
    let lists = prefs.family_filters(&text_info.main_script, &text_info.script_variant);
    let fonts = apply_filter_lists(fonts, &lists, distinct_families);
    fonts.first().map(|f| f.family_name.clone())
}

/// The records of one family worth installing, after member preferences.
///
/// Catalog records are duplicated per (script, variant) pair; `script` and
/// `variant` pin which duplicate set to use, defaulting to the first pair
/// found for the family.
pub fn family_fonts(
    catalog: &Catalog,
    prefs: &Preferences,
    family: &str,
    script: Option<&str>,
    variant: Option<&str>,
) -> Vec<FontInfo> {
    let records = catalog.for_families(&[family.to_string()]);
    let Some(first) = records.first() else {
        return Vec::new();
    };

    let script = script.unwrap_or(&first.main_script).to_string();
    let variant = variant.unwrap_or(&first.script_variant).to_string();

    let fonts: Vec<&FontInfo> = records
        .into_iter()
        .filter(|f| f.main_script == script && f.script_variant == variant)
        .collect();

    let lists = prefs.member_filters(&script, &variant);
    apply_filter_lists(fonts, &lists, |fonts| fonts.len())
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;
    use crate::resolve::filters::{family_in, format_in};
    use crate::catalog::FontFormat;

    const SAMPLE_JSON: &str = r#"{
        "arabic": {
            "families": {
                "Noto Kufi Arabic": {
                    "files": {
                        "hinted": ["fonts/NotoKufiArabic/hinted/ttf/NotoKufiArabic-Regular.ttf"]
                    }
                },
                "Noto Naskh Arabic": {
                    "files": {
                        "hinted": ["fonts/NotoNaskhArabic/hinted/ttf/NotoNaskhArabic-Regular.ttf",
                                   "fonts/NotoNaskhArabic/hinted/ttf/NotoNaskhArabic-Bold.ttf"],
                        "unhinted": ["fonts/NotoNaskhArabic/unhinted/ttf/NotoNaskhArabic-Regular.ttf"],
                        "full": ["fonts/NotoNaskhArabic/full/variable-ttf/NotoNaskhArabic%5Bwght%5D.ttf"]
                    }
                },
                "Noto Sans Arabic": {
                    "files": {
                        "hinted": ["fonts/NotoSansArabic/hinted/ttf/NotoSansArabic-Regular.ttf"]
                    }
                }
            }
        },
        "cherokee": {
            "families": {
                "Noto Sans Cherokee": {
                    "files": {
                        "hinted": ["fonts/NotoSansCherokee/hinted/ttf/NotoSansCherokee-Regular.ttf"]
                    }
                }
            }
        },
        "latin-greek-cyrillic": {
            "families": {
                "Noto Sans": {
                    "files": {
                        "hinted": ["fonts/NotoSans/hinted/ttf/NotoSans-Regular.ttf"]
                    }
                },
                "Noto Sans Display": {
                    "files": {
                        "hinted": ["fonts/NotoSansDisplay/hinted/ttf/NotoSansDisplay-Regular.ttf"]
                    }
                },
                "Noto Serif": {
                    "files": {
                        "hinted": ["fonts/NotoSerif/hinted/ttf/NotoSerif-Regular.ttf"]
                    }
                }
            }
        }
    }"#;

    fn catalog() -> Catalog {
        Catalog::from_json(SAMPLE_JSON).unwrap()
    }

    fn info(script: &str) -> TextInfo {
        TextInfo {
            main_script: script.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn candidates_preserve_catalog_order() {
        let names = candidate_families(&catalog(), &info("Arabic"));
        assert_eq!(
            names,
            vec!["Noto Kufi Arabic", "Noto Naskh Arabic", "Noto Sans Arabic"]
        );
    }

    #[test]
    fn candidates_empty_for_unknown_script() {
        assert!(candidate_families(&catalog(), &info("Ogham")).is_empty());
    }

    #[test]
    fn arabic_prefers_naskh() {
        let family = select_family(&catalog(), &Preferences::builtin(), &info("Arabic"));
        assert_eq!(family.as_deref(), Some("Noto Naskh Arabic"));
    }

    #[test]
    fn latin_prefers_plain_sans() {
        let family = select_family(&catalog(), &Preferences::builtin(), &info("Latin"));
        assert_eq!(family.as_deref(), Some("Noto Sans"));
    }

    #[test]
    fn no_preferences_returns_first_family() {
        let family = select_family(&catalog(), &Preferences::empty(), &info("Arabic"));
        assert_eq!(family.as_deref(), Some("Noto Kufi Arabic"));
    }

    #[test]
    fn unknown_script_selects_nothing() {
        assert_eq!(
            select_family(&catalog(), &Preferences::builtin(), &info("Ogham")),
            None
        );
    }

    #[test]
    fn too_restrictive_filter_is_skipped() {
        let mut prefs = Preferences::empty();
        prefs.family.insert(
            super::super::prefs::PrefKey::script("Cherokee", ""),
            vec![family_in(&["Noto Serif Cherokee"])],
        );
        // The only Cherokee family is the sans one; the filter would empty
        // the set, so it is ignored.
        let family = select_family(&catalog(), &prefs, &info("Cherokee"));
        assert_eq!(family.as_deref(), Some("Noto Sans Cherokee"));
    }

    #[test]
    fn single_candidate_short_circuits() {
        let mut prefs = Preferences::empty();
        prefs.family.insert(
            super::super::prefs::PrefKey::AnyScript,
            vec![
                family_in(&["Noto Serif"]),
                // Would exclude Noto Serif again, but never runs because the
                // first filter narrowed to one family.
                family_in(&["Noto Sans"]),
            ],
        );
        let family = select_family(&catalog(), &prefs, &info("Latin"));
        assert_eq!(family.as_deref(), Some("Noto Serif"));
    }

    #[test]
    fn member_selection_avoids_variable_and_unhinted() {
        let fonts = family_fonts(
            &catalog(),
            &Preferences::builtin(),
            "Noto Naskh Arabic",
            None,
            None,
        );
        // Hinted static Regular + Bold survive; variable and unhinted
        // duplicates are filtered out.
        assert_eq!(fonts.len(), 2);
        assert!(fonts
            .iter()
            .all(|f| f.postscript_name.starts_with("NotoNaskhArabic-")));
    }

    #[test]
    fn member_selection_for_analyzed_text() {
        let text_info = Analyzer::new().analyze("مرحبا بالعالم");
        assert_eq!(text_info.main_script, "Arabic");
        let family =
            select_family(&catalog(), &Preferences::builtin(), &text_info).unwrap();
        let fonts = family_fonts(&catalog(), &Preferences::builtin(), &family, None, None);
        assert!(!fonts.is_empty());
    }

    #[test]
    fn family_fonts_unknown_family_is_empty() {
        let fonts = family_fonts(
            &catalog(),
            &Preferences::builtin(),
            "Noto Sans Nowhere",
            None,
            None,
        );
        assert!(fonts.is_empty());
    }

    #[test]
    fn family_fonts_pins_script_pair() {
        // CJK TC serves both Han/zh-Hant and Bopomofo; pinning selects one
        // duplicate set.
        let fonts = family_fonts(
            &catalog(),
            &Preferences::builtin(),
            "Noto Sans CJK TC",
            Some("Bopomofo"),
            Some(""),
        );
        assert!(!fonts.is_empty());
        assert!(fonts.iter().all(|f| f.main_script == "Bopomofo"));
    }

    #[test]
    fn member_filter_cascade_respects_order() {
        let mut prefs = Preferences::empty();
        prefs.members.insert(
            super::super::prefs::PrefKey::AnyScript,
            vec![
                format_in(&[FontFormat::Otf]),
                format_in(&[FontFormat::Ttf]),
            ],
        );
        // All Naskh records are TTF: the OTF filter would empty the set and
        // is skipped, the TTF filter keeps everything.
        let fonts = family_fonts(&catalog(), &prefs, "Noto Naskh Arabic", None, None);
        assert_eq!(fonts.len(), 4);
    }
}
