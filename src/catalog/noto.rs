//! Parsing of the upstream Noto metadata into catalog records.
//!
//! The main (non-CJK) collection is described by a JSON file published by the
//! Noto project; every font file in it is reachable through the jsDelivr CDN.
//! The CJK collection lives in a separate repository with a stable layout, so
//! its records are synthesized from a static table instead.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{FontScoutError, Result};

use super::font_info::{
    FontBuild, FontForm, FontFormat, FontInfo, FontStyle, FontWeight, FontWidth,
};

/// Upstream JSON describing the main Noto collection.
pub const NOTO_MAIN_JSON_URL: &str = "https://notofonts.github.io/noto.json";

/// CDN base the JSON's relative file paths resolve against.
pub const NOTO_MAIN_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/notofonts/notofonts.github.io/";

/// Base URL of the Noto CJK repository.
pub const NOTO_CJK_BASE_URL: &str = "https://github.com/notofonts/noto-cjk/raw/main/";

#[derive(Debug, Deserialize)]
struct ScriptEntry {
    #[serde(default)]
    families: BTreeMap<String, FamilyEntry>,
}

#[derive(Debug, Deserialize)]
struct FamilyEntry {
    #[serde(default)]
    files: BTreeMap<String, Vec<String>>,
}

/// Parse the upstream JSON into records for the main Noto collection.
pub fn parse_main_fonts(json: &str) -> Result<Vec<FontInfo>> {
    let data: BTreeMap<String, ScriptEntry> =
        serde_json::from_str(json).map_err(|e| FontScoutError::DataParse {
            source_name: "noto.json".to_string(),
            message: e.to_string(),
        })?;

    let mut fonts = Vec::new();
    for (script_tag, entry) in &data {
        // The Noto data treats these three scripts as one family group; the
        // records are duplicated so each script resolves on its own.
        let script_set: Vec<&str> = if script_tag == "latin-greek-cyrillic" {
            vec!["latin", "greek", "cyrillic"]
        } else {
            vec![script_tag.as_str()]
        };

        for tag in script_set {
            let main_script = unicode_script_name(tag);
            for (family_name, family) in &entry.families {
                let form = FontForm::from_name(family_name);
                for (build_key, relative_urls) in &family.files {
                    let build = FontBuild::from_name(build_key);
                    for relative_url in relative_urls {
                        let url = format!("{NOTO_MAIN_BASE_URL}{relative_url}");
                        let mut info = FontInfo::new(main_script.clone(), "", family_name.clone());
                        info.set_from_url(&url);
                        // The URL already implies form and build, but the JSON
                        // keys are authoritative.
                        info.form = form;
                        info.build = build;
                        fonts.push(info);
                    }
                }
            }
        }
    }
    Ok(fonts)
}

/// Normalise a Noto script tag to the Unicode long script name.
///
/// Noto uses lowercase hyphenated tags ("khitan-small-script"); Unicode
/// property value aliases are Title_Case with underscores
/// ("Khitan_Small_Script"). One name genuinely differs between the two.
fn unicode_script_name(tag: &str) -> String {
    let name = tag
        .split('-')
        .map(title_case)
        .collect::<Vec<_>>()
        .join("_");
    if name == "Sign_Writing" {
        "SignWriting".to_string()
    } else {
        name
    }
}

fn title_case(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

const CJK_WEIGHTS: &[(&str, FontWeight)] = &[
    ("Black", FontWeight::Black),
    ("Bold", FontWeight::Bold),
    ("DemiLight", FontWeight::DemiLight),
    ("Light", FontWeight::Light),
    ("Medium", FontWeight::Medium),
    ("Regular", FontWeight::Regular),
    ("Thin", FontWeight::Thin),
];

struct CjkFlavor {
    /// (main_script, script_variant) pairs this flavor serves.
    script_infos: &'static [(&'static str, &'static str)],
    /// Path segment in the noto-cjk repository.
    url_component: &'static str,
    /// Two-letter code used in family and postscript names.
    code: &'static str,
}

const CJK_FLAVORS: &[CjkFlavor] = &[
    CjkFlavor {
        script_infos: &[("Han", "zh-Hans")],
        url_component: "SimplifiedChinese/",
        code: "SC",
    },
    CjkFlavor {
        script_infos: &[("Han", "zh-Hant"), ("Bopomofo", "")],
        url_component: "TraditionalChinese/",
        code: "TC",
    },
    CjkFlavor {
        script_infos: &[("Han", "zh-Hant-HK")],
        url_component: "TraditionalChineseHK/",
        code: "HK",
    },
    CjkFlavor {
        script_infos: &[("Hiragana", ""), ("Katakana", ""), ("Han", "ja")],
        url_component: "Japanese/",
        code: "JP",
    },
    CjkFlavor {
        script_infos: &[("Hangul", ""), ("Han", "ko")],
        url_component: "Korean/",
        code: "KR",
    },
];

/// Synthesize records for the CJK Noto collection.
///
/// Uses the language-specific OTF builds: 5 flavors x {Sans, Serif} x
/// 7 weights, each duplicated under every script/variant pair it serves.
pub fn cjk_fonts() -> Vec<FontInfo> {
    let mut fonts = Vec::new();
    for flavor in CJK_FLAVORS {
        for form in [FontForm::SansSerif, FontForm::Serif] {
            let form_name = if form == FontForm::SansSerif {
                "Sans"
            } else {
                "Serif"
            };
            let family_name = format!("Noto {} CJK {}", form_name, flavor.code);

            let mut flavor_fonts = Vec::new();
            for (weight_name, weight) in CJK_WEIGHTS {
                let postscript_name = format!(
                    "Noto{}CJK{}-{}",
                    form_name,
                    flavor.code.to_lowercase(),
                    weight_name
                );
                let url = format!(
                    "{}{}/OTF/{}{}.otf",
                    NOTO_CJK_BASE_URL, form_name, flavor.url_component, postscript_name
                );

                let mut info = FontInfo::new("", "", family_name.clone());
                info.subfamily_name = weight_name.to_string();
                info.postscript_name = postscript_name;
                info.url = url;
                info.form = form;
                info.build = FontBuild::Full;
                info.width = FontWidth::Normal;
                info.weight = *weight;
                info.style = FontStyle::Upright;
                info.format = FontFormat::Otf;
                flavor_fonts.push(info);
            }

            for (main_script, script_variant) in flavor.script_infos {
                for font in &flavor_fonts {
                    let mut font = font.clone();
                    font.main_script = main_script.to_string();
                    font.script_variant = script_variant.to_string();
                    fonts.push(font);
                }
            }
        }
    }
    fonts
}
