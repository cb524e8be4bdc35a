//! Font metadata records and attribute parsing.
//!
//! A [`FontInfo`] describes one installable font file: the script/variant it
//! serves, its family, and the attributes (form, build, width, weight, style,
//! format) that the resolver filters on. Attributes are parsed out of Noto
//! file names and URLs with case-insensitive regex tables; each table is
//! scanned in full and the last matching entry wins, so that
//! "ExtraCondensed" overrides the "Condensed" it contains.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

fn table(entries: &[(&str, &str)]) -> Vec<(String, Regex)> {
    entries
        .iter()
        .map(|(name, pattern)| {
            let re = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .unwrap();
            (name.to_string(), re)
        })
        .collect()
}

fn last_match<'a>(table: &'a [(String, Regex)], name: &str) -> Option<&'a str> {
    let mut result = None;
    for (value, re) in table {
        if re.is_match(name) {
            result = Some(value.as_str());
        }
    }
    result
}

/// Serif vs sans-serif form of a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontForm {
    Unset,
    Serif,
    SansSerif,
}

static FORM_TABLE: LazyLock<Vec<(String, Regex)>> =
    LazyLock::new(|| table(&[("serif", r"Serif"), ("sans", r"Sans")]));

impl FontForm {
    pub fn from_name(name: &str) -> Self {
        match last_match(&FORM_TABLE, name) {
            Some("serif") => FontForm::Serif,
            Some("sans") => FontForm::SansSerif,
            _ => FontForm::Unset,
        }
    }
}

/// Hinting tier of a font build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontBuild {
    Unset,
    Unhinted,
    Hinted,
    Full,
}

static BUILD_TABLE: LazyLock<Vec<(String, Regex)>> = LazyLock::new(|| {
    table(&[
        ("hinted", r"Hinted"),
        ("unhinted", r"Unhinted"),
        ("full", r"Full"),
    ])
});

impl FontBuild {
    pub fn from_name(name: &str) -> Self {
        match last_match(&BUILD_TABLE, name) {
            Some("hinted") => FontBuild::Hinted,
            Some("unhinted") => FontBuild::Unhinted,
            Some("full") => FontBuild::Full,
            _ => FontBuild::Unset,
        }
    }
}

/// Width of a font face. `Variable` marks a `wdth` variation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWidth {
    Normal,
    Variable,
    ExtraCondensed,
    Condensed,
    SemiCondensed,
}

static WIDTH_TABLE: LazyLock<Vec<(String, Regex)>> = LazyLock::new(|| {
    table(&[
        ("variable", r"wdth"),
        ("condensed", r"Condensed"),
        ("extra_condensed", r"Extra.?Condensed"),
        ("semi_condensed", r"Semi.?Condensed"),
    ])
});

impl FontWidth {
    pub fn from_name(name: &str) -> Self {
        match last_match(&WIDTH_TABLE, name) {
            Some("variable") => FontWidth::Variable,
            Some("condensed") => FontWidth::Condensed,
            Some("extra_condensed") => FontWidth::ExtraCondensed,
            Some("semi_condensed") => FontWidth::SemiCondensed,
            _ => FontWidth::Normal,
        }
    }
}

/// Weight of a font face. `Variable` marks a `wght` variation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Regular,
    Variable,
    Thin,
    ExtraLight,
    Light,
    DemiLight,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

static WEIGHT_TABLE: LazyLock<Vec<(String, Regex)>> = LazyLock::new(|| {
    table(&[
        ("variable", r"wght"),
        ("light", r"Light"),
        ("extra_light", r"Extra.?Light"),
        ("demi_light", r"Demi.?Light"),
        ("thin", r"Thin"),
        ("medium", r"Medium"),
        ("bold", r"Bold"),
        ("semi_bold", r"Semi.?Bold"),
        ("extra_bold", r"Extra.?Bold"),
        ("black", r"Black"),
    ])
});

impl FontWeight {
    pub fn from_name(name: &str) -> Self {
        match last_match(&WEIGHT_TABLE, name) {
            Some("variable") => FontWeight::Variable,
            Some("light") => FontWeight::Light,
            Some("extra_light") => FontWeight::ExtraLight,
            Some("demi_light") => FontWeight::DemiLight,
            Some("thin") => FontWeight::Thin,
            Some("medium") => FontWeight::Medium,
            Some("bold") => FontWeight::Bold,
            Some("semi_bold") => FontWeight::SemiBold,
            Some("extra_bold") => FontWeight::ExtraBold,
            Some("black") => FontWeight::Black,
            _ => FontWeight::Regular,
        }
    }
}

/// Upright vs italic style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    Upright,
    Italic,
}

static STYLE_TABLE: LazyLock<Vec<(String, Regex)>> =
    LazyLock::new(|| table(&[("italic", r"Italic")]));

impl FontStyle {
    pub fn from_name(name: &str) -> Self {
        match last_match(&STYLE_TABLE, name) {
            Some("italic") => FontStyle::Italic,
            _ => FontStyle::Upright,
        }
    }
}

/// Container format, parsed from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFormat {
    Unset,
    Otf,
    Otc,
    Ttf,
}

static FORMAT_TABLE: LazyLock<Vec<(String, Regex)>> = LazyLock::new(|| {
    table(&[("otf", r"\.OTF"), ("otc", r"\.OTC"), ("ttf", r"\.TTF")])
});

impl FontFormat {
    pub fn from_name(name: &str) -> Self {
        match last_match(&FORMAT_TABLE, name) {
            Some("otf") => FontFormat::Otf,
            Some("otc") => FontFormat::Otc,
            Some("ttf") => FontFormat::Ttf,
            _ => FontFormat::Unset,
        }
    }
}

/// Purpose markers carried in some family names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontTag {
    Mono,
    Display,
    Ui,
}

static MONO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bMono\b").unwrap());
static DISPLAY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bDisplay\b").unwrap());
static UI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bUI\b").unwrap());

/// One installable font file known to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontInfo {
    /// Long Unicode name of the primary script this font serves.
    pub main_script: String,
    /// Script variant tag (see [`TextInfo`](crate::analysis::TextInfo)).
    pub script_variant: String,
    /// Font family name.
    pub family_name: String,
    /// Subfamily (weight/style) name, e.g. "Regular", "BoldItalic".
    pub subfamily_name: String,
    /// PostScript name, unique per file.
    pub postscript_name: String,
    /// Download URL. Empty for fonts with no known source.
    pub url: String,
    pub form: FontForm,
    pub build: FontBuild,
    pub width: FontWidth,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub format: FontFormat,
    /// Local path once downloaded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub path: Option<PathBuf>,
}

impl FontInfo {
    /// Create a record with default attributes.
    pub fn new(
        main_script: impl Into<String>,
        script_variant: impl Into<String>,
        family_name: impl Into<String>,
    ) -> Self {
        Self {
            main_script: main_script.into(),
            script_variant: script_variant.into(),
            family_name: family_name.into(),
            subfamily_name: String::new(),
            postscript_name: String::new(),
            url: String::new(),
            form: FontForm::Unset,
            build: FontBuild::Unset,
            width: FontWidth::Normal,
            weight: FontWeight::Regular,
            style: FontStyle::Upright,
            format: FontFormat::Unset,
            path: None,
        }
    }

    /// Set the download URL and parse every attribute the URL encodes:
    /// postscript and subfamily names from the file stem, format from the
    /// extension, and form/build/width/weight/style from the full URL text.
    pub fn set_from_url(&mut self, url: &str) {
        self.url = url.to_string();

        let file_name = url.rsplit('/').next().unwrap_or(url);
        let stem = file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(file_name);
        self.postscript_name = stem.to_string();
        self.subfamily_name = stem
            .rsplit_once('-')
            .map(|(_, sub)| sub.to_string())
            .unwrap_or_default();

        self.form = FontForm::from_name(url);
        self.build = FontBuild::from_name(url);
        self.width = FontWidth::from_name(url);
        self.weight = FontWeight::from_name(url);
        self.style = FontStyle::from_name(url);
        self.format = FontFormat::from_name(url);
    }

    /// File name of the font (last URL path segment).
    pub fn file_name(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }

    /// Whether the family name carries the given purpose marker.
    pub fn has_tag(&self, tag: FontTag) -> bool {
        let re = match tag {
            FontTag::Mono => &*MONO_RE,
            FontTag::Display => &*DISPLAY_RE,
            FontTag::Ui => &*UI_RE,
        };
        re.is_match(&self.family_name)
    }

    /// Whether the family name carries any purpose marker.
    pub fn has_any_tag(&self) -> bool {
        self.has_tag(FontTag::Mono) || self.has_tag(FontTag::Display) || self.has_tag(FontTag::Ui)
    }

    /// Sort key: script, variant, family, postscript name.
    pub fn sort_key(&self) -> (&str, &str, &str, &str) {
        (
            &self.main_script,
            &self.script_variant,
            &self.family_name,
            &self.postscript_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_from_name() {
        assert_eq!(FontForm::from_name("Noto Sans Adlam"), FontForm::SansSerif);
        assert_eq!(FontForm::from_name("Noto Serif Hebrew"), FontForm::Serif);
        assert_eq!(FontForm::from_name("Noto Music"), FontForm::Unset);
    }

    #[test]
    fn form_markers_do_not_cross_match() {
        assert_eq!(FontForm::from_name("Sans"), FontForm::SansSerif);
        assert_eq!(FontForm::from_name("Serif"), FontForm::Serif);
        // Both markers present: the later table entry wins.
        assert_eq!(FontForm::from_name("Sans Serif"), FontForm::SansSerif);
    }

    #[test]
    fn build_from_name() {
        assert_eq!(FontBuild::from_name("fonts/x/hinted/ttf"), FontBuild::Hinted);
        assert_eq!(
            FontBuild::from_name("fonts/x/unhinted/ttf"),
            FontBuild::Unhinted
        );
        assert_eq!(FontBuild::from_name("fonts/x/full/ttf"), FontBuild::Full);
        assert_eq!(FontBuild::from_name("fonts/x/ttf"), FontBuild::Unset);
    }

    #[test]
    fn unhinted_wins_over_hinted_substring() {
        // "Unhinted" contains "hinted"; the later table entry must win.
        assert_eq!(FontBuild::from_name("Unhinted"), FontBuild::Unhinted);
    }

    #[test]
    fn width_from_name() {
        assert_eq!(FontWidth::from_name("NotoSans-Regular"), FontWidth::Normal);
        assert_eq!(
            FontWidth::from_name("NotoSansCondensed-Regular"),
            FontWidth::Condensed
        );
        assert_eq!(
            FontWidth::from_name("NotoSansExtraCondensed-Regular"),
            FontWidth::ExtraCondensed
        );
        assert_eq!(
            FontWidth::from_name("NotoSansSemiCondensed-Regular"),
            FontWidth::SemiCondensed
        );
        assert_eq!(
            FontWidth::from_name("NotoSans[wdth,wght].ttf"),
            FontWidth::Variable
        );
    }

    #[test]
    fn weight_from_name() {
        assert_eq!(FontWeight::from_name("NotoSans-Regular"), FontWeight::Regular);
        assert_eq!(FontWeight::from_name("NotoSans-Bold"), FontWeight::Bold);
        assert_eq!(
            FontWeight::from_name("NotoSans-SemiBold"),
            FontWeight::SemiBold
        );
        assert_eq!(
            FontWeight::from_name("NotoSans-ExtraBold"),
            FontWeight::ExtraBold
        );
        assert_eq!(
            FontWeight::from_name("NotoSans-ExtraLight"),
            FontWeight::ExtraLight
        );
        assert_eq!(
            FontWeight::from_name("NotoSansCJKsc-DemiLight"),
            FontWeight::DemiLight
        );
        assert_eq!(FontWeight::from_name("NotoSans-Black"), FontWeight::Black);
        assert_eq!(
            FontWeight::from_name("NotoSans[wght].ttf"),
            FontWeight::Variable
        );
    }

    #[test]
    fn style_from_name() {
        assert_eq!(
            FontStyle::from_name("NotoSans-BoldItalic"),
            FontStyle::Italic
        );
        assert_eq!(FontStyle::from_name("NotoSans-Bold"), FontStyle::Upright);
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(FontFormat::from_name("a/b/Font.ttf"), FontFormat::Ttf);
        assert_eq!(FontFormat::from_name("a/b/Font.otf"), FontFormat::Otf);
        assert_eq!(FontFormat::from_name("a/b/Font.otc"), FontFormat::Otc);
        assert_eq!(FontFormat::from_name("a/b/Font.woff2"), FontFormat::Unset);
    }

    #[test]
    fn set_from_url_parses_everything() {
        let mut info = FontInfo::new("Latin", "", "Noto Sans");
        info.set_from_url(
            "https://cdn.example.com/fonts/NotoSans/hinted/ttf/NotoSans-BoldItalic.ttf",
        );
        assert_eq!(info.postscript_name, "NotoSans-BoldItalic");
        assert_eq!(info.subfamily_name, "BoldItalic");
        assert_eq!(info.form, FontForm::SansSerif);
        assert_eq!(info.build, FontBuild::Hinted);
        assert_eq!(info.weight, FontWeight::Bold);
        assert_eq!(info.style, FontStyle::Italic);
        assert_eq!(info.format, FontFormat::Ttf);
        assert_eq!(info.file_name(), "NotoSans-BoldItalic.ttf");
    }

    #[test]
    fn set_from_url_variable_axes() {
        let mut info = FontInfo::new("Latin", "", "Noto Sans");
        info.set_from_url(
            "https://cdn.example.com/fonts/NotoSans/unhinted/variable-ttf/NotoSans%5Bwdth%2Cwght%5D.ttf",
        );
        assert_eq!(info.width, FontWidth::Variable);
        assert_eq!(info.weight, FontWeight::Variable);
    }

    #[test]
    fn tags_match_whole_words() {
        let mono = FontInfo::new("Latin", "", "Noto Sans Mono");
        assert!(mono.has_tag(FontTag::Mono));
        assert!(mono.has_any_tag());

        let display = FontInfo::new("Latin", "", "Noto Sans Display");
        assert!(display.has_tag(FontTag::Display));

        let ui = FontInfo::new("Arabic", "", "Noto Sans Arabic UI");
        assert!(ui.has_tag(FontTag::Ui));

        let plain = FontInfo::new("Latin", "", "Noto Sans");
        assert!(!plain.has_any_tag());

        // "Mono" must not match inside a word.
        let mongolian = FontInfo::new("Mongolian", "", "Noto Sans Mongolian");
        assert!(!mongolian.has_tag(FontTag::Mono));
    }

    #[test]
    fn sort_key_orders_by_script_then_family() {
        let a = FontInfo::new("Arabic", "", "Noto Naskh Arabic");
        let b = FontInfo::new("Latin", "", "Noto Sans");
        assert!(a.sort_key() < b.sort_key());
    }

    #[test]
    fn serializes_to_json() {
        let mut info = FontInfo::new("Latin", "", "Noto Sans");
        info.set_from_url("https://cdn.example.com/x/NotoSans-Regular.ttf");
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"family_name\":\"Noto Sans\""));
        assert!(json.contains("\"weight\":\"regular\""));
        // path is omitted until a download sets it
        assert!(!json.contains("\"path\""));
    }
}
