//! Script counting and main-script selection.

use std::collections::HashMap;

use serde::Serialize;
use unic_emoji_char::is_emoji_presentation;
use unicode_script::UnicodeScript;

use super::cjk;

/// Maximum number of characters examined by [`Analyzer::analyze`].
pub const DEFAULT_MAX_ANALYZE_CHARS: usize = 2048;

/// Script values that never qualify as a text's main script.
const GENERIC_SCRIPTS: &[&str] = &["Common", "Inherited", "Unknown"];

/// Result of analysing a piece of text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TextInfo {
    /// Long Unicode name of the most frequently used script ("Latin",
    /// "Han", ...). Empty when the text has no non-generic script.
    pub main_script: String,

    /// Secondary tag used when `main_script` alone cannot choose a font.
    /// `"Emoji"` for emoji-dominated text; a language tag (`zh-Hans`,
    /// `zh-Hant`, `zh-Hant-HK`, `ja`, `ko`) for Han text; empty otherwise.
    pub script_variant: String,

    /// Count of characters with the Emoji_Presentation property.
    pub emoji_count: usize,

    /// Per-script character counts, including Common/Inherited/Unknown.
    pub script_counts: HashMap<String, usize>,
}

impl TextInfo {
    /// The `(main_script, script_variant)` pair as string slices.
    pub fn script_pair(&self) -> (&str, &str) {
        (&self.main_script, &self.script_variant)
    }
}

/// A run of consecutive characters sharing one script.
///
/// `start`/`end` are byte offsets into the analysed string. Common and
/// Inherited characters extend the surrounding run rather than starting
/// their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptRun {
    pub script: String,
    pub start: usize,
    pub end: usize,
}

/// Counts scripts, emoji and Han variant hints in text.
#[derive(Debug, Clone)]
pub struct Analyzer {
    max_analyze_chars: usize,
    prefer_hong_kong: bool,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Create an analyzer with default settings.
    pub fn new() -> Self {
        Self {
            max_analyze_chars: DEFAULT_MAX_ANALYZE_CHARS,
            prefer_hong_kong: false,
        }
    }

    /// Limit how many characters [`Analyzer::analyze`] examines.
    pub fn with_max_chars(mut self, max: usize) -> Self {
        self.max_analyze_chars = max;
        self
    }

    /// Report Traditional Chinese as `zh-Hant-HK` rather than `zh-Hant`.
    pub fn with_hong_kong(mut self, prefer: bool) -> Self {
        self.prefer_hong_kong = prefer;
        self
    }

    /// Analyse an initial portion of `text` for the Unicode scripts it uses.
    ///
    /// The main script is the most frequent script ignoring Common, Inherited
    /// and Unknown. Emoji-dominated text reports `("Common", "Emoji")`. Han
    /// text gets a language variant: `ko` when Hangul is present, `ja` when
    /// kana are present, otherwise `zh-Hant`/`zh-Hans` decided by counting
    /// Unihan variant mappings (characters that have a simplified variant are
    /// themselves traditional forms, and vice versa).
    pub fn analyze(&self, text: &str) -> TextInfo {
        let mut script_counts: HashMap<String, usize> = HashMap::new();
        let mut emoji_count = 0usize;
        let mut simplified_variant_hits = 0usize;
        let mut traditional_variant_hits = 0usize;

        for ch in text.chars().take(self.max_analyze_chars) {
            let name = ch.script().full_name();
            *script_counts.entry(name.to_string()).or_insert(0) += 1;
            if is_emoji_presentation(ch) {
                emoji_count += 1;
            }
            if cjk::has_simplified_variant(ch) {
                simplified_variant_hits += 1;
            }
            if cjk::has_traditional_variant(ch) {
                traditional_variant_hits += 1;
            }
        }

        let top = script_counts
            .iter()
            .filter(|(name, _)| !GENERIC_SCRIPTS.contains(&name.as_str()))
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, count)| (name.clone(), *count));

        let mut main_script = top.as_ref().map(|(name, _)| name.clone()).unwrap_or_default();
        let mut script_variant = String::new();

        let top_count = top.map(|(_, count)| count).unwrap_or(0);
        if (top_count == 0 && emoji_count > 0) || emoji_count > top_count {
            main_script = "Common".to_string();
            script_variant = "Emoji".to_string();
        }

        if main_script == "Han" {
            script_variant = if script_counts.contains_key("Hangul") {
                "ko".to_string()
            } else if script_counts.contains_key("Hiragana")
                || script_counts.contains_key("Katakana")
            {
                "ja".to_string()
            } else if simplified_variant_hits > traditional_variant_hits {
                // Characters with simplified variants are traditional forms.
                if self.prefer_hong_kong {
                    "zh-Hant-HK".to_string()
                } else {
                    "zh-Hant".to_string()
                }
            } else {
                "zh-Hans".to_string()
            };
        }

        TextInfo {
            main_script,
            script_variant,
            emoji_count,
            script_counts,
        }
    }
}

/// Segment `text` into runs of consecutive same-script characters.
///
/// Common and Inherited characters do not break runs: they extend the
/// preceding run, or attach to the following run at the start of the text.
/// Text made entirely of such characters yields a single `Common` run.
pub fn script_runs(text: &str) -> Vec<ScriptRun> {
    let mut runs: Vec<ScriptRun> = Vec::new();
    // Start of a generic-only prefix not yet attached to a run.
    let mut pending_start: Option<usize> = None;

    for (i, ch) in text.char_indices() {
        let name = ch.script().full_name();
        let end = i + ch.len_utf8();

        if name == "Common" || name == "Inherited" {
            if let Some(last) = runs.last_mut() {
                last.end = end;
            } else if pending_start.is_none() {
                pending_start = Some(i);
            }
            continue;
        }

        match runs.last_mut() {
            Some(last) if last.script == name => last.end = end,
            _ => {
                let start = pending_start.take().unwrap_or(i);
                runs.push(ScriptRun {
                    script: name.to_string(),
                    start,
                    end,
                });
            }
        }
    }

    if let Some(start) = pending_start {
        runs.push(ScriptRun {
            script: "Common".to_string(),
            start,
            end: text.len(),
        });
    }

    runs
}
