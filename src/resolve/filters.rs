//! Filter predicates over font records.
//!
//! Preferences are ordered lists of these filters. Each factory returns a
//! boxed predicate so lists can mix filters over different attributes, and
//! library users can add their own closures alongside the built-ins.

use crate::catalog::{FontBuild, FontForm, FontFormat, FontInfo, FontWeight, FontWidth};

/// A predicate over one font record.
pub type FontFilter = Box<dyn Fn(&FontInfo) -> bool + Send + Sync>;

/// Keep fonts whose family name equals one of `names`.
pub fn family_in(names: &[&str]) -> FontFilter {
    let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    Box::new(move |font| names.iter().any(|n| *n == font.family_name))
}

/// Keep fonts whose family name contains one of `needles`.
pub fn family_contains(needles: &[&str]) -> FontFilter {
    let needles: Vec<String> = needles.iter().map(|s| s.to_string()).collect();
    Box::new(move |font| needles.iter().any(|n| font.family_name.contains(n.as_str())))
}

/// Drop fonts whose family name contains one of `needles`.
pub fn family_excludes(needles: &[&str]) -> FontFilter {
    let needles: Vec<String> = needles.iter().map(|s| s.to_string()).collect();
    Box::new(move |font| !needles.iter().any(|n| font.family_name.contains(n.as_str())))
}

/// Keep fonts of one of the given forms.
pub fn form_in(forms: &[FontForm]) -> FontFilter {
    let forms = forms.to_vec();
    Box::new(move |font| forms.contains(&font.form))
}

/// Keep fonts of one of the given builds.
pub fn build_in(builds: &[FontBuild]) -> FontFilter {
    let builds = builds.to_vec();
    Box::new(move |font| builds.contains(&font.build))
}

/// Keep fonts of one of the given formats.
pub fn format_in(formats: &[FontFormat]) -> FontFilter {
    let formats = formats.to_vec();
    Box::new(move |font| formats.contains(&font.format))
}

/// Drop fonts of any of the given widths.
pub fn width_not(widths: &[FontWidth]) -> FontFilter {
    let widths = widths.to_vec();
    Box::new(move |font| !widths.contains(&font.width))
}

/// Drop fonts of any of the given weights.
pub fn weight_not(weights: &[FontWeight]) -> FontFilter {
    let weights = weights.to_vec();
    Box::new(move |font| !weights.contains(&font.weight))
}

/// Drop fonts whose family carries a Mono/Display/UI marker.
pub fn tag_free() -> FontFilter {
    Box::new(|font| !font.has_any_tag())
}
