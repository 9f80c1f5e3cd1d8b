//! Symbol normalization applied before and after segmentation.

use regex::Regex;
use std::sync::LazyLock;

static RE_SPACE_BEFORE_PUNCT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s+([,.;:!?])").ok());

static RE_MISSING_SPACE_AFTER_PUNCT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([,;:!?]|\.)(\p{L})").ok());

/// Fix spacing around punctuation: `word ,next` becomes `word, next` and a
/// space is inserted after a terminator glued to the following word.
///
/// Digits are not touched, so `3.14` and `1,000` survive.
pub fn fix_punctuation_spacing(text: &str) -> String {
    let mut out = text.to_string();
    if let Some(re) = RE_SPACE_BEFORE_PUNCT.as_ref() {
        out = re.replace_all(&out, "$1").into_owned();
    }
    if let Some(re) = RE_MISSING_SPACE_AFTER_PUNCT.as_ref() {
        out = re.replace_all(&out, "$1 $2").into_owned();
    }
    out
}

/// Delete punctuation characters, then collapse whitespace.
///
/// Characters are deleted rather than replaced by spaces, so `dog's`
/// becomes `dogs`. Run [`fix_punctuation_spacing`] first to keep glued
/// words apart.
pub fn remove_punctuation(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !is_punctuation(*c)).collect();
    collapse_whitespace(&stripped)
}

/// Collapse runs of whitespace into a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}' | '\u{2013}' | '\u{2014}' | '\u{2026}'
        )
}
