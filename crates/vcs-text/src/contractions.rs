//! English contraction expansion.
//!
//! Irregular forms (`won't`, `can't`, `shan't`) are handled before the
//! generic suffix rules so that `n't` does not turn `won't` into `wo not`.

use regex::Regex;
use std::sync::LazyLock;

/// A compiled rewrite rule: every match of `regex` is replaced by `replacement`.
struct ContractionRule {
    regex: &'static LazyLock<Option<Regex>>,
    replacement: &'static str,
}

macro_rules! contraction_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

contraction_pattern!(RE_WONT, r"\b([Ww])on't\b");
contraction_pattern!(RE_CANT, r"\b([Cc])an't\b");
contraction_pattern!(RE_SHANT, r"\b([Ss])han't\b");
contraction_pattern!(RE_NT, r"(?i)\b(\w+)n't\b");
contraction_pattern!(RE_RE, r"(?i)\b(\w+)'re\b");
contraction_pattern!(RE_LL, r"(?i)\b(\w+)'ll\b");
contraction_pattern!(RE_VE, r"(?i)\b(\w+)'ve\b");
contraction_pattern!(RE_D, r"(?i)\b(\w+)'d\b");
contraction_pattern!(RE_M, r"\b([Ii])'m\b");
contraction_pattern!(RE_LETS, r"\b([Ll])et's\b");
// Only pronoun-like heads: "the dog's bone" stays possessive.
contraction_pattern!(
    RE_S,
    r"\b([Ii]t|[Tt]hat|[Tt]here|[Hh]ere|[Ww]hat|[Ww]here|[Ww]ho|[Hh]e|[Ss]he)'s\b"
);

static RULES: &[ContractionRule] = &[
    ContractionRule { regex: &RE_WONT, replacement: "${1}ill not" },
    ContractionRule { regex: &RE_CANT, replacement: "${1}annot" },
    ContractionRule { regex: &RE_SHANT, replacement: "${1}hall not" },
    ContractionRule { regex: &RE_NT, replacement: "${1} not" },
    ContractionRule { regex: &RE_RE, replacement: "${1} are" },
    ContractionRule { regex: &RE_LL, replacement: "${1} will" },
    ContractionRule { regex: &RE_VE, replacement: "${1} have" },
    ContractionRule { regex: &RE_D, replacement: "${1} would" },
    ContractionRule { regex: &RE_M, replacement: "${1} am" },
    ContractionRule { regex: &RE_LETS, replacement: "${1}et us" },
    ContractionRule { regex: &RE_S, replacement: "${1} is" },
];

/// Expand English contractions, preserving the case of the leading word.
///
/// Typographic apostrophes (`’`) are folded to `'` first.
pub fn expand_contractions(text: &str) -> String {
    let mut out = text.replace('\u{2019}', "'");
    for rule in RULES {
        let Some(re) = rule.regex.as_ref() else {
            continue;
        };
        if re.is_match(&out) {
            out = re.replace_all(&out, rule.replacement).into_owned();
        }
    }
    out
}
