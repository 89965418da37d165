// src/core/transform/months.rs
use regex::Regex;
use std::sync::OnceLock;

/// Month names and abbreviations removed from stems. May has no shorter form.
pub const MONTH_TOKENS: [&str; 24] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
    "jan",
    "feb",
    "mar",
    "apr",
    "jun",
    "jul",
    "aug",
    "sep",
    "sept",
    "oct",
    "nov",
    "dec",
];

fn month_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternatives = MONTH_TOKENS.join("|");
        Regex::new(&format!(r"(?i)(?-u:\b)(?:{alternatives})(?-u:\b)")).expect("month pattern is valid")
    })
}

/// Deletes whole-word month names and abbreviations, ignoring case.
///
/// Word boundaries are ASCII ones: only `[0-9A-Za-z_]` count as word
/// characters, so a token next to `é` is still a whole word.
///
/// Matches are removed without leaving a space behind, so `"invoice march x"`
/// becomes `"invoice  x"`. Tokens glued to other word characters (`"marching"`,
/// `"jan2024"`, `"dec_notes"`) are left alone.
#[inline]
#[must_use]
pub fn strip_months(text: &str) -> String {
    month_regex().replace_all(text, "").into_owned()
}
