// src/core/transform.rs
pub mod months;
pub mod sanitize;

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

pub use months::{MONTH_TOKENS, strip_months};
pub use sanitize::{guard_reserved_name, is_reserved_name, sanitize};

/// Stem used when normalization leaves nothing behind.
pub const FALLBACK_STEM: &str = "unnamed";

/// `strftime` layout of the timestamp prefix: month, day, year, hour, minute.
pub const PREFIX_FORMAT: &str = "%m%d%Y_%H%M_";

struct Patterns {
    digits: Regex,
    whitespace: Regex,
    dashes: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        digits: Regex::new(r"\d+").expect("digit pattern is valid"),
        whitespace: Regex::new(r"\s+").expect("whitespace pattern is valid"),
        dashes: Regex::new(r"-{2,}").expect("dash pattern is valid"),
    })
}

/// Computes the new name for `filename`, stamped with `now`.
///
/// The stem is sanitized, lowercased and stripped of month tokens and digits,
/// whitespace turns into dashes and the result is prefixed with
/// [`PREFIX_FORMAT`]. The extension is appended untouched.
///
/// # Arguments
///
/// * `filename` - The current file name (a single path component)
/// * `now` - The wall-clock reading used for the prefix
///
/// # Returns
///
/// The new file name. This function never fails.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use datename::transform;
///
/// let now = NaiveDate::from_ymd_opt(2025, 3, 5)
///     .and_then(|d| d.and_hms_opt(9, 7, 0))
///     .unwrap();
/// assert_eq!(
///     transform("Invoice March 2024 #12.pdf", &now),
///     "03052025_0907_invoice-#.pdf"
/// );
/// ```
#[inline]
#[must_use]
pub fn transform(filename: &str, now: &NaiveDateTime) -> String {
    let (stem, extension) = split_extension(filename);
    format!("{}{}{extension}", date_prefix(now), normalize_stem(stem))
}

/// Splits a file name into stem and extension at the last dot.
///
/// The extension keeps its leading dot. A name without a dot, or whose only
/// dot opens the name (`.bashrc`), has an empty extension. Only the part after
/// the last `/` is considered.
#[inline]
#[must_use]
pub fn split_extension(filename: &str) -> (&str, &str) {
    let base_start = filename.rfind('/').map_or(0, |idx| idx.saturating_add(1));
    match filename.rfind('.') {
        Some(dot) if dot > base_start => filename.split_at(dot),
        _ => (filename, ""),
    }
}

/// Runs every stem rule in order and applies the [`FALLBACK_STEM`].
///
/// Month removal runs again after the digits are gone, since `jan2024` only
/// becomes a whole-word `jan` at that point. Trailing periods and reserved
/// device names are checked again at the end, because removing digits can
/// leave `abc.` or `con` behind. The output is a fixed point: normalizing it
/// again changes nothing.
#[inline]
#[must_use]
pub fn normalize_stem(stem: &str) -> String {
    let patterns = patterns();

    let lowered = sanitize(stem).to_lowercase();
    let without_months = strip_months(&lowered);
    let without_digits = patterns.digits.replace_all(&without_months, "");
    let without_months = strip_months(&without_digits);
    let dashed = patterns.whitespace.replace_all(&without_months, "-");
    let collapsed = patterns.dashes.replace_all(&dashed, "-");

    let trimmed = collapsed
        .trim_start_matches('-')
        .trim_end_matches(['-', '.']);
    if trimmed.is_empty() {
        FALLBACK_STEM.to_owned()
    } else {
        guard_reserved_name(trimmed)
    }
}

/// Formats `now` as the `MMDDYYYY_HHMM_` prefix.
#[inline]
#[must_use]
pub fn date_prefix(now: &NaiveDateTime) -> String {
    now.format(PREFIX_FORMAT).to_string()
}
