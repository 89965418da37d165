// src/core/transform/sanitize.rs

/// Characters that are unsafe in filenames or URLs, paired with the safe
/// character each one is replaced by. No two entries share a replacement.
pub const SUBSTITUTIONS: [(char, char); 10] = [
    ('/', '_'),
    ('\\', '='),
    ('?', '!'),
    ('%', '+'),
    ('*', '^'),
    (':', ';'),
    ('|', '~'),
    ('"', '\''),
    ('<', '('),
    ('>', ')'),
];

/// Appended to names Windows reserves for devices.
pub const RESERVED_NAME_SUFFIX: char = '!';

/// Replaces filename- and URL-unsafe characters with safe equivalents.
///
/// Every character listed in [`SUBSTITUTIONS`] maps to its own replacement.
/// Control characters become a space, so a later whitespace pass turns them
/// into a dash. Trailing periods are then dropped and a Windows device name
/// gets [`RESERVED_NAME_SUFFIX`]. Anything else is kept as is, which makes the
/// function idempotent.
#[inline]
#[must_use]
pub fn sanitize(stem: &str) -> String {
    let substituted: String = stem.chars().map(substitute).collect();
    guard_reserved_name(substituted.trim_end_matches('.'))
}

/// `con`, `prn`, `aux`, `nul`, `com0`-`com9` or `lpt0`-`lpt9`, in any case.
#[inline]
#[must_use]
pub fn is_reserved_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "con" | "prn" | "aux" | "nul" => true,
        _ => lower
            .strip_prefix("com")
            .or_else(|| lower.strip_prefix("lpt"))
            .is_some_and(|rest| rest.len() == 1 && rest.bytes().all(|b| b.is_ascii_digit())),
    }
}

/// Returns `name`, suffixed with [`RESERVED_NAME_SUFFIX`] if it is reserved.
#[inline]
#[must_use]
pub fn guard_reserved_name(name: &str) -> String {
    if is_reserved_name(name) {
        format!("{name}{RESERVED_NAME_SUFFIX}")
    } else {
        name.to_owned()
    }
}

fn substitute(c: char) -> char {
    if c.is_control() {
        return ' ';
    }
    SUBSTITUTIONS
        .iter()
        .find(|(unsafe_char, _)| *unsafe_char == c)
        .map_or(c, |(_, safe)| *safe)
}
