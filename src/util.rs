//! Shared utility helpers.

/// Case-insensitive starts_with check without allocating.
#[inline]
pub fn starts_with_ci(haystack: &str, needle: &str) -> bool {
    haystack.len() >= needle.len()
        && haystack.as_bytes()[..needle.len()].eq_ignore_ascii_case(needle.as_bytes())
}

/// Case-insensitive keyword prefix check: `keyword` must be followed by a
/// character that cannot continue an identifier (`KEY(`, `SET;`, `UNIQUE KEY`).
pub fn starts_with_keyword(haystack: &str, keyword: &str) -> bool {
    starts_with_ci(haystack, keyword)
        && !haystack[keyword.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// Case-insensitive find: returns byte offset of first occurrence of `needle` in `haystack`.
#[inline]
pub fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    let needle_bytes = needle.as_bytes();
    let haystack_bytes = haystack.as_bytes();
    if needle_bytes.len() > haystack_bytes.len() {
        return None;
    }
    haystack_bytes
        .windows(needle_bytes.len())
        .position(|window| window.eq_ignore_ascii_case(needle_bytes))
}

/// Capitalizes the first character, leaving the rest untouched (`user_id` -> `User_id`).
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Exported Go identifier for a DDL name (`user_id` -> `User_id`).
///
/// Characters Go does not allow in identifiers become `_`, and a name that
/// would start with a digit gets an `X` prefix (`2fa_codes` -> `X2fa_codes`).
pub fn exported_identifier(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    match cleaned.chars().next() {
        Some(c) if c.is_numeric() => format!("X{}", cleaned),
        _ => capitalize_first(&cleaned),
    }
}
