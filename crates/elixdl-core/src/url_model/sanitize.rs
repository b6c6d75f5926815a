//! Linux-safe filename pieces.

/// Linux NAME_MAX, in bytes.
pub const NAME_MAX: usize = 255;

/// Replaces characters that cannot appear in a single path component
/// (`/`, `\`, NUL, control characters) with `_`. Everything else, spaces and
/// existing underscores included, is kept as typed.
pub fn replace_unsafe_chars(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c == '/' || c == '\\' || c == '\0' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Longest prefix of `s` that fits in `max` bytes without splitting a char.
pub fn truncate_to_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut take = max;
    while take > 0 && !s.is_char_boundary(take) {
        take -= 1;
    }
    &s[..take]
}
