//! Sanitization of free-text filename components.

use std::sync::LazyLock;

use regex::Regex;

// Characters that would break the delimiter grammar (underscore splits
// groups, parentheses wrap the artwork reference) plus characters that are
// invalid in filenames on at least one supported platform.
static STRIPPED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[_()/\\<>:"|?*\x00-\x1f]"#).unwrap());

// Reserved device names on Windows; a component equal to one of these gets
// a leading dash so the resulting filename stays usable everywhere.
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7",
    "COM8", "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8",
    "LPT9",
];

/// Sanitize a free-text component for embedding in a canonical filename.
///
/// Strips delimiter and filesystem-invalid characters, collapses runs of
/// whitespace to single spaces, trims, and truncates to `max_len`
/// characters. Idempotent: sanitizing an already-sanitized component
/// returns it unchanged, which is what makes the build/parse round-trip
/// hold.
pub fn sanitize_component(input: &str, max_len: usize) -> String {
    let stripped = STRIPPED_CHARS.replace_all(input, "");
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut out: String = collapsed.chars().take(max_len).collect();
    out = out.trim().to_string();

    if WINDOWS_RESERVED.contains(&out.to_ascii_uppercase().as_str()) {
        out.insert(0, '-');
    }
    out
}
