/// Prepare a resolved pattern for emission.
///
/// Literal values keep their source escapes, so `"\\d"` in Java arrives
/// here as the two-backslash text `\\d`. Trim surrounding control and
/// space characters (everything up to U+0020, nothing wider) and collapse
/// every `\\` pair down to a single `\`.
pub fn normalize_pattern(pattern: &str) -> String {
    pattern
        .trim_matches(|c: char| c <= ' ')
        .replace("\\\\", "\\")
}
