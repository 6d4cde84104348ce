/// Text between the quotes of a Java string literal, escapes left as-is.
///
/// Returns `None` for text blocks (`"""..."""`) and for anything that is
/// not a double-quoted literal.
pub fn java_string_contents(literal: &str) -> Option<&str> {
    let s = literal.trim();
    if s.starts_with("\"\"\"") {
        return None;
    }
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}
