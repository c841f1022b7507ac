use super::scanner::{BraceKind, ScanMode, Scanner};

/// List the keys of the object literals opened directly inside the first
/// block of `section`, in source order.
///
/// Only entries written as `<ident>: {` count; scalar and array values are
/// not listed.
pub fn top_level_keys(section: &str, mode: ScanMode) -> Vec<&str> {
    Scanner::new(section, mode)
        .filter(|brace| brace.kind == BraceKind::Open && brace.depth == 2)
        .filter_map(|brace| key_before(section, brace.pos))
        .collect()
}

fn key_before(text: &str, open: usize) -> Option<&str> {
    let head = text[..open].strip_suffix(": ")?;
    let start = head
        .char_indices()
        .rev()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$'))
        .map_or(0, |(i, c)| i + c.len_utf8());
    let key = &head[start..];

    match key.chars().next() {
        Some(first) if !first.is_ascii_digit() => Some(key),
        _ => None,
    }
}
