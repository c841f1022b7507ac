//! Extraction of named object literals (`key: { ... }`) from a locale section.

use std::sync::LazyLock;

use regex::Regex;

use super::scanner::{ScanMode, balanced_end};

/// Matches the head of a named entry: an identifier directly followed by `: {`.
static ENTRY_HEAD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z_$][A-Za-z0-9_$]*): \{").expect("Invalid entry head regex")
});

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Extract the entry named `key` from `text`.
///
/// The first `key: {` anywhere in `text` is used, whatever its nesting level.
/// The returned span runs from the key to the brace that balances the opening
/// one, includes a directly following comma, and is trimmed.
///
/// Returns `None` if the key does not occur or its braces never balance.
///
/// ```
/// use i18n_split::core::{ScanMode, extract_section};
///
/// let text = "nav: { home: 'Home' },\nfooter: { copy: '(c)' }";
/// assert_eq!(
///     extract_section(text, "nav", ScanMode::Lexical),
///     Some("nav: { home: 'Home' },")
/// );
/// assert_eq!(extract_section(text, "header", ScanMode::Lexical), None);
/// ```
pub fn extract_section<'a>(text: &'a str, key: &str, mode: ScanMode) -> Option<&'a str> {
    // `nav` must not match inside `subnav: {`, `$nav: {` or `énav: {`.
    let head = ENTRY_HEAD_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(0).filter(|_| &caps[1] == key))
        .find(|head| {
            !text[..head.start()]
                .chars()
                .next_back()
                .is_some_and(is_identifier_char)
        })?;

    let open = head.end() - 1;
    let close = balanced_end(text, open, mode)?;

    let mut end = close + 1;
    if text.as_bytes().get(end) == Some(&b',') {
        end += 1;
    }

    Some(text[head.start()..end].trim())
}
