//! Camel-case identifier splitting.
//!
//! Turns identifiers such as `optCodeStackSize` into the lowercase phrase
//! used in generated documentation (`opt code stack size`).

/// Splits an identifier into lowercase word fragments.
///
/// A new fragment starts at a lowercase-to-uppercase transition, or before
/// the last capital of an uppercase run that is followed by a lowercase
/// letter, so acronyms stay together (`HTTPRequest` -> `http`, `request`).
/// Only ASCII letters count as cased for boundary detection.
///
/// # Example
/// ```
/// use splice_blocks::words::split_words;
///
/// assert_eq!(split_words("opCodeHTTPRequest"), ["op", "code", "http", "request"]);
/// assert_eq!(split_words("simple"), ["simple"]);
/// ```
pub fn split_words(ident: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = ident.char_indices().collect();
    let mut words = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let prev = chars[i - 1].1;
        let cur = chars[i].1;
        let next = chars.get(i + 1).map(|&(_, c)| c);

        let camel = prev.is_ascii_lowercase() && cur.is_ascii_uppercase();
        let acronym_end = prev.is_ascii_uppercase()
            && cur.is_ascii_uppercase()
            && next.is_some_and(|c| c.is_ascii_lowercase());

        if camel || acronym_end {
            let at = chars[i].0;
            words.push(ident[start..at].to_lowercase());
            start = at;
        }
    }

    if start < ident.len() {
        words.push(ident[start..].to_lowercase());
    }

    words
}

/// Returns the space-joined, lowercase words of an identifier.
pub fn identifier_words(ident: &str) -> String {
    split_words(ident).join(" ")
}
