//! Greedy line wrapping with tiered prefixes.

/// Maximum width, in characters, of a wrapped line.
pub const WRAP_WIDTH: usize = 78;

/// Prefixes used for generated documentation bullets.
///
/// The first line of an entry starts a `// - ` bullet, continuation lines
/// are indented to align under the bullet text.
pub const DOC_PREFIXES: [&str; 2] = ["// - ", "//   "];

/// Wraps a single logical line into physical lines of at most [`WRAP_WIDTH`]
/// characters.
///
/// `prefixes[0]` starts the first line, every later line uses the next
/// prefix in the list, staying on the last one once reached. A line only
/// breaks at a space that comes after its prefix and the character
/// following it; a token that cannot fit is emitted whole, over width.
///
/// # Example
/// ```
/// use splice_blocks::wrap::{wrap, DOC_PREFIXES};
///
/// let lines = wrap("0x00 end: short enough", &DOC_PREFIXES);
/// assert_eq!(lines, ["// - 0x00 end: short enough"]);
/// ```
pub fn wrap(text: &str, prefixes: &[&str]) -> Vec<String> {
    let prefix = |tier: usize| prefixes.get(tier).copied().unwrap_or("");
    let last_tier = prefixes.len().saturating_sub(1);

    let mut tier = 0;
    let mut lines = Vec::new();
    let mut current = format!("{}{}", prefix(tier), text);

    loop {
        let min_index = prefix(tier).chars().count() + 1;
        let Some(at) = break_point(&current, min_index) else {
            lines.push(current);
            break;
        };

        let rest = current[at + 1..].to_string();
        current.truncate(at);
        lines.push(current);

        if rest.is_empty() {
            break;
        }
        if tier < last_tier {
            tier += 1;
        }
        current = format!("{}{}", prefix(tier), rest);
    }

    lines
}

/// Byte offset of the space to break an over-width line at, if any.
///
/// Candidates are spaces at character index `min_index..WRAP_WIDTH`; the
/// rightmost one wins.
fn break_point(line: &str, min_index: usize) -> Option<usize> {
    if line.chars().count() <= WRAP_WIDTH {
        return None;
    }

    line.char_indices()
        .take(WRAP_WIDTH)
        .skip(min_index)
        .filter(|&(_, c)| c == ' ')
        .map(|(at, _)| at)
        .last()
}
