//! Declaration and doc-comment extraction.
//!
//! Scans source lines for `name = value` declarations and pairs each one
//! with the run of `// ` comment lines directly above it:
//!
//! ```text
//! // its required parameter declares the amount of memory given to the
//! // parameter and control stacks.
//! optCodeStackSize = 0x01
//! ```
//!
//! becomes the documentation entry
//! `0x01 stack size: its required parameter declares ...`, wrapped into
//! `// - ` bullet lines.

use crate::error::{Error, PatternRole, Result};
use crate::words::identifier_words;
use crate::wrap::{DOC_PREFIXES, wrap};
use regex::Regex;
use std::collections::VecDeque;
use std::sync::LazyLock;

/// Template for declaration patterns; `{prefix}` is replaced verbatim.
///
/// Matches lines like `optCodeEnd uint8 = 0x00`, capturing the identifier
/// after the prefix and the value token.
pub const DEFAULT_DECLARATION_TEMPLATE: &str = r"^\s*{prefix}(\w+)\s*(?:\w+\s*)?=\s*([^\s]*)";

/// Regex for single-line comments that feed a documentation run.
static COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*// (.+)").expect("Invalid comment regex"));

/// A compiled declaration pattern capturing a name (group 1) and a value
/// (group 2).
#[derive(Debug, Clone)]
pub struct DeclarationPattern {
    regex: Regex,
}

/// A single declaration matched on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl DeclarationPattern {
    /// Wraps an already compiled regex.
    ///
    /// # Errors
    /// Returns `Error::MissingCaptureGroups` if the regex has fewer than two
    /// capture groups.
    pub fn new(regex: Regex) -> Result<Self> {
        // captures_len counts the implicit whole-match group
        if regex.captures_len() < 3 {
            return Err(Error::MissingCaptureGroups {
                pattern: regex.as_str().to_string(),
            });
        }
        Ok(Self { regex })
    }

    /// Builds the default pattern for identifiers starting with `prefix`.
    ///
    /// The prefix is a regex fragment and is not escaped.
    ///
    /// # Example
    /// ```
    /// use splice_blocks::extract::DeclarationPattern;
    ///
    /// let pattern = DeclarationPattern::from_prefix("optCode").unwrap();
    /// let decl = pattern.captures("\toptCodeEnd uint8 = 0x00").unwrap();
    /// assert_eq!((decl.name, decl.value), ("End", "0x00"));
    /// ```
    pub fn from_prefix(prefix: &str) -> Result<Self> {
        Self::from_template(DEFAULT_DECLARATION_TEMPLATE, prefix)
    }

    /// Builds a pattern from a template containing a `{prefix}` placeholder.
    pub fn from_template(template: &str, prefix: &str) -> Result<Self> {
        let pattern = template.replace("{prefix}", prefix);
        let regex = Regex::new(&pattern).map_err(|source| Error::InvalidPattern {
            role: PatternRole::Declaration,
            source,
        })?;
        Self::new(regex)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Matches a line (without its terminator) against the pattern.
    pub fn captures<'l>(&self, line: &'l str) -> Option<Declaration<'l>> {
        let caps = self.regex.captures(line)?;
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        Some(Declaration {
            name: group(1),
            value: group(2),
        })
    }
}

impl Declaration<'_> {
    /// Builds the logical documentation entry for this declaration.
    pub fn entry(&self, docs: &str) -> String {
        format!("{} {}: {}", self.value, identifier_words(self.name), docs)
    }
}

/// Strips a trailing `\n` or `\r\n` from a line.
pub fn line_body(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Lazily turns source lines into wrapped documentation lines.
///
/// The extractor has no notion of where a region ends: it keeps scanning
/// until `lines` is exhausted.
pub struct DocExtractor<'p, I> {
    lines: I,
    declaration: &'p DeclarationPattern,
    run: String,
    ready: VecDeque<String>,
    entries: usize,
}

impl<'p, I> DocExtractor<'p, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new(lines: I, declaration: &'p DeclarationPattern) -> Self {
        Self {
            lines,
            declaration,
            run: String::new(),
            ready: VecDeque::new(),
            entries: 0,
        }
    }

    /// Number of declarations documented so far.
    pub fn entries(&self) -> usize {
        self.entries
    }

    fn scan(&mut self, line: &str) {
        let declaration = self.declaration;
        let body = line_body(line);

        if let Some(decl) = declaration.captures(body) {
            tracing::trace!(name = decl.name, value = decl.value, "Documenting declaration");
            self.ready.extend(wrap(&decl.entry(&self.run), &DOC_PREFIXES));
            self.run.clear();
            self.entries += 1;
        } else if let Some(caps) = COMMENT_REGEX.captures(body) {
            if !self.run.is_empty() {
                self.run.push(' ');
            }
            self.run.push_str(&caps[1]);
        } else {
            self.run.clear();
        }
    }
}

impl<I> Iterator for DocExtractor<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(line) = self.ready.pop_front() {
                return Some(line);
            }
            let line = self.lines.next()?;
            self.scan(line.as_ref());
        }
    }
}

/// Collects every documentation line for `lines` in one pass.
pub fn extract_docs<I>(lines: I, declaration: &DeclarationPattern) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    DocExtractor::new(lines.into_iter(), declaration).collect()
}
