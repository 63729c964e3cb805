//! Region rewriting.
//!
//! Regenerates the documentation listing between a target marker line and a
//! separator line, passing every other line through unchanged:
//!
//! ```text
//! // Valid option codes:          <- target marker (kept)
//! // - 0x00 end: ...              <- regenerated
//! //                              <- separator (kept)
//! ```
//!
//! The documentation is extracted from everything after the marker, up to
//! the end of input. One cursor drives that extraction while a second one
//! replays the same lines to find the separator and resume passthrough.

use crate::error::{Error, PatternRole, Result};
use crate::extract::{DeclarationPattern, DocExtractor, line_body};
use crate::tee::tee;
use regex::Regex;
use std::io::Write;

/// Compiled patterns driving a rewrite.
#[derive(Debug, Clone)]
pub struct RegionPatterns {
    /// Declarations to document.
    pub declaration: DeclarationPattern,
    /// Line opening the region; searched anywhere in the line.
    pub target: Regex,
    /// Line closing the region; searched anywhere in the line.
    pub separator: Regex,
}

impl RegionPatterns {
    pub fn new(declaration: DeclarationPattern, target: Regex, separator: Regex) -> Self {
        Self {
            declaration,
            target,
            separator,
        }
    }

    /// Compiles all three patterns using the default declaration template.
    ///
    /// # Errors
    /// Returns `Error::InvalidPattern` naming the first pattern that fails to
    /// compile.
    ///
    /// # Example
    /// ```
    /// use splice_blocks::region::RegionPatterns;
    ///
    /// let patterns = RegionPatterns::compile("optCode", "^// Valid option codes:", "^//$");
    /// assert!(patterns.is_ok());
    /// ```
    pub fn compile(prefix: &str, target: &str, separator: &str) -> Result<Self> {
        Ok(Self::new(
            DeclarationPattern::from_prefix(prefix)?,
            compile_role(target, PatternRole::Target)?,
            compile_role(separator, PatternRole::Separator)?,
        ))
    }

    /// Like [`RegionPatterns::compile`], with a custom declaration template.
    pub fn compile_with_template(
        template: &str,
        prefix: &str,
        target: &str,
        separator: &str,
    ) -> Result<Self> {
        Ok(Self::new(
            DeclarationPattern::from_template(template, prefix)?,
            compile_role(target, PatternRole::Target)?,
            compile_role(separator, PatternRole::Separator)?,
        ))
    }
}

fn compile_role(pattern: &str, role: PatternRole) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern { role, source })
}

/// Where the driver is relative to the region. Only ever advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScanPosition {
    BeforeRegion,
    InRegion,
    AfterRegion,
}

/// Statistics for one rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub marker_found: bool,
    pub separator_found: bool,
    /// Declarations documented in the region.
    pub entries: usize,
    /// Physical lines written into the region.
    pub generated_lines: usize,
    /// Old region lines dropped, including everything after the marker when
    /// no separator follows it.
    pub discarded_lines: usize,
}

/// Rewrites `lines` into `out`, regenerating the documentation region.
///
/// Lines must keep their terminators; everything outside the region is
/// written back byte for byte. Generated lines end with `\n`.
///
/// Structural problems are not errors: without a target marker the input
/// passes through unchanged, and without a separator after the marker the
/// rest of the input is dropped. Check the returned summary for either.
///
/// # Errors
/// Only write failures on `out` are reported.
pub fn rewrite<I, W>(lines: I, patterns: &RegionPatterns, out: &mut W) -> Result<RewriteSummary>
where
    I: IntoIterator<Item = String>,
    W: Write + ?Sized,
{
    let (mut docs, body) = tee(lines.into_iter());
    docs.park();

    let mut position = ScanPosition::BeforeRegion;
    let mut summary = RewriteSummary::default();

    for line in body {
        let text = line_body(&line);

        match position {
            ScanPosition::BeforeRegion => {
                out.write_all(line.as_bytes())?;
                if !patterns.target.is_match(text) {
                    continue;
                }

                tracing::debug!(marker = text, "Found target marker");
                position = ScanPosition::InRegion;
                summary.marker_found = true;

                // The docs cursor starts right after the marker and runs to
                // end of input; `body` replays those lines afterwards.
                docs.resume();
                let mut extractor = DocExtractor::new(&mut docs, &patterns.declaration);
                for doc in extractor.by_ref() {
                    writeln!(out, "{doc}")?;
                    summary.generated_lines += 1;
                }
                summary.entries = extractor.entries();
            }
            ScanPosition::InRegion => {
                if patterns.separator.is_match(text) {
                    tracing::debug!(separator = text, "Found region separator");
                    out.write_all(line.as_bytes())?;
                    position = ScanPosition::AfterRegion;
                    summary.separator_found = true;
                } else {
                    summary.discarded_lines += 1;
                }
            }
            ScanPosition::AfterRegion => out.write_all(line.as_bytes())?,
        }
    }

    match position {
        ScanPosition::BeforeRegion => {
            tracing::debug!("Target marker not found, input passed through unchanged");
        }
        ScanPosition::InRegion => {
            // TODO: decide whether a missing separator should become an error
            tracing::warn!(
                discarded = summary.discarded_lines,
                "No separator after target marker, remaining input dropped"
            );
        }
        ScanPosition::AfterRegion => {}
    }

    Ok(summary)
}

/// Rewrites in-memory text. See [`rewrite`].
///
/// # Example
/// ```
/// use splice_blocks::region::{RegionPatterns, rewrite_str};
///
/// let patterns = RegionPatterns::compile("op", "^// Ops:", "^//$").unwrap();
/// let input = "// Ops:\n// - stale\n//\nconst (\n\t// does a thing\n\topThing = 1\n)\n";
/// let (output, summary) = rewrite_str(input, &patterns).unwrap();
/// assert_eq!(
///     output,
///     "// Ops:\n// - 1 thing: does a thing\n//\nconst (\n\t// does a thing\n\topThing = 1\n)\n"
/// );
/// assert_eq!(summary.entries, 1);
/// ```
pub fn rewrite_str(input: &str, patterns: &RegionPatterns) -> Result<(String, RewriteSummary)> {
    let mut out = Vec::with_capacity(input.len());
    let summary = rewrite(split_lines(input), patterns, &mut out)?;
    Ok((String::from_utf8_lossy(&out).into_owned(), summary))
}

/// Splits text into owned lines, keeping each line's terminator.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_owned).collect()
}
