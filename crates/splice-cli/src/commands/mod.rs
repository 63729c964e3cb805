//! Command implementations for splice-cli

pub mod consts;
pub mod docs;

pub use consts::run_consts;
pub use docs::run_docs;

use std::io::Write;
use std::path::Path;

use splice_fs::{Formatter, io};

use crate::error::Result;

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Output written, or already up to date.
    Clean,
    /// `--check` found the destination out of date.
    Drift,
}

/// Reads input lines from `path`, or stdin when absent.
fn read_input(path: Option<&Path>) -> Result<Vec<String>> {
    let lines = match path {
        Some(path) => io::read_lines(path)?,
        None => io::read_lines_from(std::io::stdin().lock(), Path::new("<stdin>"))?,
    };
    Ok(lines)
}

/// Runs the formatter over `text` if one is configured.
fn format_output(text: String, formatter: Option<&Formatter>) -> Result<String> {
    match formatter {
        Some(formatter) => Ok(formatter.format(&text)?),
        None => Ok(text),
    }
}

/// Writes the final text atomically to `path`, or to stdout when absent.
fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            io::write_text(path, text)?;
            tracing::info!(path = %path.display(), "Wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Output paths get a matching temp file suffix so extension-sensitive
/// formatters behave.
fn formatter_for(formatter: Option<Formatter>, output: Option<&Path>) -> Option<Formatter> {
    let extension = output
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str());
    match (formatter, extension) {
        (Some(formatter), Some(ext)) => Some(formatter.with_suffix(format!(".{ext}"))),
        (formatter, _) => formatter,
    }
}
