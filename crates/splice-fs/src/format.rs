//! External source formatter invocation.
//!
//! The rewritten text is handed to a formatter such as `gofmt` through a
//! temporary file; the formatter's stdout becomes the final content.

use crate::{Error, Result};
use std::io::Write;
use std::process::Command;

/// Formatter used when none is configured.
pub const DEFAULT_FORMATTER: &str = "gofmt";

/// An external formatter command.
///
/// The command is run as `program args... <file>` and must print the
/// formatted source on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    program: String,
    args: Vec<String>,
    suffix: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_FORMATTER)
    }
}

impl Formatter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            suffix: ".go".to_string(),
        }
    }

    /// Builds a formatter from a command line split into words.
    ///
    /// Returns `None` for an empty command.
    pub fn from_command<S: AsRef<str>>(command: &[S]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        let mut formatter = Self::new(program.as_ref());
        formatter.args = args.iter().map(|a| a.as_ref().to_string()).collect();
        Some(formatter)
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Sets the temp file suffix, for formatters that look at extensions.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Formats `text`, returning the formatter's stdout.
    ///
    /// # Errors
    /// `Error::FormatterSpawn` if the program cannot be started,
    /// `Error::FormatterFailed` if it exits unsuccessfully.
    pub fn format(&self, text: &str) -> Result<String> {
        let mut temp = tempfile::Builder::new()
            .prefix("docsplice-")
            .suffix(&self.suffix)
            .tempfile()
            .map_err(|e| Error::io(std::env::temp_dir(), e))?;
        temp.write_all(text.as_bytes())
            .and_then(|()| temp.flush())
            .map_err(|e| Error::io(temp.path(), e))?;

        tracing::info!(program = %self.program, "Running formatter");
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(temp.path())
            .output()
            .map_err(|source| Error::FormatterSpawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(Error::FormatterFailed {
                program: self.program.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command() {
        let formatter = Formatter::from_command(&["gofmt", "-s"]).unwrap();
        assert_eq!(formatter, Formatter::new("gofmt").arg("-s"));
        assert!(Formatter::from_command::<&str>(&[]).is_none());
    }

    #[test]
    fn test_default_is_gofmt() {
        assert_eq!(Formatter::default().program(), DEFAULT_FORMATTER);
    }

    #[cfg(unix)]
    #[test]
    fn test_cat_is_identity() {
        let formatted = Formatter::new("cat").format("package x\n").unwrap();
        assert_eq!(formatted, "package x\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_an_error() {
        let err = Formatter::new("false").format("package x\n").unwrap_err();
        assert!(matches!(err, Error::FormatterFailed { code: 1, .. }));
    }

    #[test]
    fn test_missing_program() {
        let err = Formatter::new("docsplice-no-such-formatter")
            .format("")
            .unwrap_err();
        assert!(matches!(err, Error::FormatterSpawn { .. }));
    }
}
