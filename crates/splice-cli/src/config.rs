//! Config file support
//!
//! ```toml
//! [docs]
//! template = '^\s*{prefix}(\w+)\s*=\s*(\S+)'
//!
//! [format]
//! command = ["gofmt", "-s"]
//! enabled = true
//! ```
//!
//! Command-line flags take precedence over the file.

use std::path::Path;

use serde::Deserialize;
use splice_fs::{ConfigStore, DEFAULT_FORMATTER, Formatter};

use crate::cli::FormatArgs;
use crate::error::{CliError, Result};

/// Config file picked up from the working directory.
pub const CONFIG_FILE: &str = "docsplice.toml";

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SpliceConfig {
    pub docs: DocsConfig,
    pub format: FormatConfig,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// Declaration pattern template with a `{prefix}` placeholder.
    pub template: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    pub command: Vec<String>,
    pub enabled: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            command: vec![DEFAULT_FORMATTER.to_string()],
            enabled: true,
        }
    }
}

impl SpliceConfig {
    /// Loads `explicit` if given, else `cwd/docsplice.toml` if present,
    /// else defaults.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let store = ConfigStore::new();
        let config = match explicit {
            Some(path) => store.load(path)?,
            None => store
                .load_if_exists(&cwd.join(CONFIG_FILE))?
                .unwrap_or_default(),
        };
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Resolves the formatter to run, if any.
    ///
    /// `--no-format` wins, then an explicit `--formatter`, then the config.
    pub fn formatter(&self, args: &FormatArgs) -> Result<Option<Formatter>> {
        if args.no_format {
            return Ok(None);
        }
        let command = if !args.formatter.is_empty() {
            &args.formatter
        } else if self.format.enabled {
            &self.format.command
        } else {
            return Ok(None);
        };

        Formatter::from_command(command)
            .map(Some)
            .ok_or_else(|| CliError::user("formatter command is empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = SpliceConfig::load(None, temp.path()).unwrap();

        assert_eq!(config, SpliceConfig::default());
        let formatter = config.formatter(&FormatArgs::default()).unwrap();
        assert_eq!(formatter, Some(Formatter::new("gofmt")));
    }

    #[test]
    fn test_loads_working_directory_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "[docs]\ntemplate = 'x{prefix}(\\w+)=(\\w+)'\n\n[format]\ncommand = [\"gofmt\", \"-s\"]\n",
        )
        .unwrap();

        let config = SpliceConfig::load(None, temp.path()).unwrap();

        assert_eq!(config.docs.template.as_deref(), Some("x{prefix}(\\w+)=(\\w+)"));
        let formatter = config.formatter(&FormatArgs::default()).unwrap();
        assert_eq!(formatter, Some(Formatter::new("gofmt").arg("-s")));
    }

    #[test]
    fn test_no_format_flag_wins() {
        let args = FormatArgs {
            formatter: vec!["cat".into()],
            no_format: true,
        };
        assert_eq!(SpliceConfig::default().formatter(&args).unwrap(), None);
    }

    #[test]
    fn test_disabled_in_config() {
        let config = SpliceConfig {
            format: FormatConfig {
                enabled: false,
                ..FormatConfig::default()
            },
            ..SpliceConfig::default()
        };
        assert_eq!(config.formatter(&FormatArgs::default()).unwrap(), None);

        let explicit = FormatArgs {
            formatter: vec!["cat".into()],
            no_format: false,
        };
        assert_eq!(
            config.formatter(&explicit).unwrap(),
            Some(Formatter::new("cat"))
        );
    }

    #[test]
    fn test_empty_command_is_user_error() {
        let config = SpliceConfig {
            format: FormatConfig {
                command: Vec::new(),
                enabled: true,
            },
            ..SpliceConfig::default()
        };
        assert!(matches!(
            config.formatter(&FormatArgs::default()),
            Err(CliError::User { .. })
        ));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[docs]\nprefix = \"x\"\n").unwrap();

        assert!(SpliceConfig::load(Some(&path), temp.path()).is_err());
    }
}
