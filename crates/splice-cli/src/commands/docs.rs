//! Docs command implementation
//!
//! Regenerates the documentation listing between a target marker and a
//! separator line, optionally checking for drift instead of writing.

use std::path::Path;

use colored::Colorize;
use similar::TextDiff;
use splice_blocks::extract::DEFAULT_DECLARATION_TEMPLATE;
use splice_blocks::region::{RegionPatterns, rewrite};
use splice_fs::io;

use super::{Status, format_output, formatter_for, read_input, write_output};
use crate::cli::DocsArgs;
use crate::config::SpliceConfig;
use crate::error::Result;

/// Compiles the patterns given on the command line, ahead of reading the
/// config file. A template coming from the config is checked by `run_docs`.
pub fn check_patterns(args: &DocsArgs) -> Result<()> {
    let template = args.template.as_deref().unwrap_or(DEFAULT_DECLARATION_TEMPLATE);
    RegionPatterns::compile_with_template(template, &args.prefix, &args.target, &args.separator)?;
    Ok(())
}

/// Run the docs command
pub fn run_docs(args: &DocsArgs, config: &SpliceConfig) -> Result<Status> {
    let template = args
        .template
        .as_deref()
        .or(config.docs.template.as_deref())
        .unwrap_or(DEFAULT_DECLARATION_TEMPLATE);

    // Bad patterns must fail before any file is touched
    let patterns =
        RegionPatterns::compile_with_template(template, &args.prefix, &args.target, &args.separator)?;
    let formatter = formatter_for(config.formatter(&args.format)?, args.output.as_deref());

    let lines = read_input(args.input.as_deref())?;
    let original = lines.concat();

    let mut buffer = Vec::with_capacity(original.len());
    let summary = rewrite(lines, &patterns, &mut buffer)?;
    tracing::info!(
        entries = summary.entries,
        generated = summary.generated_lines,
        discarded = summary.discarded_lines,
        "Rewrote documentation region"
    );
    if !summary.marker_found {
        tracing::debug!(pattern = %args.target, "No line matched the target pattern");
    }

    let rewritten = String::from_utf8_lossy(&buffer).into_owned();
    let output = format_output(rewritten, formatter.as_ref())?;

    if args.check {
        let current = match args.output.as_deref() {
            Some(path) => read_current(path)?,
            None => original,
        };
        return Ok(report_drift(&current, &output, args.output.as_deref()));
    }

    write_output(args.output.as_deref(), &output)?;
    Ok(Status::Clean)
}

fn read_current(path: &Path) -> Result<String> {
    if path.exists() {
        Ok(io::read_text(path)?)
    } else {
        Ok(String::new())
    }
}

/// Prints a unified diff when `current` differs from `expected`.
fn report_drift(current: &str, expected: &str, path: Option<&Path>) -> Status {
    let name = path.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());

    if current == expected {
        eprintln!("{} {} is up to date", "OK".green().bold(), name);
        return Status::Clean;
    }

    let diff = TextDiff::from_lines(current, expected);
    print!(
        "{}",
        diff.unified_diff()
            .context_radius(3)
            .header(&name, &format!("{name} (regenerated)"))
    );
    eprintln!("{} {} is out of date", "DRIFT".yellow().bold(), name);
    Status::Drift
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FormatArgs;
    use splice_test_utils::SourceTree;
    use splice_test_utils::samples::{
        OPTIONS_EXPECTED, OPTIONS_PREFIX, OPTIONS_SEPARATOR, OPTIONS_SOURCE, OPTIONS_TARGET,
    };

    fn docs_args(tree: &SourceTree, check: bool) -> DocsArgs {
        DocsArgs {
            input: Some(tree.path("api.go")),
            output: Some(tree.path("api.go")),
            template: None,
            check,
            format: FormatArgs {
                formatter: Vec::new(),
                no_format: true,
            },
            prefix: OPTIONS_PREFIX.to_string(),
            target: OPTIONS_TARGET.to_string(),
            separator: OPTIONS_SEPARATOR.to_string(),
        }
    }

    #[test]
    fn test_rewrites_in_place() {
        let tree = SourceTree::new().with_file("api.go", OPTIONS_SOURCE);

        let status = run_docs(&docs_args(&tree, false), &SpliceConfig::default()).unwrap();

        assert_eq!(status, Status::Clean);
        assert_eq!(tree.read("api.go"), OPTIONS_EXPECTED);
    }

    #[test]
    fn test_check_reports_drift_without_writing() {
        let tree = SourceTree::new().with_file("api.go", OPTIONS_SOURCE);

        let status = run_docs(&docs_args(&tree, true), &SpliceConfig::default()).unwrap();

        assert_eq!(status, Status::Drift);
        assert_eq!(tree.read("api.go"), OPTIONS_SOURCE);
    }

    #[test]
    fn test_check_clean_after_rewrite() {
        let tree = SourceTree::new().with_file("api.go", OPTIONS_EXPECTED);

        let status = run_docs(&docs_args(&tree, true), &SpliceConfig::default()).unwrap();

        assert_eq!(status, Status::Clean);
    }

    #[test]
    fn test_invalid_pattern_touches_nothing() {
        let tree = SourceTree::new();
        let mut args = docs_args(&tree, false);
        args.separator = "(".to_string();

        let err = run_docs(&args, &SpliceConfig::default()).unwrap_err();

        assert!(err.to_string().contains("separator"));
        tree.assert_file_not_exists("api.go");
    }

    #[test]
    fn test_check_patterns_rejects_bad_template_flag() {
        let tree = SourceTree::new();
        let mut args = docs_args(&tree, false);
        args.template = Some(r"^\s*{prefix}(\w+)".to_string());

        let err = check_patterns(&args).unwrap_err();

        assert!(err.to_string().contains("must capture a name and a value"));
    }

    const OPS_SOURCE: &str = "\
package vm

// Ops:
//

const (
\t// Pushes a value.
\topPush = 0x01
\t// Pops a value.
\topPop = 0x02
)
";

    fn ops_args(tree: &SourceTree, template: Option<&str>) -> DocsArgs {
        DocsArgs {
            input: Some(tree.path("ops.go")),
            output: Some(tree.path("ops.go")),
            template: template.map(str::to_string),
            prefix: "op".to_string(),
            target: "^// Ops:".to_string(),
            separator: "^//$".to_string(),
            ..docs_args(tree, false)
        }
    }

    #[test]
    fn test_default_template_documents_every_op() {
        let tree = SourceTree::new().with_file("ops.go", OPS_SOURCE);

        run_docs(&ops_args(&tree, None), &SpliceConfig::default()).unwrap();

        tree.assert_file_contains("ops.go", "// Ops:\n// - 0x01 push: Pushes a value.\n");
        tree.assert_file_contains("ops.go", "// - 0x02 pop: Pops a value.\n//\n");
    }

    #[test]
    fn test_config_template_replaces_default() {
        let tree = SourceTree::new()
            .with_file("ops.go", OPS_SOURCE)
            .with_file(
                "docsplice.toml",
                "[docs]\ntemplate = '^\\s*{prefix}(Push)\\s*=\\s*(\\S+)'\n",
            );
        let config = SpliceConfig::load(None, tree.root()).unwrap();

        run_docs(&ops_args(&tree, None), &config).unwrap();

        tree.assert_file_contains("ops.go", "// Ops:\n// - 0x01 push: Pushes a value.\n//\n");
        assert!(!tree.read("ops.go").contains("pop:"));
    }

    #[test]
    fn test_template_flag_overrides_config() {
        let tree = SourceTree::new()
            .with_file("ops.go", OPS_SOURCE)
            .with_file(
                "docsplice.toml",
                "[docs]\ntemplate = '^\\s*{prefix}(Push)\\s*=\\s*(\\S+)'\n",
            );
        let config = SpliceConfig::load(None, tree.root()).unwrap();
        let args = ops_args(&tree, Some(r"^\s*{prefix}(Pop)\s*=\s*(\S+)"));

        run_docs(&args, &config).unwrap();

        tree.assert_file_contains("ops.go", "// Ops:\n// - 0x02 pop: Pops a value.\n//\n");
        assert!(!tree.read("ops.go").contains("push:"));
    }
}
