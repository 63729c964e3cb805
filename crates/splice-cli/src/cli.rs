//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use splice_blocks::consts::DEFAULT_START_MARKER;

/// docsplice - Regenerate documentation listings and constant tables in source files
#[derive(Parser, Debug)]
#[command(name = "docsplice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./docsplice.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Regenerate a documentation listing from annotated declarations
    ///
    /// Every `PREFIX<Name> = <value>` declaration after the TARGET line is
    /// documented with the `// ` comments directly above it. The listing
    /// replaces whatever sits between TARGET and the next SEPARATOR line.
    ///
    /// Examples:
    ///   docsplice docs -i api.go -o api.go optCode '^// Valid option codes:' '^//$'
    ///   docsplice docs -i api.go -o api.go --check optCode '^// Valid option codes:' '^//$'
    Docs(DocsArgs),

    /// Generate sequential constants from an op table
    ///
    /// Examples:
    ///   docsplice consts -i ops.go -o op_codes.go
    ///   GOPACKAGE=stackvm docsplice consts -i ops.go
    Consts(ConstsArgs),
}

/// Options shared by commands that post-process their output
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatArgs {
    /// Formatter command, one word per flag (default: gofmt)
    #[arg(long = "formatter", value_name = "WORD", allow_hyphen_values = true)]
    pub formatter: Vec<String>,

    /// Write output without running the formatter
    #[arg(long)]
    pub no_format: bool,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DocsArgs {
    /// Input file (stdin if omitted)
    #[arg(short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (stdout if omitted); may be the input file
    #[arg(short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Declaration pattern template; `{prefix}` is replaced by PREFIX
    #[arg(long)]
    pub template: Option<String>,

    /// Report whether the output is stale instead of writing it
    #[arg(long)]
    pub check: bool,

    #[command(flatten)]
    pub format: FormatArgs,

    /// Identifier prefix of declarations to document (a regex fragment)
    pub prefix: String,

    /// Pattern matching the line that opens the listing
    pub target: String,

    /// Pattern matching the line that closes the listing
    pub separator: String,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ConstsArgs {
    /// Input file (stdin if omitted)
    #[arg(short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Package clause to emit first
    #[arg(long, env = "GOPACKAGE")]
    pub package: Option<String>,

    /// Line prefix that opens the op table
    #[arg(long, default_value = DEFAULT_START_MARKER)]
    pub start_marker: String,

    /// Prefix of each generated constant name
    #[arg(long, default_value = "opCode")]
    pub const_prefix: String,

    /// Type conversion wrapped around each code
    #[arg(long, default_value = "opCode")]
    pub type_name: String,

    #[command(flatten)]
    pub format: FormatArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_docs() {
        let cli = Cli::try_parse_from([
            "docsplice",
            "docs",
            "-i",
            "api.go",
            "-o",
            "api.go",
            "optCode",
            "^// Valid option codes:",
            "^//$",
        ])
        .unwrap();

        let Commands::Docs(args) = cli.command else {
            panic!("expected docs command");
        };
        assert_eq!(args.input, Some(PathBuf::from("api.go")));
        assert_eq!(args.prefix, "optCode");
        assert_eq!(args.separator, "^//$");
        assert!(!args.check);
    }

    #[test]
    fn test_parse_formatter_words() {
        let cli = Cli::try_parse_from([
            "docsplice", "docs", "--formatter", "gofmt", "--formatter", "-s", "p", "t", "s",
        ])
        .unwrap();

        let Commands::Docs(args) = cli.command else {
            panic!("expected docs command");
        };
        assert_eq!(args.format.formatter, ["gofmt", "-s"]);
    }

    #[test]
    fn test_parse_consts_defaults() {
        let cli = Cli::try_parse_from(["docsplice", "consts", "--package", "vm"]).unwrap();

        let Commands::Consts(args) = cli.command else {
            panic!("expected consts command");
        };
        assert_eq!(args.start_marker, DEFAULT_START_MARKER);
        assert_eq!(args.const_prefix, "opCode");
        assert_eq!(args.package.as_deref(), Some("vm"));
    }

    #[test]
    fn test_docs_requires_patterns() {
        assert!(Cli::try_parse_from(["docsplice", "docs", "optCode"]).is_err());
    }
}
