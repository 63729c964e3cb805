//! Consts command implementation
//!
//! Turns an op table into sequentially numbered constants.

use splice_blocks::consts::ConstTable;

use super::{format_output, formatter_for, read_input, write_output};
use crate::cli::ConstsArgs;
use crate::config::SpliceConfig;
use crate::error::Result;

/// Run the consts command
pub fn run_consts(args: &ConstsArgs, config: &SpliceConfig) -> Result<()> {
    let table = ConstTable {
        start_marker: args.start_marker.clone(),
        prefix: args.const_prefix.clone(),
        type_name: args.type_name.clone(),
        package: args.package.clone().filter(|p| !p.is_empty()),
    };
    let formatter = formatter_for(config.formatter(&args.format)?, args.output.as_deref());

    let lines = read_input(args.input.as_deref())?;
    let mut text = table.generate(&lines).join("\n");
    text.push('\n');

    let output = format_output(text, formatter.as_ref())?;
    write_output(args.output.as_deref(), &output)
}
