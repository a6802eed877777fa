use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::error::CliError;

/// The tool's own option grammar, applied to the classified tool-flag stream
/// (never to wrapper arguments or source positionals).
#[derive(Debug, Default, Parser)]
#[command(
    name = "tunecc",
    about = "Compile shell for annotation-driven source tuning"
)]
pub struct ToolFlags {
    /// Command string with which to prefix the execution of the tuned code,
    /// e.g. tauex
    #[arg(short = 'c', long = "pre-command", value_name = "STRING")]
    pub pre_command: Option<String>,

    /// Remove annotations from the output
    #[arg(short = 'e', long = "erase-annot")]
    pub erase_annot: bool,

    /// Do not remove intermediate generated files
    #[arg(short = 'k', long = "keep-temps")]
    pub keep_temps: bool,

    /// Place the output in FILE (only valid when processing a single file)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub out_filename: Option<PathBuf>,

    /// Derive output filenames by prepending STRING to the input filename
    /// (default is `_`, e.g. f.c becomes _f.c)
    #[arg(short = 'p', long = "output-prefix", value_name = "STRING")]
    pub out_prefix: Option<String>,

    /// After compiling the tuned source, rename the object files to match
    /// those a compile of the original source would produce
    #[arg(short = 'r', long = "rename-objects")]
    pub rename_objects: bool,

    /// Read tuning specifications from FILE
    #[arg(short = 's', long = "spec", value_name = "FILE")]
    pub spec_filename: Option<PathBuf>,

    /// Verbosely show details of the resolved run
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Outcome of parsing the tool-flag stream: either the parsed record, or the
/// rendered help text when `-h`/`--help` short-circuits the run.
pub enum Resolution {
    Flags(ToolFlags),
    Help(String),
}

/// Parse the tool-flag stream against the option grammar. Unknown flags and
/// missing flag arguments become usage errors carrying the rendered
/// error-plus-usage text. A help flag wins over everything else in the
/// stream, including tokens the grammar would reject.
pub fn parse_tool_flags(tool_flags: &[String]) -> Result<Resolution, CliError> {
    if tool_flags.iter().any(|f| f == "-h" || f == "--help") {
        return Ok(Resolution::Help(ToolFlags::command().render_help().to_string()));
    }
    let argv = std::iter::once("tunecc").chain(tool_flags.iter().map(String::as_str));
    match ToolFlags::try_parse_from(argv) {
        Ok(flags) => Ok(Resolution::Flags(flags)),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp => Ok(Resolution::Help(err.to_string())),
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

/// One-line usage string, shown alongside missing-input errors.
pub fn usage() -> String {
    ToolFlags::command().render_usage().to_string()
}
