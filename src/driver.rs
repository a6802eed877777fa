use std::fmt::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::{
    error::CliError,
    opts::{
        classify::classify,
        env::augment_from_env,
        output::{SourceFile, derive_outputs},
        repair::repair_defines,
        resolve::{Resolution, parse_tool_flags},
        validate::validate,
    },
};

/// The fully resolved options record handed to the transformation stage.
/// Nothing here is mutated after `run` returns.
#[derive(Debug)]
pub struct ResolvedOptions {
    pub pre_command: Option<String>,
    pub erase_annot: bool,
    pub keep_temps: bool,
    pub out_filename: Option<PathBuf>,
    pub out_prefix: Option<String>,
    pub rename_objects: bool,
    pub spec_filename: Option<PathBuf>,
    pub verbose: bool,
    /// True when no sources were recognized and the run only relays the
    /// wrapper command.
    pub tuning_disabled: bool,
    /// Recognized sources paired with their derived output paths, in
    /// command-line order.
    pub sources: Vec<SourceFile>,
    /// Wrapper remainder after define repair, ready for re-issuance.
    pub wrapper_args: Vec<String>,
}

impl ResolvedOptions {
    /// Human-readable summary of the resolved run, printed under `--verbose`.
    pub fn render_plan(&self) -> String {
        let mut plan = String::new();
        for file in &self.sources {
            let _ = writeln!(plan, "{} -> {}", file.input.display(), file.output.display());
        }
        if !self.wrapper_args.is_empty() {
            let _ = writeln!(plan, "relay: {}", self.wrapper_args.join(" "));
        }
        if self.tuning_disabled {
            plan.push_str("tuning disabled: pass-through run\n");
        }
        if let Some(cmd) = &self.pre_command {
            let _ = writeln!(plan, "pre-command: {cmd}");
        }
        if let Some(spec) = &self.spec_filename {
            let _ = writeln!(plan, "tuning spec: {}", spec.display());
        }
        let mut modes = vec![];
        if self.erase_annot {
            modes.push("erase-annot");
        }
        if self.keep_temps {
            modes.push("keep-temps");
        }
        if self.rename_objects {
            modes.push("rename-objects");
        }
        if !modes.is_empty() {
            let _ = writeln!(plan, "modes: {}", modes.join(" "));
        }
        plan
    }
}

/// Result of a successful front-end run.
pub enum Outcome {
    /// `-h`/`--help` was present: print the text and stop with success.
    Help(String),
    Options(ResolvedOptions),
}

/// Run the front-end pipeline over the raw argument vector (program name
/// already stripped): classify, augment from the environment, repair wrapper
/// defines, parse the tool flags, validate, derive output paths.
pub fn run(raw: &[String]) -> Result<Outcome, CliError> {
    let mut classified = classify(raw);
    augment_from_env(&mut classified.tool_flags);
    debug!(
        tool_flags = ?classified.tool_flags,
        wrapper_args = ?classified.wrapper_args,
        sources = ?classified.sources,
        wrapper_active = classified.wrapper_active(),
        "classified argument vector"
    );

    let wrapper_args = repair_defines(&classified.wrapper_args);
    if wrapper_args != classified.wrapper_args {
        debug!(?wrapper_args, "repaired wrapper defines");
    }

    let flags = match parse_tool_flags(&classified.tool_flags)? {
        Resolution::Help(text) => return Ok(Outcome::Help(text)),
        Resolution::Flags(flags) => flags,
    };

    let tuning_disabled = validate(&flags, &classified)?;

    let sources = derive_outputs(
        &classified.sources,
        flags.out_filename.as_deref(),
        flags.out_prefix.as_deref(),
    );
    debug!(?sources, "derived output paths");

    Ok(Outcome::Options(ResolvedOptions {
        pre_command: flags.pre_command,
        erase_annot: flags.erase_annot,
        keep_temps: flags.keep_temps,
        out_filename: flags.out_filename,
        out_prefix: flags.out_prefix,
        rename_objects: flags.rename_objects,
        spec_filename: flags.spec_filename,
        verbose: flags.verbose,
        tuning_disabled,
        sources,
        wrapper_args,
    }))
}
