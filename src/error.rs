use std::{io, path::PathBuf};

use thiserror::Error;

/// Terminal errors of the command-line front-end. All of them abort the run;
/// the exit-code mapping lives in `main`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown flag, missing flag argument, or malformed option syntax.
    /// Carries the rendered error together with the usage text.
    #[error("{0}")]
    Usage(String),

    /// No recognized source files and no wrapper remainder to relay.
    #[error("missing file arguments")]
    MissingInput,

    /// A recognized source file or the configured spec file cannot be opened.
    #[error("cannot open file for reading: {}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
