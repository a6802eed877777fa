use std::{fs::File, path::Path};

use crate::{
    error::CliError,
    opts::{classify::ClassifiedArgs, resolve::ToolFlags},
};

fn probe_readable(path: &Path) -> Result<(), CliError> {
    File::open(path)
        .map(drop)
        .map_err(|source| CliError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Enforce the input preconditions, in order: a run with no sources is only
/// valid as a pure relay of a non-empty wrapper remainder; every recognized
/// source must open for reading; a configured spec file must open for reading.
///
/// Returns whether tuning is disabled, i.e. the run only relays the wrapper
/// command and the transformation stage is skipped entirely.
pub fn validate(flags: &ToolFlags, classified: &ClassifiedArgs) -> Result<bool, CliError> {
    let tuning_disabled = if classified.sources.is_empty() {
        if classified.wrapper_args.is_empty() {
            return Err(CliError::MissingInput);
        }
        true
    } else {
        false
    };

    for source in &classified.sources {
        probe_readable(source)?;
    }
    if let Some(spec) = &flags.spec_filename {
        probe_readable(spec)?;
    }

    Ok(tuning_disabled)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::opts::classify::ClassifyState;

    fn classified(sources: Vec<PathBuf>, wrapper_args: Vec<String>) -> ClassifiedArgs {
        let state = if wrapper_args.is_empty() {
            ClassifyState::CollectingToolFlags
        } else {
            ClassifyState::RelayingWrapperArgs
        };
        ClassifiedArgs {
            tool_flags: vec![],
            wrapper_args,
            sources,
            state,
        }
    }

    #[test]
    fn no_sources_and_no_wrapper_is_missing_input() {
        let result = validate(&ToolFlags::default(), &classified(vec![], vec![]));
        assert!(matches!(result, Err(CliError::MissingInput)));
    }

    #[test]
    fn wrapper_remainder_alone_disables_tuning() {
        let args = classified(vec![], vec!["gcc".into(), "-O2".into()]);
        let tuning_disabled = validate(&ToolFlags::default(), &args).unwrap();
        assert!(tuning_disabled);
    }

    #[test]
    fn readable_source_passes() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("ok.c");
        std::fs::write(&src, "int main() { return 0; }\n").unwrap();

        let tuning_disabled = validate(&ToolFlags::default(), &classified(vec![src], vec![])).unwrap();
        assert!(!tuning_disabled);
    }

    #[test]
    fn unreadable_source_is_fatal() {
        let args = classified(vec![PathBuf::from("no_such_file.c")], vec![]);
        let result = validate(&ToolFlags::default(), &args);
        assert!(matches!(
            result,
            Err(CliError::UnreadableFile { path, .. }) if path == PathBuf::from("no_such_file.c")
        ));
    }

    #[test]
    fn unreadable_spec_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("ok.c");
        std::fs::write(&src, "").unwrap();

        let flags = ToolFlags {
            spec_filename: Some(PathBuf::from("no_such.spec")),
            ..ToolFlags::default()
        };
        let result = validate(&flags, &classified(vec![src], vec![]));
        assert!(matches!(result, Err(CliError::UnreadableFile { .. })));
    }
}
