use std::path::PathBuf;

/// Extensions marking a positional argument as an annotated source file,
/// matched case-insensitively against the substring after the last `.`.
const SOURCE_EXTENSIONS: [&str; 10] = [
    "c", "cpp", "cxx", "h", "hpp", "hxx", "f", "f90", "f95", "f03",
];

/// State of the classifier scan. The transition is one-directional: once a
/// token lands in the wrapper stream, every later non-source token does too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyState {
    CollectingToolFlags,
    RelayingWrapperArgs,
}

/// The argument vector partitioned into the tool's own flags, the wrapper
/// remainder destined for the wrapped command, and the recognized sources
/// (ordered, de-duplicated, in command-line order).
#[derive(Debug)]
pub struct ClassifiedArgs {
    pub tool_flags: Vec<String>,
    pub wrapper_args: Vec<String>,
    pub sources: Vec<PathBuf>,
    pub state: ClassifyState,
}

impl ClassifiedArgs {
    pub fn wrapper_active(&self) -> bool {
        self.state == ClassifyState::RelayingWrapperArgs
    }
}

fn is_source(token: &str) -> bool {
    match token.rsplit_once('.') {
        Some((_, ext)) => SOURCE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Tool flags whose argument arrives as the following token. That token must
/// be swallowed into the flag stream, or a value like `out.c` would be
/// mistaken for a source file.
fn expects_value(flag: &str) -> bool {
    matches!(
        flag,
        "-c" | "-o" | "-p" | "-s" | "--pre-command" | "--output" | "--output-prefix" | "--spec"
    )
}

/// Partition the raw argument vector (program name already stripped) in a
/// single left-to-right scan.
///
/// While collecting, leading-dash tokens are tool flags. The first token that
/// is neither a flag nor a recognizable source switches the scan to wrapper
/// relay, after which every token belongs to the wrapped command, except that
/// source files are still captured wherever they appear. This supports
/// invocations like `tunecc <tool-flags> <compiler> <compiler-flags> source.c`.
pub fn classify(raw: &[String]) -> ClassifiedArgs {
    let mut classified = ClassifiedArgs {
        tool_flags: vec![],
        wrapper_args: vec![],
        sources: vec![],
        state: ClassifyState::CollectingToolFlags,
    };

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        if arg.starts_with('-') {
            match classified.state {
                ClassifyState::CollectingToolFlags => {
                    classified.tool_flags.push(arg.clone());
                    if expects_value(arg) {
                        if let Some(value) = iter.next() {
                            classified.tool_flags.push(value.clone());
                        }
                    }
                }
                ClassifyState::RelayingWrapperArgs => classified.wrapper_args.push(arg.clone()),
            }
            continue;
        }
        if is_source(arg) {
            let path = PathBuf::from(arg);
            if !classified.sources.contains(&path) {
                classified.sources.push(path);
            }
            continue;
        }
        classified.state = ClassifyState::RelayingWrapperArgs;
        classified.wrapper_args.push(arg.clone());
    }

    classified
}
