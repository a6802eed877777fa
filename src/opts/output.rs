use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

const DEFAULT_PREFIX: &str = "_";

/// One recognized input together with the path its transformed output goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub input: PathBuf,
    pub output: PathBuf,
}

fn prefixed(path: &Path, prefix: &str) -> PathBuf {
    let mut name = OsString::from(prefix);
    if let Some(base) = path.file_name() {
        name.push(base);
    }
    match path.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Compute output paths for the recognized sources, in their original order.
///
/// A single source with an explicit output filename takes that filename
/// verbatim. Every other case, including a lone source without `-o`, gets the
/// prefix (configured or `_`) prepended to its base name, inside the source's
/// own directory.
pub fn derive_outputs(
    sources: &[PathBuf],
    out_filename: Option<&Path>,
    out_prefix: Option<&str>,
) -> Vec<SourceFile> {
    if sources.len() == 1 {
        if let Some(out) = out_filename {
            return vec![SourceFile {
                input: sources[0].clone(),
                output: out.to_path_buf(),
            }];
        }
    }
    let prefix = out_prefix.unwrap_or(DEFAULT_PREFIX);
    sources
        .iter()
        .map(|src| SourceFile {
            input: src.clone(),
            output: prefixed(src, prefix),
        })
        .collect()
}
