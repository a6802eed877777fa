/// Extra tool flags: the variable's whitespace-separated tokens are appended
/// to the tool-flag stream.
pub const FLAGS_VAR: &str = "TUNECC_FLAGS";

/// Debug signal: mere presence enables diagnostic output, nothing else.
pub const DEBUG_VAR: &str = "TUNECC_DEBUG";

/// Append extra tool flags from the environment. The tokens are not validated
/// here; malformed ones fail later in the option grammar.
pub fn augment_from_env(tool_flags: &mut Vec<String>) {
    if let Ok(extra) = std::env::var(FLAGS_VAR) {
        tool_flags.extend(extra.split_whitespace().map(str::to_owned));
    }
}
