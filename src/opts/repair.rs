/// Reconstruct `-D<name>=<value>` wrapper arguments whose quoting was eaten
/// by the invoking shell, so the stream can be re-issued to a shell or
/// subprocess safely.
///
/// A define whose value is still fully double-quoted is re-wrapped in single
/// quotes. A bare value is taken as the first fragment of a value the shell
/// split apart: the following tokens are consumed up to the next leading-dash
/// token, joined with spaces, and the whole value comes out `'"…"'`-wrapped.
/// Every other token passes through unchanged, in order.
pub fn repair_defines(wrapper_args: &[String]) -> Vec<String> {
    let mut repaired = Vec::with_capacity(wrapper_args.len());
    let mut iter = wrapper_args.iter().peekable();

    while let Some(arg) = iter.next() {
        if !arg.starts_with("-D") {
            repaired.push(arg.clone());
            continue;
        }
        let Some((key, val)) = arg.split_once('=') else {
            repaired.push(arg.clone());
            continue;
        };
        if val.len() >= 2 && val.starts_with('"') && val.ends_with('"') {
            repaired.push(format!("{key}='{val}'"));
            continue;
        }
        let mut value = String::from(val);
        while let Some(fragment) = iter.next_if(|t| !t.starts_with('-')) {
            value.push(' ');
            value.push_str(fragment);
        }
        repaired.push(format!("{key}='\"{value}\"'"));
    }

    repaired
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn split_value_is_rejoined_up_to_next_flag() {
        let repaired = repair_defines(&args(&["-DFOO=bar", "baz", "-O2"]));
        assert_eq!(repaired, ["-DFOO='\"bar baz\"'", "-O2"]);
    }

    #[test]
    fn split_value_runs_to_end_of_stream() {
        let repaired = repair_defines(&args(&["-DX=a", "b", "c"]));
        assert_eq!(repaired, ["-DX='\"a b c\"'"]);
    }

    #[test]
    fn surviving_double_quotes_get_single_quote_wrapped() {
        let repaired = repair_defines(&args(&["-DMSG=\"hi there\""]));
        assert_eq!(repaired, ["-DMSG='\"hi there\"'"]);
    }

    #[test]
    fn single_fragment_value_still_gets_quoted() {
        let repaired = repair_defines(&args(&["-DN=8", "-c"]));
        assert_eq!(repaired, ["-DN='\"8\"'", "-c"]);
    }

    #[test]
    fn define_without_equals_passes_through() {
        let repaired = repair_defines(&args(&["-DNDEBUG", "x"]));
        assert_eq!(repaired, ["-DNDEBUG", "x"]);
    }

    #[test]
    fn non_define_tokens_are_untouched() {
        let stream = args(&["gcc", "-std=c99", "-O2", "main.o"]);
        assert_eq!(repair_defines(&stream), stream);
    }
}
