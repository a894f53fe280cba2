//! CLI utility functions.

/// Replace every `${NAME}` in `input` with the value of the environment
/// variable `NAME`, or with nothing when it is unset.
///
/// A `${` without a closing brace is kept as written.
pub fn expand_env_vars(input: &str) -> String {
    let mut expanded = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find("${") {
        let (before, tail) = rest.split_at(open);
        expanded.push_str(before);
        let Some(close) = tail.find('}') else {
            rest = tail;
            break;
        };
        if let Ok(value) = std::env::var(&tail[2..close]) {
            expanded.push_str(&value);
        }
        rest = &tail[close + 1..];
    }

    expanded.push_str(rest);
    expanded
}
