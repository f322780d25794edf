//! Argument vector helpers.
//!
//! An invocation is an ordered list of string tokens, program first. These
//! helpers only render argument vectors for humans; what is spawned is always
//! the vector itself, never a re-parsed string.

/// Render an argument vector as a single shell-like line.
///
/// Tokens that are empty or contain whitespace or quotes are wrapped in single
/// quotes, with embedded single quotes escaped the POSIX way.
pub fn display(argv: &[String]) -> String {
    argv.iter()
        .map(|token| quote(token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(token: &str) -> String {
    let needs_quotes = token.is_empty()
        || token
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '"' || c == '\\');
    if needs_quotes {
        format!("'{}'", token.replace('\'', "'\\''"))
    } else {
        token.to_string()
    }
}
