//! The `key=value` file format.
//!
//! Pure functions, no I/O. The syntax is deliberately small:
//!
//! - blank lines are skipped;
//! - a line whose first non-blank character is `#` or `!` is a comment;
//! - the first `=` separates key from value, the key is trimmed and the value
//!   loses its leading blanks, the rest is taken verbatim to end of line;
//! - a line without `=` is a key with an empty value.
//!
//! There is no quoting, escaping, or line continuation.

/// One entry of a rendered file: key, value, and the comment lines above it.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    pub value: String,
    pub doc: Vec<String>,
}

/// Parse file content into `(key, value)` pairs in file order.
///
/// Duplicates are kept; callers applying the pairs in order get "last wins".
pub fn parse(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                return None;
            }
            let (key, value) = match trimmed.split_once('=') {
                Some((key, value)) => (key.trim_end(), value.trim_start()),
                None => (trimmed.trim_end(), ""),
            };
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Render a header comment followed by documented entries.
pub fn render(header: &str, entries: &[Entry]) -> String {
    let mut out = String::new();
    for line in header.lines() {
        push_comment(&mut out, line);
    }
    out.push('\n');

    for entry in entries {
        for line in &entry.doc {
            push_comment(&mut out, line);
        }
        out.push_str(&entry.key);
        out.push('=');
        out.push_str(&entry.value);
        out.push('\n');
        out.push('\n');
    }
    out
}

fn push_comment(out: &mut String, line: &str) {
    if line.is_empty() {
        out.push_str("#\n");
    } else {
        out.push_str("# ");
        out.push_str(line);
        out.push('\n');
    }
}
