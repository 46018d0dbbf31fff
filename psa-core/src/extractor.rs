//! Symbol extraction from a configuration header.
//!
//! A line contributes a symbol when it starts with `#define`, followed by
//! zero or more spaces, followed by `PSA_WANT_` and at least one word
//! character. Everything after the name is ignored. Order and duplicates are
//! kept exactly as found. `\n`, `\r\n` and a lone `\r` all end a line.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ExtractError;
use crate::types::Symbol;

const DEFINE_PATTERN: &str = r"^#define *(PSA_WANT_\w+)";

fn define_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DEFINE_PATTERN).expect("static pattern is valid"))
}

/// Scan `text` line by line and collect every `PSA_WANT_*` define.
pub fn extract_symbols(text: &str) -> Vec<Symbol> {
    let re = define_regex();
    text.split(['\n', '\r'])
        .filter_map(|line| re.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| Symbol::from(m.as_str()))
        .collect()
}

/// Read the header at `path` and extract its symbols.
///
/// Missing, unreadable, or non-UTF-8 input is an error; nothing is
/// extracted from a partial read.
pub fn extract_from_file(path: &Path) -> Result<Vec<Symbol>, ExtractError> {
    let text = std::fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_symbols(&text))
}
