//! Text format grammar
//!
//! The settings file is line-oriented UTF-8:
//!
//! ```text
//! # Saved by my-app.
//!
//!
//! title My Editor
//!
//! #### window
//! # Height in pixels.
//! height 720
//! width 1280
//! ```
//!
//! A single space separates key and value; only the first occurrence counts,
//! so values may contain spaces but keys must not. Lines whose trimmed
//! content starts with `#` are comments and are skipped on load. That
//! covers description blocks, `####` category headers and per-key comments,
//! which are write-only metadata.

/// Separates key and value on an entry line.
pub(crate) const DELIMITER: char = ' ';

/// Marks a line as a comment once leading whitespace is trimmed.
pub(crate) const COMMENT: char = '#';

/// Prefix of a category header line on save.
pub(crate) const CATEGORY_HEADER: &str = "####";

/// Whitespace recognized by the format. Deliberately narrower than Unicode
/// whitespace: space, tab, line feed, carriage return, vertical tab and
/// form feed.
const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0B', '\x0C'];

pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(WHITESPACE)
}

pub(crate) fn trim_start(s: &str) -> &str {
    s.trim_start_matches(WHITESPACE)
}

pub(crate) fn trim_end(s: &str) -> &str {
    s.trim_end_matches(WHITESPACE)
}

pub(crate) fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT)
}

/// Split a trimmed entry line at the first delimiter.
///
/// Returns `None` when the line has no delimiter, which is a structural
/// error in the grammar.
pub(crate) fn split_entry(line: &str) -> Option<(&str, &str)> {
    let at = line.find(DELIMITER)?;
    Some((trim_end(&line[..at]), trim_start(&line[at + 1..])))
}

/// Render free text as a comment block: every input line (split on line
/// feed) becomes `"# "` + line + `"\n"`.
pub(crate) fn comment_block(text: &str) -> String {
    let mut block = String::new();
    for line in text.split('\n') {
        block.push(COMMENT);
        block.push(' ');
        block.push_str(line);
        block.push('\n');
    }
    block
}

// =============================================================================
// Tests
// =============================================================================
