//! Splitting raw text into lines and classifying each line.

/// Shape of one line of config text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    /// Starts with `#` once trimmed.
    Comment(&'a str),
    /// `key = value`, both sides trimmed.
    Assignment { key: &'a str, value: &'a str },
    /// Anything else: no `=`, or more than one.
    Malformed(&'a str),
}

pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

pub fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with('#') {
        return Line::Comment(line);
    }
    match line.split_once('=') {
        Some((key, value)) if !value.contains('=') => Line::Assignment {
            key: key.trim(),
            value: value.trim(),
        },
        _ => Line::Malformed(line),
    }
}
