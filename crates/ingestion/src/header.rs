//! Header block detection and label extraction.

/// Split a physical line into trimmed tokens.
#[inline]
pub fn split_tokens(line: &str, separator: char) -> impl Iterator<Item = &str> {
    line.trim().split(separator).map(str::trim)
}

/// True when every token of the line parses as a float.
pub fn is_numeric_line(line: &str, separator: char) -> bool {
    split_tokens(line, separator).all(|tok| tok.parse::<f64>().is_ok())
}

/// Count leading lines that are not fully numeric.
///
/// Stops at the first fully numeric line; lines after it are never looked at.
pub fn detect_header_lines<'a, I>(lines: I, separator: char) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .take_while(|line| !is_numeric_line(line, separator))
        .count()
}

/// Parse labels from physical line 0.
///
/// Always line 0, whatever the detected header length is.
pub fn extract_labels(first_line: &str, separator: char, comment_marker: char) -> Vec<String> {
    let line = first_line.trim();
    let line = line.strip_prefix(comment_marker).unwrap_or(line);
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }
    split_tokens(line, separator).map(str::to_string).collect()
}
