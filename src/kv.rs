//! Line-oriented `key=value` grammar shared by save files and config files.
//!
//! Lines starting with `#` are comments, blank lines are skipped, and each
//! remaining line splits at the first `=`. Values are stored verbatim after
//! trimming; there is no escaping, so a key cannot contain `=` and a value
//! cannot contain a newline.

/// Parse `text` into `(key, value)` pairs, in file order. Lines without an
/// `=` are skipped.
pub fn parse(text: &str) -> impl Iterator<Item = (&str, &str)> {
    text.lines()
        .map(str::trim_start)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            Some((key.trim(), value.trim()))
        })
}

/// Render one `key=value` line (without the trailing newline).
pub fn line(key: &str, value: impl std::fmt::Display) -> String {
    format!("{key}={value}")
}
