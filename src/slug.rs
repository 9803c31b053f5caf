//! Machine-name slugs from free text.

use regex::Regex;
use std::sync::LazyLock;

/// Default separator for [`machinify`].
pub const DEFAULT_SEPARATOR: &str = "_";

/// Maximal runs of characters outside the machine-safe class.
///
/// The class is fixed at `[a-z0-9_]`; a custom separator is never added to
/// it, so underscores survive the first pass even when separating with
/// something else.
static UNSAFE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_]+").unwrap());

/// Convert free text into a machine name, separating words with `_`.
///
/// # Example
/// ```ignore
/// assert_eq!(machinify("  Multiple   Spaces  "), "multiple_spaces");
/// ```
pub fn machinify(text: &str) -> String {
    machinify_with(text, DEFAULT_SEPARATOR)
}

/// Convert free text into a machine name with a custom separator.
///
/// Two passes over the trimmed, lowercased input: replace every maximal run
/// of characters outside `[a-z0-9_]` with the separator, then collapse every
/// run of repeated separators into one.
pub fn machinify_with(text: &str, separator: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let replaced = UNSAFE_RUN.replace_all(&lowered, separator);

    // The escaped separator always yields a valid pattern.
    let collapse = Regex::new(&format!("(?:{})+", regex::escape(separator))).unwrap();
    collapse.replace_all(&replaced, separator).into_owned()
}
