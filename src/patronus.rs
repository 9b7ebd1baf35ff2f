//! Patronus assignment
//!
//! Deterministic pseudo-hash of a name: the sum of its character
//! codes modulo the label-set size picks the patronus. Empty input is
//! the prompt case, not an error.

/// Built-in label set, overridable via config
pub const DEFAULT_LABELS: [&str; 8] = [
    "Stag", "Otter", "Phoenix", "Wolf", "Doe", "Hare", "Lynx", "Swan",
];

/// Shown when the name field is empty after trimming
pub const EMPTY_PROMPT: &str = "Enter a name to discover your patronus";

/// Owned default labels, for config defaults
pub fn default_labels() -> Vec<String> {
    DEFAULT_LABELS.iter().map(|l| l.to_string()).collect()
}

/// Assign a patronus for a name.
///
/// Returns `None` when the trimmed name is empty (or the label set is),
/// without ever indexing into the labels. Whitespace around the name
/// does not change the result.
pub fn assign_patronus<'a>(name: &str, labels: &'a [String]) -> Option<&'a str> {
    let name = name.trim();
    if name.is_empty() || labels.is_empty() {
        return None;
    }

    let sum: u32 = name.chars().map(|c| c as u32).sum();
    let index = (sum as usize) % labels.len();
    Some(labels[index].as_str())
}
