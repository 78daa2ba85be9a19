// Aarya Engine — Text Normalization
// Canonicalizes text for case- and punctuation-insensitive comparison.
// Output alphabet is [a-z0-9_ ] with single spaces and no edge whitespace.

/// Lowercase, replace every non-word character with a space, collapse
/// whitespace, trim. Total and idempotent.
pub fn normalize(text: &str) -> String {
    let mapped: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}
