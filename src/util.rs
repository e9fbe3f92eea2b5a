/// Remove one matching pair of wrapping quotes (`"..."` or `'...'`) from `value`.
///
/// Nothing inside the quotes is unescaped, and a lone quote character is left alone.
#[must_use]
pub fn strip_quotes(value: &str) -> &str {
    if value.len() < 2 {
        return value;
    }

    ['"', '\'']
        .into_iter()
        .find_map(|q| value.strip_prefix(q)?.strip_suffix(q))
        .unwrap_or(value)
}

/// Apply [`strip_quotes`] only when `enabled`.
#[must_use]
pub fn maybe_strip_quotes(value: &str, enabled: bool) -> &str {
    if enabled { strip_quotes(value) } else { value }
}
