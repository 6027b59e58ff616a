//! Form Field Parsing
//!
//! Coercion of free-text form fields into the typed values sent to the
//! backend. Parsing never fails: malformed input degrades to an empty list
//! or to zero.

/// Split a comma-delimited field into a list of entries.
///
/// Each entry is trimmed; entries that are empty after trimming are dropped.
/// Order is preserved.
///
/// ```
/// use nutrivibe::parse::parse_item_list;
///
/// assert_eq!(parse_item_list("Vitamin D, , Omega-3"), vec!["Vitamin D", "Omega-3"]);
/// ```
pub fn parse_item_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-delimited field, trimming each entry but keeping blanks.
///
/// `"Bread,,Milk"` yields three entries, the middle one empty.
pub fn split_items(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.trim().to_string()).collect()
}

/// Parse a numeric field, falling back to zero.
///
/// Blank input, unparseable input and non-finite values all yield `0.0`.
pub fn parse_amount(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
