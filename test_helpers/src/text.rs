//! Text helpers for feature-file step arguments.

/// Strips surrounding whitespace and one layer of matching quotes.
///
/// Step placeholders capture `"Test"` verbatim; steps compare against the
/// bare text.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| {
            trimmed
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::unquote;

    #[rstest]
    #[case("\"Test\"", "Test")]
    #[case(" 'Test Error' ", "Test Error")]
    #[case("bare", "bare")]
    #[case("\"mismatched'", "\"mismatched'")]
    fn strips_one_layer_of_quotes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(unquote(raw), expected);
    }
}
