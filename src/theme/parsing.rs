/// What: Strip a trailing `#` or `//` comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`.
///
/// Output:
/// - The value without the comment, trimmed.
///
/// Details:
/// - `//` only starts a comment at the beginning or after whitespace so URLs
///   such as `https://...` survive.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if s.starts_with("//") {
        return "";
    }
    if let Some(i) = s.find(" //").or_else(|| s.find("\t//")) {
        s = &s[..i];
    }
    if let Some(i) = s.find('#') {
        s = &s[..i];
    }
    s.trim()
}

/// What: Interpret common truthy/falsy spellings.
///
/// Output:
/// - `Some(true)` for true/1/yes/on, `Some(false)` for false/0/no/off, else `None`.
pub(crate) fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Parse a comma or whitespace separated list of page sizes.
///
/// Details:
/// - Tokens that are not positive integers are skipped.
pub(crate) fn parse_size_list(val: &str) -> Vec<u64> {
    val.split(|c: char| c == ',' || c.is_whitespace())
        .filter_map(|t| t.trim().parse::<u64>().ok())
        .filter(|&n| n > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_strip_inline_comment_variants() {
        assert_eq!(strip_inline_comment("12 # default"), "12");
        assert_eq!(strip_inline_comment("true // on"), "true");
        assert_eq!(strip_inline_comment("  plain  "), "plain");
        assert_eq!(
            strip_inline_comment("https://api.example.org/v1 // mirror"),
            "https://api.example.org/v1"
        );
    }

    #[test]
    fn parsing_bools_and_lists() {
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_size_list("10, 12 25,x,0"), vec![10, 12, 25]);
    }
}
