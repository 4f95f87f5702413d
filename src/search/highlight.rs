//! Match highlighting for search output

use regex::RegexBuilder;

/// Wrap every case-insensitive occurrence of `query` in `text` with
/// `<mark>` markers.
///
/// The query is escaped before being compiled, so metacharacters like `.` or
/// `*` match literally. An empty or all-whitespace query returns the text
/// unchanged; a query with surrounding whitespace only matches occurrences
/// that carry that whitespace.
pub fn highlight(text: &str, query: &str) -> String {
    if query.trim().is_empty() {
        return text.to_string();
    }

    let pattern = regex::escape(query);
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.replace_all(text, "<mark>$0</mark>").into_owned(),
        Err(_) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_identity() {
        assert_eq!(highlight("hello world", ""), "hello world");
        assert_eq!(highlight("hello world", "   "), "hello world");
    }

    #[test]
    fn test_wraps_every_occurrence() {
        assert_eq!(
            highlight("cat catalog CAT", "cat"),
            "<mark>cat</mark> <mark>cat</mark>alog <mark>CAT</mark>"
        );
    }

    #[test]
    fn test_preserves_original_case() {
        assert_eq!(highlight("Rust is rusty", "RUST"), "<mark>Rust</mark> is <mark>rust</mark>y");
    }

    #[test]
    fn test_metacharacters_match_literally() {
        assert_eq!(highlight("a.b ab", "a.b"), "<mark>a.b</mark> ab");
        assert_eq!(highlight("1*2 and 12", "1*2"), "<mark>1*2</mark> and 12");
        assert_eq!(highlight("f(x)", "("), "f<mark>(</mark>x)");
    }

    #[test]
    fn test_no_match_unchanged() {
        assert_eq!(highlight("nothing here", "zzz"), "nothing here");
    }

    #[test]
    fn test_query_whitespace_is_not_trimmed() {
        // The padded query only matches occurrences that include the padding
        assert_eq!(highlight("a dog, hotdog", " dog "), "a dog, hotdog");
        assert_eq!(
            highlight("a dog in the yard", " dog "),
            "a<mark> dog </mark>in the yard"
        );
    }
}
