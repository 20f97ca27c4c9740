//! Text predicates used by the record filters.
//!
//! These operate on decoded `&str` values and fix the matching rules explicitly: exact matches are
//! case-sensitive, lengths are counted in Unicode scalar values, and only ASCII `0-9` count as
//! digits.

/// Exact, case-sensitive membership test.
pub fn is_one_of(value: Option<&str>, allowed: &[&str]) -> bool {
    value.is_some_and(|v| allowed.contains(&v))
}

/// First character is an uppercase `M`.
pub fn starts_with_m(value: Option<&str>) -> bool {
    value.and_then(|v| v.chars().next()) == Some('M')
}

/// Length in characters, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Case-insensitive substring test.
///
/// An empty needle never matches.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Non-empty and free of ASCII digits.
pub fn has_no_digit(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_one_of_is_exact() {
        let brands = ["BMW", "Mercedes-Benz"];
        assert!(is_one_of(Some("BMW"), &brands));
        assert!(is_one_of(Some("Mercedes-Benz"), &brands));
        assert!(!is_one_of(Some("bmw"), &brands));
        assert!(!is_one_of(Some("Mercedes"), &brands));
        assert!(!is_one_of(Some("BMW "), &brands));
        assert!(!is_one_of(None, &brands));
    }

    #[test]
    fn test_starts_with_m() {
        assert!(starts_with_m(Some("Martinez")));
        assert!(starts_with_m(Some("M")));
        assert!(!starts_with_m(Some("martinez")));
        assert!(!starts_with_m(Some("Smith")));
        assert!(!starts_with_m(Some("")));
        assert!(!starts_with_m(None));
    }

    #[test]
    fn test_char_len_counts_codepoints() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len("日本語"), 3);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("jmartinez@example.com", "Martinez"));
        assert!(contains_ignore_case("JMARTINEZ@EXAMPLE.COM", "martinez"));
        assert!(!contains_ignore_case("jsmith@example.com", "Martinez"));
    }

    #[test]
    fn test_empty_needle_never_matches() {
        assert!(!contains_ignore_case("anything@example.com", ""));
        assert!(!contains_ignore_case("", ""));
    }

    #[test]
    fn test_has_no_digit() {
        assert!(has_no_digit("jane@example.com"));
        assert!(!has_no_digit("jane2@example.com"));
        assert!(!has_no_digit("9jane@example.com"));
        assert!(!has_no_digit(""));
    }
}
