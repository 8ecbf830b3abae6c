//! Character filters for candidate terms

use std::collections::HashSet;

/// Set of chars a term may consist of
#[derive(Debug, Clone)]
pub struct AllowedChars {
    chars: HashSet<char>,
}

impl AllowedChars {
    /// ASCII letters, digits and punctuation
    pub fn ascii() -> Self {
        let chars = (0u8..=127)
            .map(char::from)
            .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_punctuation())
            .collect();
        Self { chars }
    }

    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Whether every char of `term` is allowed
    pub fn allows(&self, term: &str) -> bool {
        term.chars().all(|c| self.contains(c))
    }
}

/// Keep only the terms made of `allowed` chars.
///
/// Without `allowed` every term passes.
pub fn filter_chars<I>(terms: I, allowed: Option<&AllowedChars>) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    terms
        .into_iter()
        .enumerate()
        .filter(move |(idx, term)| match allowed {
            Some(allowed) if !allowed.allows(term) => {
                tracing::debug!(line = idx + 1, term = %term, "Not allowed char in term");
                false
            }
            _ => true,
        })
        .map(|(_, term)| term)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtered(items: &[&str]) -> Vec<String> {
        let ascii = AllowedChars::ascii();
        filter_chars(items.iter().map(|s| s.to_string()), Some(&ascii))
    }

    #[test]
    fn test_ascii_set() {
        let ascii = AllowedChars::ascii();
        assert!(ascii.contains('a'));
        assert!(ascii.contains('Z'));
        assert!(ascii.contains('7'));
        assert!(ascii.contains('!'));
        assert!(ascii.contains('~'));
        assert!(!ascii.contains(' '));
        assert!(!ascii.contains('ä'));
    }

    #[test]
    fn test_filter_chars() {
        assert!(filtered(&[]).is_empty());
        assert_eq!(filtered(&["a", "b"]), vec!["a", "b"]);
        assert!(filtered(&["ä"]).is_empty());
        assert_eq!(filtered(&["a", "ä"]), vec!["a"]);
        assert_eq!(filtered(&["ä", "a"]), vec!["a"]);
        assert_eq!(filtered(&["a", "ä", "b"]), vec!["a", "b"]);
        assert_eq!(filtered(&["a", "aä", "bö"]), vec!["a"]);
    }

    #[test]
    fn test_filter_chars_all_allowed() {
        let result = filter_chars(vec!["ä".to_string()], None);
        assert_eq!(result, vec!["ä"]);
    }

    #[test]
    fn test_custom_set() {
        let vowels = AllowedChars::from_chars("aeiou".chars());
        assert!(vowels.allows("aue"));
        assert!(!vowels.allows("bad"));
    }
}
