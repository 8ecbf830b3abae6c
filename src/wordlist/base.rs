//! Bundled base term lists
//!
//! Two small lists ship with the crate and can be merged into any pool:
//! the "dicewarekit" with single chars, repeated letters, numbers and
//! punctuation, and the "diceware416" with letter/digit pairs.

use crate::source::terms_from_str;

const DICEWARE_KIT: &str = include_str!("../../resources/dicewarekit.txt");
const DICEWARE_416: &str = include_str!("../../resources/diceware416.txt");

/// Terms of the selected base lists, kit first.
pub fn base_terms(use_kit: bool, use_416: bool) -> Vec<String> {
    let mut terms = Vec::new();
    if use_kit {
        tracing::debug!("Adding source list: dicewarekit.txt");
        terms.extend(terms_from_str(DICEWARE_KIT));
    }
    if use_416 {
        tracing::debug!("Adding source list: diceware416.txt");
        terms.extend(terms_from_str(DICEWARE_416));
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_terms() {
        let terms = base_terms(true, true);
        for expected in ["a2", "9z", "0", "zzzz", "yyyy", "!"] {
            assert!(terms.contains(&expected.to_string()), "missing {}", expected);
        }
    }

    #[test]
    fn test_base_terms_options() {
        let only_416 = base_terms(false, true);
        assert_eq!(only_416.len(), 416);
        assert!(only_416.contains(&"a2".to_string()));
        assert!(!only_416.contains(&"yyyy".to_string()));

        let only_kit = base_terms(true, false);
        assert!(only_kit.contains(&"yyyy".to_string()));
        assert!(!only_kit.contains(&"a2".to_string()));

        assert!(base_terms(false, false).is_empty());
    }
}
