//! Flake checks for existing wordlists
//!
//! The checker reports everything that makes a list a bad diceware list,
//! without changing the list:
//!
//! - `E1` a term is the prefix of another term
//! - `E2` a term appears more than once
//! - `E3` a term is too short for the size of the list
//! - `W1` a term contains chars outside the ASCII set

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::types::FlakeConfig;
use crate::wordlist::{matching_prefixes, AllowedChars};

/// Kind of flake found
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FlakeCode {
    E1,
    E2,
    E3,
    W1,
}

impl FlakeCode {
    /// Errors make a list unusable, warnings only inconvenient
    pub fn is_error(&self) -> bool {
        !matches!(self, FlakeCode::W1)
    }
}

impl std::fmt::Display for FlakeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlakeCode::E1 => write!(f, "E1"),
            FlakeCode::E2 => write!(f, "E2"),
            FlakeCode::E3 => write!(f, "E3"),
            FlakeCode::W1 => write!(f, "W1"),
        }
    }
}

/// One finding, located by its 1-based line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub code: FlakeCode,
    pub line: usize,
    pub term: String,
    pub message: String,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} {}", self.line, self.code, self.message)
    }
}

/// Minimal term length for a list of `pool_size` terms.
///
/// `ceil(ln(pool_size) / ln(base))`, i.e. the number of chars from an
/// alphabet of `base` symbols needed to tell `pool_size` terms apart.
pub fn min_length(pool_size: usize, base: f64) -> usize {
    if pool_size <= 1 || base <= 1.0 {
        return 0;
    }
    let exact = (pool_size as f64).ln() / base.ln();
    // guard against 4.000000001 for exact powers
    let rounded = exact.round();
    if (exact - rounded).abs() < 1e-9 {
        rounded as usize
    } else {
        exact.ceil() as usize
    }
}

/// Run all checks over `terms`, in list order.
///
/// Findings are sorted by line, then code.
pub fn check_flakes<S: AsRef<str>>(terms: &[S], config: &FlakeConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (idx, term) in terms.iter().enumerate() {
        let term = term.as_ref();
        match first_seen.get(term) {
            Some(first) => findings.push(Finding {
                code: FlakeCode::E2,
                line: idx + 1,
                term: term.to_string(),
                message: format!("'{}' already appeared in line {}", term, first),
            }),
            None => {
                first_seen.insert(term, idx + 1);
            }
        }
    }

    let unique: BTreeSet<&str> = first_seen.keys().copied().collect();
    let unique: Vec<&str> = unique.into_iter().collect();

    for (prefix, prefixed) in matching_prefixes(&unique, true) {
        let line = first_seen.get(prefix.as_str()).copied().unwrap_or(0);
        let other = first_seen.get(prefixed.as_str()).copied().unwrap_or(0);
        findings.push(Finding {
            code: FlakeCode::E1,
            line,
            message: format!("'{}' is a prefix of '{}' (line {})", prefix, prefixed, other),
            term: prefix,
        });
    }

    let min_len = min_length(unique.len(), config.min_length_base);
    let ascii = AllowedChars::ascii();
    for (idx, term) in terms.iter().enumerate() {
        let term = term.as_ref();
        let width = term.chars().count();
        if width < min_len {
            findings.push(Finding {
                code: FlakeCode::E3,
                line: idx + 1,
                term: term.to_string(),
                message: format!(
                    "'{}' is too short: {} chars, {} required for {} terms",
                    term,
                    width,
                    min_len,
                    unique.len()
                ),
            });
        }
        if config.check_ascii && !ascii.allows(term) {
            findings.push(Finding {
                code: FlakeCode::W1,
                line: idx + 1,
                term: term.to_string(),
                message: format!("'{}' contains non-ASCII chars", term),
            });
        }
    }

    findings.sort_by(|a, b| a.line.cmp(&b.line).then(a.code.cmp(&b.code)));
    tracing::info!(
        terms = terms.len(),
        findings = findings.len(),
        min_length = min_len,
        "Checked wordlist for flakes"
    );
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(findings: &[Finding]) -> Vec<(usize, FlakeCode)> {
        findings.iter().map(|f| (f.line, f.code)).collect()
    }

    fn lenient() -> FlakeConfig {
        FlakeConfig {
            min_length_base: 1000.0,
            check_ascii: true,
        }
    }

    #[test]
    fn test_clean_list() {
        assert!(check_flakes(&["bar", "baz", "foo"], &lenient()).is_empty());
        assert!(check_flakes::<&str>(&[], &lenient()).is_empty());
    }

    #[test]
    fn test_duplicate_prefix() {
        let findings = check_flakes(&["air", "foo", "airborne"], &lenient());
        assert_eq!(codes(&findings), vec![(1, FlakeCode::E1)]);
        assert!(findings[0].message.contains("'airborne' (line 3)"));
    }

    #[test]
    fn test_duplicate_term() {
        let findings = check_flakes(&["foo", "bar", "foo"], &lenient());
        assert_eq!(codes(&findings), vec![(3, FlakeCode::E2)]);
        assert!(findings[0].message.contains("line 1"));
    }

    #[test]
    fn test_too_short() {
        let terms: Vec<String> = (0..676).map(|i| format!("w{:03}", i)).chain(["ab".to_string()]).collect();
        let findings = check_flakes(&terms, &FlakeConfig::default());
        // 677 terms need ceil(log26(677)) = 3 chars
        assert_eq!(codes(&findings), vec![(677, FlakeCode::E3)]);
    }

    #[test]
    fn test_non_ascii() {
        let findings = check_flakes(&["bär", "foo"], &lenient());
        assert_eq!(codes(&findings), vec![(1, FlakeCode::W1)]);
        assert!(!findings[0].code.is_error());

        let quiet = FlakeConfig {
            check_ascii: false,
            ..lenient()
        };
        assert!(check_flakes(&["bär", "foo"], &quiet).is_empty());
    }

    #[test]
    fn test_reports_everything() {
        let findings = check_flakes(&["a", "ab", "a", "ö"], &lenient());
        assert_eq!(
            codes(&findings),
            vec![(1, FlakeCode::E1), (3, FlakeCode::E2), (4, FlakeCode::W1)]
        );
    }

    #[test]
    fn test_min_length() {
        assert_eq!(min_length(0, 26.0), 0);
        assert_eq!(min_length(1, 26.0), 0);
        assert_eq!(min_length(26, 26.0), 1);
        assert_eq!(min_length(27, 26.0), 2);
        assert_eq!(min_length(7776, 26.0), 3);
        assert_eq!(min_length(8192, 2.0), 13);
        assert_eq!(min_length(8193, 2.0), 14);
    }
}
