//! Reading terms from dictionary files
//!
//! Dictionaries are UTF-8 text with one term per line. Lines are trimmed
//! and blank lines are skipped. The path `-` stands for standard input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, WordlistError};

/// Marker for reading from stdin instead of a file
pub const STDIN_MARKER: &str = "-";

/// Terms contained in `text`
pub fn terms_from_str(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

/// Read all terms from `reader`
pub fn read_terms<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut terms = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let term = line.trim();
        if !term.is_empty() {
            terms.push(term.to_string());
        }
    }
    Ok(terms)
}

/// Read the terms of one file, or stdin for `-`
pub fn read_path(path: &Path) -> Result<Vec<String>> {
    let shown = path.to_string_lossy().to_string();
    let terms = if shown == STDIN_MARKER {
        read_terms(io::stdin().lock())
    } else {
        let file = File::open(path).map_err(|e| WordlistError::io(e.to_string(), Some(shown.clone())))?;
        read_terms(BufReader::new(file))
    }
    .map_err(|e| WordlistError::io(e.to_string(), Some(shown.clone())))?;

    tracing::debug!(path = %shown, terms = terms.len(), "Read dictionary");
    Ok(terms)
}

/// Read the terms of all `paths`, in order
pub fn read_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>> {
    let mut terms = Vec::new();
    for path in paths {
        terms.extend(read_path(path.as_ref())?);
    }
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_terms() {
        let terms = read_terms(Cursor::new("a\nb\nc")).unwrap();
        assert_eq!(terms, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_read_terms_ignores_empty_lines() {
        let terms = read_terms(Cursor::new("foo\n\n  bar  \n\n")).unwrap();
        assert_eq!(terms, vec!["foo", "bar"]);
    }

    #[test]
    fn test_read_terms_handles_umlauts() {
        let terms = read_terms(Cursor::new("ä\nö\n".as_bytes())).unwrap();
        assert_eq!(terms, vec!["ä", "ö"]);
    }

    #[test]
    fn test_read_paths_multiple_files() {
        let mut first = NamedTempFile::new().unwrap();
        let mut second = NamedTempFile::new().unwrap();
        write!(first, "a1\nb1\nc1").unwrap();
        write!(second, "a2\nb2\nc2\n").unwrap();

        let terms = read_paths(&[first.path(), second.path()]).unwrap();
        assert_eq!(terms, vec!["a1", "b1", "c1", "a2", "b2", "c2"]);
    }

    #[test]
    fn test_read_path_missing_file() {
        let err = read_path(Path::new("/definitely/not/here.txt")).unwrap_err();
        match err {
            WordlistError::Io { path, .. } => assert_eq!(path.as_deref(), Some("/definitely/not/here.txt")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_terms_from_str() {
        let terms: Vec<String> = terms_from_str(" x \n\ny\n").collect();
        assert_eq!(terms, vec!["x", "y"]);
    }
}
