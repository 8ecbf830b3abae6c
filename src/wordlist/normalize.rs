//! Term normalization: Latin transliteration plus diacritic stripping

use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Letters NFKD does not decompose into something useful.
fn transliterate(c: char) -> Option<&'static str> {
    match c {
        'ä' => Some("ae"),
        'Ä' => Some("AE"),
        'æ' => Some("ae"),
        'Æ' => Some("AE"),
        'ö' => Some("oe"),
        'Ö' => Some("OE"),
        'ø' => Some("oe"),
        'Ø' => Some("OE"),
        'ü' => Some("ue"),
        'Ü' => Some("UE"),
        'ß' => Some("ss"),
        'Ð' => Some("D"),
        _ => None,
    }
}

fn apply_table(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match transliterate(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Normalize `text` to a canonical, mostly ASCII form.
///
/// Table letters are replaced first (`ä` becomes `ae`), then the result is
/// NFKD-decomposed and all combining marks are dropped (`é` becomes `e`).
/// The table is applied once more afterwards, because decomposition can
/// uncover table letters (`ǣ` decomposes to `æ` plus a macron). That keeps
/// `normalize` idempotent.
pub fn normalize(text: &str) -> String {
    let stripped: String = apply_table(text)
        .nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect();
    apply_table(&stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_umlauts_and_sharp_s() {
        assert_eq!(normalize("mäßig"), "maessig");
    }

    #[test]
    fn test_normalize_latin_letters() {
        assert_eq!(normalize("ªºÀÁÂÃÄÅÆ"), "aoAAAAAEAAE");
        assert_eq!(normalize("ÇÈÉÊËÌÍÎÏ"), "CEEEEIIII");
        assert_eq!(normalize("ÒÓÔÕÖØÙÚÛÜ"), "OOOOOEOEUUUUE");
        assert_eq!(normalize("Ðü"), "Due");
    }

    #[test]
    fn test_normalize_passes_plain_text() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("far"), "far");
        assert_eq!(normalize("日本"), "日本");
    }

    #[test]
    fn test_normalize_decomposed_input() {
        // "a" followed by a combining diaeresis
        assert_eq!(normalize("a\u{0308}h"), "ah");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for text in ["mäßig", "ǣ", "ÆØÜ", "crème brûlée", "ﬁne", "Ångström", ""] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", text);
        }
    }
}
