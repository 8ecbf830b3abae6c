//! Integration tests for diceware-list

use diceware_list::{
    check_flakes, generate_wordlist,
    wordlist::{is_prefix_code, NoShuffle, ReverseShuffle},
    AndroidWordList, Config, FlakeCode, FlakeConfig, GenerationConfig, PrefixCode, RandomShuffler,
    WordlistError,
};
use std::collections::HashSet;

fn terms(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn config(length: usize) -> GenerationConfig {
    GenerationConfig {
        length,
        ..Default::default()
    }
}

#[test]
fn test_generate_picks_shortest_terms() {
    let input = terms(&["bb", "a", "ccc", "dd", "eeee"]);
    let lines: Vec<String> = generate_wordlist(input, &config(3), &mut NoShuffle).unwrap().collect();
    assert_eq!(lines, vec!["a", "bb", "dd"]);
}

#[test]
fn test_generate_numbered_lines() {
    let input: Vec<String> = (0..36).map(|i| format!("t{:02}", i)).collect();
    let config = GenerationConfig {
        numbered: true,
        ..config(36)
    };
    let lines: Vec<String> = generate_wordlist(input, &config, &mut NoShuffle).unwrap().collect();
    assert_eq!(lines.len(), 36);
    assert_eq!(lines[0], "11 t00");
    assert_eq!(lines[6], "21 t06");
    assert_eq!(lines[35], "66 t35");
}

#[test]
fn test_generate_prefix_code_output() {
    let input = terms(&["air", "airborne", "be", "bee", "beer", "cat", "dog"]);
    for prefix_code in [PrefixCode::Short, PrefixCode::Long] {
        let config = GenerationConfig {
            prefix_code,
            ..config(4)
        };
        let wordlist = generate_wordlist(input.clone(), &config, &mut NoShuffle).unwrap();
        assert_eq!(wordlist.len(), 4);
        assert!(is_prefix_code(wordlist.terms(), true), "{:?}", wordlist.terms());
    }
}

#[test]
fn test_generate_insufficient_pool() {
    let input = terms(&["a", "b", "c", "a"]);
    match generate_wordlist(input, &config(4), &mut NoShuffle) {
        Err(WordlistError::InsufficientPool {
            required,
            available,
        }) => {
            assert_eq!(required, 4);
            assert_eq!(available, 3);
        }
        other => panic!("expected InsufficientPool, got {:?}", other.map(|w| w.len())),
    }
}

#[test]
fn test_generate_with_base_lists() {
    let config = GenerationConfig {
        use_416: true,
        ..config(416)
    };
    let lines: Vec<String> = generate_wordlist(Vec::new(), &config, &mut NoShuffle).unwrap().collect();
    assert_eq!(lines.len(), 416);
    assert!(lines.contains(&"a2".to_string()));
    assert!(lines.contains(&"9z".to_string()));
}

#[test]
fn test_generate_is_reproducible_with_seed() {
    let input: Vec<String> = (0..100).map(|i| format!("w{:03}", i)).collect();
    let first: Vec<String> = generate_wordlist(input.clone(), &config(50), &mut RandomShuffler::seeded(7))
        .unwrap()
        .collect();
    let second: Vec<String> = generate_wordlist(input, &config(50), &mut RandomShuffler::seeded(7))
        .unwrap()
        .collect();
    assert_eq!(first, second);
    assert_eq!(first.iter().collect::<HashSet<_>>().len(), 50);
}

#[test]
fn test_tie_breaking_only_touches_max_width() {
    let input = terms(&["a", "b", "cc", "dd", "ee", "fff"]);
    let plain = generate_wordlist(input.clone(), &config(4), &mut NoShuffle).unwrap();
    let reversed = generate_wordlist(input, &config(4), &mut ReverseShuffle).unwrap();
    assert_eq!(plain.terms(), &terms(&["a", "b", "cc", "dd"])[..]);
    assert_eq!(reversed.terms(), &terms(&["a", "b", "dd", "ee"])[..]);
}

#[test]
fn test_generated_list_has_no_flakes() {
    let input: Vec<String> = (0..400).map(|i| format!("term{:03}", i)).chain(terms(&["ter", "te"])).collect();
    let config = GenerationConfig {
        prefix_code: PrefixCode::Long,
        ..config(300)
    };
    let lines: Vec<String> = generate_wordlist(input, &config, &mut NoShuffle).unwrap().collect();
    assert!(check_flakes(&lines, &FlakeConfig::default()).is_empty());
}

#[test]
fn test_flakes_on_bad_list() {
    let findings = check_flakes(&terms(&["be", "beer", "cat", "cat"]), &FlakeConfig::default());
    let codes: Vec<FlakeCode> = findings.iter().map(|f| f.code).collect();
    assert_eq!(codes, vec![FlakeCode::E1, FlakeCode::E2]);
    assert!(findings.iter().all(|f| f.code.is_error()));
}

#[tokio::test]
async fn test_words_from_local_android_file() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("en_wordlist.combined.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(b"dictionary=main:en,locale=en\n word=the,f=222\n word=heck,f=50,possibly_offensive=true\n")
        .unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();

    let mut list = AndroidWordList::from_source(&Config::default(), path.to_string_lossy());
    list.download().await.unwrap();
    assert_eq!(list.words(Some(false)).unwrap(), vec!["the"]);

    let wordlist = generate_wordlist(list.words(None).unwrap(), &config(2), &mut NoShuffle).unwrap();
    assert_eq!(wordlist.terms(), &terms(&["heck", "the"])[..]);
}

#[test]
fn test_error_handling() {
    let error = WordlistError::validation("test error");
    assert!(error.to_string().contains("test error"));

    let error = WordlistError::config("config error");
    assert!(error.to_string().contains("config error"));
}

#[test]
fn test_library_initialization() {
    let result = diceware_list::init();
    assert!(result.is_ok());
}
