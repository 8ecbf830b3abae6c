//! Records of Android dictionary files
//!
//! Every line of a decompressed Android wordlist is a comma separated list
//! of `key=value` pairs. The first line describes the dictionary itself:
//!
//! ```text
//! dictionary=main:en,locale=en,description=English,date=1414726260,version=54
//!  word=the,f=222,flags=,originalFreq=222
//!  word=heck,f=50,flags=,originalFreq=50,possibly_offensive=true
//! ```

/// One parsed line, pairs kept in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Parse a single line. Items without `=` get an empty value.
    pub fn parse(line: &str) -> Self {
        let fields = line
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| match item.split_once('=') {
                Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
                None => (item.to_string(), String::new()),
            })
            .collect();
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// The term of a word record
    pub fn word(&self) -> Option<&str> {
        self.get("word")
    }

    pub fn is_offensive(&self) -> bool {
        self.contains_key("possibly_offensive")
    }

    /// Frequency of a word record
    pub fn frequency(&self) -> Option<u32> {
        self.get("f").and_then(|f| f.parse().ok())
    }
}

/// Parse all non-empty lines of `text`
pub fn parse_records(text: &str) -> Vec<Record> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(Record::parse)
        .collect()
}
