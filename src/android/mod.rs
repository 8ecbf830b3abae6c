//! Android keyboard dictionaries as a source of terms
//!
//! The LatinIME project publishes gzipped wordlists per language, with
//! frequencies and an "offensive" flag per word. The gitiles web frontend
//! serves them base64 encoded.

mod record;

pub use record::{parse_records, Record};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::read::GzDecoder;
use regex::Regex;
use reqwest::Client;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, WordlistError};
use crate::types::Config;

const FILE_SCHEME: &str = "file://";

/// A wordlist provided for Android devices
pub struct AndroidWordList {
    /// Explicit location of a gzipped list; when unset, `lang` picks the upstream file
    source: Option<String>,
    lang: String,
    base_url: String,
    client: Client,
    gz_data: Option<Vec<u8>>,
}

impl AndroidWordList {
    /// Wordlist for `lang` at the default upstream location
    pub fn new(lang: &str) -> Self {
        Self::with_config(&Config::default(), lang)
    }

    pub fn with_config(config: &Config, lang: &str) -> Self {
        let client = Client::builder()
            .timeout(config.download_timeout)
            .user_agent(concat!("diceware-list/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create HTTP client: {}. Using default.", e);
                Client::new()
            });

        Self {
            source: None,
            lang: lang.to_string(),
            base_url: config.android_base_url.clone(),
            client,
            gz_data: None,
        }
    }

    /// Wordlist read from a local path or URL holding plain gzipped data
    pub fn from_source(config: &Config, source: impl Into<String>) -> Self {
        let mut list = Self::with_config(config, "en");
        list.source = Some(source.into());
        list
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Gzipped data of the last download, if any
    pub fn gz_data(&self) -> Option<&[u8]> {
        self.gz_data.as_deref()
    }

    /// Location the wordlist is fetched from
    pub fn url(&self) -> String {
        match &self.source {
            Some(source) => source.clone(),
            None if self.base_url.starts_with(FILE_SCHEME) => {
                format!("{}{}_wordlist.combined.gz", self.base_url, self.lang)
            }
            None => format!("{}{}_wordlist.combined.gz?format=TEXT", self.base_url, self.lang),
        }
    }

    /// File name of the wordlist, without any query
    pub fn basename(&self) -> String {
        let url = self.url();
        let path = url.split(['?', '#']).next().unwrap_or_default();
        path.rsplit('/').next().unwrap_or_default().to_string()
    }

    /// Fetch the wordlist and keep its gzipped data.
    ///
    /// Upstream data is base64 decoded; explicit sources are taken as is.
    pub async fn download(&mut self) -> Result<&[u8]> {
        let url = self.url();
        tracing::info!(url = %url, "Fetching wordlist");
        let mut data = self.fetch(&url).await?;
        if self.source.is_none() {
            let text: Vec<u8> = data.into_iter().filter(|b| !b.is_ascii_whitespace()).collect();
            data = STANDARD.decode(text)?;
        }
        tracing::debug!(bytes = data.len(), "Wordlist downloaded");
        Ok(self.gz_data.insert(data).as_slice())
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if url.starts_with("http://") || url.starts_with("https://") {
            let response = self.client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(WordlistError::network(
                    format!("server answered {}", status),
                    Some(status.as_u16()),
                    Some(url.to_string()),
                ));
            }
            return Ok(response.bytes().await?.to_vec());
        }

        let path = url.strip_prefix(FILE_SCHEME).unwrap_or(url);
        tokio::fs::read(path)
            .await
            .map_err(|e| WordlistError::io(e.to_string(), Some(path.to_string())))
    }

    /// Gunzip `data`
    pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        GzDecoder::new(data)
            .read_to_end(&mut out)
            .map_err(|e| WordlistError::decode(format!("invalid gzip data: {}", e)))?;
        Ok(out)
    }

    /// Store the downloaded gzipped data at `path`.
    ///
    /// Existing files are never overwritten. Nothing happens if there was
    /// no download yet.
    pub fn save(&self, path: &Path) -> Result<()> {
        let Some(data) = &self.gz_data else {
            return Ok(());
        };
        let shown = path.to_string_lossy().to_string();
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => {
                    WordlistError::io("File exists", Some(shown.clone()))
                }
                _ => WordlistError::io(e.to_string(), Some(shown.clone())),
            })?;
        file.write_all(data)
            .map_err(|e| WordlistError::io(e.to_string(), Some(shown.clone())))?;
        tracing::debug!(path = %shown, "Saved wordlist");
        Ok(())
    }

    /// Where to store the list: `outfile` or the basename in `$HOME`
    pub fn save_path(&self, outfile: Option<&Path>) -> PathBuf {
        match outfile {
            Some(path) => path.to_path_buf(),
            None => {
                let home = std::env::var_os("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("."));
                home.join(self.basename())
            }
        }
    }

    /// All records of the downloaded list, empty without a download
    pub fn parse_lines(&self) -> Result<Vec<Record>> {
        let Some(data) = &self.gz_data else {
            return Ok(Vec::new());
        };
        let raw = Self::decompress(data)?;
        let text = String::from_utf8(raw)
            .map_err(|e| WordlistError::decode(format!("wordlist is not UTF-8: {}", e)))?;
        Ok(parse_records(&text))
    }

    /// The record describing the list itself
    pub fn meta_data(&self) -> Result<Record> {
        Ok(self.parse_lines()?.into_iter().next().unwrap_or_default())
    }

    /// Words of the list.
    ///
    /// `Some(false)` drops words flagged offensive, `Some(true)` keeps only
    /// those, `None` ignores the flag.
    pub fn words(&self, offensive: Option<bool>) -> Result<Vec<String>> {
        let words = self
            .parse_lines()?
            .into_iter()
            .filter(|record| match offensive {
                Some(wanted) => record.is_offensive() == wanted,
                None => true,
            })
            .filter_map(|record| record.word().map(str::to_string))
            .collect();
        Ok(words)
    }

    /// Language codes available upstream, sorted
    pub async fn valid_lang_codes(&self) -> Result<Vec<String>> {
        let index_url = if self.base_url.starts_with(FILE_SCHEME) && self.base_url.ends_with('/') {
            format!("{}index.html", self.base_url)
        } else {
            self.base_url.clone()
        };
        let html = self.fetch(&index_url).await?;
        let html = String::from_utf8_lossy(&html);
        Ok(lang_codes_from_index(&html))
    }
}

/// Reject language codes that cannot name an upstream list
pub fn validate_lang(lang: &str) -> Result<()> {
    if lang.is_empty() || !lang.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
        return Err(crate::validation_error!(
            "invalid language code '{}', expected letters and underscores like 'en_GB'",
            lang
        ));
    }
    Ok(())
}

/// Extract language codes from the links of an index page
pub fn lang_codes_from_index(html: &str) -> Vec<String> {
    let Ok(re) = Regex::new(r"/([a-zA-Z_]+)_wordlist\.combined\.gz") else {
        return Vec::new();
    };
    let mut codes: Vec<String> = re
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect();
    codes.sort();
    codes.dedup();
    codes
}
