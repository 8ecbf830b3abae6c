//! Core types and structures for diceware-list

use std::str::FromStr;
use std::time::Duration;

use crate::error::{Result, WordlistError};

/// We normally handle 6-sided dice.
pub const DICE_SIDES: u64 = 6;

/// Default number of terms in a generated wordlist.
pub const DEFAULT_LENGTH: usize = 8192;

/// Where the Android keyboard dictionaries live upstream.
pub const ANDROID_BASE_URL: &str =
    "https://android.googlesource.com/platform/packages/inputmethods/LatinIME/+/master/dictionaries/";

/// Kind of prefix code to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixCode {
    /// Keep all terms, even if some prefix others
    #[default]
    None,
    /// Keep prefixes, drop the terms they prefix
    Short,
    /// Keep the longest terms, drop their prefixes
    Long,
}

impl PrefixCode {
    /// `Some(prefer_short)` when a reduction is requested
    pub fn prefer_short(&self) -> Option<bool> {
        match self {
            PrefixCode::None => None,
            PrefixCode::Short => Some(true),
            PrefixCode::Long => Some(false),
        }
    }
}

impl std::fmt::Display for PrefixCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefixCode::None => write!(f, "none"),
            PrefixCode::Short => write!(f, "short"),
            PrefixCode::Long => write!(f, "long"),
        }
    }
}

impl FromStr for PrefixCode {
    type Err = WordlistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(PrefixCode::None),
            "short" => Ok(PrefixCode::Short),
            "long" => Ok(PrefixCode::Long),
            other => Err(WordlistError::parse(
                format!("unknown prefix code '{}', expected none, short or long", other),
                Some(s.to_string()),
            )),
        }
    }
}

/// Filter on the `possibly_offensive` flag of Android dictionary words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffensiveFilter {
    /// Ignore the flag
    #[default]
    Any,
    /// Only flagged words
    Only,
    /// No flagged words
    Exclude,
}

impl OffensiveFilter {
    pub fn as_option(&self) -> Option<bool> {
        match self {
            OffensiveFilter::Any => None,
            OffensiveFilter::Only => Some(true),
            OffensiveFilter::Exclude => Some(false),
        }
    }
}

impl FromStr for OffensiveFilter {
    type Err = WordlistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(OffensiveFilter::Any),
            "yes" | "only" => Ok(OffensiveFilter::Only),
            "no" | "exclude" => Ok(OffensiveFilter::Exclude),
            other => Err(WordlistError::parse(
                format!("unknown offensive filter '{}', expected yes, no or any", other),
                Some(s.to_string()),
            )),
        }
    }
}

/// Configuration for wordlist generation
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Number of terms in the result
    pub length: usize,
    /// Lowercase terms on output.
    ///
    /// Applied per rendered line, after selection and sorting: mixed-case
    /// input can render out of order (`Y`, `Z`, `x` gives `y`, `z`, `x`)
    /// or twice (`Foo` and `foo`).
    pub lowercase: bool,
    /// Add the bundled "dicewarekit" terms
    pub use_kit: bool,
    /// Add the bundled "diceware416" terms
    pub use_416: bool,
    /// Prepend dice labels
    pub numbered: bool,
    /// Map terms through [`crate::wordlist::normalize`] before filtering
    pub normalize: bool,
    /// Drop terms with chars outside the ASCII letters, digits and punctuation
    pub ascii_only: bool,
    /// Shuffle max width terms before cutting
    pub shuffle_max: bool,
    pub prefix_code: PrefixCode,
    pub dice_sides: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            lowercase: true,
            use_kit: false,
            use_416: false,
            numbered: false,
            normalize: false,
            ascii_only: false,
            shuffle_max: true,
            prefix_code: PrefixCode::None,
            dice_sides: DICE_SIDES,
        }
    }
}

impl GenerationConfig {
    /// Reject settings the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.dice_sides < 2 {
            return Err(crate::config_error!(
                "dice need at least 2 sides, got {}",
                self.dice_sides
            ));
        }
        Ok(())
    }
}

/// Configuration for the flake checker
#[derive(Debug, Clone)]
pub struct FlakeConfig {
    /// Logarithm base used to derive the minimal term length from the list size.
    ///
    /// A term with `k` chars drawn from an alphabet of `base` symbols cannot
    /// carry more than `k * log2(base)` bits, so terms shorter than
    /// `log(n) / log(base)` are easier to guess char by char than by word.
    pub min_length_base: f64,
    /// Report non-ASCII terms (W1)
    pub check_ascii: bool,
}

impl Default for FlakeConfig {
    fn default() -> Self {
        Self {
            min_length_base: 26.0,
            check_ascii: true,
        }
    }
}

/// Runtime settings taken from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Android dictionary index, ending with `/`
    pub android_base_url: String,
    pub download_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            android_base_url: ANDROID_BASE_URL.to_string(),
            download_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Read `DICEWARE_ANDROID_BASE_URL` and `DICEWARE_DOWNLOAD_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("DICEWARE_ANDROID_BASE_URL") {
            let url = url.trim();
            if !url.is_empty() {
                config.android_base_url = if url.ends_with('/') {
                    url.to_string()
                } else {
                    format!("{}/", url)
                };
            }
        }

        if let Ok(secs) = std::env::var("DICEWARE_DOWNLOAD_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                WordlistError::config(format!(
                    "DICEWARE_DOWNLOAD_TIMEOUT_SECS must be a number of seconds, got '{}'",
                    secs
                ))
            })?;
            config.download_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
