//! diceware-list - build diceware wordlists from dictionaries
//!
//! Selects a fixed number of short, unique terms from any number of
//! dictionaries, optionally as a prefix code and numbered by dice rolls.
//! Comes with a checker for existing lists and a downloader for the
//! Android keyboard dictionaries.

pub mod android;
pub mod error;
pub mod flakes;
pub mod source;
pub mod types;
pub mod wordlist;

// Re-export commonly used types
pub use error::{Result, WordlistError};
pub use types::{Config, FlakeConfig, GenerationConfig, OffensiveFilter, PrefixCode};

// Re-export main functionality
pub use android::AndroidWordList;
pub use flakes::{check_flakes, FlakeCode, Finding};
pub use wordlist::{generate_wordlist, normalize, RandomShuffler, Shuffler, Wordlist};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
