//! diceware-list - build diceware wordlists from dictionaries
//!
//! Generates wordlists, checks existing ones for flakes and fetches the
//! Android keyboard dictionaries as raw material.

use clap::{Parser, Subcommand};
use diceware_list::{
    android::{self, AndroidWordList},
    check_flakes, generate_wordlist, source,
    types::{DEFAULT_LENGTH, DICE_SIDES},
    Config, FlakeConfig, Finding, GenerationConfig, OffensiveFilter, PrefixCode, RandomShuffler,
    Result, WordlistError,
};
use serde::Serialize;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "diceware-list")]
#[command(version, about = "Create and check diceware wordlists")]
struct Cli {
    /// Be verbose (-v info, -vv debug), log goes to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a wordlist from dictionary files
    Generate {
        /// Number of terms in the wordlist
        #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
        length: usize,

        /// Prepend dice numbers to terms
        #[arg(short, long)]
        numbered: bool,

        /// Transliterate terms and strip diacritics ("mäßig" becomes "maessig")
        #[arg(long)]
        normalize: bool,

        /// Use only terms made of ASCII letters, digits and punctuation
        #[arg(long)]
        ascii: bool,

        /// Number of sides of the dice used for numbering
        #[arg(short, long, default_value_t = DICE_SIDES)]
        dice_sides: u64,

        /// Add the terms of the "dicewarekit" list
        #[arg(short = 'k', long)]
        use_kit: bool,

        /// Add the terms of the "diceware416" list
        #[arg(long = "use-416")]
        use_416: bool,

        /// Kind of prefix code to enforce
        #[arg(short, long, default_value_t = PrefixCode::None)]
        prefix: PrefixCode,

        /// Do not shuffle terms of maximal length before cutting the list
        #[arg(long)]
        no_shuffle: bool,

        /// Keep the case of terms instead of lowercasing them
        #[arg(long)]
        keep_case: bool,

        /// Seed for shuffling, for reproducible lists
        #[arg(long)]
        seed: Option<u64>,

        /// Dictionary files, one term per line; `-` reads stdin
        #[arg(required = true, value_name = "DICTFILE")]
        dictfiles: Vec<PathBuf>,
    },
    /// Find flakes in existing wordlists
    Flakes {
        /// Alphabet size used to derive the minimal term length
        #[arg(long, default_value_t = 26.0)]
        base: f64,

        /// Do not warn about non-ASCII terms
        #[arg(long)]
        allow_non_ascii: bool,

        /// Report findings as JSON
        #[arg(long)]
        json: bool,

        /// Wordlist files to check; `-` reads stdin
        #[arg(required = true, value_name = "WORDLIST")]
        wordlists: Vec<PathBuf>,
    },
    /// Download an Android keyboard dictionary
    Download {
        /// Language code of the dictionary
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Where to write the result
        #[arg(short, long)]
        outfile: Option<PathBuf>,

        /// Store the gzipped dictionary as downloaded (default path: $HOME/<name>)
        #[arg(long)]
        raw: bool,

        /// Only keep (yes) or drop (no) words flagged as possibly offensive
        #[arg(long, default_value = "any")]
        offensive: OffensiveFilter,

        /// List the available language codes and exit
        #[arg(long)]
        list_langs: bool,
    },
    /// Print the words of a local Android dictionary file
    Words {
        /// Only keep (yes) or drop (no) words flagged as possibly offensive
        #[arg(long, default_value = "any")]
        offensive: OffensiveFilter,

        /// Gzipped Android dictionary
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Initialize the library
    if let Err(e) = diceware_list::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command).await {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run a subcommand; `Ok(false)` means the command found problems
async fn run(command: Command) -> Result<bool> {
    match command {
        Command::Generate {
            length,
            numbered,
            normalize,
            ascii,
            dice_sides,
            use_kit,
            use_416,
            prefix,
            no_shuffle,
            keep_case,
            seed,
            dictfiles,
        } => {
            let config = GenerationConfig {
                length,
                lowercase: !keep_case,
                use_kit,
                use_416,
                numbered,
                normalize,
                ascii_only: ascii,
                shuffle_max: !no_shuffle,
                prefix_code: prefix,
                dice_sides,
            };
            run_generate(&dictfiles, &config, seed)?;
            Ok(true)
        }
        Command::Flakes {
            base,
            allow_non_ascii,
            json,
            wordlists,
        } => {
            let config = FlakeConfig {
                min_length_base: base,
                check_ascii: !allow_non_ascii,
            };
            run_flakes(&wordlists, &config, json)
        }
        Command::Download {
            lang,
            outfile,
            raw,
            offensive,
            list_langs,
        } => {
            let config = Config::from_env()?;
            if list_langs {
                let list = AndroidWordList::with_config(&config, &lang);
                let mut out = stdout();
                for code in list.valid_lang_codes().await? {
                    writeln!(out, "{}", code)?;
                }
                out.flush()?;
                return Ok(true);
            }
            android::validate_lang(&lang)?;
            let mut list = AndroidWordList::with_config(&config, &lang);
            list.download().await?;
            if raw {
                let path = list.save_path(outfile.as_deref());
                list.save(&path)?;
                eprintln!("✅ Saved {} to {}", list.basename(), path.display());
            } else {
                write_words(&list.words(offensive.as_option())?, outfile.as_deref())?;
            }
            Ok(true)
        }
        Command::Words { offensive, path } => {
            let mut list = AndroidWordList::from_source(&Config::default(), path.to_string_lossy());
            list.download().await?;
            write_words(&list.words(offensive.as_option())?, None)?;
            Ok(true)
        }
    }
}

fn run_generate(dictfiles: &[PathBuf], config: &GenerationConfig, seed: Option<u64>) -> Result<()> {
    let terms = source::read_paths(dictfiles)?;
    let wordlist = match seed {
        Some(seed) => generate_wordlist(terms, config, &mut RandomShuffler::seeded(seed))?,
        None => generate_wordlist(terms, config, &mut RandomShuffler::new())?,
    };

    let mut out = stdout();
    for line in wordlist {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct FileReport<'a> {
    path: String,
    findings: &'a [Finding],
}

fn run_flakes(wordlists: &[PathBuf], config: &FlakeConfig, json: bool) -> Result<bool> {
    let mut reports = Vec::new();
    for path in wordlists {
        let terms = source::read_path(path)?;
        reports.push((path.to_string_lossy().to_string(), check_flakes(&terms, config)));
    }

    let mut out = stdout();
    if json {
        let reports: Vec<FileReport> = reports
            .iter()
            .map(|(path, findings)| FileReport {
                path: path.clone(),
                findings,
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
    } else {
        for (path, findings) in &reports {
            for finding in findings {
                writeln!(out, "{}:{}", path, finding)?;
            }
        }
    }
    out.flush()?;

    let clean = reports
        .iter()
        .all(|(_, findings)| findings.iter().all(|f| !f.code.is_error()));
    Ok(clean)
}

/// Write words to `outfile`, never overwriting, or to stdout
fn write_words(words: &[String], outfile: Option<&Path>) -> Result<()> {
    let mut out: Box<dyn Write> = match outfile {
        Some(path) => {
            let display = path.to_string_lossy().to_string();
            let file = std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .map_err(|e| WordlistError::io(e.to_string(), Some(display)))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(stdout()),
    };
    for word in words {
        writeln!(out, "{}", word)?;
    }
    out.flush()?;
    Ok(())
}

fn stdout() -> BufWriter<io::StdoutLock<'static>> {
    BufWriter::new(io::stdout().lock())
}
