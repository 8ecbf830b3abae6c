//! Wordlist generation pipeline

use std::collections::BTreeSet;

use super::base::base_terms;
use super::filter::{filter_chars, AllowedChars};
use super::normalize::normalize;
use super::prefix::strip_matching_prefixes;
use super::radix::{dice_count, dice_label, separator_for};
use super::select::{select_min_width, Shuffler};
use crate::error::{Result, WordlistError};
use crate::types::GenerationConfig;

/// A generated wordlist, rendered line by line on iteration
#[derive(Debug, Clone)]
pub struct Wordlist {
    terms: Vec<String>,
    current_index: usize,
    lowercase: bool,
    numbering: Option<Numbering>,
}

#[derive(Debug, Clone)]
struct Numbering {
    dice_num: usize,
    dice_sides: u64,
    separator: &'static str,
}

impl Wordlist {
    /// Selected terms in output order, before lowercasing and numbering
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Total number of lines
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Render the line at `index`
    pub fn line_at(&self, index: usize) -> Option<String> {
        let term = self.terms.get(index)?;
        let term = if self.lowercase {
            term.to_lowercase()
        } else {
            term.clone()
        };

        Some(match &self.numbering {
            Some(n) => format!(
                "{} {}",
                dice_label(index as u64, n.dice_num, n.dice_sides, n.separator),
                term
            ),
            None => term,
        })
    }
}

impl Iterator for Wordlist {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.line_at(self.current_index)?;
        self.current_index += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.terms.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Wordlist {}

/// Generate a diceware wordlist from `input_terms`.
///
/// Terms are normalized (`normalize`), filtered (`ascii_only`), merged with the selected base lists,
/// deduplicated, optionally reduced to a prefix code and then cut down to
/// `length` terms of minimal total width. The selection is sorted and
/// rendered lazily by the returned [`Wordlist`].
///
/// Fails with [`WordlistError::InsufficientPool`] when fewer than `length`
/// unique terms are left after prefix reduction; nothing is rendered then.
pub fn generate_wordlist<I, S>(input_terms: I, config: &GenerationConfig, shuffler: &mut S) -> Result<Wordlist>
where
    I: IntoIterator<Item = String>,
    S: Shuffler + ?Sized,
{
    config.validate()?;

    let input_terms: Vec<String> = if config.normalize {
        tracing::info!("Normalizing terms");
        input_terms
            .into_iter()
            .map(|term| normalize(&term))
            .filter(|term| !term.is_empty())
            .collect()
    } else {
        input_terms.into_iter().collect()
    };

    let ascii = AllowedChars::ascii();
    let allowed = config.ascii_only.then_some(&ascii);
    if allowed.is_some() {
        tracing::info!("Filtering out non-ASCII terms");
    }

    let pool: BTreeSet<String> = filter_chars(input_terms, allowed)
        .into_iter()
        .chain(base_terms(config.use_kit, config.use_416))
        .collect();
    let mut terms: Vec<String> = pool.into_iter().collect();
    tracing::info!(unique = terms.len(), "Collected unique terms");

    if let Some(prefer_short) = config.prefix_code.prefer_short() {
        terms = strip_matching_prefixes(&terms, true, prefer_short);
        tracing::info!(
            prefix_code = %config.prefix_code,
            remaining = terms.len(),
            "Reduced terms to prefix code"
        );
    }

    if terms.len() < config.length {
        return Err(WordlistError::insufficient_pool(config.length, terms.len()));
    }

    let mut selected = select_min_width(terms, config.length, config.shuffle_max, shuffler);
    selected.sort();
    tracing::info!(length = selected.len(), "Selected minimal width terms");

    let numbering = config.numbered.then(|| Numbering {
        dice_num: dice_count(config.length, config.dice_sides),
        dice_sides: config.dice_sides,
        separator: separator_for(config.dice_sides),
    });

    Ok(Wordlist {
        terms: selected,
        current_index: 0,
        lowercase: config.lowercase,
        numbering,
    })
}
