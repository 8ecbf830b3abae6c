//! Minimal-width term selection with randomized ties at the cutoff length

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of the permutation applied to max width terms.
pub trait Shuffler {
    fn shuffle(&mut self, items: &mut [String]);
}

/// Uniform shuffle backed by any `rand` generator
pub struct RandomShuffler<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomShuffler<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomShuffler<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomShuffler<StdRng> {
    /// Reproducible shuffles for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomShuffler<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Shuffler for RandomShuffler<R> {
    fn shuffle(&mut self, items: &mut [String]) {
        items.shuffle(&mut self.rng);
    }
}

/// Leaves the order untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShuffle;

impl Shuffler for NoShuffle {
    fn shuffle(&mut self, _items: &mut [String]) {}
}

/// Reverses the order, a predictable stand-in for a real shuffle
#[derive(Debug, Default, Clone, Copy)]
pub struct ReverseShuffle;

impl Shuffler for ReverseShuffle {
    fn shuffle(&mut self, items: &mut [String]) {
        items.reverse();
    }
}

fn width(term: &str) -> usize {
    term.chars().count()
}

/// Shuffle the entries of `terms` that have max width.
///
/// Terms shorter than `max_width` keep their relative order and come
/// first, followed by the `max_width` terms in shuffled order. Longer
/// terms are dropped. Without `max_width` the longest term sets it.
pub fn shuffle_max_width_items<S: Shuffler + ?Sized>(
    terms: Vec<String>,
    max_width: Option<usize>,
    shuffler: &mut S,
) -> Vec<String> {
    let max_width = match max_width {
        Some(w) => w,
        None => terms.iter().map(|t| width(t)).max().unwrap_or(0),
    };

    let (mut result, rest): (Vec<String>, Vec<String>) =
        terms.into_iter().partition(|t| width(t) < max_width);
    let mut widest: Vec<String> = rest.into_iter().filter(|t| width(t) == max_width).collect();

    shuffler.shuffle(&mut widest);
    result.extend(widest);
    result
}

/// Pick `count` terms from `pool` with minimal total width.
///
/// Terms are ordered by (char count, value). All terms shorter than the
/// term at the cutoff position are always included; when `shuffle_ties`
/// is set, the terms of exactly the cutoff width are permuted by
/// `shuffler` before cutting, so every one of them has the same chance
/// to make it into the list. The result is in selection order, i.e. by
/// width first.
///
/// Returns fewer than `count` terms only if `pool` is smaller.
pub fn select_min_width<I, S>(pool: I, count: usize, shuffle_ties: bool, shuffler: &mut S) -> Vec<String>
where
    I: IntoIterator<Item = String>,
    S: Shuffler + ?Sized,
{
    let mut all_terms: Vec<String> = pool.into_iter().collect();
    all_terms.sort_by(|a, b| width(a).cmp(&width(b)).then_with(|| a.cmp(b)));

    if count == 0 {
        return Vec::new();
    }

    if shuffle_ties && !all_terms.is_empty() {
        let cutoff = count.min(all_terms.len()) - 1;
        let max_width = width(&all_terms[cutoff]);
        tracing::debug!(max_width, count, "Shuffling max width terms");
        all_terms = shuffle_max_width_items(all_terms, Some(max_width), shuffler);
    }

    all_terms.truncate(count);
    all_terms
}
