//! Wordlist core: normalization, dice labels, prefix codes and
//! minimal-width selection

mod base;
mod filter;
mod generator;
mod normalize;
mod prefix;
mod radix;
mod select;

pub use base::base_terms;
pub use filter::{filter_chars, AllowedChars};
pub use generator::{generate_wordlist, Wordlist};
pub use normalize::normalize;
pub use prefix::{
    build_prefix_tree, flatten_prefix_tree, is_prefix, is_prefix_code, matching_prefixes,
    strip_matching_prefixes, PrefixNode,
};
pub use radix::{dice_count, dice_label, digits_of, separator_for};
pub use select::{
    select_min_width, shuffle_max_width_items, NoShuffle, RandomShuffler, ReverseShuffle, Shuffler,
};
