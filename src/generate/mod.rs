//! Per-type question card generators.
//!
//! Each generator turns a word (or a batch of words, for fill groups) into a
//! [`crate::types::TestCard`] under a fixed direction. Generators never pick
//! the direction or the word; [`crate::deck`] drives them.

pub mod fill_group;
pub mod multiple_choice;
pub mod true_false;
pub mod written;

use rand::RngCore;

/// Mint a deck-unique card id like `wr-0A1B2C3D`.
fn card_id(prefix: &str, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", prefix, rng.next_u32())
}
