//! Letter frequency counting
//!
//! This module counts case-folded ASCII Latin letters in arbitrary text.
//! Everything that is not an ASCII letter (digits, whitespace,
//! punctuation, non-Latin characters) is ignored.

/// Number of letters in the tracked alphabet (A-Z)
pub const ALPHABET_LEN: usize = 26;

/// Occurrence count for a single letter
///
/// `letter` is always uppercase `A`-`Z` and `count` is always positive;
/// letters absent from the input never produce an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterCount {
    /// The counted letter, folded to uppercase
    pub letter: char,
    /// Number of occurrences, strictly greater than zero
    pub count: u32,
}

impl LetterCount {
    /// Create a new letter count entry
    pub fn new(letter: char, count: u32) -> Self {
        Self { letter, count }
    }
}

/// Count occurrences of each Latin letter in `text`, case-insensitive
///
/// Characters are folded to uppercase before counting. The result lists
/// only letters that actually occur, in alphabetical order A through Z.
/// Empty or letter-free text yields an empty vector.
///
/// # Examples
/// ```
/// use seqtally::{LetterCount, letter_frequency};
///
/// let counts = letter_frequency("aAbb!! 123");
/// assert_eq!(
///     counts,
///     vec![LetterCount::new('A', 2), LetterCount::new('B', 2)]
/// );
/// ```
pub fn letter_frequency(text: &str) -> Vec<LetterCount> {
    let mut tally = [0u32; ALPHABET_LEN];

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            let slot = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            tally[slot] += 1;
        }
    }

    tally
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(slot, &count)| LetterCount::new((b'A' + slot as u8) as char, count))
        .collect()
}
