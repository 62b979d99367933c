use crate::letters::ALPHABET_LEN;

/// Fixed physical shape a valid card must match.
///
/// Every card of a given print run shares these counts, so the validator
/// takes a template rather than hard-coding them.
#[derive(Debug, Clone)]
pub struct CardTemplate {
    pub word_count: usize,
    pub word_letter_count: usize,
    pub good_letter_count: usize,
    pub bonus_length: usize,
    pub bonus_distinct_letters: usize,
    /// Expected number of words per word length. Lengths not listed here are
    /// unconstrained.
    pub word_length_distribution: &'static [(usize, usize)],
}

impl CardTemplate {
    /// The standard card: 19 grid words totalling 97 letters, 20 revealed good
    /// letters (leaving 6 bad), and a 6-letter bonus word with 5 distinct
    /// letters.
    pub const STANDARD: CardTemplate = CardTemplate {
        word_count: 19,
        word_letter_count: 97,
        good_letter_count: 20,
        bonus_length: 6,
        bonus_distinct_letters: 5,
        word_length_distribution: &[(3, 4), (4, 5), (5, 3), (6, 3), (7, 1), (8, 2), (9, 1)],
    };

    /// Number of bad letters implied by the good-letter count.
    pub fn bad_letter_count(&self) -> usize {
        ALPHABET_LEN - self.good_letter_count
    }
}
