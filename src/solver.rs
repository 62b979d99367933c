use std::collections::BTreeMap;
use std::time::Instant;

use itertools::Itertools;

use crate::card::Card;
use crate::letters::{ALPHABET_LEN, LetterSet, alphabet};

/// A word survives when it contains none of the bad letters.
pub fn is_good_word(word: &str, bad_letters: LetterSet) -> bool {
    word.chars().all(|letter| !bad_letters.contains(letter))
}

/// Filters `words` down to the survivors, preserving input order.
pub fn get_good_words(words: &[String], bad_letters: LetterSet) -> Vec<String> {
    let mut good_words = Vec::new();
    for word in words {
        if is_good_word(word, bad_letters) {
            good_words.push(word.clone());
        }
    }
    good_words
}

/// Frequency of each survivor count over every possible choice of bad
/// letters.
///
/// The word grid is public before any letter is revealed, so this histogram
/// shows how favorable the card can possibly be: if almost every bad-letter
/// choice leaves a winning number of words, that is a good card to buy, and
/// if no choice reaches the top prize, it is not.
///
/// Words must use alphabet letters only, which the card validator guarantees.
pub fn distribution(words: &[String], bad_letter_count: usize) -> BTreeMap<usize, u64> {
    let started = Instant::now();
    let word_masks = word_masks(words);
    let mut histogram: BTreeMap<usize, u64> = BTreeMap::new();
    for combination in alphabet().combinations(bad_letter_count) {
        let bad_letters: LetterSet = combination.into_iter().collect();
        let survivors = count_survivors(&word_masks, bad_letters);
        *histogram.entry(survivors).or_insert(0) += 1;
    }

    let total: u64 = histogram.values().sum();
    let expected = binomial(ALPHABET_LEN as u64, bad_letter_count as u64);
    assert_eq!(
        total, expected,
        "bad-letter enumeration must cover every combination exactly once"
    );
    log::debug!(
        "enumerated {total} bad-letter sets of size {bad_letter_count} in {:?}",
        started.elapsed()
    );
    histogram
}

/// Like [`distribution`], but restricted to bad-letter choices where the
/// double letter stays good and the bonus word does not survive.
///
/// The first restriction is empirical, not a rule of the game: observed cards
/// mark the double letter good well over 99.9% of the time, so we assume it
/// always is. The second is deliberately conservative; assuming the bonus
/// word is bad discards a large slice of combinations that rarely pay out.
pub fn constrained_distribution(
    words: &[String],
    double_letter: char,
    bonus: &str,
    bad_letter_count: usize,
) -> BTreeMap<usize, u64> {
    let started = Instant::now();
    let word_masks = word_masks(words);
    let bonus_letters: LetterSet = bonus.chars().collect();
    let mut histogram: BTreeMap<usize, u64> = BTreeMap::new();
    for combination in alphabet().combinations(bad_letter_count) {
        let bad_letters: LetterSet = combination.into_iter().collect();
        if bad_letters.contains(double_letter) {
            continue;
        }
        if bonus_letters.intersection(bad_letters).is_empty() {
            continue;
        }
        let survivors = count_survivors(&word_masks, bad_letters);
        *histogram.entry(survivors).or_insert(0) += 1;
    }

    // Closed form for the surviving combination count; it relies on the
    // double letter never being a bonus letter, which validation guarantees.
    let alphabet_rest = (ALPHABET_LEN - 1) as u64;
    let total: u64 = histogram.values().sum();
    let expected = binomial(alphabet_rest, bad_letter_count as u64)
        - binomial(
            alphabet_rest.saturating_sub(bonus_letters.len() as u64),
            bad_letter_count as u64,
        );
    assert_eq!(
        total, expected,
        "constrained enumeration must match its closed-form combination count"
    );
    log::debug!(
        "enumerated {total} constrained bad-letter sets of size {bad_letter_count} in {:?}",
        started.elapsed()
    );
    histogram
}

fn word_masks(words: &[String]) -> Vec<LetterSet> {
    words.iter().map(|word| word.chars().collect()).collect()
}

fn count_survivors(word_masks: &[LetterSet], bad_letters: LetterSet) -> usize {
    word_masks
        .iter()
        .filter(|mask| mask.intersection(bad_letters).is_empty())
        .count()
}

/// n choose k. Exact for the operand sizes used here.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let mut result = 1;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}

/// Outcome of one card against its actual bad letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Surviving words in reading order.
    pub good_words: Vec<String>,
    /// Whether the double letter appears among the surviving words' letters.
    pub doubled: bool,
    /// Whether the bonus word survives.
    pub bonus: bool,
}

pub fn score_card(card: &Card) -> Score {
    let good_words = get_good_words(&card.words, card.bad_letters);
    let good_word_letters: LetterSet = good_words.iter().flat_map(|word| word.chars()).collect();
    Score {
        doubled: good_word_letters.contains(card.double_letter),
        bonus: is_good_word(&card.bonus, card.bad_letters),
        good_words,
    }
}
