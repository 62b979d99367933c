use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::card::Card;
use crate::letters::LetterSet;
use crate::solver::Score;

/// Everything the analyzer reports for one card.
///
/// Renders as a single tab-separated line via [`fmt::Display`], or as a JSON
/// document via serde. Histograms map survivor count to the number of
/// bad-letter sets producing it.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: String,
    /// Number of surviving words.
    pub score: usize,
    pub doubled: bool,
    pub bonus: bool,
    /// Non-blank cells in the layout.
    pub squares_used: usize,
    pub good_word_letters: usize,
    pub bad_word_letters: usize,
    pub all_word_letters: usize,
    /// Alphabet letters used by no word, in alphabetical order.
    pub non_word_letters: String,
    pub good_words: Vec<String>,
    pub distribution: BTreeMap<usize, u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constrained_distribution: Option<BTreeMap<usize, u64>>,
}

impl Report {
    pub fn new(
        source: &str,
        card: &Card,
        score: Score,
        distribution: BTreeMap<usize, u64>,
        constrained_distribution: Option<BTreeMap<usize, u64>>,
    ) -> Report {
        let squares_used = card
            .layout
            .iter()
            .flat_map(|row| row.chars())
            .filter(|&c| c != '.')
            .count();
        Report {
            source: source.to_string(),
            score: score.good_words.len(),
            doubled: score.doubled,
            bonus: score.bonus,
            squares_used,
            good_word_letters: card.word_letters.intersection(card.good_letters).len(),
            bad_word_letters: card.word_letters.intersection(card.bad_letters).len(),
            all_word_letters: card.word_letters.len(),
            non_word_letters: LetterSet::all().difference(card.word_letters).iter().collect(),
            good_words: score.good_words,
            distribution,
            constrained_distribution,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let histogram = serde_json::to_string(&self.distribution).map_err(|_| fmt::Error)?;
        write!(
            f,
            "{}\tscore: {}\tdoubled: {}\tbonus: {}\tsquares used: {}\t\
             good word letters: {}\tbad word letters: {}\tall word letters: {}\t\
             non-word letters: {}\tgood words: {}\t{}",
            self.source,
            self.score,
            self.doubled,
            self.bonus,
            self.squares_used,
            self.good_word_letters,
            self.bad_word_letters,
            self.all_word_letters,
            self.non_word_letters,
            self.good_words.join(","),
            histogram,
        )?;
        if let Some(constrained) = &self.constrained_distribution {
            let histogram = serde_json::to_string(constrained).map_err(|_| fmt::Error)?;
            write!(f, "\tconstrained: {histogram}")?;
        }
        Ok(())
    }
}
