use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::grid::extract_words;
use crate::letters::{LetterSet, is_alphabet_letter};
use crate::template::CardTemplate;

/// Raw card fields as they appear in a card file, before any validation.
#[derive(Debug, Clone, Deserialize)]
pub struct CardData {
    pub layout: Vec<String>,
    pub good_letters: String,
    pub bonus: String,
    pub double_letter: String,
}

/// A card that deviates from its template in any way is rejected with the
/// first violated check; there is no partial validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("saw {observed} words instead of expected {expected}")]
    WordCount { expected: usize, observed: usize },
    #[error("sum of word lengths {observed} instead of expected {expected}")]
    WordLetterCount { expected: usize, observed: usize },
    #[error("words of length {length} occurring {observed} times instead of expected {expected}")]
    WordLengthFrequency {
        length: usize,
        expected: usize,
        observed: usize,
    },
    #[error("word {word:?} contains a letter outside the alphabet")]
    WordOutsideAlphabet { word: String },
    #[error("good letters {good_letters:?} are not unique")]
    GoodLettersNotUnique { good_letters: String },
    #[error("good letters {good_letters:?} contain a letter outside the alphabet")]
    GoodLettersOutsideAlphabet { good_letters: String },
    #[error("{observed} good letters instead of expected {expected}")]
    GoodLetterCount { expected: usize, observed: usize },
    #[error("bonus word {bonus:?} has length {observed} instead of expected {expected}")]
    BonusLength {
        bonus: String,
        expected: usize,
        observed: usize,
    },
    #[error("bonus word {bonus:?} has {observed} distinct letters instead of expected {expected}")]
    BonusDistinctLetters {
        bonus: String,
        expected: usize,
        observed: usize,
    },
    #[error("bonus word {bonus:?} contains a letter outside the alphabet")]
    BonusOutsideAlphabet { bonus: String },
    #[error("double letter {double_letter:?} should be a single letter")]
    DoubleLetterLength { double_letter: String },
    #[error("double letter {double_letter:?} is not amongst good letters {good_letters:?}")]
    DoubleLetterNotGood {
        double_letter: char,
        good_letters: String,
    },
    #[error("double letter {double_letter:?} is outside the alphabet")]
    DoubleLetterOutsideAlphabet { double_letter: char },
    #[error("double letter {double_letter:?} must not appear in bonus word {bonus:?}")]
    DoubleLetterInBonus { double_letter: char, bonus: String },
}

#[derive(Error, Debug)]
pub enum CardError {
    #[error("could not read card file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse card file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub fn load_card_from_str(data: &str) -> Result<CardData, serde_json::Error> {
    serde_json::from_str(data)
}

pub fn load_card_file<P: AsRef<Path>>(path: P) -> Result<CardData, CardError> {
    let contents = fs::read_to_string(path)?;
    Ok(load_card_from_str(&contents)?)
}

/// A validated card: the extracted word list plus the declared letter fields,
/// all known to match the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub layout: Vec<String>,
    /// Horizontal words followed by vertical words, in reading order.
    pub words: Vec<String>,
    /// Union of the letters used by `words`.
    pub word_letters: LetterSet,
    pub good_letters: LetterSet,
    /// Alphabet minus the good letters.
    pub bad_letters: LetterSet,
    pub bonus: String,
    pub double_letter: char,
}

impl Card {
    /// Extracts the words from the layout and checks every field against the
    /// template. Checks run in a fixed order and the first violation is
    /// reported, even when several fields are invalid at once.
    pub fn from_data(data: CardData, template: &CardTemplate) -> Result<Card, ValidationError> {
        let words = extract_words(&data.layout);

        if words.len() != template.word_count {
            return Err(ValidationError::WordCount {
                expected: template.word_count,
                observed: words.len(),
            });
        }

        let letter_total: usize = words.iter().map(|word| word.chars().count()).sum();
        if letter_total != template.word_letter_count {
            return Err(ValidationError::WordLetterCount {
                expected: template.word_letter_count,
                observed: letter_total,
            });
        }

        for &(length, expected) in template.word_length_distribution {
            let observed = words
                .iter()
                .filter(|word| word.chars().count() == length)
                .count();
            if observed != expected {
                return Err(ValidationError::WordLengthFrequency {
                    length,
                    expected,
                    observed,
                });
            }
        }

        for word in &words {
            if !word.chars().all(is_alphabet_letter) {
                return Err(ValidationError::WordOutsideAlphabet { word: word.clone() });
            }
        }
        let word_letters: LetterSet = words.iter().flat_map(|word| word.chars()).collect();

        let good_letter_count = data.good_letters.chars().count();
        let distinct_good: HashSet<char> = data.good_letters.chars().collect();
        if distinct_good.len() != good_letter_count {
            return Err(ValidationError::GoodLettersNotUnique {
                good_letters: data.good_letters.clone(),
            });
        }
        if !data.good_letters.chars().all(is_alphabet_letter) {
            return Err(ValidationError::GoodLettersOutsideAlphabet {
                good_letters: data.good_letters.clone(),
            });
        }
        if good_letter_count != template.good_letter_count {
            return Err(ValidationError::GoodLetterCount {
                expected: template.good_letter_count,
                observed: good_letter_count,
            });
        }
        let good_letters: LetterSet = data.good_letters.chars().collect();
        let bad_letters = LetterSet::all().difference(good_letters);
        assert_eq!(bad_letters.len(), template.bad_letter_count());

        let bonus_length = data.bonus.chars().count();
        if bonus_length != template.bonus_length {
            return Err(ValidationError::BonusLength {
                bonus: data.bonus.clone(),
                expected: template.bonus_length,
                observed: bonus_length,
            });
        }
        let distinct_bonus: HashSet<char> = data.bonus.chars().collect();
        if distinct_bonus.len() != template.bonus_distinct_letters {
            return Err(ValidationError::BonusDistinctLetters {
                bonus: data.bonus.clone(),
                expected: template.bonus_distinct_letters,
                observed: distinct_bonus.len(),
            });
        }
        if !data.bonus.chars().all(is_alphabet_letter) {
            return Err(ValidationError::BonusOutsideAlphabet {
                bonus: data.bonus.clone(),
            });
        }

        let mut double_chars = data.double_letter.chars();
        let double_letter = match (double_chars.next(), double_chars.next()) {
            (Some(letter), None) => letter,
            _ => {
                return Err(ValidationError::DoubleLetterLength {
                    double_letter: data.double_letter.clone(),
                });
            }
        };
        if !data.good_letters.contains(double_letter) {
            return Err(ValidationError::DoubleLetterNotGood {
                double_letter,
                good_letters: data.good_letters.clone(),
            });
        }
        if !is_alphabet_letter(double_letter) {
            return Err(ValidationError::DoubleLetterOutsideAlphabet { double_letter });
        }
        if data.bonus.contains(double_letter) {
            return Err(ValidationError::DoubleLetterInBonus {
                double_letter,
                bonus: data.bonus.clone(),
            });
        }

        Ok(Card {
            layout: data.layout,
            words,
            word_letters,
            good_letters,
            bad_letters,
            bonus: data.bonus,
            double_letter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Small template so tests can spell out entire cards inline.
    const TINY: CardTemplate = CardTemplate {
        word_count: 2,
        word_letter_count: 7,
        good_letter_count: 20,
        bonus_length: 6,
        bonus_distinct_letters: 5,
        word_length_distribution: &[(3, 1), (4, 1)],
    };

    fn tiny_card() -> CardData {
        CardData {
            layout: vec!["cat.mice".to_string()],
            good_letters: "abcdefghijklmnopqrst".to_string(),
            bonus: "indigo".to_string(),
            double_letter: "e".to_string(),
        }
    }

    #[test]
    fn test_valid_card_is_accepted() {
        let card = Card::from_data(tiny_card(), &TINY).unwrap();
        assert_eq!(card.words, vec!["cat".to_string(), "mice".to_string()]);
        assert_eq!(card.word_letters, "catmice".chars().collect());
        assert_eq!(card.bad_letters, "uvwxyz".chars().collect());
        assert_eq!(card.double_letter, 'e');
    }

    #[test]
    fn test_wrong_word_count() {
        let mut data = tiny_card();
        data.layout = vec!["cat.mice.ox".to_string()];
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::WordCount {
                expected: 2,
                observed: 3,
            })
        );
    }

    #[test]
    fn test_wrong_word_letter_total() {
        let mut data = tiny_card();
        data.layout = vec!["cat.miced".to_string()];
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::WordLetterCount {
                expected: 7,
                observed: 8,
            })
        );
    }

    #[test]
    fn test_wrong_word_length_frequency() {
        // Right count and total, but a 2-letter and a 5-letter word
        let mut data = tiny_card();
        data.layout = vec!["at.miced".to_string()];
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::WordLengthFrequency {
                length: 3,
                expected: 1,
                observed: 0,
            })
        );
    }

    #[test]
    fn test_word_outside_alphabet() {
        let mut data = tiny_card();
        data.layout = vec!["cAt.mice".to_string()];
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::WordOutsideAlphabet {
                word: "cAt".to_string(),
            })
        );
    }

    #[test]
    fn test_duplicate_good_letters() {
        let mut data = tiny_card();
        data.good_letters = "aabcdefghijklmnopqrs".to_string();
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::GoodLettersNotUnique {
                good_letters: "aabcdefghijklmnopqrs".to_string(),
            })
        );
    }

    #[test]
    fn test_good_letters_outside_alphabet() {
        let mut data = tiny_card();
        data.good_letters = "Abcdefghijklmnopqrst".to_string();
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::GoodLettersOutsideAlphabet {
                good_letters: "Abcdefghijklmnopqrst".to_string(),
            })
        );
    }

    #[test]
    fn test_wrong_good_letter_count() {
        let mut data = tiny_card();
        data.good_letters = "abcdefghijklmnopqrs".to_string();
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::GoodLetterCount {
                expected: 20,
                observed: 19,
            })
        );
    }

    #[test]
    fn test_wrong_bonus_length() {
        let mut data = tiny_card();
        data.bonus = "indigos".to_string();
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::BonusLength {
                bonus: "indigos".to_string(),
                expected: 6,
                observed: 7,
            })
        );
    }

    #[test]
    fn test_wrong_bonus_distinct_letters() {
        let mut data = tiny_card();
        data.bonus = "cheese".to_string();
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::BonusDistinctLetters {
                bonus: "cheese".to_string(),
                expected: 5,
                observed: 4,
            })
        );
    }

    #[test]
    fn test_bonus_outside_alphabet() {
        let mut data = tiny_card();
        data.bonus = "indigO".to_string();
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::BonusOutsideAlphabet {
                bonus: "indigO".to_string(),
            })
        );
    }

    #[test]
    fn test_double_letter_must_be_single() {
        let mut data = tiny_card();
        data.double_letter = "ee".to_string();
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::DoubleLetterLength {
                double_letter: "ee".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_double_letter_rejected() {
        let mut data = tiny_card();
        data.double_letter = String::new();
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::DoubleLetterLength {
                double_letter: String::new(),
            })
        );
    }

    #[test]
    fn test_double_letter_must_be_good() {
        let mut data = tiny_card();
        data.double_letter = "z".to_string();
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::DoubleLetterNotGood {
                double_letter: 'z',
                good_letters: "abcdefghijklmnopqrst".to_string(),
            })
        );
    }

    #[test]
    fn test_double_letter_must_not_be_in_bonus() {
        let mut data = tiny_card();
        data.double_letter = "i".to_string();
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::DoubleLetterInBonus {
                double_letter: 'i',
                bonus: "indigo".to_string(),
            })
        );
    }

    #[test]
    fn test_first_violation_wins() {
        // Both the word list and the bonus word are broken; the word check
        // runs first
        let mut data = tiny_card();
        data.layout = vec!["cat.mice.ox".to_string()];
        data.bonus = "banana".to_string();
        assert_eq!(
            Card::from_data(data, &TINY),
            Err(ValidationError::WordCount {
                expected: 2,
                observed: 3,
            })
        );
    }

    #[test]
    fn test_load_card_from_str_rejects_malformed_json() {
        assert!(load_card_from_str("{not json").is_err());
    }

    #[test]
    fn test_load_card_from_str_parses_fields() {
        let data = load_card_from_str(
            r#"{
                "layout": ["cat.mice"],
                "good_letters": "abcdefghijklmnopqrst",
                "bonus": "indigo",
                "double_letter": "e"
            }"#,
        )
        .unwrap();
        assert_eq!(data.layout, vec!["cat.mice".to_string()]);
        assert_eq!(data.good_letters, "abcdefghijklmnopqrst");
        assert_eq!(data.bonus, "indigo");
        assert_eq!(data.double_letter, "e");
    }
}
