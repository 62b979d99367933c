// Library interface for scratchcard-analyzer
// This allows integration tests to access internal modules

pub mod card;
pub mod cli;
pub mod grid;
pub mod letters;
pub mod logging;
pub mod report;
pub mod solver;
pub mod template;

// Re-export commonly used items for easier testing
pub use card::{Card, CardData, CardError, ValidationError, load_card_file, load_card_from_str};
pub use grid::{extract_words, transpose};
pub use letters::LetterSet;
pub use report::Report;
pub use solver::{
    Score, constrained_distribution, distribution, get_good_words, is_good_word, score_card,
};
pub use template::CardTemplate;
