use std::fmt;

/// Number of letters in the card alphabet (lowercase a-z).
pub const ALPHABET_LEN: usize = 26;

/// The card alphabet in order.
pub fn alphabet() -> impl Iterator<Item = char> {
    'a'..='z'
}

pub fn is_alphabet_letter(letter: char) -> bool {
    letter.is_ascii_lowercase()
}

/// Set of alphabet letters, one bit per letter.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct LetterSet {
    bits: u32,
}

impl LetterSet {
    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn all() -> Self {
        Self {
            bits: (1 << ALPHABET_LEN) - 1,
        }
    }

    pub fn contains(&self, letter: char) -> bool {
        is_alphabet_letter(letter) && self.bits & (1 << letter_index(letter)) != 0
    }

    pub fn insert(&mut self, letter: char) {
        assert!(
            is_alphabet_letter(letter),
            "letter {letter:?} is outside the a-z alphabet"
        );
        self.bits |= 1 << letter_index(letter);
    }

    pub fn union(self, other: LetterSet) -> LetterSet {
        LetterSet {
            bits: self.bits | other.bits,
        }
    }

    pub fn intersection(self, other: LetterSet) -> LetterSet {
        LetterSet {
            bits: self.bits & other.bits,
        }
    }

    pub fn difference(self, other: LetterSet) -> LetterSet {
        LetterSet {
            bits: self.bits & !other.bits,
        }
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Member letters in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = char> {
        alphabet().filter(move |&letter| self.contains(letter))
    }
}

fn letter_index(letter: char) -> u32 {
    letter as u32 - 'a' as u32
}

impl FromIterator<char> for LetterSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = char>,
    {
        let mut set = Self::empty();
        iter.into_iter().for_each(|letter| set.insert(letter));
        set
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        write!(f, "]")
    }
}
