use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed label alphabet. A keyword list can never hold more clues than this.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Maximum number of clues a puzzle can carry.
pub const MAX_CLUES: usize = ALPHABET.len();

/// Single uppercase letter identifying a clue, and every grid index that clue claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Label(char);

impl Label {
    /// Label of the clue at `position` (0-indexed) in the keyword list.
    pub fn nth(position: usize) -> Option<Self> {
        ALPHABET.get(position).copied().map(Label)
    }

    /// Position of this label in the alphabet, i.e. the index of the clue it names.
    pub fn position(self) -> usize {
        ALPHABET
            .iter()
            .position(|&c| c == self.0)
            .unwrap_or_default()
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Case-insensitive comparison against the first character of a hint line.
    pub fn matches(self, c: char) -> bool {
        c.to_ascii_uppercase() == self.0
    }
}

impl TryFrom<char> for Label {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if ALPHABET.contains(&c) {
            Ok(Label(c))
        } else {
            Err(format!("'{}' is not a clue label", c))
        }
    }
}

impl From<Label> for char {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
