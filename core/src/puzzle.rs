use crate::{Clue, Grid, Label, MAX_CLUES, Metadata, ParseError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::str::FromStr;

/// A fully validated acrostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub title: String,
    pub author: String,
    pub grid: Grid,
    pub clues: Vec<Clue>,
    /// Grid index (1-based) to the label of the clue claiming it.
    pub labels: BTreeMap<usize, Label>,
}

impl Puzzle {
    /// Combine the parsed parts, deriving the label map and checking that
    /// every letter square is claimed by exactly one clue character.
    pub fn assemble(metadata: Metadata, grid: Grid, clues: Vec<Clue>) -> Result<Self, ParseError> {
        let labels = derive_labels(&grid, &clues)?;
        Ok(Self {
            title: metadata.title,
            author: metadata.author,
            grid,
            clues,
            labels,
        })
    }

    /// Re-run every structural check on a value that did not come from [`crate::parse`],
    /// e.g. one deserialized from disk. The label map is derived afresh.
    pub fn revalidated(self) -> Result<Self, ParseError> {
        let grid = Grid::from_rows(self.grid.rows)?;
        if self.clues.len() > MAX_CLUES {
            return Err(ParseError::TooManyClues {
                clues: self.clues.len(),
            });
        }
        for (i, clue) in self.clues.iter().enumerate() {
            let expected = Label::nth(i).ok_or(ParseError::TooManyClues {
                clues: self.clues.len(),
            })?;
            if clue.label != expected {
                return Err(ParseError::ClueLabelMismatch {
                    expected,
                    line: format!("{}. {}", clue.label, clue.hint),
                });
            }
            if clue.length() != clue.mapping.len() {
                return Err(ParseError::MappingLengthMismatch {
                    label: clue.label,
                    answer: clue.length(),
                    mapping: clue.mapping.len(),
                });
            }
        }
        let metadata = Metadata {
            title: self.title,
            author: self.author,
        };
        Self::assemble(metadata, grid, self.clues)
    }

    /// Number of letter squares in the grid.
    pub fn characters(&self) -> usize {
        self.grid.letter_count()
    }

    pub fn label_at(&self, index: usize) -> Option<Label> {
        self.labels.get(&index).copied()
    }

    pub fn clue(&self, label: Label) -> Option<&Clue> {
        self.clues.get(label.position()).filter(|c| c.label == label)
    }

    /// Grid rows with every letter square replaced by its owning label.
    pub fn label_rows(&self) -> Vec<String> {
        let mut rows: Vec<Vec<char>> = self.grid.rows.iter().map(|r| r.chars().collect()).collect();
        for square in self.grid.squares() {
            if let Some(label) = self.label_at(square.index) {
                rows[square.row][square.col] = label.as_char();
            }
        }
        rows.into_iter().map(|row| row.into_iter().collect::<String>()).collect()
    }
}

impl FromStr for Puzzle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

/// Build the index to label map.
///
/// Checks run in a fixed order over the clues in declaration order: duplicate
/// indices first, then the letter count, then the index range.
fn derive_labels(grid: &Grid, clues: &[Clue]) -> Result<BTreeMap<usize, Label>, ParseError> {
    let characters = grid.letter_count();

    let mut labels = BTreeMap::new();
    for clue in clues {
        for &index in &clue.mapping {
            match labels.entry(index) {
                Entry::Occupied(entry) => {
                    return Err(ParseError::DuplicateIndex {
                        index,
                        first: *entry.get(),
                        second: clue.label,
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(clue.label);
                }
            }
        }
    }

    if characters != labels.len() {
        return Err(ParseError::LabelCountMismatch {
            characters,
            labeled: labels.len(),
        });
    }

    for clue in clues {
        if let Some(&index) = clue
            .mapping
            .iter()
            .find(|&&index| index < 1 || index > characters)
        {
            return Err(ParseError::IndexOutOfRange {
                label: clue.label,
                index,
                characters,
            });
        }
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue::parse_clues;

    fn grid(lines: &[&str]) -> Grid {
        Grid::from_rows(lines.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    fn clues(lines: &[&str]) -> Vec<Clue> {
        parse_clues(&lines.iter().map(|s| s.to_string()).collect::<Vec<_>>()).unwrap()
    }

    fn meta() -> Metadata {
        Metadata {
            title: "T".to_string(),
            author: "A".to_string(),
        }
    }

    fn label(c: char) -> Label {
        Label::try_from(c).unwrap()
    }

    #[test]
    fn test_assemble_two_clues() {
        // A B #
        // # C D
        let puzzle = Puzzle::assemble(
            meta(),
            grid(&["AB#", "#CD"]),
            clues(&["A. one", "AD", "1 4", "B. two", "BC", "2 3"]),
        )
        .unwrap();

        assert_eq!(puzzle.characters(), 4);
        assert_eq!(puzzle.label_at(1), Some(label('A')));
        assert_eq!(puzzle.label_at(2), Some(label('B')));
        assert_eq!(puzzle.label_at(3), Some(label('B')));
        assert_eq!(puzzle.label_at(4), Some(label('A')));
        assert_eq!(puzzle.label_at(5), None);
        assert_eq!(puzzle.label_rows(), vec!["AB#", "#BA"]);
        assert_eq!(puzzle.clue(label('B')).map(|c| c.answer.as_str()), Some("BC"));
        assert!(puzzle.clue(label('C')).is_none());
    }

    #[test]
    fn test_duplicate_across_clues_names_both() {
        let err = Puzzle::assemble(
            meta(),
            grid(&["AB", "CD"]),
            clues(&["A. one", "AB", "1 2", "B. two", "CD", "2 4"]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicateIndex {
                index: 2,
                first: label('A'),
                second: label('B'),
            }
        );
    }

    #[test]
    fn test_duplicate_reported_before_count() {
        // both a duplicate and a missing square; the duplicate surfaces
        let err = Puzzle::assemble(meta(), grid(&["ABCD"]), clues(&["A. one", "ABC", "1 1 2"]))
            .unwrap_err();
        assert!(matches!(err, ParseError::DuplicateIndex { index: 1, .. }));
    }

    #[test]
    fn test_count_reported_before_range() {
        let err = Puzzle::assemble(meta(), grid(&["ABC"]), clues(&["A. one", "AB", "1 9"]))
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::LabelCountMismatch {
                characters: 3,
                labeled: 2
            }
        );
    }

    #[test]
    fn test_index_out_of_range() {
        let err = Puzzle::assemble(meta(), grid(&["ABC"]), clues(&["A. one", "ABC", "1 2 4"]))
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::IndexOutOfRange {
                label: label('A'),
                index: 4,
                characters: 3,
            }
        );
    }

    #[test]
    fn test_index_zero_out_of_range() {
        let err = Puzzle::assemble(meta(), grid(&["ABC"]), clues(&["A. one", "ABC", "0 1 2"]))
            .unwrap_err();
        assert!(matches!(err, ParseError::IndexOutOfRange { index: 0, .. }));
    }

    #[test]
    fn test_revalidated_rederives_labels() {
        let mut puzzle =
            Puzzle::assemble(meta(), grid(&["AB"]), clues(&["A. one", "AB", "1 2"])).unwrap();
        let expected = puzzle.clone();

        puzzle.labels.clear();
        assert_eq!(puzzle.revalidated().unwrap(), expected);
    }

    #[test]
    fn test_revalidated_rejects_tampered_values() {
        let puzzle =
            Puzzle::assemble(meta(), grid(&["AB"]), clues(&["A. one", "AB", "1 2"])).unwrap();

        let mut ragged = puzzle.clone();
        ragged.grid.rows.push("ABC".to_string());
        assert!(matches!(
            ragged.revalidated(),
            Err(ParseError::RaggedGrid { line: 2, .. })
        ));

        let mut short = puzzle;
        short.clues[0].mapping.pop();
        assert!(matches!(
            short.revalidated(),
            Err(ParseError::MappingLengthMismatch { .. })
        ));
    }

    #[test]
    fn test_revalidated_rejects_relabelled_clues() {
        let puzzle = Puzzle::assemble(
            meta(),
            grid(&["AB"]),
            clues(&["A. x", "A", "1", "B. y", "B", "2"]),
        )
        .unwrap();

        let mut relabelled = puzzle.clone();
        relabelled.clues[0].label = label('B');
        assert_eq!(
            relabelled.revalidated(),
            Err(ParseError::ClueLabelMismatch {
                expected: label('A'),
                line: "B. x".to_string(),
            })
        );

        let mut too_many = puzzle;
        let extra = too_many.clues[1].clone();
        too_many.clues.extend(std::iter::repeat_n(extra, 25));
        assert_eq!(
            too_many.revalidated(),
            Err(ParseError::TooManyClues { clues: 27 })
        );
    }

    #[test]
    fn test_range_checked_in_declaration_order() {
        // both clues claim an out-of-range index; clue A is declared first
        let err = Puzzle::assemble(
            meta(),
            grid(&["ABC"]),
            clues(&["A. one", "AB", "1 9", "B. two", "B", "0"]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::IndexOutOfRange {
                label: label('A'),
                index: 9,
                characters: 3,
            }
        );
    }
}
