use crate::ParseError;
use serde::{Deserialize, Serialize};

/// Reserved character marking a blocked square.
pub const BLOCK: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blocked,
    Letter(char),
}

impl Cell {
    pub fn from_char(c: char) -> Self {
        if c == BLOCK {
            Cell::Blocked
        } else {
            Cell::Letter(c)
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Cell::Blocked)
    }

    pub fn is_letter(&self) -> bool {
        matches!(self, Cell::Letter(_))
    }

    pub fn letter(&self) -> Option<char> {
        match self {
            Cell::Letter(c) => Some(*c),
            Cell::Blocked => None,
        }
    }
}

/// A letter square together with its 1-based index in row-major scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub letter: char,
}

/// Rectangular letter grid, stored as equal-length rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub rows: Vec<String>,
    pub width: usize,
    pub height: usize,
}

impl Grid {
    /// Build a grid from the lines of the `grid` section.
    ///
    /// Width is taken from the first row; every other row must match it.
    /// Line numbers in errors are 1-based within the section.
    pub fn from_rows(rows: Vec<String>) -> Result<Self, ParseError> {
        let width = rows
            .first()
            .map(|row| row.chars().count())
            .ok_or(ParseError::EmptyGrid)?;

        for (i, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(ParseError::RaggedGrid {
                    line: i + 1,
                    width,
                    found,
                });
            }
        }

        Ok(Self {
            height: rows.len(),
            width,
            rows,
        })
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row)?.chars().nth(col).map(Cell::from_char)
    }

    /// Letter squares in row-major order, indexed from 1.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|(_, c)| *c != BLOCK)
                    .map(move |(col, letter)| (row, col, letter))
            })
            .enumerate()
            .map(|(i, (row, col, letter))| Square {
                index: i + 1,
                row,
                col,
                letter,
            })
    }

    /// Number of letter squares.
    pub fn letter_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.chars())
            .filter(|c| *c != BLOCK)
            .count()
    }

    /// Row and column of the letter square with the given 1-based index.
    pub fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        if index == 0 {
            return None;
        }
        self.squares()
            .nth(index - 1)
            .map(|square| (square.row, square.col))
    }
}
