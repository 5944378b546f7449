//! Parser and validator for Acrostic 3.0 save files.
//!
//! [`parse`] turns the raw text of a save file into a [`Puzzle`] whose grid,
//! clues and label map are known to agree with each other. Any violation is a
//! [`ParseError`] for the whole file.

pub mod clue;
pub mod error;
pub mod grid;
pub mod label;
pub mod metadata;
pub mod puzzle;
pub mod section;

pub use clue::{Clue, parse_clues};
pub use error::{ErrorKind, ParseError};
pub use grid::{BLOCK, Cell, Grid, Square};
pub use label::{ALPHABET, Label, MAX_CLUES};
pub use metadata::{MAGIC, Metadata};
pub use puzzle::Puzzle;
pub use section::{PREAMBLE, Sections};

/// Sections every save file must contain, checked in this order.
pub const REQUIRED_SECTIONS: [&str; 2] = ["grid", "keywords"];

/// Parse and validate the full text of a save file.
pub fn parse(text: &str) -> Result<Puzzle, ParseError> {
    let sections = Sections::split(text);
    for name in REQUIRED_SECTIONS {
        if !sections.contains(name) {
            return Err(ParseError::MissingRequiredSection {
                section: name.to_string(),
            });
        }
    }

    metadata::check_magic(&sections)?;
    let metadata = Metadata::extract(&sections)?;
    let grid = Grid::from_rows(sections.get("grid").unwrap_or_default().to_vec())?;
    let clues = parse_clues(sections.get("keywords").unwrap_or_default())?;

    Puzzle::assemble(metadata, grid, clues)
}
