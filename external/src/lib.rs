mod clue_sheet;
pub use clue_sheet::{ClueRecord, ClueSheet};

mod error;
pub use error::ExternalError;

mod puzzle_file;
pub use puzzle_file::{ExportFormat, PuzzleFile, PuzzleFileMetadata, SourceFormat};
