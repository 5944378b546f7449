use crate::Label;
use thiserror::Error;

/// Broad category of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingRequiredSection,
    MissingMagicHeader,
    UnexpectedSectionShape,
    MalformedGrid,
    MalformedClues,
    ClueLabelMismatch,
    MalformedMapping,
    MappingLengthMismatch,
    DuplicateIndex,
    LabelCountMismatch,
    IndexOutOfRange,
}

/// Failure while parsing or validating an acrostic save file.
///
/// The first violation aborts the parse, nothing partial is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("file missing required section '{section}'")]
    MissingRequiredSection { section: String },

    #[error("missing magic header string (preamble has {} line(s))", .found.len())]
    MissingMagicHeader { found: Vec<String> },

    #[error("unexpected length of section '{section}': {lines} lines, expected 1")]
    UnexpectedSectionShape { section: String, lines: usize },

    #[error("grid section has no rows")]
    EmptyGrid,

    #[error("grid line {line} has length {found} != {width}")]
    RaggedGrid {
        line: usize,
        width: usize,
        found: usize,
    },

    #[error("keywords section ended unexpectedly after {lines} lines")]
    TruncatedKeywords { lines: usize },

    #[error("too many clues: {clues} found, only 26 are supported")]
    TooManyClues { clues: usize },

    #[error("expected clue '{line}' to begin with {expected}")]
    ClueLabelMismatch { expected: Label, line: String },

    #[error("found unparseable value '{token}' when reading mapping of clue {label}")]
    MalformedMapping { label: Label, token: String },

    #[error("clue {label}: answer has length {answer} but mapping has length {mapping}")]
    MappingLengthMismatch {
        label: Label,
        answer: usize,
        mapping: usize,
    },

    #[error("index {index} appeared in clue {first} and {second}")]
    DuplicateIndex {
        index: usize,
        first: Label,
        second: Label,
    },

    #[error("found {characters} letters in grid and {labeled} in clues")]
    LabelCountMismatch { characters: usize, labeled: usize },

    #[error("label {label} has index {index} which is out of range [1, {characters}]")]
    IndexOutOfRange {
        label: Label,
        index: usize,
        characters: usize,
    },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MissingRequiredSection { .. } => ErrorKind::MissingRequiredSection,
            ParseError::MissingMagicHeader { .. } => ErrorKind::MissingMagicHeader,
            ParseError::UnexpectedSectionShape { .. } => ErrorKind::UnexpectedSectionShape,
            ParseError::EmptyGrid | ParseError::RaggedGrid { .. } => ErrorKind::MalformedGrid,
            ParseError::TruncatedKeywords { .. } | ParseError::TooManyClues { .. } => {
                ErrorKind::MalformedClues
            }
            ParseError::ClueLabelMismatch { .. } => ErrorKind::ClueLabelMismatch,
            ParseError::MalformedMapping { .. } => ErrorKind::MalformedMapping,
            ParseError::MappingLengthMismatch { .. } => ErrorKind::MappingLengthMismatch,
            ParseError::DuplicateIndex { .. } => ErrorKind::DuplicateIndex,
            ParseError::LabelCountMismatch { .. } => ErrorKind::LabelCountMismatch,
            ParseError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }
}
