use crate::error::ExternalError;
use acrostic_core::{Label, Puzzle};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

/// One row of the clue sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    pub label: Label,
    pub hint: String,
    pub answer: String,
    /// Grid indices, space separated.
    pub mapping: String,
}

/// Flat clue listing of a puzzle, one CSV record per clue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueSheet {
    pub records: Vec<ClueRecord>,
}

impl ClueSheet {
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        let records = puzzle
            .clues
            .iter()
            .map(|clue| ClueRecord {
                label: clue.label,
                hint: clue.hint.clone(),
                answer: clue.answer.clone(),
                mapping: clue
                    .mapping
                    .iter()
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join(" "),
            })
            .collect();
        Self { records }
    }

    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), ExternalError> {
        let file = File::create(path)?;
        self.to_writer(file)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), ExternalError> {
        let mut writer = csv::Writer::from_writer(writer);
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, ExternalError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ExternalError> {
        let mut reader = csv::Reader::from_reader(reader);
        let records = reader.deserialize().collect::<Result<Vec<ClueRecord>, _>>()?;
        Ok(Self { records })
    }

    pub fn get(&self, label: Label) -> Option<&ClueRecord> {
        self.records.iter().find(|record| record.label == label)
    }
}
