use crate::{ClueSheet, error::ExternalError};
use acrostic_core::Puzzle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fs::File, path::Path};

/// Version written into every artifact's metadata.
pub const ARTIFACT_VERSION: &str = "1.0";

/// Formats [`PuzzleFile::load`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// The Acrostic 3.0 plaintext save format.
    Acrostic,
    Json,
    Binary,
}

impl SourceFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" | "acr" => Some(SourceFormat::Acrostic),
            "json" => Some(SourceFormat::Json),
            "acb" => Some(SourceFormat::Binary), // Acrostic Binary
            _ => None,
        }
    }
}

/// Formats a validated puzzle can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Binary,
    /// Clue sheet only, see [`ClueSheet`].
    Csv,
}

impl ExportFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "acb" => Some(ExportFormat::Binary),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Binary => "acb",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleFileMetadata {
    pub version: String,
    /// File name of the save file the puzzle was parsed from.
    pub source: Option<String>,
    pub parsed_at: DateTime<Utc>,
    pub saved_at: Option<DateTime<Utc>>,
}

/// A validated puzzle as handed to the renderer, with provenance metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleFile {
    pub metadata: PuzzleFileMetadata,
    pub puzzle: Puzzle,
}

impl PuzzleFile {
    pub fn new(puzzle: Puzzle, source: Option<String>) -> Self {
        Self {
            metadata: PuzzleFileMetadata {
                version: ARTIFACT_VERSION.to_string(),
                source,
                parsed_at: Utc::now(),
                saved_at: None,
            },
            puzzle,
        }
    }

    /// Parse the text of an Acrostic 3.0 save file.
    pub fn from_text(text: &str, source: Option<String>) -> Result<Self, ExternalError> {
        let puzzle = acrostic_core::parse(text)?;
        log::info!(
            "loaded \"{}\" by {}: {}x{} grid, {} letters, {} clues",
            puzzle.title,
            puzzle.author,
            puzzle.grid.width,
            puzzle.grid.height,
            puzzle.characters(),
            puzzle.clues.len()
        );
        Ok(Self::new(puzzle, source))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ExternalError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ExternalError::InvalidFormat {
                expected: "txt, acr, json or acb".to_string(),
                actual: "unknown".to_string(),
            })?;

        let format =
            SourceFormat::from_extension(extension).ok_or_else(|| ExternalError::InvalidFormat {
                expected: "txt, acr, json or acb".to_string(),
                actual: extension.to_string(),
            })?;

        match format {
            SourceFormat::Acrostic => Self::load_acrostic(path),
            SourceFormat::Json => Self::load_json(path),
            SourceFormat::Binary => Self::load_binary(path),
        }
    }

    pub fn save<P: AsRef<Path>>(&mut self, path: P, format: ExportFormat) -> Result<(), ExternalError> {
        self.metadata.saved_at = Some(Utc::now());
        log::debug!("writing {:?} to {}", format, path.as_ref().display());

        match format {
            ExportFormat::Json => self.save_json(path),
            ExportFormat::Binary => self.save_binary(path),
            ExportFormat::Csv => ClueSheet::from_puzzle(&self.puzzle).to_csv(path),
        }
    }

    /// Acrostic 3.0 files are read whole, the parser works on complete text.
    fn load_acrostic(path: &Path) -> Result<Self, ExternalError> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("read {} bytes from {}", text.len(), path.display());

        let source = path
            .file_name()
            .and_then(|s| s.to_str())
            .map(str::to_string);
        Self::from_text(&text, source)
    }

    fn load_json(path: &Path) -> Result<Self, ExternalError> {
        let file = File::open(path)?;
        let puzzle_file: PuzzleFile = serde_json::from_reader(file)?;
        puzzle_file.revalidated()
    }

    fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ExternalError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    fn load_binary(path: &Path) -> Result<Self, ExternalError> {
        let file = File::open(path)?;
        let puzzle_file: PuzzleFile = bincode::deserialize_from(file)?;
        puzzle_file.revalidated()
    }

    fn save_binary<P: AsRef<Path>>(&self, path: P) -> Result<(), ExternalError> {
        let file = File::create(path)?;
        bincode::serialize_into(file, self)?;
        Ok(())
    }

    /// Artifacts read back from disk are checked again before use.
    fn revalidated(self) -> Result<Self, ExternalError> {
        let stored = self.puzzle.labels.clone();
        let puzzle = self.puzzle.revalidated()?;
        if puzzle.labels != stored {
            log::warn!(
                "stored label map of \"{}\" disagrees with its clues, using derived labels",
                puzzle.title
            );
        }
        Ok(Self {
            metadata: self.metadata,
            puzzle,
        })
    }
}
