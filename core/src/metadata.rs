use crate::{ParseError, Sections};

/// The only preamble line Acrostic 3.0 writes.
pub const MAGIC: &str = "! This file made by Acrostic 3.0 program. DO NOT EDIT!";

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub author: String,
}

impl Metadata {
    pub fn extract(sections: &Sections) -> Result<Self, ParseError> {
        let title = single_line(sections, "title", DEFAULT_TITLE)?;
        let author = match sections.get("byline") {
            Some(_) => parse_author(&single_line(sections, "byline", "")?),
            None => DEFAULT_AUTHOR.to_string(),
        };
        Ok(Self { title, author })
    }
}

/// Sole line of section `name`, or `fallback` when the section is absent.
pub fn single_line(sections: &Sections, name: &str, fallback: &str) -> Result<String, ParseError> {
    match sections.get(name) {
        None => Ok(fallback.to_string()),
        Some([line]) => Ok(line.clone()),
        Some(lines) => Err(ParseError::UnexpectedSectionShape {
            section: name.to_string(),
            lines: lines.len(),
        }),
    }
}

/// The preamble must be exactly the magic line.
pub fn check_magic(sections: &Sections) -> Result<(), ParseError> {
    match sections.preamble() {
        [line] if line == MAGIC => Ok(()),
        found => Err(ParseError::MissingMagicHeader {
            found: found.to_vec(),
        }),
    }
}

/// Removes the first literal `by` wherever it occurs, then trims.
pub fn parse_author(byline: &str) -> String {
    byline.replacen("by", "", 1).trim().to_string()
}
