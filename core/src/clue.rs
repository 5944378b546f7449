use crate::{Label, ParseError, label::MAX_CLUES};
use serde::{Deserialize, Serialize};

/// One keyword of the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub label: Label,
    /// Clue text with the leading label stripped.
    pub hint: String,
    pub answer: String,
    /// 1-based grid index for every answer character, in answer order.
    pub mapping: Vec<usize>,
}

impl Clue {
    pub fn length(&self) -> usize {
        self.answer.chars().count()
    }

    /// Answer characters paired with the grid index each one fills.
    pub fn letters(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.answer.chars().zip(self.mapping.iter().copied())
    }
}

/// Parse the `keywords` section: (hint, answer, mapping) line triples, labelled A to Z.
//
// A. Having a rose-like pattern
// ROSEATE
// 171 120 124 140 112 113 87
pub fn parse_clues(lines: &[String]) -> Result<Vec<Clue>, ParseError> {
    if lines.len() % 3 != 0 {
        return Err(ParseError::TruncatedKeywords { lines: lines.len() });
    }
    if lines.len() > MAX_CLUES * 3 {
        return Err(ParseError::TooManyClues {
            clues: lines.len() / 3,
        });
    }

    lines
        .chunks_exact(3)
        .enumerate()
        .map(|(i, triple)| {
            let label = Label::nth(i).ok_or(ParseError::TooManyClues {
                clues: lines.len() / 3,
            })?;
            parse_clue(label, &triple[0], &triple[1], &triple[2])
        })
        .collect()
}

fn parse_clue(label: Label, hint: &str, answer: &str, mapping: &str) -> Result<Clue, ParseError> {
    let hint = strip_label(label, hint).ok_or_else(|| ParseError::ClueLabelMismatch {
        expected: label,
        line: hint.to_string(),
    })?;

    let mapping = mapping
        .split_whitespace()
        .map(|token| {
            token.parse::<usize>().map_err(|_| ParseError::MalformedMapping {
                label,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let answer_len = answer.chars().count();
    if answer_len != mapping.len() {
        return Err(ParseError::MappingLengthMismatch {
            label,
            answer: answer_len,
            mapping: mapping.len(),
        });
    }

    Ok(Clue {
        label,
        hint: hint.to_string(),
        answer: answer.to_string(),
        mapping,
    })
}

/// Drops the leading label letter and an optional period, or `None` if the line
/// does not begin with `label`.
fn strip_label(label: Label, line: &str) -> Option<&str> {
    let mut chars = line.chars();
    let first = chars.next()?;
    if !label.matches(first) {
        return None;
    }
    let rest = chars.as_str();
    Some(rest.strip_prefix('.').unwrap_or(rest).trim())
}
