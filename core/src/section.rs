//! Splits a save file into its bracketed sections.

use std::collections::HashMap;

/// Name of the implicit section holding every line before the first header.
pub const PREAMBLE: &str = "!start";

/// Section name to its non-blank, trimmed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    map: HashMap<String, Vec<String>>,
}

impl Sections {
    /// Split raw text into sections. Never fails; the preamble is always present.
    pub fn split(text: &str) -> Self {
        let mut map = HashMap::new();
        let mut current = PREAMBLE.to_string();
        let mut lines = Vec::new();

        // `str::lines` strips a trailing `\r`, so CRLF files need no special care
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match header_name(trimmed) {
                Some(name) => {
                    map.insert(current, std::mem::take(&mut lines));
                    current = name;
                }
                None => lines.push(trimmed.to_string()),
            }
        }
        map.insert(current, lines);

        Self { map }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.map.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn preamble(&self) -> &[String] {
        self.get(PREAMBLE).unwrap_or_default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}

/// Returns the lowercase section name if `line` is a `[header]`.
fn header_name(line: &str) -> Option<String> {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let text = "magic\n[GRID]\n#A\nBC\n[keywords]\nA. hint\nABC\n1 2 3\n";
        let sections = Sections::split(text);

        assert_eq!(sections.preamble(), ["magic"]);
        assert_eq!(sections.get("grid").unwrap(), ["#A", "BC"]);
        assert_eq!(sections.get("keywords").unwrap(), ["A. hint", "ABC", "1 2 3"]);
        assert!(sections.get("GRID").is_none());
    }

    #[test]
    fn test_split_crlf_and_blank_lines() {
        let text = "magic\r\n\r\n[Title]\r\n   \r\n  Hello  \r\n";
        let sections = Sections::split(text);

        assert_eq!(sections.preamble(), ["magic"]);
        assert_eq!(sections.get("title").unwrap(), ["Hello"]);
    }

    #[test]
    fn test_split_empty_text_has_empty_preamble() {
        let sections = Sections::split("");
        assert!(sections.contains(PREAMBLE));
        assert!(sections.preamble().is_empty());
        assert_eq!(sections.names().count(), 1);
    }

    #[test]
    fn test_header_without_lines_is_present() {
        let sections = Sections::split("[grid]\n[keywords]\n");
        assert_eq!(sections.get("grid").unwrap().len(), 0);
        assert_eq!(sections.get("keywords").unwrap().len(), 0);
        assert!(sections.preamble().is_empty());
    }

    #[test]
    fn test_repeated_header_replaces_section() {
        let sections = Sections::split("[title]\nfirst\n[other]\nx\n[TITLE]\nsecond\n");
        assert_eq!(sections.get("title").unwrap(), ["second"]);
    }

    #[test]
    fn test_indented_header_is_recognized() {
        let sections = Sections::split("  [byline]  \nby Someone\n");
        assert_eq!(sections.get("byline").unwrap(), ["by Someone"]);
    }

    #[test]
    fn test_bracket_inside_line_is_not_header() {
        let sections = Sections::split("[grid]\n[AB\nCD]\n");
        assert_eq!(sections.get("grid").unwrap(), ["[AB", "CD]"]);
    }
}
