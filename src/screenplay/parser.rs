use serde::{Deserialize, Serialize};

use crate::screenplay::classifier::{Classifier, DEFAULT_CLASSIFIER};
use crate::screenplay::element::ElementKind;

// @module: Whole-document classification scan

// @struct: One raw line of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    // @field: Raw text without the line terminator
    pub content: String,

    // @field: Zero-based position in the document
    pub line_index: usize,
}

/// A line together with the element kind it was classified as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub kind: ElementKind,
    pub content: String,
    pub line_index: usize,
}

impl ClassifiedLine {
    pub fn new(kind: ElementKind, content: impl Into<String>, line_index: usize) -> Self {
        Self {
            kind,
            content: content.into(),
            line_index,
        }
    }
}

/// Split a document into lines the way an editor buffer sees them
///
/// Splits on `\n` and drops a trailing `\r`. Unlike `str::lines`, a trailing
/// newline produces a final empty line, and the empty document is one empty
/// line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Break a document into indexed raw lines
pub fn parse_script_lines(text: &str) -> Vec<ScriptLine> {
    split_lines(text)
        .enumerate()
        .map(|(line_index, content)| ScriptLine {
            content: content.to_string(),
            line_index,
        })
        .collect()
}

impl Classifier {
    /// Classify every line of a document, left to right
    pub fn parse_elements(&self, text: &str) -> Vec<ClassifiedLine> {
        let mut elements: Vec<ClassifiedLine> = Vec::new();

        for (line_index, content) in split_lines(text).enumerate() {
            let (previous_line, previous_kind) = match elements.last() {
                Some(prev) => (Some(prev.content.as_str()), Some(prev.kind)),
                None => (None, None),
            };
            let kind = self.classify(content, previous_line, previous_kind);
            elements.push(ClassifiedLine::new(kind, content, line_index));
        }

        elements
    }
}

/// Classify every line of a document with the default vocabulary
pub fn parse_elements(text: &str) -> Vec<ClassifiedLine> {
    DEFAULT_CLASSIFIER.parse_elements(text)
}
