use log::trace;

use crate::errors::ScriptError;
use crate::screenplay::classifier::{Classifier, DEFAULT_CLASSIFIER};
use crate::screenplay::element::ElementKind;

// @module: Rewriting lines to a chosen element kind

// @const: Prefix added to a bare location turned into a scene heading
const DEFAULT_SCENE_PREFIX: &str = "INT. ";

/// Result of applying an element kind to one line of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    // @field: Whole document after the edit
    pub text: String,

    // @field: Kind applied to the line
    pub kind: ElementKind,

    // @field: Line that was rewritten
    pub line_index: usize,

    // @field: Byte offset in `text` of the end of the rewritten line
    pub cursor_offset: usize,
}

impl Classifier {
    /// Rewrite a line's text to match the surface convention of `kind`
    ///
    /// The text is trimmed first. Blank input stays blank for every kind.
    pub fn format_as_element(&self, kind: ElementKind, raw: &str) -> String {
        let text = raw.trim();
        if text.is_empty() {
            return String::new();
        }

        match kind {
            ElementKind::SceneHeading => {
                if self.is_scene_heading(text) {
                    text.to_uppercase()
                } else {
                    format!("{}{}", DEFAULT_SCENE_PREFIX, text.to_uppercase())
                }
            }
            ElementKind::Character => text.to_uppercase(),
            ElementKind::Transition => {
                if self.is_transition(text) {
                    text.to_string()
                } else if text.ends_with(':') {
                    text.to_uppercase()
                } else {
                    format!("{}:", text.to_uppercase())
                }
            }
            ElementKind::Parenthetical => {
                let mut formatted = String::with_capacity(text.len() + 2);
                if !text.starts_with('(') {
                    formatted.push('(');
                }
                formatted.push_str(text);
                if !text.ends_with(')') {
                    formatted.push(')');
                }
                formatted
            }
            ElementKind::Action
            | ElementKind::Dialogue
            | ElementKind::Shot
            | ElementKind::General => text.to_string(),
        }
    }

    /// Apply `kind` to line `line_index` of `document`
    ///
    /// Every other line, including its `\r\n` terminator, is kept byte for
    /// byte.
    pub fn apply_element(
        &self,
        document: &str,
        line_index: usize,
        kind: ElementKind,
    ) -> Result<LineEdit, ScriptError> {
        let line_count = document.split('\n').count();
        if line_index >= line_count {
            return Err(ScriptError::LineOutOfRange {
                index: line_index,
                line_count,
            });
        }

        let mut text = String::with_capacity(document.len() + DEFAULT_SCENE_PREFIX.len() + 2);
        let mut cursor_offset = 0;

        for (index, segment) in document.split('\n').enumerate() {
            if index > 0 {
                text.push('\n');
            }
            if index != line_index {
                text.push_str(segment);
                continue;
            }

            let (content, terminator) = match segment.strip_suffix('\r') {
                Some(content) => (content, "\r"),
                None => (segment, ""),
            };
            text.push_str(&self.format_as_element(kind, content));
            cursor_offset = text.len();
            text.push_str(terminator);
        }

        trace!("Applied {} to line {} (caret at byte {})", kind, line_index, cursor_offset);

        Ok(LineEdit {
            text,
            kind,
            line_index,
            cursor_offset,
        })
    }
}

/// Format a line with the default vocabulary
pub fn format_as_element(kind: ElementKind, raw: &str) -> String {
    DEFAULT_CLASSIFIER.format_as_element(kind, raw)
}

/// Apply a kind to one line of a document with the default vocabulary
pub fn apply_element(document: &str, line_index: usize, kind: ElementKind) -> Result<LineEdit, ScriptError> {
    DEFAULT_CLASSIFIER.apply_element(document, line_index, kind)
}

/// Next kind in the action → character → dialogue → parenthetical ring
///
/// Kinds outside the ring fall back to `Action`.
pub fn next_in_cycle(current: ElementKind) -> ElementKind {
    match current {
        ElementKind::Action => ElementKind::Character,
        ElementKind::Character => ElementKind::Dialogue,
        ElementKind::Dialogue => ElementKind::Parenthetical,
        ElementKind::Parenthetical => ElementKind::Action,
        ElementKind::SceneHeading
        | ElementKind::Transition
        | ElementKind::Shot
        | ElementKind::General => ElementKind::Action,
    }
}

/// Advance the element kind only when the current line is blank
pub fn advance_element(current: ElementKind, line: &str) -> Option<ElementKind> {
    if line.trim().is_empty() {
        Some(next_in_cycle(current))
    } else {
        None
    }
}
