use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::app_config::RenderConfig;
use crate::screenplay::element::ElementKind;
use crate::screenplay::parser::ClassifiedLine;
use crate::screenplay::render::{is_content, layout_lines};

// @const: Trailing parenthesised extension on a cue, e.g. "(V.O.)"
static CUE_EXTENSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*\([^)]*\)\s*$").expect("Invalid cue extension regex")
});

/// Summary figures for a classified script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptStats {
    // @field: Number of lines per element kind (kinds with no lines omitted)
    pub kind_counts: BTreeMap<String, usize>,

    // @field: Scene headings in the script
    pub scene_count: usize,

    // @field: Distinct speaking characters, sorted
    pub characters: Vec<String>,

    // @field: Lines classified as dialogue
    pub dialogue_lines: usize,

    // @field: Estimated page count at the configured page length
    pub estimated_pages: usize,
}

impl ScriptStats {
    /// Collect statistics from already classified lines
    pub fn from_lines(lines: &[ClassifiedLine], render: &RenderConfig) -> Self {
        let mut kind_counts = BTreeMap::new();
        let mut characters = BTreeSet::new();

        for line in lines {
            *kind_counts.entry(line.kind.as_key().to_string()).or_insert(0) += 1;

            if line.kind == ElementKind::Character {
                let name = CUE_EXTENSION_REGEX.replace(line.content.trim(), "");
                let name = name.trim().to_uppercase();
                if !name.is_empty() {
                    characters.insert(name);
                }
            }
        }

        let count = |kind: ElementKind| kind_counts.get(kind.as_key()).copied().unwrap_or(0);
        let scene_count = count(ElementKind::SceneHeading);
        let dialogue_lines = count(ElementKind::Dialogue);

        let estimated_pages = if lines.iter().any(|l| is_content(l.kind, &l.content)) {
            let rows = layout_lines(lines, render).len();
            rows.div_ceil(render.lines_per_page.max(1)).max(1)
        } else {
            0
        };

        Self {
            kind_counts,
            scene_count,
            characters: characters.into_iter().collect(),
            dialogue_lines,
            estimated_pages,
        }
    }
}

impl fmt::Display for ScriptStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Scenes: {}", self.scene_count)?;
        writeln!(f, "Characters: {}", self.characters.len())?;
        for name in &self.characters {
            writeln!(f, "  {}", name)?;
        }
        writeln!(f, "Dialogue lines: {}", self.dialogue_lines)?;
        writeln!(f, "Estimated pages: {}", self.estimated_pages)?;
        for (kind, count) in &self.kind_counts {
            writeln!(f, "  {}: {}", kind, count)?;
        }
        Ok(())
    }
}
