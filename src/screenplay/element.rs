use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ScriptError;

// @module: Screenplay element kinds and their presentation metadata

/// The screenplay-format category of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    SceneHeading,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
    Shot,
    General,
}

/// Horizontal placement of an element on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Plain-text layout rules for one element kind, in monospaced columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementStyle {
    // @field: Columns from the left margin
    pub indent: usize,

    // @field: Maximum text columns before wrapping
    pub width: usize,

    // @field: Render the text in capitals
    pub uppercase: bool,

    // @field: Left or right aligned
    pub align: Alignment,
}

impl ElementStyle {
    const fn left(indent: usize, width: usize, uppercase: bool) -> Self {
        Self { indent, width, uppercase, align: Alignment::Left }
    }
}

impl ElementKind {
    /// Every kind, in declaration order
    pub const ALL: [ElementKind; 8] = [
        ElementKind::SceneHeading,
        ElementKind::Action,
        ElementKind::Character,
        ElementKind::Dialogue,
        ElementKind::Parenthetical,
        ElementKind::Transition,
        ElementKind::Shot,
        ElementKind::General,
    ];

    // @returns: snake_case identifier used in JSON and on the command line
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::SceneHeading => "scene_heading",
            Self::Action => "action",
            Self::Character => "character",
            Self::Dialogue => "dialogue",
            Self::Parenthetical => "parenthetical",
            Self::Transition => "transition",
            Self::Shot => "shot",
            Self::General => "general",
        }
    }

    // @returns: Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            Self::SceneHeading => "Scene Heading",
            Self::Action => "Action",
            Self::Character => "Character",
            Self::Dialogue => "Dialogue",
            Self::Parenthetical => "Parenthetical",
            Self::Transition => "Transition",
            Self::Shot => "Shot",
            Self::General => "General",
        }
    }

    /// Short help text shown next to the element picker
    pub fn description(&self) -> &'static str {
        match self {
            Self::SceneHeading => "Location and time of day, e.g. INT. KITCHEN - DAY",
            Self::Action => "What the audience sees and hears",
            Self::Character => "Name of the speaking character, in capitals",
            Self::Dialogue => "Lines spoken by the character above",
            Self::Parenthetical => "Brief direction for the actor, in parentheses",
            Self::Transition => "Editing instruction between scenes, e.g. CUT TO:",
            Self::Shot => "Camera direction, e.g. CLOSE ON",
            Self::General => "Unformatted text or blank line",
        }
    }

    /// Layout used by the plain-text renderer
    pub fn style(&self) -> ElementStyle {
        match self {
            Self::SceneHeading => ElementStyle::left(0, 60, true),
            Self::Action => ElementStyle::left(0, 60, false),
            Self::Character => ElementStyle::left(22, 38, true),
            Self::Dialogue => ElementStyle::left(10, 35, false),
            Self::Parenthetical => ElementStyle::left(16, 25, false),
            Self::Transition => ElementStyle {
                indent: 0,
                width: 60,
                uppercase: true,
                align: Alignment::Right,
            },
            Self::Shot => ElementStyle::left(0, 60, true),
            Self::General => ElementStyle::left(0, 60, false),
        }
    }

    /// Whether this kind takes part in the action/character/dialogue/parenthetical rotation
    pub fn is_cyclic(&self) -> bool {
        matches!(
            self,
            Self::Action | Self::Character | Self::Dialogue | Self::Parenthetical
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

impl FromStr for ElementKind {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_key() == normalized)
            .ok_or_else(|| ScriptError::UnknownElementKind(s.to_string()))
    }
}
