use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ScriptError;
use crate::screenplay::element::ElementKind;

// @module: Rule-based screenplay line classification

// @const: Character cues at or above this many chars are treated as action
pub const DEFAULT_MAX_CHARACTER_LENGTH: usize = 50;

const SCENE_HEADING_PREFIXES: [&str; 4] = ["INT.", "EXT.", "INT/EXT.", "I/E."];

const TRANSITIONS: [&str; 11] = [
    "FADE IN:",
    "FADE OUT:",
    "FADE TO:",
    "FADE TO BLACK:",
    "CUT TO:",
    "SMASH CUT TO:",
    "MATCH CUT TO:",
    "JUMP CUT TO:",
    "DISSOLVE TO:",
    "TIME CUT:",
    "WIPE TO:",
];

const SHOTS: [&str; 11] = [
    "CLOSE ON",
    "CLOSE UP",
    "ANGLE ON",
    "WIDE ON",
    "POV",
    "INSERT",
    "FLASHBACK",
    "BACK TO SCENE",
    "CONTINUOUS",
    "LATER",
    "INTERCUT",
];

const CHARACTER_EXTENSIONS: [&str; 5] = ["V.O.", "O.S.", "O.C.", "CONT'D", "CONTINUING"];

/// Phrase lists the classifier recognises
///
/// All matching is done on the trimmed line. Scene prefixes, transitions and
/// shots match case-insensitively at the start of the line; character
/// extensions are the parenthesised suffixes allowed after a cue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub scene_prefixes: Vec<String>,
    pub transitions: Vec<String>,
    pub shots: Vec<String>,
    pub character_extensions: Vec<String>,
    pub max_character_length: usize,
}

impl Default for Vocabulary {
    fn default() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            scene_prefixes: owned(&SCENE_HEADING_PREFIXES),
            transitions: owned(&TRANSITIONS),
            shots: owned(&SHOTS),
            character_extensions: owned(&CHARACTER_EXTENSIONS),
            max_character_length: DEFAULT_MAX_CHARACTER_LENGTH,
        }
    }
}

/// Compiled form of a [`Vocabulary`]
///
/// Immutable once built, so one instance can be shared freely between
/// documents and threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    scene_heading: Regex,
    transition: Regex,
    shot: Regex,
    character: Regex,
    max_character_length: usize,
}

/// Classifier built from the default vocabulary
pub static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(|| {
    Classifier::new(&Vocabulary::default()).expect("Invalid default screenplay vocabulary")
});

impl Classifier {
    /// Compile a vocabulary into matchers
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, ScriptError> {
        let scene_heading = prefix_regex("scene heading", &vocabulary.scene_prefixes, false)?;
        let transition = prefix_regex("transition", &vocabulary.transitions, false)?;
        let shot = prefix_regex("shot", &vocabulary.shots, true)?;

        let extensions = escaped_alternation("character extension", &vocabulary.character_extensions)?;
        let character = Regex::new(&format!(
            r"^\p{{Lu}}[\p{{Lu}}0-9 '’.\-]*(?:\s*\((?:{})\))?$",
            extensions
        ))
        .map_err(|e| ScriptError::InvalidPattern(e.to_string()))?;

        debug!(
            "Built screenplay classifier: {} scene prefixes, {} transitions, {} shots, {} cue extensions",
            vocabulary.scene_prefixes.len(),
            vocabulary.transitions.len(),
            vocabulary.shots.len(),
            vocabulary.character_extensions.len()
        );

        Ok(Self {
            scene_heading,
            transition,
            shot,
            character,
            max_character_length: vocabulary.max_character_length,
        })
    }

    /// Classify one line given what came before it
    ///
    /// When `previous_kind` is unknown but `previous_line` is supplied, the
    /// previous line is classified on its own (without further context) and
    /// that kind is used for the context-gated rules.
    ///
    /// Shot phrases that end in a letter or digit must end at a word
    /// boundary: "POV - JOHN" is a shot, while "POVERTY" or
    /// "Laterally, he slides." fall through to the later rules.
    pub fn classify(
        &self,
        line: &str,
        previous_line: Option<&str>,
        previous_kind: Option<ElementKind>,
    ) -> ElementKind {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ElementKind::General;
        }

        let previous_kind =
            previous_kind.or_else(|| previous_line.map(|prev| self.classify(prev, None, None)));

        if self.is_scene_heading(trimmed) {
            return ElementKind::SceneHeading;
        }
        if self.is_transition(trimmed) {
            return ElementKind::Transition;
        }
        if self.shot.is_match(trimmed) {
            return ElementKind::Shot;
        }

        if trimmed.starts_with('(')
            && trimmed.ends_with(')')
            && matches!(
                previous_kind,
                Some(ElementKind::Character) | Some(ElementKind::Dialogue)
            )
        {
            return ElementKind::Parenthetical;
        }

        if self.is_character_cue(trimmed) {
            return ElementKind::Character;
        }

        match previous_kind {
            Some(ElementKind::Character) | Some(ElementKind::Parenthetical) => ElementKind::Dialogue,
            _ => ElementKind::Action,
        }
    }

    /// Whether the trimmed text opens with a scene heading prefix
    pub fn is_scene_heading(&self, text: &str) -> bool {
        self.scene_heading.is_match(text.trim())
    }

    /// Whether the trimmed text opens with a transition phrase
    pub fn is_transition(&self, text: &str) -> bool {
        self.transition.is_match(text.trim())
    }

    /// Whether the trimmed text looks like a character cue
    pub fn is_character_cue(&self, text: &str) -> bool {
        let trimmed = text.trim();
        trimmed.chars().count() < self.max_character_length && self.character.is_match(trimmed)
    }
}

/// Classify a line with the default vocabulary
pub fn classify(
    line: &str,
    previous_line: Option<&str>,
    previous_kind: Option<ElementKind>,
) -> ElementKind {
    DEFAULT_CLASSIFIER.classify(line, previous_line, previous_kind)
}

fn escaped_alternation(what: &str, phrases: &[String]) -> Result<String, ScriptError> {
    if phrases.is_empty() {
        return Err(ScriptError::InvalidPattern(format!("no {} phrases given", what)));
    }

    let mut parts = Vec::with_capacity(phrases.len());
    for phrase in phrases {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return Err(ScriptError::InvalidPattern(format!("empty {} phrase", what)));
        }
        parts.push(regex::escape(phrase));
    }

    Ok(parts.join("|"))
}

fn prefix_regex(what: &str, phrases: &[String], word_boundary: bool) -> Result<Regex, ScriptError> {
    let alternation = if word_boundary {
        // Only phrases ending in a word character get a boundary; "POV" must
        // not match "POVERTY", but a phrase ending in ':' matches as-is.
        let mut parts = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            let trimmed = phrase.trim();
            let escaped = escaped_alternation(what, std::slice::from_ref(phrase))?;
            let ends_in_word = trimmed.chars().last().is_some_and(|c| c.is_alphanumeric() || c == '_');
            parts.push(if ends_in_word { format!(r"{}\b", escaped) } else { escaped });
        }
        if parts.is_empty() {
            return Err(ScriptError::InvalidPattern(format!("no {} phrases given", what)));
        }
        parts.join("|")
    } else {
        escaped_alternation(what, phrases)?
    };

    Regex::new(&format!("(?i)^(?:{})", alternation))
        .map_err(|e| ScriptError::InvalidPattern(e.to_string()))
}
