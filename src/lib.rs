/*!
 * # scriptline - screenplay line classification and formatting
 *
 * A Rust library for recognising and formatting screenplay elements in
 * plain text, as a script editor does while the writer types.
 *
 * ## Features
 *
 * - Classify each line as one of eight element kinds (scene heading, action,
 *   character, dialogue, parenthetical, transition, shot, general)
 * - Context-aware rules: dialogue and parentheticals only follow a cue
 * - Rewrite a line to a chosen kind (`kitchen` → `INT. KITCHEN`)
 * - Cycle action → character → dialogue → parenthetical on blank lines
 * - Plain-text page layout and script statistics
 * - Configurable vocabulary of transitions, shots and cue extensions
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `screenplay`: the pure classification core
 *   - `screenplay::element`: element kinds, labels and styles
 *   - `screenplay::classifier`: vocabulary and line rules
 *   - `screenplay::parser`: whole-document scan
 *   - `screenplay::formatter`: line rewriting and the element cycle
 *   - `screenplay::render`: plain-text layout
 *   - `screenplay::stats`: script statistics
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod screenplay;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ConfigError, ScriptError};
pub use screenplay::{
    advance_element, apply_element, classify, format_as_element, next_in_cycle, parse_elements,
    ClassifiedLine, Classifier, ElementKind, LineEdit, ScriptLine, ScriptStats, Vocabulary,
};
