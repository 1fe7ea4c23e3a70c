/*!
 * Screenplay element classification and formatting.
 *
 * - `element`: the eight element kinds with their labels and layout styles
 * - `classifier`: ordered pattern rules mapping a line to a kind
 * - `parser`: left-to-right scan of a whole document
 * - `formatter`: rewriting a line for a chosen kind, and the element cycle
 * - `render`: plain-text page layout
 * - `stats`: scene, character and page counts
 *
 * Everything here is pure and synchronous; a classifier is immutable after
 * construction and can be shared between threads.
 */

pub mod element;
pub mod classifier;
pub mod parser;
pub mod formatter;
pub mod render;
pub mod stats;

pub use element::{Alignment, ElementKind, ElementStyle};
pub use classifier::{classify, Classifier, Vocabulary, DEFAULT_CLASSIFIER};
pub use parser::{parse_elements, parse_script_lines, ClassifiedLine, ScriptLine};
pub use formatter::{advance_element, apply_element, format_as_element, next_in_cycle, LineEdit};
pub use render::{layout_lines, render_plain};
pub use stats::ScriptStats;
