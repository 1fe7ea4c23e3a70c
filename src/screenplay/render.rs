/*!
 * Plain-text screenplay layout.
 *
 * Lays classified lines out in monospaced columns following each element's
 * `ElementStyle`: capitals where the style asks for them, word-wrapping to the
 * element width, left indentation or right alignment against the page width.
 */

use crate::app_config::RenderConfig;
use crate::screenplay::element::{Alignment, ElementKind};
use crate::screenplay::parser::ClassifiedLine;

/// Lay out classified lines as page rows, without line terminators
///
/// Blank lines collapse so that a run of them produces a single empty row.
pub fn layout_lines(lines: &[ClassifiedLine], config: &RenderConfig) -> Vec<String> {
    let mut rows = Vec::with_capacity(lines.len());
    let mut previous_blank = false;

    for line in lines {
        let text = line.content.trim();
        if text.is_empty() {
            if !previous_blank {
                rows.push(String::new());
            }
            previous_blank = true;
            continue;
        }
        previous_blank = false;

        let style = line.kind.style();
        let text = if style.uppercase {
            text.to_uppercase()
        } else {
            text.to_string()
        };

        let indent = style.indent.min(config.page_width.saturating_sub(1));
        let width = style.width.min(config.page_width - indent).max(1);

        for row in wrap_words(&text, width) {
            let pad = match style.align {
                Alignment::Left => indent,
                Alignment::Right => config.page_width.saturating_sub(row.chars().count()),
            };
            rows.push(format!("{}{}", " ".repeat(pad), row));
        }
    }

    rows
}

/// Render classified lines as a plain-text screenplay
pub fn render_plain(lines: &[ClassifiedLine], config: &RenderConfig) -> String {
    let mut output = String::new();
    for row in layout_lines(lines, config) {
        output.push_str(&row);
        output.push('\n');
    }
    output
}

/// Greedy word wrap; words wider than `width` are split across rows
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }

        if word.is_empty() {
            continue;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        rows.push(current);
    }

    rows
}

/// Whether a row holds rendered text for a kind other than blank space
pub(crate) fn is_content(kind: ElementKind, content: &str) -> bool {
    kind != ElementKind::General || !content.trim().is_empty()
}
