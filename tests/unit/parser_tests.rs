/*!
 * Tests for whole-document classification
 */

use scriptline::screenplay::{parse_elements, parse_script_lines, ElementKind};
use crate::common;

use ElementKind::*;

fn kinds(text: &str) -> Vec<ElementKind> {
    parse_elements(text).into_iter().map(|line| line.kind).collect()
}

#[test]
fn test_parseElements_withSampleScene_shouldClassifyEveryLine() {
    assert_eq!(
        kinds(common::SAMPLE_SCENE),
        vec![SceneHeading, General, Character, Dialogue, Parenthetical, Dialogue, General, Transition]
    );
}

#[test]
fn test_parseElements_withCrlfLineEndings_shouldMatchLf() {
    let crlf = common::SAMPLE_SCENE.replace('\n', "\r\n");
    assert_eq!(kinds(&crlf), kinds(common::SAMPLE_SCENE));

    let elements = parse_elements(&crlf);
    assert!(elements.iter().all(|line| !line.content.ends_with('\r')));
}

#[test]
fn test_parseElements_withLongerScript_shouldThreadContext() {
    assert_eq!(
        kinds(common::SAMPLE_SCRIPT),
        vec![
            Transition, General, SceneHeading, General, Action, General,
            Character, Dialogue, General, Shot, General, SceneHeading, General,
            Character, Parenthetical, Dialogue, General,
            Character, Dialogue, General,
            Character, Parenthetical, Dialogue, General,
            Transition, General,
        ]
    );
}

#[test]
fn test_parseElements_parentheticalAfterAction_shouldNotBeParenthetical() {
    let text = "John walks in.\n(beat)";
    assert_eq!(kinds(text), vec![Action, Action]);
}

#[test]
fn test_parseElements_secondDialogueLine_shouldFallBackToAction() {
    let text = "JOHN\nHello.\nGoodbye.";
    assert_eq!(kinds(text), vec![Character, Dialogue, Action]);
}

#[test]
fn test_parseElements_shouldPreserveRawContentAndIndices() {
    let elements = parse_elements("  JOHN  \n\tHello.");
    assert_eq!(elements[0].content, "  JOHN  ");
    assert_eq!(elements[0].kind, Character);
    assert_eq!(elements[1].content, "\tHello.");
    assert_eq!(elements[1].line_index, 1);
    assert_eq!(elements[1].kind, Dialogue);
}

#[test]
fn test_parseElements_calledTwice_shouldReturnSameResult() {
    assert_eq!(parse_elements(common::SAMPLE_SCRIPT), parse_elements(common::SAMPLE_SCRIPT));
}

#[test]
fn test_parseScriptLines_shouldMatchParsedLineCount() {
    let raw = parse_script_lines(common::SAMPLE_SCRIPT);
    let classified = parse_elements(common::SAMPLE_SCRIPT);
    assert_eq!(raw.len(), classified.len());
    for (raw, classified) in raw.iter().zip(&classified) {
        assert_eq!(raw.content, classified.content);
        assert_eq!(raw.line_index, classified.line_index);
    }
}

#[test]
fn test_classifiedLine_shouldSerializeWithSnakeCaseKind() {
    let elements = parse_elements("INT. HOUSE");
    let json = serde_json::to_value(&elements[0]).unwrap();
    assert_eq!(json["kind"], "scene_heading");
    assert_eq!(json["content"], "INT. HOUSE");
    assert_eq!(json["line_index"], 0);
}
