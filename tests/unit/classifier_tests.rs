/*!
 * Tests for screenplay line classification
 */

use scriptline::screenplay::{classify, Classifier, ElementKind, Vocabulary};
use scriptline::ScriptError;

/// Classification is a pure function of its inputs
#[test]
fn test_classify_withSameInput_shouldBeDeterministic() {
    let lines = ["JOHN", "(beat)", "He runs.", "INT. HOUSE", "", "cut to:"];
    for line in lines {
        for prev in ElementKind::ALL {
            let first = classify(line, Some("x"), Some(prev));
            let second = classify(line, Some("x"), Some(prev));
            assert_eq!(first, second, "line {:?} after {:?}", line, prev);
        }
    }
}

#[test]
fn test_classify_withWhitespaceOnly_shouldAlwaysBeGeneral() {
    for blank in ["", " ", "\t", "   \t  ", "\u{a0}"] {
        assert_eq!(classify(blank, None, None), ElementKind::General);
        assert_eq!(classify(blank, Some("JOHN"), Some(ElementKind::Character)), ElementKind::General);
    }
}

#[test]
fn test_classify_sceneHeadingWithCueSuffix_shouldStaySceneHeading() {
    for prev in ElementKind::ALL {
        assert_eq!(
            classify("INT. HOUSE (V.O.)", None, Some(prev)),
            ElementKind::SceneHeading
        );
    }
}

#[test]
fn test_classify_sceneHeadingInsideDialogue_shouldBeSceneHeading() {
    assert_eq!(
        classify("EXT. STREET - NIGHT", Some("JOHN"), Some(ElementKind::Character)),
        ElementKind::SceneHeading
    );
}

#[test]
fn test_classify_withoutPrefixPeriod_shouldNotBeSceneHeading() {
    assert_eq!(classify("INTERIOR DESIGN IS HARD", None, None), ElementKind::Character);
    assert_eq!(classify("Int the house", None, None), ElementKind::Action);
}

#[test]
fn test_classify_transitionVocabulary_shouldMatchCaseInsensitively() {
    for line in ["FADE IN:", "fade out:", "Cut To:", "DISSOLVE TO:", "SMASH CUT TO:", "FADE TO BLACK:"] {
        assert_eq!(classify(line, None, None), ElementKind::Transition, "{}", line);
    }
}

#[test]
fn test_classify_transitionWithoutColon_shouldNotBeTransition() {
    // Falls through to the all-caps cue rule
    assert_eq!(classify("CUT TO", None, None), ElementKind::Character);
}

#[test]
fn test_classify_shotVocabulary_shouldMatch() {
    for line in ["CLOSE ON the knife", "ANGLE ON JOHN", "POV", "INSERT - LETTER", "FLASHBACK", "INTERCUT PHONE CALL"] {
        assert_eq!(classify(line, None, None), ElementKind::Shot, "{}", line);
    }
}

#[test]
fn test_classify_parenthetical_shouldRequireCueOrDialogueBefore() {
    assert_eq!(
        classify("(beat)", Some("character's dialogue"), Some(ElementKind::Character)),
        ElementKind::Parenthetical
    );
    assert_eq!(
        classify("(beat)", Some("Hello."), Some(ElementKind::Dialogue)),
        ElementKind::Parenthetical
    );
    assert_eq!(
        classify("(beat)", Some("John walks in."), Some(ElementKind::Action)),
        ElementKind::Action
    );
}

#[test]
fn test_classify_dialogue_shouldRequireCueOrParentheticalBefore() {
    assert_eq!(classify("I'll be there.", None, Some(ElementKind::Character)), ElementKind::Dialogue);
    assert_eq!(classify("I'll be there.", None, Some(ElementKind::Parenthetical)), ElementKind::Dialogue);
    assert_eq!(classify("I'll be there.", None, Some(ElementKind::Action)), ElementKind::Action);
    assert_eq!(classify("I'll be there.", None, Some(ElementKind::Dialogue)), ElementKind::Action);
    assert_eq!(classify("I'll be there.", None, None), ElementKind::Action);
}

#[test]
fn test_classify_characterCueExtensions_shouldMatch() {
    for line in ["JOHN (V.O.)", "JOHN (O.S.)", "JOHN(O.C.)", "MRS. O'HARA (CONT'D)", "DR. NO (CONTINUING)", "GUARD #2"] {
        let expected = if line.contains('#') { ElementKind::Action } else { ElementKind::Character };
        assert_eq!(classify(line, None, None), expected, "{}", line);
    }
}

#[test]
fn test_classify_characterWithUnknownExtension_shouldBeAction() {
    assert_eq!(classify("JOHN (WHISPERING)", None, None), ElementKind::Action);
}

#[test]
fn test_classify_characterLengthBoundary_shouldSwitchToAction() {
    let cue = "A".repeat(49);
    assert_eq!(classify(&cue, None, None), ElementKind::Character);

    let exactly_fifty = "A".repeat(50);
    assert_eq!(classify(&exactly_fifty, None, None), ElementKind::Action);

    let padded = format!("{} B", cue);
    assert_eq!(padded.len(), 51);
    assert_eq!(classify(&padded, None, None), ElementKind::Action);
}

#[test]
fn test_classifier_withExtraVocabulary_shouldRecogniseNewPhrases() {
    let mut vocabulary = Vocabulary::default();
    vocabulary.transitions.push("BACK TO:".to_string());
    vocabulary.shots.push("AERIAL".to_string());
    vocabulary.character_extensions.push("FILTERED".to_string());
    let classifier = Classifier::new(&vocabulary).unwrap();

    assert_eq!(classifier.classify("back to: the farm", None, None), ElementKind::Transition);
    assert_eq!(classifier.classify("AERIAL - CITY", None, None), ElementKind::Shot);
    assert_eq!(classifier.classify("JOHN (FILTERED)", None, None), ElementKind::Character);
}

#[test]
fn test_classifier_withShorterCueLimit_shouldApplyIt() {
    let vocabulary = Vocabulary {
        max_character_length: 5,
        ..Vocabulary::default()
    };
    let classifier = Classifier::new(&vocabulary).unwrap();
    assert_eq!(classifier.classify("JOHN", None, None), ElementKind::Character);
    assert_eq!(classifier.classify("JOHNNY", None, None), ElementKind::Action);
}

#[test]
fn test_classifier_withEmptyPhraseList_shouldFail() {
    let vocabulary = Vocabulary {
        transitions: Vec::new(),
        ..Vocabulary::default()
    };
    let err = Classifier::new(&vocabulary).unwrap_err();
    assert!(matches!(err, ScriptError::InvalidPattern(_)));
}
