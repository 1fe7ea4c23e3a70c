/*!
 * Tests for error types and conversions
 */

use scriptline::errors::{AppError, ConfigError, ScriptError};

#[test]
fn test_scriptError_invalidPattern_shouldDisplayCorrectly() {
    let error = ScriptError::InvalidPattern("empty shot phrase".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Invalid pattern"));
    assert!(display.contains("empty shot phrase"));
}

#[test]
fn test_scriptError_unknownElementKind_shouldDisplayName() {
    let error = ScriptError::UnknownElementKind("montage".to_string());
    assert_eq!(format!("{}", error), "Unknown element kind: montage");
}

#[test]
fn test_scriptError_lineOutOfRange_shouldDisplayIndexAndCount() {
    let error = ScriptError::LineOutOfRange { index: 7, line_count: 3 };
    let display = format!("{}", error);
    assert!(display.contains('7'));
    assert!(display.contains('3'));
}

#[test]
fn test_appError_fromScriptError_shouldWrapCorrectly() {
    let app_error: AppError = ScriptError::UnknownElementKind("x".to_string()).into();
    assert!(matches!(app_error, AppError::Script(_)));
    assert!(format!("{}", app_error).contains("Script error"));
}

#[test]
fn test_appError_fromConfigError_shouldWrapCorrectly() {
    let app_error: AppError = ConfigError::Invalid("page_width".to_string()).into();
    assert!(matches!(app_error, AppError::Config(_)));
    assert!(format!("{}", app_error).contains("page_width"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing script");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(ref msg) if msg.contains("missing script")));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(ref msg) if msg == "something odd"));
}

#[test]
fn test_configError_fromSerdeJson_shouldBeParseError() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: ConfigError = serde_error.into();
    assert!(matches!(error, ConfigError::Parse(_)));
}
