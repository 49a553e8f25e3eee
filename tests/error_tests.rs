use delivery_client::error::AppError;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
    assert!(error.to_string().starts_with("unexpected status code"));
}

#[test]
fn test_app_error_display_missing_field() {
    let error = AppError::MissingField("name".to_string());
    assert_eq!(error.to_string(), "missing field: name");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_json_display_and_source() {
    let serde_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let app_error = AppError::Json(serde_error);

    assert!(app_error.to_string().starts_with("json error:"));
    assert!(app_error.source().is_some());
}

// Note: reqwest::Error cannot be easily constructed directly; the
// From<reqwest::Error> conversion is covered by the client tests.

#[test]
fn test_app_error_unexpected_has_no_source() {
    let error = AppError::Unexpected(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error.source().is_none());
}
