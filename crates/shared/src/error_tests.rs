use crate::error::AppError;

#[test]
fn test_app_error_display() {
    assert_eq!(
        format!("{}", AppError::Unauthenticated("msg".into())),
        "Authentication required: msg"
    );
    assert_eq!(
        format!("{}", AppError::NotFound("msg".into())),
        "Not found: msg"
    );
    assert_eq!(
        format!("{}", AppError::ValidationFailed("msg".into())),
        "Validation failed: msg"
    );
    assert_eq!(
        format!("{}", AppError::TransportFailure("msg".into())),
        "Transport failure: msg"
    );
    assert_eq!(
        format!("{}", AppError::Internal("msg".into())),
        "Internal error: msg"
    );
}

#[test]
fn test_server_errors_are_flagged() {
    assert!(AppError::TransportFailure("down".into()).is_server_error());
    assert!(AppError::Internal("bug".into()).is_server_error());
    assert!(!AppError::NotFound("gone".into()).is_server_error());
    assert!(!AppError::ValidationFailed("bad".into()).is_server_error());
    assert!(!AppError::Unauthenticated("who".into()).is_server_error());
}
