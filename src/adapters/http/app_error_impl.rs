use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use waitlist_types::SubmissionResult;

pub const DUPLICATE_MESSAGE: &str =
    "This email is already on the waitlist. We'll be in touch soon!";
pub const UNAVAILABLE_MESSAGE: &str =
    "The waitlist is temporarily unavailable. Please try again later.";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        if self.is_client_error() {
            tracing::warn!(error = %self, "Request rejected");
        } else {
            tracing::error!(error = ?self, "Request failed");
        }

        let code = self.code();
        match self {
            AppError::Validation { message, errors } => (
                StatusCode::BAD_REQUEST,
                Json(SubmissionResult::error(code, message).with_errors(errors)),
            )
                .into_response(),
            AppError::AlreadyRegistered => error_resp(StatusCode::CONFLICT, code, DUPLICATE_MESSAGE),
            AppError::StoreUnavailable => {
                error_resp(StatusCode::SERVICE_UNAVAILABLE, code, UNAVAILABLE_MESSAGE)
            }
            AppError::Database(_) | AppError::EmailDelivery(_) | AppError::Internal(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, code, GENERIC_ERROR_MESSAGE)
            }
        }
    }
}

fn error_resp(status: StatusCode, code: waitlist_types::ErrorCode, message: &str) -> Response {
    (status, Json(SubmissionResult::error(code, message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use waitlist_types::FieldErrors;

    #[test]
    fn maps_status_codes() {
        let mut errors = FieldErrors::new();
        errors.insert("name".into(), vec!["Too short".into()]);

        let cases = [
            (
                AppError::Validation {
                    message: "Invalid".into(),
                    errors,
                },
                StatusCode::BAD_REQUEST,
            ),
            (AppError::AlreadyRegistered, StatusCode::CONFLICT),
            (AppError::StoreUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (
                AppError::Database("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn client_errors_are_classified() {
        assert!(AppError::AlreadyRegistered.is_client_error());
        assert!(!AppError::StoreUnavailable.is_client_error());
        assert!(!AppError::Database("x".into()).is_client_error());
    }
}
