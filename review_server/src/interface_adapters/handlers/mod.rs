use axum::{http::StatusCode, Json};

use crate::domain::errors::{AccountError, ReviewError};
use crate::interface_adapters::protocol::{ErrorResponse, HealthResponse};

pub mod accounts;
pub mod reviews;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// Helper to build a JSON error response.
pub(crate) fn error_response(
    status: StatusCode,
    message: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

// Maps account errors to HTTP responses by endpoint context.
pub(crate) enum AccountErrorContext {
    Signup,
    Login,
    Profile,
}

pub(crate) fn map_account_error(
    err: AccountError,
    context: AccountErrorContext,
) -> (StatusCode, Json<ErrorResponse>) {
    match (err, context) {
        (AccountError::InvalidName, _) => {
            error_response(StatusCode::BAD_REQUEST, "first_name and last_name are required")
        }
        (AccountError::InvalidEmail, _) => error_response(StatusCode::BAD_REQUEST, "invalid email"),
        (AccountError::InvalidPassword, _) => error_response(
            StatusCode::BAD_REQUEST,
            "password must be at least 8 characters",
        ),
        (AccountError::EmailTaken, _) => {
            error_response(StatusCode::CONFLICT, "email is already registered")
        }
        (AccountError::UserNotFound, _) => error_response(StatusCode::NOT_FOUND, "user not found"),
        (AccountError::IncorrectPassword, _) => {
            error_response(StatusCode::UNAUTHORIZED, "incorrect password")
        }
        (AccountError::HashingFailure, _) => {
            tracing::error!("password hashing failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
        (AccountError::StorageFailure, context) => {
            let operation = match context {
                AccountErrorContext::Signup => "signup",
                AccountErrorContext::Login => "login",
                AccountErrorContext::Profile => "profile",
            };
            tracing::error!(operation, "account storage failure");
            error_response(StatusCode::BAD_GATEWAY, "storage error")
        }
    }
}

pub(crate) fn map_review_error(err: ReviewError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ReviewError::InvalidHotelName => {
            error_response(StatusCode::BAD_REQUEST, "hotel_name is required")
        }
        ReviewError::InvalidRating => {
            error_response(StatusCode::BAD_REQUEST, "rating must be between 1 and 5")
        }
        ReviewError::InvalidReviewText => {
            error_response(StatusCode::BAD_REQUEST, "review is too long")
        }
        ReviewError::InvalidReply => error_response(StatusCode::BAD_REQUEST, "reply is required"),
        ReviewError::InvalidReason => error_response(StatusCode::BAD_REQUEST, "reason is required"),
        ReviewError::UserNotFound => error_response(StatusCode::NOT_FOUND, "user not found"),
        ReviewError::HotelNotFound => error_response(StatusCode::NOT_FOUND, "hotel not found"),
        ReviewError::ReviewNotFound => error_response(StatusCode::NOT_FOUND, "review not found"),
        ReviewError::NotReviewAuthor => error_response(
            StatusCode::FORBIDDEN,
            "only the review author can perform this action",
        ),
        ReviewError::StorageFailure => {
            tracing::error!("review storage failure");
            error_response(StatusCode::BAD_GATEWAY, "storage error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_review_errors_are_mapped_then_statuses_follow_error_kind() {
        let cases = [
            (ReviewError::InvalidRating, StatusCode::BAD_REQUEST),
            (ReviewError::HotelNotFound, StatusCode::NOT_FOUND),
            (ReviewError::ReviewNotFound, StatusCode::NOT_FOUND),
            (ReviewError::NotReviewAuthor, StatusCode::FORBIDDEN),
            (ReviewError::StorageFailure, StatusCode::BAD_GATEWAY),
        ];

        for (err, expected) in cases {
            assert_eq!(map_review_error(err).0, expected);
        }
    }

    #[test]
    fn when_login_fails_then_unknown_user_and_bad_password_differ() {
        let (unknown, _) = map_account_error(AccountError::UserNotFound, AccountErrorContext::Login);
        let (wrong, _) =
            map_account_error(AccountError::IncorrectPassword, AccountErrorContext::Login);

        assert_eq!(unknown, StatusCode::NOT_FOUND);
        assert_eq!(wrong, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn when_hashing_fails_then_maps_to_internal_error() {
        let (status, Json(body)) =
            map_account_error(AccountError::HashingFailure, AccountErrorContext::Login);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "internal error");
    }

    #[test]
    fn when_email_is_taken_then_maps_to_conflict() {
        let (status, Json(body)) =
            map_account_error(AccountError::EmailTaken, AccountErrorContext::Signup);

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.message, "email is already registered");
    }
}
