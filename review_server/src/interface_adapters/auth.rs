use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use uuid::Uuid;

use crate::domain::errors::SessionError;
use crate::interface_adapters::handlers::error_response;
use crate::interface_adapters::protocol::ErrorResponse;
use crate::interface_adapters::state::AppState;
use crate::use_cases::verify_token::VerifyTokenUseCase;

// Identity resolved from `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub token: String,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| error_response(StatusCode::UNAUTHORIZED, "missing bearer token"))?
            .to_string();

        let use_case = VerifyTokenUseCase {
            clock: state.clock.clone(),
            store: state.sessions.clone(),
        };
        let user_id = use_case.execute(&token).await.map_err(map_session_error)?;

        Ok(Self { user_id, token })
    }
}

pub(crate) fn map_session_error(err: SessionError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        SessionError::InvalidToken => {
            error_response(StatusCode::UNAUTHORIZED, "invalid session token")
        }
        SessionError::SessionExpired => error_response(StatusCode::UNAUTHORIZED, "session expired"),
        SessionError::StorageFailure => {
            tracing::error!("session lookup failed");
            error_response(StatusCode::BAD_GATEWAY, "storage error")
        }
    }
}
