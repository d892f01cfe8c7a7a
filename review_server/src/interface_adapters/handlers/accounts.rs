use axum::{extract::State, http::StatusCode, Json};

use crate::interface_adapters::auth::{map_session_error, AuthenticatedUser};
use crate::interface_adapters::handlers::{map_account_error, AccountErrorContext};
use crate::interface_adapters::protocol::{
    ErrorResponse, LoginRequest, LoginResponse, LogoutResponse, MessageResponse, SignupRequest,
    UsernameResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::current_user::CurrentUsernameUseCase;
use crate::use_cases::login::LoginUseCase;
use crate::use_cases::logout::LogoutUseCase;
use crate::use_cases::signup::{SignupCommand, SignupUseCase};

type HandlerError = (StatusCode, Json<ErrorResponse>);

// Handler for creating an account.
#[tracing::instrument(name = "signup", skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), HandlerError> {
    let use_case = SignupUseCase {
        users: state.users.clone(),
        hasher: state.hasher.clone(),
    };

    let user_id = use_case
        .execute(SignupCommand {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(|err| map_account_error(err, AccountErrorContext::Signup))?;

    tracing::info!(%user_id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

// Handler for exchanging credentials for a bearer token.
#[tracing::instrument(name = "login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HandlerError> {
    let use_case = LoginUseCase {
        users: state.users.clone(),
        sessions: state.sessions.clone(),
        hasher: state.hasher.clone(),
        clock: state.clock.clone(),
        ttl_seconds: state.session_ttl_seconds,
    };

    let result = use_case
        .execute(&payload.email, &payload.password)
        .await
        .map_err(|err| map_account_error(err, AccountErrorContext::Login))?;

    Ok(Json(LoginResponse {
        token: result.token,
        username: result.username,
    }))
}

// Handler for revoking the caller's bearer token.
#[tracing::instrument(name = "logout", skip_all, fields(user_id = %user.user_id))]
pub async fn logout(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<LogoutResponse>, HandlerError> {
    let use_case = LogoutUseCase {
        store: state.sessions.clone(),
    };

    let revoked = use_case
        .execute(&user.token)
        .await
        .map_err(map_session_error)?;

    Ok(Json(LogoutResponse { revoked }))
}

#[tracing::instrument(name = "get_username", skip_all, fields(user_id = %user.user_id))]
pub async fn get_username(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<UsernameResponse>, HandlerError> {
    let use_case = CurrentUsernameUseCase {
        users: state.users.clone(),
    };

    let username = use_case
        .execute(user.user_id)
        .await
        .map_err(|err| map_account_error(err, AccountErrorContext::Profile))?;

    Ok(Json(UsernameResponse { username }))
}
