use uuid::Uuid;

use crate::domain::entities::Session;
use crate::domain::errors::AccountError;
use crate::domain::ports::{Clock, PasswordHasher, SessionStore, UserStore};

// Response returned by the login use case.
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub expires_at: Option<u64>,
}

// Login use case with injected dependencies.
pub struct LoginUseCase<U, S, H, C> {
    pub users: U,
    pub sessions: S,
    pub hasher: H,
    pub clock: C,
    // Zero keeps sessions alive until logout.
    pub ttl_seconds: u64,
}

impl<U, S, H, C> LoginUseCase<U, S, H, C>
where
    U: UserStore,
    S: SessionStore,
    H: PasswordHasher,
    C: Clock,
{
    pub async fn execute(&self, email: &str, password: &str) -> Result<LoginResponse, AccountError> {
        let email = email.trim().to_ascii_lowercase();
        let user = self
            .users
            .find_by_email(&email)
            .await
            .map_err(|_| AccountError::StorageFailure)?
            .ok_or(AccountError::UserNotFound)?;

        let matches = self
            .hasher
            .verify(password, &user.password_hash)
            .await
            .map_err(|_| AccountError::HashingFailure)?;
        if !matches {
            return Err(AccountError::IncorrectPassword);
        }

        let token = Uuid::new_v4().to_string();
        let issued_at = self.clock.now_epoch_seconds();
        // Saturates rather than wrapping into the past.
        let expires_at = (self.ttl_seconds > 0)
            .then(|| issued_at.checked_add(self.ttl_seconds).unwrap_or(u64::MAX));

        let session = Session {
            user_id: user.id,
            session_id: Uuid::new_v4().to_string(),
            issued_at,
            expires_at,
        };

        self.sessions
            .insert(token.clone(), session)
            .await
            .map_err(|_| AccountError::StorageFailure)?;

        Ok(LoginResponse {
            token,
            username: user.first_name,
            expires_at,
        })
    }
}
