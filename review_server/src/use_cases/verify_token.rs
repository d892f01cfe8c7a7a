use uuid::Uuid;

use crate::domain::errors::SessionError;
use crate::domain::ports::{Clock, SessionStore};

// Token verification use case with injected dependencies.
pub struct VerifyTokenUseCase<C, S> {
    pub clock: C,
    pub store: S,
}

impl<C, S> VerifyTokenUseCase<C, S>
where
    C: Clock,
    S: SessionStore,
{
    // Resolves a bearer token to the user it was issued for.
    pub async fn execute(&self, token: &str) -> Result<Uuid, SessionError> {
        let session = self
            .store
            .get(token)
            .await
            .map_err(|_| SessionError::StorageFailure)?
            .ok_or(SessionError::InvalidToken)?;

        if session.is_expired_at(self.clock.now_epoch_seconds()) {
            // Best-effort cleanup of expired session.
            let _ = self.store.remove(token).await;
            return Err(SessionError::SessionExpired);
        }

        Ok(session.user_id)
    }
}
