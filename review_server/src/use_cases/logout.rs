use crate::domain::errors::SessionError;
use crate::domain::ports::SessionStore;

// Logout use case with injected dependencies.
pub struct LogoutUseCase<S> {
    pub store: S,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    // Returns whether a live session was revoked.
    pub async fn execute(&self, token: &str) -> Result<bool, SessionError> {
        self.store
            .remove(token)
            .await
            .map_err(|_| SessionError::StorageFailure)
    }
}
