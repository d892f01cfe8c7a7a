use crate::domain::errors::SessionError;
use crate::domain::ports::{Clock, SessionStore};

// Removes every session whose expiry has passed, whether or not its token is
// ever presented again.
pub struct PruneSessionsUseCase<C, S> {
    pub clock: C,
    pub store: S,
}

impl<C, S> PruneSessionsUseCase<C, S>
where
    C: Clock,
    S: SessionStore,
{
    pub async fn execute(&self) -> Result<u64, SessionError> {
        self.store
            .remove_expired(self.clock.now_epoch_seconds())
            .await
            .map_err(|_| SessionError::StorageFailure)
    }
}
