use uuid::Uuid;

use crate::domain::errors::AccountError;
use crate::domain::ports::UserStore;

// Looks up the display name of the authenticated user.
pub struct CurrentUsernameUseCase<U> {
    pub users: U,
}

impl<U> CurrentUsernameUseCase<U>
where
    U: UserStore,
{
    pub async fn execute(&self, user_id: Uuid) -> Result<String, AccountError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|_| AccountError::StorageFailure)?
            .ok_or(AccountError::UserNotFound)?;

        Ok(user.first_name)
    }
}
