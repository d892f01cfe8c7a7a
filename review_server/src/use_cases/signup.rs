use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::errors::AccountError;
use crate::domain::ports::{PasswordHasher, UserStore};
use crate::use_cases::validation;

// Input accepted by the signup use case.
pub struct SignupCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

// Signup use case with injected dependencies.
pub struct SignupUseCase<U, H> {
    pub users: U,
    pub hasher: H,
}

impl<U, H> SignupUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub async fn execute(&self, command: SignupCommand) -> Result<Uuid, AccountError> {
        let first_name =
            validation::person_name(&command.first_name).ok_or(AccountError::InvalidName)?;
        let last_name =
            validation::person_name(&command.last_name).ok_or(AccountError::InvalidName)?;
        let email = validation::email(&command.email).ok_or(AccountError::InvalidEmail)?;
        if !validation::password(&command.password) {
            return Err(AccountError::InvalidPassword);
        }

        let existing = self
            .users
            .find_by_email(&email)
            .await
            .map_err(|_| AccountError::StorageFailure)?;
        if existing.is_some() {
            return Err(AccountError::EmailTaken);
        }

        let password_hash = self
            .hasher
            .hash(&command.password)
            .await
            .map_err(|_| AccountError::HashingFailure)?;

        let user = User {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            password_hash,
        };
        let user_id = user.id;

        self.users
            .create(user)
            .await
            .map_err(|_| AccountError::StorageFailure)?;

        Ok(user_id)
    }
}
