use async_trait::async_trait;

use crate::domain::ports::PasswordHasher;

// bcrypt password hashing, run on tokio's blocking pool.
#[derive(Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, String> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|err| err.to_string())?
            .map_err(|err| err.to_string())
    }

    async fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, String> {
        let password = password.to_owned();
        let stored_hash = stored_hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash))
            .await
            .map_err(|err| err.to_string())?
            .map_err(|err| err.to_string())
    }
}
