use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{HotelReviews, ReviewReport, Session, User};

// Port for the credential store.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, String>;
    async fn create(&self, user: User) -> Result<(), String>;
}

// Port for bearer session storage used by the token issuer.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, token: String, session: Session) -> Result<(), String>;
    async fn get(&self, token: &str) -> Result<Option<Session>, String>;
    async fn remove(&self, token: &str) -> Result<bool, String>;
    // Drops sessions whose expiry is at or before `now`; returns how many went.
    async fn remove_expired(&self, now: u64) -> Result<u64, String>;
}

// Port for the per-hotel review aggregates.
//
// Lookups by hotel name or review id return the earliest created match.
// `save` writes the whole aggregate in one step, inserting it when new.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn find_first_by_hotel(&self, hotel_name: &str)
        -> Result<Option<HotelReviews>, String>;
    async fn find_all_by_hotel(&self, hotel_name: &str) -> Result<Vec<HotelReviews>, String>;
    async fn find_by_review_id(&self, review_id: Uuid) -> Result<Option<HotelReviews>, String>;
    async fn save(&self, aggregate: &HotelReviews) -> Result<(), String>;
}

// Port for persisted abuse reports.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn insert(&self, report: ReviewReport) -> Result<(), String>;
}

// Port for hashing and checking passwords; implementations must not block
// the async runtime.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, String>;
    async fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, String>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> u64;
}

// Shared adapters live behind `Arc<dyn Port>` in the app state, so the
// use cases accept those directly.

#[async_trait]
impl<T: UserStore + ?Sized> UserStore for Arc<T> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        (**self).find_by_email(email).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, String> {
        (**self).find_by_id(id).await
    }

    async fn create(&self, user: User) -> Result<(), String> {
        (**self).create(user).await
    }
}

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn insert(&self, token: String, session: Session) -> Result<(), String> {
        (**self).insert(token, session).await
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, String> {
        (**self).get(token).await
    }

    async fn remove(&self, token: &str) -> Result<bool, String> {
        (**self).remove(token).await
    }

    async fn remove_expired(&self, now: u64) -> Result<u64, String> {
        (**self).remove_expired(now).await
    }
}

#[async_trait]
impl<T: ReviewStore + ?Sized> ReviewStore for Arc<T> {
    async fn find_first_by_hotel(
        &self,
        hotel_name: &str,
    ) -> Result<Option<HotelReviews>, String> {
        (**self).find_first_by_hotel(hotel_name).await
    }

    async fn find_all_by_hotel(&self, hotel_name: &str) -> Result<Vec<HotelReviews>, String> {
        (**self).find_all_by_hotel(hotel_name).await
    }

    async fn find_by_review_id(&self, review_id: Uuid) -> Result<Option<HotelReviews>, String> {
        (**self).find_by_review_id(review_id).await
    }

    async fn save(&self, aggregate: &HotelReviews) -> Result<(), String> {
        (**self).save(aggregate).await
    }
}

#[async_trait]
impl<T: ReportStore + ?Sized> ReportStore for Arc<T> {
    async fn insert(&self, report: ReviewReport) -> Result<(), String> {
        (**self).insert(report).await
    }
}

#[async_trait]
impl<T: PasswordHasher + ?Sized> PasswordHasher for Arc<T> {
    async fn hash(&self, password: &str) -> Result<String, String> {
        (**self).hash(password).await
    }

    async fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, String> {
        (**self).verify(password, stored_hash).await
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now_epoch_seconds(&self) -> u64 {
        (**self).now_epoch_seconds()
    }
}
