use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Registered account as kept by the credential store.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    // Name snapshotted onto reviews at submission time.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// Bearer session record keyed by its token.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user_id: Uuid,
    pub session_id: String,
    pub issued_at: u64,
    // None means the session never expires.
    pub expires_at: Option<u64>,
}

impl Session {
    pub fn is_expired_at(&self, now: u64) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

// Single review embedded in a hotel aggregate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub rating: f64,
    pub review: String,
    pub user_name: String,
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub reported: bool,
    #[serde(default)]
    pub created_at: u64,
}

// Per-hotel document holding every review in submission order.
#[derive(Clone, Debug, PartialEq)]
pub struct HotelReviews {
    pub id: Uuid,
    pub hotel_name: String,
    pub reviews: Vec<Review>,
}

// Free-text abuse report filed against a review id.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewReport {
    pub id: Uuid,
    pub review_id: Uuid,
    pub reason: String,
    pub created_at: u64,
}
