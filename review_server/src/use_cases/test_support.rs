use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Barrier;
use uuid::Uuid;

use crate::domain::entities::{HotelReviews, Review, ReviewReport, Session, User};
use crate::domain::ports::{
    Clock, PasswordHasher, ReportStore, ReviewStore, SessionStore, UserStore,
};

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) u64);

impl Clock for FixedClock {
    fn now_epoch_seconds(&self) -> u64 {
        self.0
    }
}

// Reversible stand-in so tests can assert on stored hashes.
pub(crate) struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: &str) -> Result<String, String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, String> {
        Ok(stored_hash.strip_prefix("plain:") == Some(password))
    }
}

// Hasher whose backend is unavailable.
pub(crate) struct BrokenHasher;

#[async_trait]
impl PasswordHasher for BrokenHasher {
    async fn hash(&self, _password: &str) -> Result<String, String> {
        Err("hash failed".to_string())
    }

    async fn verify(&self, _password: &str, _stored_hash: &str) -> Result<bool, String> {
        Err("verify failed".to_string())
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub read: bool,
    pub write: bool,
}

pub(crate) fn test_user(first_name: &str, last_name: &str) -> User {
    User {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!("{}@example.com", first_name.to_ascii_lowercase()),
        password_hash: "plain:correct-horse".to_string(),
    }
}

pub(crate) fn test_review(user_id: Uuid, rating: f64) -> Review {
    Review {
        id: Uuid::new_v4(),
        user_id,
        rating,
        review: "Clean rooms".to_string(),
        user_name: "Test User".to_string(),
        reply: None,
        reported: false,
        created_at: 0,
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingUserStore {
    users: Arc<Mutex<Vec<User>>>,
    failures: FailureFlags,
}

impl RecordingUserStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_user(&self, user: User) {
        let mut guard = self.users.lock().expect("users mutex poisoned");
        guard.push(user);
    }

    pub(crate) fn users(&self) -> Vec<User> {
        self.users.lock().expect("users mutex poisoned").clone()
    }
}

#[async_trait]
impl UserStore for RecordingUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        if self.failures.read {
            return Err("find failed".to_string());
        }
        let guard = self.users.lock().expect("users mutex poisoned");
        Ok(guard.iter().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, String> {
        if self.failures.read {
            return Err("find failed".to_string());
        }
        let guard = self.users.lock().expect("users mutex poisoned");
        Ok(guard.iter().find(|user| user.id == id).cloned())
    }

    async fn create(&self, user: User) -> Result<(), String> {
        if self.failures.write {
            return Err("create failed".to_string());
        }
        let mut guard = self.users.lock().expect("users mutex poisoned");
        guard.push(user);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingSessionStore {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
    failures: FailureFlags,
}

impl RecordingSessionStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_session(&self, token: impl Into<String>, session: Session) {
        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.insert(token.into(), session);
    }

    pub(crate) fn get_test_session(&self, token: &str) -> Option<Session> {
        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.get(token).cloned()
    }

    pub(crate) fn session_count(&self) -> usize {
        self.sessions.lock().expect("sessions mutex poisoned").len()
    }
}

#[async_trait]
impl SessionStore for RecordingSessionStore {
    async fn insert(&self, token: String, session: Session) -> Result<(), String> {
        if self.failures.write {
            return Err("insert failed".to_string());
        }
        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.insert(token, session);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, String> {
        if self.failures.read {
            return Err("get failed".to_string());
        }
        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        Ok(guard.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<bool, String> {
        if self.failures.write {
            return Err("remove failed".to_string());
        }
        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        Ok(guard.remove(token).is_some())
    }

    async fn remove_expired(&self, now: u64) -> Result<u64, String> {
        if self.failures.write {
            return Err("prune failed".to_string());
        }
        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        let before = guard.len();
        guard.retain(|_, session| !session.is_expired_at(now));
        Ok((before - guard.len()) as u64)
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingReviewStore {
    // Aggregates in creation order, mirroring first-match lookups.
    aggregates: Arc<Mutex<Vec<HotelReviews>>>,
    failures: FailureFlags,
    // Holds hotel lookups until every caller has read, forcing interleaving.
    lookup_barrier: Option<Arc<Barrier>>,
}

impl RecordingReviewStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn with_lookup_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.lookup_barrier = Some(barrier);
        self
    }

    pub(crate) fn without_lookup_barrier(mut self) -> Self {
        self.lookup_barrier = None;
        self
    }

    pub(crate) fn insert_test_aggregate(&self, aggregate: HotelReviews) {
        let mut guard = self.aggregates.lock().expect("aggregates mutex poisoned");
        guard.push(aggregate);
    }

    pub(crate) fn aggregates(&self) -> Vec<HotelReviews> {
        self.aggregates
            .lock()
            .expect("aggregates mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl ReviewStore for RecordingReviewStore {
    async fn find_first_by_hotel(
        &self,
        hotel_name: &str,
    ) -> Result<Option<HotelReviews>, String> {
        if self.failures.read {
            return Err("find failed".to_string());
        }
        let found = {
            let guard = self.aggregates.lock().expect("aggregates mutex poisoned");
            guard
                .iter()
                .find(|aggregate| aggregate.hotel_name == hotel_name)
                .cloned()
        };
        if let Some(barrier) = &self.lookup_barrier {
            barrier.wait().await;
        }
        Ok(found)
    }

    async fn find_all_by_hotel(&self, hotel_name: &str) -> Result<Vec<HotelReviews>, String> {
        if self.failures.read {
            return Err("find failed".to_string());
        }
        let guard = self.aggregates.lock().expect("aggregates mutex poisoned");
        Ok(guard
            .iter()
            .filter(|aggregate| aggregate.hotel_name == hotel_name)
            .cloned()
            .collect())
    }

    async fn find_by_review_id(&self, review_id: Uuid) -> Result<Option<HotelReviews>, String> {
        if self.failures.read {
            return Err("find failed".to_string());
        }
        let guard = self.aggregates.lock().expect("aggregates mutex poisoned");
        Ok(guard
            .iter()
            .find(|aggregate| aggregate.contains(review_id))
            .cloned())
    }

    async fn save(&self, aggregate: &HotelReviews) -> Result<(), String> {
        if self.failures.write {
            return Err("save failed".to_string());
        }
        let mut guard = self.aggregates.lock().expect("aggregates mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id == aggregate.id) {
            Some(existing) => *existing = aggregate.clone(),
            None => guard.push(aggregate.clone()),
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingReportStore {
    reports: Arc<Mutex<Vec<ReviewReport>>>,
    failures: FailureFlags,
}

impl RecordingReportStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn reports(&self) -> Vec<ReviewReport> {
        self.reports.lock().expect("reports mutex poisoned").clone()
    }
}

#[async_trait]
impl ReportStore for RecordingReportStore {
    async fn insert(&self, report: ReviewReport) -> Result<(), String> {
        if self.failures.write {
            return Err("insert failed".to_string());
        }
        let mut guard = self.reports.lock().expect("reports mutex poisoned");
        guard.push(report);
        Ok(())
    }
}
