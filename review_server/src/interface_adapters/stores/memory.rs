use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::{HotelReviews, ReviewReport, Session, User};
use crate::domain::ports::{ReportStore, ReviewStore, SessionStore, UserStore};

// In-memory credential store; users kept in signup order.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    pub users: Arc<Mutex<Vec<User>>>,
}

// In-memory session store adapter.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    pub sessions: Arc<Mutex<HashMap<String, Session>>>,
}

// In-memory review aggregates, kept in creation order for first-match lookups.
#[derive(Clone, Default)]
pub struct InMemoryReviewStore {
    pub aggregates: Arc<Mutex<Vec<HotelReviews>>>,
}

// In-memory report log.
#[derive(Clone, Default)]
pub struct InMemoryReportStore {
    pub reports: Arc<Mutex<Vec<ReviewReport>>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, String> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn create(&self, user: User) -> Result<(), String> {
        let mut users = self.users.lock().await;
        users.push(user);
        Ok(())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, token: String, session: Session) -> Result<(), String> {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(token, session);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, String> {
        let sessions = self.sessions.lock().await;
        Ok(sessions.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<bool, String> {
        let mut sessions = self.sessions.lock().await;
        Ok(sessions.remove(token).is_some())
    }

    async fn remove_expired(&self, now: u64) -> Result<u64, String> {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now));
        Ok((before - sessions.len()) as u64)
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn find_first_by_hotel(
        &self,
        hotel_name: &str,
    ) -> Result<Option<HotelReviews>, String> {
        let aggregates = self.aggregates.lock().await;
        Ok(aggregates
            .iter()
            .find(|aggregate| aggregate.hotel_name == hotel_name)
            .cloned())
    }

    async fn find_all_by_hotel(&self, hotel_name: &str) -> Result<Vec<HotelReviews>, String> {
        let aggregates = self.aggregates.lock().await;
        Ok(aggregates
            .iter()
            .filter(|aggregate| aggregate.hotel_name == hotel_name)
            .cloned()
            .collect())
    }

    async fn find_by_review_id(&self, review_id: Uuid) -> Result<Option<HotelReviews>, String> {
        let aggregates = self.aggregates.lock().await;
        Ok(aggregates
            .iter()
            .find(|aggregate| aggregate.contains(review_id))
            .cloned())
    }

    async fn save(&self, aggregate: &HotelReviews) -> Result<(), String> {
        let mut aggregates = self.aggregates.lock().await;
        match aggregates
            .iter_mut()
            .find(|existing| existing.id == aggregate.id)
        {
            Some(existing) => *existing = aggregate.clone(),
            None => aggregates.push(aggregate.clone()),
        }
        Ok(())
    }
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn insert(&self, report: ReviewReport) -> Result<(), String> {
        let mut reports = self.reports.lock().await;
        reports.push(report);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Review;

    fn review(rating: f64) -> Review {
        Review {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            rating,
            review: "ok".to_string(),
            user_name: "Ada Lovelace".to_string(),
            reply: None,
            reported: false,
            created_at: 0,
        }
    }

    #[tokio::test]
    async fn when_aggregate_is_saved_twice_then_it_is_updated_in_place() {
        let store = InMemoryReviewStore::default();
        let mut aggregate = HotelReviews::new("Seaside");
        store.save(&aggregate).await.expect("expected save");
        aggregate.push(review(4.0));
        store.save(&aggregate).await.expect("expected save");

        let all = store
            .find_all_by_hotel("Seaside")
            .await
            .expect("expected lookup");
        assert_eq!(all, vec![aggregate]);
    }

    #[tokio::test]
    async fn when_review_id_is_searched_then_owning_aggregate_is_returned() {
        let store = InMemoryReviewStore::default();
        let mut seaside = HotelReviews::new("Seaside");
        let mut mountain = HotelReviews::new("Mountain");
        let target = review(2.0);
        seaside.push(review(5.0));
        mountain.push(target.clone());
        store.save(&seaside).await.expect("expected save");
        store.save(&mountain).await.expect("expected save");

        let owner = store
            .find_by_review_id(target.id)
            .await
            .expect("expected lookup")
            .expect("expected owner");

        assert_eq!(owner.id, mountain.id);
    }

    #[tokio::test]
    async fn when_hotel_has_two_aggregates_then_first_created_wins() {
        let store = InMemoryReviewStore::default();
        let first = HotelReviews::new("Seaside");
        let second = HotelReviews::new("Seaside");
        store.save(&first).await.expect("expected save");
        store.save(&second).await.expect("expected save");

        let found = store
            .find_first_by_hotel("Seaside")
            .await
            .expect("expected lookup")
            .expect("expected aggregate");

        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn when_expired_sessions_are_pruned_then_unexpired_ones_remain() {
        let store = InMemorySessionStore::default();
        let session = |expires_at| Session {
            user_id: Uuid::new_v4(),
            session_id: "session-1".to_string(),
            issued_at: 0,
            expires_at,
        };
        store
            .insert("stale".to_string(), session(Some(10)))
            .await
            .expect("expected insert");
        store
            .insert("fresh".to_string(), session(Some(100)))
            .await
            .expect("expected insert");
        store
            .insert("forever".to_string(), session(None))
            .await
            .expect("expected insert");

        let removed = store.remove_expired(50).await.expect("expected prune");

        assert_eq!(removed, 1);
        assert!(store.get("stale").await.expect("expected lookup").is_none());
        assert!(store.get("fresh").await.expect("expected lookup").is_some());
        assert!(store.get("forever").await.expect("expected lookup").is_some());
    }
}
