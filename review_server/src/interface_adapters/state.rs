use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::ports::{Clock, PasswordHasher, ReportStore, ReviewStore, SessionStore, UserStore};
use crate::interface_adapters::stores::memory::{
    InMemoryReportStore, InMemoryReviewStore, InMemorySessionStore, InMemoryUserStore,
};
use crate::interface_adapters::stores::postgres::{
    PostgresReportStore, PostgresReviewStore, PostgresSessionStore, PostgresUserStore,
};
use sqlx::PgPool;

// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub reviews: Arc<dyn ReviewStore>,
    pub reports: Arc<dyn ReportStore>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub clock: Arc<dyn Clock>,
    // Zero keeps sessions alive until logout.
    pub session_ttl_seconds: u64,
}

impl AppState {
    // State backed entirely by in-process stores.
    pub fn in_memory(hasher: Arc<dyn PasswordHasher>, session_ttl_seconds: u64) -> Self {
        Self {
            users: Arc::new(InMemoryUserStore::default()),
            sessions: Arc::new(InMemorySessionStore::default()),
            reviews: Arc::new(InMemoryReviewStore::default()),
            reports: Arc::new(InMemoryReportStore::default()),
            hasher,
            clock: Arc::new(SystemClock),
            session_ttl_seconds,
        }
    }

    // State backed by PostgreSQL; all stores share one pool.
    pub fn postgres(db: PgPool, hasher: Arc<dyn PasswordHasher>, session_ttl_seconds: u64) -> Self {
        Self {
            users: Arc::new(PostgresUserStore { db: db.clone() }),
            sessions: Arc::new(PostgresSessionStore { db: db.clone() }),
            reviews: Arc::new(PostgresReviewStore { db: db.clone() }),
            reports: Arc::new(PostgresReportStore { db }),
            hasher,
            clock: Arc::new(SystemClock),
            session_ttl_seconds,
        }
    }
}

// System clock adapter used by the use cases.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}
