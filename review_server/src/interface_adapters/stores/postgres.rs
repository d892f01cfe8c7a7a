use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{HotelReviews, Review, ReviewReport, Session, User};
use crate::domain::ports::{ReportStore, ReviewStore, SessionStore, UserStore};

// PostgreSQL-backed credential store.
#[derive(Clone)]
pub struct PostgresUserStore {
    pub db: PgPool,
}

// PostgreSQL-backed session store.
#[derive(Clone)]
pub struct PostgresSessionStore {
    pub db: PgPool,
}

// PostgreSQL-backed review aggregates; each aggregate is one row with its
// reviews in a JSONB array, so every save is a single-row write.
#[derive(Clone)]
pub struct PostgresReviewStore {
    pub db: PgPool,
}

// PostgreSQL-backed report log.
#[derive(Clone)]
pub struct PostgresReportStore {
    pub db: PgPool,
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            password_hash: row.password_hash,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    user_id: Uuid,
    session_id: String,
    issued_at: i64,
    expires_at: Option<i64>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session {
            user_id: row.user_id,
            session_id: row.session_id,
            issued_at: from_db_seconds(row.issued_at),
            expires_at: row.expires_at.map(from_db_seconds),
        }
    }
}

#[derive(sqlx::FromRow)]
struct AggregateRow {
    id: Uuid,
    hotel_name: String,
    reviews: Json<Vec<Review>>,
}

impl From<AggregateRow> for HotelReviews {
    fn from(row: AggregateRow) -> Self {
        HotelReviews {
            id: row.id,
            hotel_name: row.hotel_name,
            reviews: row.reviews.0,
        }
    }
}

// Epoch seconds are BIGINT columns.
fn to_db_seconds(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn from_db_seconds(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, email, password_hash
            FROM users
            WHERE email = $1
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map(|row| row.map(User::from))
        .map_err(|err| err.to_string())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, String> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, email, password_hash
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map(|row| row.map(User::from))
        .map_err(|err| err.to_string())
    }

    async fn create(&self, user: User) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, email, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        Ok(())
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn insert(&self, token: String, session: Session) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO sessions (token, user_id, session_id, issued_at, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(token)
        .bind(session.user_id)
        .bind(session.session_id)
        .bind(to_db_seconds(session.issued_at))
        .bind(session.expires_at.map(to_db_seconds))
        .execute(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, String> {
        sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT user_id, session_id, issued_at, expires_at
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.db)
        .await
        .map(|row| row.map(Session::from))
        .map_err(|err| err.to_string())
    }

    async fn remove(&self, token: &str) -> Result<bool, String> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.db)
            .await
            .map_err(|err| err.to_string())?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_expired(&self, now: u64) -> Result<u64, String> {
        let result = sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE expires_at IS NOT NULL AND expires_at <= $1
            "#,
        )
        .bind(to_db_seconds(now))
        .execute(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ReviewStore for PostgresReviewStore {
    async fn find_first_by_hotel(
        &self,
        hotel_name: &str,
    ) -> Result<Option<HotelReviews>, String> {
        sqlx::query_as::<_, AggregateRow>(
            r#"
            SELECT id, hotel_name, reviews
            FROM hotel_reviews
            WHERE hotel_name = $1
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .bind(hotel_name)
        .fetch_optional(&self.db)
        .await
        .map(|row| row.map(HotelReviews::from))
        .map_err(|err| err.to_string())
    }

    async fn find_all_by_hotel(&self, hotel_name: &str) -> Result<Vec<HotelReviews>, String> {
        sqlx::query_as::<_, AggregateRow>(
            r#"
            SELECT id, hotel_name, reviews
            FROM hotel_reviews
            WHERE hotel_name = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(hotel_name)
        .fetch_all(&self.db)
        .await
        .map(|rows| rows.into_iter().map(HotelReviews::from).collect())
        .map_err(|err| err.to_string())
    }

    async fn find_by_review_id(&self, review_id: Uuid) -> Result<Option<HotelReviews>, String> {
        // Containment match on the embedded review ids; served by the GIN index.
        sqlx::query_as::<_, AggregateRow>(
            r#"
            SELECT id, hotel_name, reviews
            FROM hotel_reviews
            WHERE reviews @> jsonb_build_array(jsonb_build_object('id', $1::text))
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .bind(review_id.to_string())
        .fetch_optional(&self.db)
        .await
        .map(|row| row.map(HotelReviews::from))
        .map_err(|err| err.to_string())
    }

    async fn save(&self, aggregate: &HotelReviews) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO hotel_reviews (id, hotel_name, reviews)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET
                reviews = EXCLUDED.reviews
            "#,
        )
        .bind(aggregate.id)
        .bind(&aggregate.hotel_name)
        .bind(Json(&aggregate.reviews))
        .execute(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        Ok(())
    }
}

#[async_trait]
impl ReportStore for PostgresReportStore {
    async fn insert(&self, report: ReviewReport) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO review_reports (id, review_id, reason, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(report.id)
        .bind(report.review_id)
        .bind(report.reason)
        .bind(to_db_seconds(report.created_at))
        .execute(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        Ok(())
    }
}
