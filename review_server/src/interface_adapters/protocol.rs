use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Review;

// Request payload for signup.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

// Request payload for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Response payload for login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

// Response payload for logout.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub revoked: bool,
}

#[derive(Debug, Serialize)]
pub struct UsernameResponse {
    pub username: String,
}

// Request payload for a new rating and review.
#[derive(Debug, Deserialize)]
pub struct SubmitReviewRequest {
    pub hotel_name: String,
    pub rating: f64,
    #[serde(default)]
    pub review: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitReviewResponse {
    pub message: String,
    pub review_id: Uuid,
}

// Query string naming a hotel.
#[derive(Debug, Deserialize)]
pub struct HotelQuery {
    pub hotel_name: String,
}

// Request payload for editing an existing review.
#[derive(Debug, Deserialize)]
pub struct UpdateReviewRequest {
    pub rating: f64,
    #[serde(default)]
    pub review: String,
}

// Review as exposed over HTTP.
#[derive(Debug, Serialize)]
pub struct ReviewView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub rating: f64,
    pub review: String,
    pub user_name: String,
    pub reply: Option<String>,
    pub reported: bool,
    pub created_at: u64,
}

impl From<Review> for ReviewView {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            rating: review.rating,
            review: review.review,
            user_name: review.user_name,
            reply: review.reply,
            reported: review.reported,
            created_at: review.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AverageRatingResponse {
    pub average_rating: f64,
    pub total_reviews: u64,
}

#[derive(Debug, Deserialize)]
pub struct SubmitReplyRequest {
    pub reply: String,
}

// Request payload for flagging a review.
#[derive(Debug, Deserialize)]
pub struct FlagReviewRequest {
    pub review_id: Uuid,
}

// Request payload for filing a report with a reason.
#[derive(Debug, Deserialize)]
pub struct ReportReviewRequest {
    pub reason: String,
}

// Plain acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
