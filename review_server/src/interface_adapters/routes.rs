use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::interface_adapters::handlers::accounts::{get_username, login, logout, signup};
use crate::interface_adapters::handlers::health;
use crate::interface_adapters::handlers::reviews::{
    average_rating, delete_review, flag_review, list_reviews, report_review, submit_reply,
    submit_review, update_review,
};
use crate::interface_adapters::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/get-username", get(get_username))
        .route("/submit-rating-review", post(submit_review))
        .route("/get-ratings-reviews", get(list_reviews))
        .route("/update-rating-review/{id}", put(update_review))
        .route("/delete-rating-review/{id}", delete(delete_review))
        .route("/get-average-rating", get(average_rating))
        .route("/submit-reply/{id}", post(submit_reply))
        .route("/report-review", post(flag_review))
        .route("/api/review/report/{id}", post(report_review))
        .with_state(state)
}
