use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::interface_adapters::auth::AuthenticatedUser;
use crate::interface_adapters::handlers::map_review_error;
use crate::interface_adapters::protocol::{
    AverageRatingResponse, ErrorResponse, FlagReviewRequest, HotelQuery, MessageResponse,
    ReportReviewRequest, ReviewView, SubmitReplyRequest, SubmitReviewRequest,
    SubmitReviewResponse, UpdateReviewRequest,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::average_rating::AverageRatingUseCase;
use crate::use_cases::delete_review::DeleteReviewUseCase;
use crate::use_cases::flag_review::FlagReviewUseCase;
use crate::use_cases::list_reviews::ListReviewsUseCase;
use crate::use_cases::report_review::ReportReviewUseCase;
use crate::use_cases::submit_reply::SubmitReplyUseCase;
use crate::use_cases::submit_review::{SubmitReviewCommand, SubmitReviewUseCase};
use crate::use_cases::update_review::UpdateReviewUseCase;

type HandlerError = (StatusCode, Json<ErrorResponse>);

#[tracing::instrument(
    name = "submit_review",
    skip_all,
    fields(user_id = %user.user_id, hotel_name = %payload.hotel_name)
)]
pub async fn submit_review(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<SubmitReviewRequest>,
) -> Result<(StatusCode, Json<SubmitReviewResponse>), HandlerError> {
    let use_case = SubmitReviewUseCase {
        users: state.users.clone(),
        reviews: state.reviews.clone(),
        clock: state.clock.clone(),
    };

    let review_id = use_case
        .execute(SubmitReviewCommand {
            hotel_name: payload.hotel_name,
            user_id: user.user_id,
            rating: payload.rating,
            review: payload.review,
        })
        .await
        .map_err(map_review_error)?;

    tracing::info!(%review_id, "review submitted");

    Ok((
        StatusCode::CREATED,
        Json(SubmitReviewResponse {
            message: "Rating and review submitted successfully".to_string(),
            review_id,
        }),
    ))
}

#[tracing::instrument(name = "list_reviews", skip_all, fields(hotel_name = %query.hotel_name))]
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(query): Query<HotelQuery>,
) -> Result<Json<Vec<ReviewView>>, HandlerError> {
    let use_case = ListReviewsUseCase {
        reviews: state.reviews.clone(),
    };

    let reviews = use_case
        .execute(&query.hotel_name)
        .await
        .map_err(map_review_error)?;

    Ok(Json(reviews.into_iter().map(ReviewView::from).collect()))
}

// Edits rating and text in place; reply, author and flags are kept.
#[tracing::instrument(name = "update_review", skip_all, fields(review_id = %review_id))]
pub async fn update_review(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    Json(payload): Json<UpdateReviewRequest>,
) -> Result<Json<MessageResponse>, HandlerError> {
    let use_case = UpdateReviewUseCase {
        reviews: state.reviews.clone(),
    };

    use_case
        .execute(review_id, payload.rating, payload.review)
        .await
        .map_err(map_review_error)?;

    Ok(Json(MessageResponse::new(
        "Rating and review updated successfully",
    )))
}

#[tracing::instrument(name = "delete_review", skip_all, fields(review_id = %review_id))]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, HandlerError> {
    let use_case = DeleteReviewUseCase {
        reviews: state.reviews.clone(),
    };

    use_case
        .execute(review_id)
        .await
        .map_err(map_review_error)?;

    Ok(Json(MessageResponse::new(
        "Rating and review deleted successfully",
    )))
}

#[tracing::instrument(name = "average_rating", skip_all, fields(hotel_name = %query.hotel_name))]
pub async fn average_rating(
    State(state): State<AppState>,
    Query(query): Query<HotelQuery>,
) -> Result<Json<AverageRatingResponse>, HandlerError> {
    let use_case = AverageRatingUseCase {
        reviews: state.reviews.clone(),
    };

    let summary = use_case
        .execute(&query.hotel_name)
        .await
        .map_err(map_review_error)?;

    Ok(Json(AverageRatingResponse {
        average_rating: summary.average,
        total_reviews: summary.count,
    }))
}

#[tracing::instrument(name = "submit_reply", skip_all, fields(user_id = %user.user_id, review_id = %review_id))]
pub async fn submit_reply(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(review_id): Path<Uuid>,
    Json(payload): Json<SubmitReplyRequest>,
) -> Result<Json<MessageResponse>, HandlerError> {
    let use_case = SubmitReplyUseCase {
        reviews: state.reviews.clone(),
    };

    use_case
        .execute(review_id, payload.reply, user.user_id)
        .await
        .map_err(map_review_error)?;

    Ok(Json(MessageResponse::new("Reply submitted successfully")))
}

// Marks a review as reported; repeat flags are accepted.
#[tracing::instrument(
    name = "flag_review",
    skip_all,
    fields(user_id = %user.user_id, review_id = %payload.review_id)
)]
pub async fn flag_review(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<FlagReviewRequest>,
) -> Result<Json<MessageResponse>, HandlerError> {
    let use_case = FlagReviewUseCase {
        reviews: state.reviews.clone(),
    };

    use_case
        .execute(payload.review_id)
        .await
        .map_err(map_review_error)?;

    Ok(Json(MessageResponse::new("Review reported successfully")))
}

#[tracing::instrument(name = "report_review", skip_all, fields(review_id = %review_id))]
pub async fn report_review(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    Json(payload): Json<ReportReviewRequest>,
) -> Result<Json<MessageResponse>, HandlerError> {
    let use_case = ReportReviewUseCase {
        reports: state.reports.clone(),
        clock: state.clock.clone(),
    };

    let report_id = use_case
        .execute(review_id, payload.reason)
        .await
        .map_err(map_review_error)?;

    tracing::info!(%report_id, "review report filed");

    Ok(Json(MessageResponse::new("Review reported successfully")))
}
