use uuid::Uuid;

use crate::domain::entities::{HotelReviews, Review};
use crate::domain::errors::ReviewError;
use crate::domain::ports::{Clock, ReviewStore, UserStore};
use crate::use_cases::validation;

// Input accepted by the submit review use case.
pub struct SubmitReviewCommand {
    pub hotel_name: String,
    pub user_id: Uuid,
    pub rating: f64,
    pub review: String,
}

// Appends a review to the hotel's aggregate, creating it on first use.
//
// Lookup and save are separate store round trips with no lock in between,
// so two first submissions for the same hotel can each create an aggregate.
pub struct SubmitReviewUseCase<U, R, C> {
    pub users: U,
    pub reviews: R,
    pub clock: C,
}

impl<U, R, C> SubmitReviewUseCase<U, R, C>
where
    U: UserStore,
    R: ReviewStore,
    C: Clock,
{
    pub async fn execute(&self, command: SubmitReviewCommand) -> Result<Uuid, ReviewError> {
        let hotel_name =
            validation::hotel_name(&command.hotel_name).ok_or(ReviewError::InvalidHotelName)?;
        if !validation::rating(command.rating) {
            return Err(ReviewError::InvalidRating);
        }
        if !validation::review_text(&command.review) {
            return Err(ReviewError::InvalidReviewText);
        }

        let author = self
            .users
            .find_by_id(command.user_id)
            .await
            .map_err(|_| ReviewError::StorageFailure)?
            .ok_or(ReviewError::UserNotFound)?;

        let mut aggregate = self
            .reviews
            .find_first_by_hotel(&hotel_name)
            .await
            .map_err(|_| ReviewError::StorageFailure)?
            .unwrap_or_else(|| HotelReviews::new(hotel_name));

        let review_id = Uuid::new_v4();
        aggregate.push(Review {
            id: review_id,
            user_id: author.id,
            rating: command.rating,
            review: command.review,
            user_name: author.full_name(),
            reply: None,
            reported: false,
            created_at: self.clock.now_epoch_seconds(),
        });

        self.reviews
            .save(&aggregate)
            .await
            .map_err(|_| ReviewError::StorageFailure)?;

        Ok(review_id)
    }
}
