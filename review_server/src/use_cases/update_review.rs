use uuid::Uuid;

use crate::domain::errors::ReviewError;
use crate::domain::ports::ReviewStore;
use crate::use_cases::validation;

// Overwrites rating and text of a review in place.
//
// Any caller holding the review id may do this; authorship is not checked.
pub struct UpdateReviewUseCase<R> {
    pub reviews: R,
}

impl<R> UpdateReviewUseCase<R>
where
    R: ReviewStore,
{
    pub async fn execute(
        &self,
        review_id: Uuid,
        rating: f64,
        review_text: String,
    ) -> Result<(), ReviewError> {
        if !validation::rating(rating) {
            return Err(ReviewError::InvalidRating);
        }
        if !validation::review_text(&review_text) {
            return Err(ReviewError::InvalidReviewText);
        }

        let mut aggregate = self
            .reviews
            .find_by_review_id(review_id)
            .await
            .map_err(|_| ReviewError::StorageFailure)?
            .ok_or(ReviewError::ReviewNotFound)?;

        let review = aggregate
            .find_mut(review_id)
            .ok_or(ReviewError::ReviewNotFound)?;
        review.rating = rating;
        review.review = review_text;

        self.reviews
            .save(&aggregate)
            .await
            .map_err(|_| ReviewError::StorageFailure)
    }
}
