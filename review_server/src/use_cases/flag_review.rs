use uuid::Uuid;

use crate::domain::errors::ReviewError;
use crate::domain::ports::ReviewStore;

// Marks a review as reported for moderation.
pub struct FlagReviewUseCase<R> {
    pub reviews: R,
}

impl<R> FlagReviewUseCase<R>
where
    R: ReviewStore,
{
    pub async fn execute(&self, review_id: Uuid) -> Result<(), ReviewError> {
        let mut aggregate = self
            .reviews
            .find_by_review_id(review_id)
            .await
            .map_err(|_| ReviewError::StorageFailure)?
            .ok_or(ReviewError::ReviewNotFound)?;

        let review = aggregate
            .find_mut(review_id)
            .ok_or(ReviewError::ReviewNotFound)?;
        if review.reported {
            return Ok(());
        }
        review.reported = true;

        self.reviews
            .save(&aggregate)
            .await
            .map_err(|_| ReviewError::StorageFailure)
    }
}
