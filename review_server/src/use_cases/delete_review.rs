use uuid::Uuid;

use crate::domain::errors::ReviewError;
use crate::domain::ports::ReviewStore;

// Removes a review from its owning aggregate; the aggregate itself stays.
//
// Authorship is not checked, same as updates.
pub struct DeleteReviewUseCase<R> {
    pub reviews: R,
}

impl<R> DeleteReviewUseCase<R>
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

        aggregate
            .remove(review_id)
            .ok_or(ReviewError::ReviewNotFound)?;

        self.reviews
            .save(&aggregate)
            .await
            .map_err(|_| ReviewError::StorageFailure)
    }
}
