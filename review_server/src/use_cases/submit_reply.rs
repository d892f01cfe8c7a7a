use uuid::Uuid;

use crate::domain::errors::ReviewError;
use crate::domain::ports::ReviewStore;
use crate::use_cases::validation;

// Sets the reply on a review; only the review's author may do so.
pub struct SubmitReplyUseCase<R> {
    pub reviews: R,
}

impl<R> SubmitReplyUseCase<R>
where
    R: ReviewStore,
{
    pub async fn execute(
        &self,
        review_id: Uuid,
        reply: String,
        acting_user_id: Uuid,
    ) -> Result<(), ReviewError> {
        if !validation::note(&reply) {
            return Err(ReviewError::InvalidReply);
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
        if review.user_id != acting_user_id {
            return Err(ReviewError::NotReviewAuthor);
        }
        review.reply = Some(reply);

        self.reviews
            .save(&aggregate)
            .await
            .map_err(|_| ReviewError::StorageFailure)
    }
}
