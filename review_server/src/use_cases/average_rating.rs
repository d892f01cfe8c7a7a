use crate::domain::errors::ReviewError;
use crate::domain::ports::ReviewStore;
use crate::domain::reviews::{summarize_ratings, RatingSummary};

// Averages ratings over every aggregate sharing the hotel name.
pub struct AverageRatingUseCase<R> {
    pub reviews: R,
}

impl<R> AverageRatingUseCase<R>
where
    R: ReviewStore,
{
    pub async fn execute(&self, hotel_name: &str) -> Result<RatingSummary, ReviewError> {
        let aggregates = self
            .reviews
            .find_all_by_hotel(hotel_name.trim())
            .await
            .map_err(|_| ReviewError::StorageFailure)?;

        Ok(summarize_ratings(&aggregates))
    }
}
