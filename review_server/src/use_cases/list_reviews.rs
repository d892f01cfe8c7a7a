use crate::domain::entities::Review;
use crate::domain::errors::ReviewError;
use crate::domain::ports::ReviewStore;

// Lists the reviews of the first aggregate matching a hotel name.
pub struct ListReviewsUseCase<R> {
    pub reviews: R,
}

impl<R> ListReviewsUseCase<R>
where
    R: ReviewStore,
{
    pub async fn execute(&self, hotel_name: &str) -> Result<Vec<Review>, ReviewError> {
        let aggregate = self
            .reviews
            .find_first_by_hotel(hotel_name.trim())
            .await
            .map_err(|_| ReviewError::StorageFailure)?
            .ok_or(ReviewError::HotelNotFound)?;

        Ok(aggregate.reviews)
    }
}
