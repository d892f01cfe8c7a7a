use uuid::Uuid;

use crate::domain::entities::{HotelReviews, Review};

impl HotelReviews {
    // Empty aggregate created on the first submission for a hotel name.
    pub fn new(hotel_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            hotel_name: hotel_name.into(),
            reviews: Vec::new(),
        }
    }

    pub fn push(&mut self, review: Review) {
        self.reviews.push(review);
    }

    pub fn contains(&self, review_id: Uuid) -> bool {
        self.reviews.iter().any(|review| review.id == review_id)
    }

    pub fn find_mut(&mut self, review_id: Uuid) -> Option<&mut Review> {
        self.reviews.iter_mut().find(|review| review.id == review_id)
    }

    // Removes the matching review; the aggregate stays even when emptied.
    pub fn remove(&mut self, review_id: Uuid) -> Option<Review> {
        let index = self
            .reviews
            .iter()
            .position(|review| review.id == review_id)?;
        Some(self.reviews.remove(index))
    }
}

// Average rating across every aggregate sharing a hotel name.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingSummary {
    pub average: f64,
    pub count: u64,
}

pub fn summarize_ratings<'a, I>(aggregates: I) -> RatingSummary
where
    I: IntoIterator<Item = &'a HotelReviews>,
{
    let (total, count) = aggregates
        .into_iter()
        .flat_map(|aggregate| aggregate.reviews.iter())
        .fold((0.0_f64, 0_u64), |(total, count), review| {
            (total + review.rating, count + 1)
        });

    // An unreviewed hotel averages to zero instead of NaN.
    if count == 0 {
        return RatingSummary {
            average: 0.0,
            count: 0,
        };
    }

    RatingSummary {
        average: total / count as f64,
        count,
    }
}
