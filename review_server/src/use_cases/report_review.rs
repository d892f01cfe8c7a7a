use uuid::Uuid;

use crate::domain::entities::ReviewReport;
use crate::domain::errors::ReviewError;
use crate::domain::ports::{Clock, ReportStore};
use crate::use_cases::validation;

// Files a free-text report against a review id.
//
// The id is recorded as given; reports may outlive the review they name.
pub struct ReportReviewUseCase<P, C> {
    pub reports: P,
    pub clock: C,
}

impl<P, C> ReportReviewUseCase<P, C>
where
    P: ReportStore,
    C: Clock,
{
    pub async fn execute(&self, review_id: Uuid, reason: String) -> Result<Uuid, ReviewError> {
        if !validation::note(&reason) {
            return Err(ReviewError::InvalidReason);
        }

        let report = ReviewReport {
            id: Uuid::new_v4(),
            review_id,
            reason: reason.trim().to_string(),
            created_at: self.clock.now_epoch_seconds(),
        };
        let report_id = report.id;

        self.reports
            .insert(report)
            .await
            .map_err(|_| ReviewError::StorageFailure)?;

        Ok(report_id)
    }
}
