// crates/oilseed-views/src/credit.rs
//
// Credit & insurance summary cards for the farmer view.

use serde::{Deserialize, Serialize};

use oilseed_core::credit::FacilityStatus;
use oilseed_core::error::PlatformError;
use oilseed_core::profile::Profile;
use oilseed_core::traits::RecordStore;

/// Summary of a farmer's financial facilities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreditSummary {
    /// Sum of amounts across approved and disbursed facilities.
    pub total_approved: f64,
    /// Facilities still in the `applied` state.
    pub pending_applications: usize,
    /// Performance score of the most recent facility, when recorded.
    pub performance_score: Option<f64>,
}

/// Summarize the caller's facilities.
pub async fn credit_summary(
    store: &dyn RecordStore,
    profile: &Profile,
) -> Result<CreditSummary, PlatformError> {
    // Newest first, so the head carries the latest performance score.
    let facilities = store.credit_for_farmer(&profile.id).await?;

    let total_approved = facilities
        .iter()
        .filter(|f| f.status.is_sanctioned())
        .map(|f| f.amount)
        .sum();
    let pending_applications = facilities
        .iter()
        .filter(|f| f.status == FacilityStatus::Applied)
        .count();
    let performance_score = facilities.first().and_then(|f| f.performance_score);

    Ok(CreditSummary {
        total_approved,
        pending_applications,
        performance_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use oilseed_core::credit::{CreditFacility, FacilityType};
    use oilseed_core::profile::UserRole;
    use oilseed_store::MemoryStore;
    use uuid::Uuid;

    fn make_facility(
        farmer_id: Uuid,
        status: FacilityStatus,
        amount: f64,
        score: Option<f64>,
        age_minutes: i64,
    ) -> CreditFacility {
        let at = Utc::now() - Duration::minutes(age_minutes);
        CreditFacility {
            id: Uuid::now_v7(),
            farmer_id,
            facility_type: FacilityType::Credit,
            provider: "Gramin Bank".to_string(),
            amount,
            status,
            application_date: at.date_naive(),
            approval_date: None,
            performance_score: score,
            created_at: at,
            updated_at: at,
        }
    }

    #[tokio::test]
    async fn test_summary_counts_sanctioned_and_pending() {
        let store = MemoryStore::new();
        let farmer = Profile::new(UserRole::Farmer, "Asha Patel", None);

        for facility in [
            make_facility(farmer.id, FacilityStatus::Approved, 50_000.0, Some(0.7), 30),
            make_facility(farmer.id, FacilityStatus::Disbursed, 25_000.0, None, 20),
            make_facility(farmer.id, FacilityStatus::Applied, 10_000.0, Some(0.9), 10),
            make_facility(farmer.id, FacilityStatus::Rejected, 99_000.0, None, 5),
        ] {
            store.insert_credit_facility(&facility).await.unwrap();
        }

        let summary = credit_summary(&store, &farmer).await.unwrap();
        assert_eq!(summary.total_approved, 75_000.0);
        assert_eq!(summary.pending_applications, 1);
        // The most recent facility (rejected, age 5) has no score.
        assert_eq!(summary.performance_score, None);
    }

    #[tokio::test]
    async fn test_empty_summary() {
        let store = MemoryStore::new();
        let farmer = Profile::new(UserRole::Farmer, "Asha Patel", None);
        let summary = credit_summary(&store, &farmer).await.unwrap();
        assert_eq!(
            summary,
            CreditSummary {
                total_approved: 0.0,
                pending_applications: 0,
                performance_score: None,
            }
        );
    }
}
