// crates/oilseed-core/src/credit.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of financial facility a farmer can apply for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FacilityType {
    Credit,
    Insurance,
    Subsidy,
}

/// Lifecycle states of a facility application.
///
///   Applied --> Approved --> Disbursed --> Completed
///      |
///      v
///   Rejected
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FacilityStatus {
    Applied,
    Approved,
    Disbursed,
    Rejected,
    Completed,
}

impl FacilityStatus {
    pub fn tag(&self) -> &'static str {
        match self {
            FacilityStatus::Applied => "applied",
            FacilityStatus::Approved => "approved",
            FacilityStatus::Disbursed => "disbursed",
            FacilityStatus::Rejected => "rejected",
            FacilityStatus::Completed => "completed",
        }
    }

    /// Whether the facility counts toward a farmer's approved total.
    pub fn is_sanctioned(&self) -> bool {
        matches!(self, FacilityStatus::Approved | FacilityStatus::Disbursed)
    }
}

/// A credit, insurance, or subsidy facility held by a farmer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditFacility {
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub facility_type: FacilityType,
    pub provider: String,
    pub amount: f64,
    pub status: FacilityStatus,
    pub application_date: NaiveDate,
    pub approval_date: Option<NaiveDate>,
    pub performance_score: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanctioned_statuses() {
        assert!(FacilityStatus::Approved.is_sanctioned());
        assert!(FacilityStatus::Disbursed.is_sanctioned());
        assert!(!FacilityStatus::Applied.is_sanctioned());
        assert!(!FacilityStatus::Rejected.is_sanctioned());
        assert!(!FacilityStatus::Completed.is_sanctioned());
    }
}
