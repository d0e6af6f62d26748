// crates/oilseed-core/src/advisory.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profile::UserRole;

/// Category of an advisory bulletin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryType {
    CropPlanning,
    Weather,
    PestManagement,
    MarketPrice,
}

/// Urgency of an advisory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn tag(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

/// A bulletin pushed to platform users. `target_audience` of `None`
/// means the advisory is for every role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advisory {
    pub id: Uuid,
    pub advisory_type: AdvisoryType,
    pub target_audience: Option<UserRole>,
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub valid_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }
}
