// crates/oilseed-core/src/profile.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a platform user. Drives which views a session may reach
/// (see `capability`) and which rows the scoped queries return.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Grows oilseed crops; owns crop and credit records.
    Farmer,
    /// Farmer Producer Organization; aggregates and procures.
    Fpo,
    /// Crushes/refines procured stock.
    Processor,
    /// Sells finished product.
    Retailer,
    /// Reads platform-wide analytics; writes nothing operational.
    Policymaker,
    /// Full access.
    Admin,
}

impl UserRole {
    /// Stable, compact tag for index keys and display.
    pub fn tag(&self) -> &'static str {
        match self {
            UserRole::Farmer => "farmer",
            UserRole::Fpo => "fpo",
            UserRole::Processor => "processor",
            UserRole::Retailer => "retailer",
            UserRole::Policymaker => "policymaker",
            UserRole::Admin => "admin",
        }
    }
}

/// Geographic descriptor attached to rows that have one.
///
/// Either a row carries a full `{district, state}` pair or it carries
/// nothing; there is no partially-populated location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub district: String,
    pub state: String,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.district, self.state)
    }
}

/// The authenticated identity record for a platform user.
///
/// Produced by the identity provider at sign-in and passed explicitly to
/// every operation that scopes by caller; nothing reads it from ambient
/// process state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub role: UserRole,
    pub full_name: String,
    pub organization: Option<String>,
    pub phone: Option<String>,
    pub location: Option<Location>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Construct a profile with a fresh v7 id and current timestamps.
    pub fn new(role: UserRole, full_name: &str, organization: Option<&str>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            role,
            full_name: full_name.to_string(),
            organization: organization.map(str::to_string),
            phone: None,
            location: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_tag_values() {
        assert_eq!(UserRole::Farmer.tag(), "farmer");
        assert_eq!(UserRole::Fpo.tag(), "fpo");
        assert_eq!(UserRole::Processor.tag(), "processor");
        assert_eq!(UserRole::Retailer.tag(), "retailer");
        assert_eq!(UserRole::Policymaker.tag(), "policymaker");
        assert_eq!(UserRole::Admin.tag(), "admin");
    }

    #[test]
    fn test_location_display() {
        let loc = Location {
            district: "Indore".to_string(),
            state: "Madhya Pradesh".to_string(),
        };
        assert_eq!(loc.to_string(), "Indore, Madhya Pradesh");
    }

    #[test]
    fn test_role_serde_snake_case() {
        let json = serde_json::to_string(&UserRole::Policymaker).unwrap();
        assert_eq!(json, "\"policymaker\"");
        let role: UserRole = serde_json::from_str("\"fpo\"").unwrap();
        assert_eq!(role, UserRole::Fpo);
    }
}
