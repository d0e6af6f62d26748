// crates/oilseed-core/src/capability.rs
//
// Static role -> view capability table. Every "which widgets does this
// role see" decision lives here, in one table, instead of being branched
// on role strings across the presentation layer.

use serde::{Deserialize, Serialize};

use crate::profile::UserRole;

/// Identifiers for the platform's views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    Dashboard,
    Crops,
    Advisories,
    Inventory,
    Warehouses,
    Logistics,
    Traceability,
    Credit,
    Analytics,
    Stakeholders,
    Settings,
}

impl ViewId {
    pub fn tag(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Crops => "crops",
            ViewId::Advisories => "advisories",
            ViewId::Inventory => "inventory",
            ViewId::Warehouses => "warehouses",
            ViewId::Logistics => "logistics",
            ViewId::Traceability => "traceability",
            ViewId::Credit => "credit",
            ViewId::Analytics => "analytics",
            ViewId::Stakeholders => "stakeholders",
            ViewId::Settings => "settings",
        }
    }
}

const FARMER_VIEWS: &[ViewId] = &[
    ViewId::Dashboard,
    ViewId::Crops,
    ViewId::Advisories,
    ViewId::Inventory,
    ViewId::Traceability,
    ViewId::Credit,
    ViewId::Settings,
];

// FPO, processor, and retailer share the operator view set.
const OPERATOR_VIEWS: &[ViewId] = &[
    ViewId::Dashboard,
    ViewId::Advisories,
    ViewId::Inventory,
    ViewId::Warehouses,
    ViewId::Logistics,
    ViewId::Traceability,
    ViewId::Settings,
];

const OVERSIGHT_VIEWS: &[ViewId] = &[
    ViewId::Dashboard,
    ViewId::Advisories,
    ViewId::Warehouses,
    ViewId::Traceability,
    ViewId::Analytics,
    ViewId::Stakeholders,
    ViewId::Settings,
];

/// The fixed set of views a role may reach.
pub fn views_for(role: UserRole) -> &'static [ViewId] {
    match role {
        UserRole::Farmer => FARMER_VIEWS,
        UserRole::Fpo | UserRole::Processor | UserRole::Retailer => OPERATOR_VIEWS,
        UserRole::Policymaker | UserRole::Admin => OVERSIGHT_VIEWS,
    }
}

/// Whether a role may reach a view.
pub fn can_access(role: UserRole, view: ViewId) -> bool {
    views_for(role).contains(&view)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: &[UserRole] = &[
        UserRole::Farmer,
        UserRole::Fpo,
        UserRole::Processor,
        UserRole::Retailer,
        UserRole::Policymaker,
        UserRole::Admin,
    ];

    #[test]
    fn test_every_role_reaches_dashboard_and_traceability() {
        for &role in ALL_ROLES {
            assert!(can_access(role, ViewId::Dashboard), "{:?}", role);
            assert!(can_access(role, ViewId::Traceability), "{:?}", role);
        }
    }

    #[test]
    fn test_crops_and_credit_are_farmer_only() {
        for &role in ALL_ROLES {
            let expected = role == UserRole::Farmer;
            assert_eq!(can_access(role, ViewId::Crops), expected, "{:?}", role);
            assert_eq!(can_access(role, ViewId::Credit), expected, "{:?}", role);
        }
    }

    #[test]
    fn test_analytics_is_oversight_only() {
        assert!(!can_access(UserRole::Farmer, ViewId::Analytics));
        assert!(!can_access(UserRole::Fpo, ViewId::Analytics));
        assert!(!can_access(UserRole::Processor, ViewId::Analytics));
        assert!(!can_access(UserRole::Retailer, ViewId::Analytics));
        assert!(can_access(UserRole::Policymaker, ViewId::Analytics));
        assert!(can_access(UserRole::Admin, ViewId::Analytics));
        assert!(can_access(UserRole::Admin, ViewId::Stakeholders));
    }

    #[test]
    fn test_logistics_is_operator_only() {
        assert!(!can_access(UserRole::Farmer, ViewId::Logistics));
        assert!(can_access(UserRole::Fpo, ViewId::Logistics));
        assert!(!can_access(UserRole::Policymaker, ViewId::Logistics));
    }
}
